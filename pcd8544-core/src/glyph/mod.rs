//! Glyph and font descriptors
//!
//! A glyph carries its own size, so nothing downstream needs to guess
//! what kind of table the bytes came from.

pub mod font;

pub use font::{substitute, Font, FIRST_CHAR, FONT_12X16, FONT_6X8, GLYPH_COUNT, LAST_CHAR};

use crate::frame::{FrameError, PAGE_HEIGHT};

/// A bitmap stored in its own page alignment
///
/// `data` holds `pages()` page-rows of `width` column bytes, page-row
/// major: byte `col + row * width` is column `col`, rows `8 * row` to
/// `8 * row + 7` of the glyph, least significant bit on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    width: u8,
    height: u8,
    data: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Describe a bitmap of `width` x `height` pixels
    pub const fn new(width: u8, height: u8, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in columns
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Height in pixel rows
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Number of page-rows the glyph occupies in its own alignment
    pub const fn pages(&self) -> usize {
        (self.height as usize).div_ceil(PAGE_HEIGHT)
    }

    /// Raw column bytes
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// One page-row of column bytes
    pub fn row(&self, row: usize) -> &'a [u8] {
        let start = row * self.width();
        self.data.get(start..start + self.width()).unwrap_or(&[])
    }

    /// Check the descriptor is non-empty and its data covers every row
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::InvalidGlyph);
        }
        if self.data.len() < self.width() * self.pages() {
            return Err(FrameError::InvalidGlyph);
        }
        Ok(())
    }
}
