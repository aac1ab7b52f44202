//! Merging shifted glyph bytes into the framebuffer

use super::{
    shift_columns, FrameError, Inversion, PixelBuffer, RowSpan, ShiftedColumns, PAGES,
    PAGE_HEIGHT, WIDTH,
};
use crate::glyph::Glyph;

/// Bitwise combination applied to each (page, column) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MergePolicy {
    /// `cell |= byte`
    Or,
    /// `cell |= !byte`: inverted text
    OrComplement,
    /// `cell &= !byte`: erasing a bitmap under inversion
    AndComplement,
}

impl MergePolicy {
    /// Pick the policy for an inversion setting and a placement kind
    ///
    /// `char_mode` is true for text, false for bitmaps.
    pub const fn select(inversion: Inversion, char_mode: bool) -> Self {
        match (inversion, char_mode) {
            (Inversion::Inverted, true) => MergePolicy::OrComplement,
            (Inversion::Inverted, false) => MergePolicy::AndComplement,
            (Inversion::Normal, _) => MergePolicy::Or,
        }
    }

    /// Combine a new byte with a cell's current value
    pub const fn apply(self, cell: u8, byte: u8) -> u8 {
        match self {
            MergePolicy::Or => cell | byte,
            MergePolicy::OrComplement => cell | !byte,
            MergePolicy::AndComplement => cell & !byte,
        }
    }
}

/// Where and how one batch of shifted bytes is merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    /// Leftmost destination column
    pub x: usize,
    /// Destination pages
    pub span: RowSpan,
    /// Text (true) or bitmap (false)
    pub char_mode: bool,
    /// Merge inversion for this call only
    pub inversion: Inversion,
}

impl Placement {
    /// Policy this placement merges with
    pub const fn policy(&self) -> MergePolicy {
        MergePolicy::select(self.inversion, self.char_mode)
    }

    /// Check that every cell of a `width`-column placement is on screen
    pub fn check_bounds(&self, width: usize) -> Result<(), FrameError> {
        if self.x >= WIDTH || width > WIDTH - self.x {
            return Err(FrameError::OutOfBounds);
        }
        match self.span.last_page() {
            Some(page) if page < PAGES => Ok(()),
            _ => Err(FrameError::OutOfBounds),
        }
    }
}

/// Merge shifted rows into the buffer
///
/// Walks the span's pages from the highest down, taking shifted rows from
/// the last one back to the first. Everything is bounds-checked first, so
/// an error leaves the buffer untouched.
pub fn composite(
    buffer: &mut PixelBuffer,
    placement: &Placement,
    shifted: &ShiftedColumns,
) -> Result<(), FrameError> {
    let width = shifted.width();
    placement.check_bounds(width)?;
    if shifted.rows() != placement.span.touched_page_count() {
        return Err(FrameError::InvalidGlyph);
    }

    let policy = placement.policy();
    for (page, row) in placement
        .span
        .pages_descending()
        .zip((0..shifted.rows()).rev())
    {
        for (col, &byte) in shifted.row(row).iter().enumerate() {
            let x = placement.x + col;
            let merged = policy.apply(buffer.read(x, page)?, byte);
            buffer.write(x, page, merged)?;
        }
    }
    Ok(())
}

/// Place a glyph with its top-left pixel at `(x, y)`
///
/// Runs the whole pipeline: resolve the span, shift the columns, merge.
/// Returns the span that was written.
pub fn place(
    buffer: &mut PixelBuffer,
    glyph: &Glyph<'_>,
    x: usize,
    y: usize,
    char_mode: bool,
    inversion: Inversion,
) -> Result<RowSpan, FrameError> {
    glyph.validate()?;
    let span = RowSpan::resolve(y, glyph.height())?;
    let placement = Placement {
        x,
        span,
        char_mode,
        inversion,
    };
    placement.check_bounds(glyph.width())?;

    let shifted = shift_columns(
        glyph.data(),
        glyph.width(),
        glyph.pages(),
        y % PAGE_HEIGHT,
        span.touched_page_count(),
    )?;
    composite(buffer, &placement, &shifted)?;
    Ok(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    const SOLID: [u8; 5] = [0xFF; 5];

    fn solid() -> Glyph<'static> {
        Glyph::new(5, 8, &SOLID)
    }

    #[test]
    fn test_policy_selection() {
        assert_eq!(MergePolicy::select(Inversion::Normal, true), MergePolicy::Or);
        assert_eq!(MergePolicy::select(Inversion::Normal, false), MergePolicy::Or);
        assert_eq!(
            MergePolicy::select(Inversion::Inverted, true),
            MergePolicy::OrComplement
        );
        assert_eq!(
            MergePolicy::select(Inversion::Inverted, false),
            MergePolicy::AndComplement
        );
    }

    #[test]
    fn test_policy_apply() {
        assert_eq!(MergePolicy::Or.apply(0x0F, 0x30), 0x3F);
        assert_eq!(MergePolicy::OrComplement.apply(0x00, 0xF0), 0x0F);
        assert_eq!(MergePolicy::AndComplement.apply(0xFF, 0xF0), 0x0F);
    }

    #[test]
    fn test_aligned_solid_glyph() {
        let mut buffer = PixelBuffer::new();
        place(&mut buffer, &solid(), 10, 0, false, Inversion::Normal).unwrap();

        for x in 0..WIDTH {
            for page in 0..PAGES {
                let expected = if page == 0 && (10..15).contains(&x) { 0xFF } else { 0x00 };
                assert_eq!(buffer.read(x, page), Ok(expected), "x={} page={}", x, page);
            }
        }
    }

    #[test]
    fn test_straddling_solid_glyph() {
        let mut buffer = PixelBuffer::new();
        let span = place(&mut buffer, &solid(), 10, 4, false, Inversion::Normal).unwrap();
        assert_eq!(span.mask(), 0b11);

        for x in 10..15 {
            assert_eq!(buffer.read(x, 0), Ok(0xF0));
            assert_eq!(buffer.read(x, 1), Ok(0x0F));
        }
        assert_eq!(buffer.read(9, 0), Ok(0));
        assert_eq!(buffer.read(15, 1), Ok(0));
        assert_eq!(buffer.read(10, 2), Ok(0));
    }

    #[test]
    fn test_out_of_bounds_leaves_buffer_untouched() {
        let mut buffer = PixelBuffer::new();
        buffer.write(0, 0, 0x5A).unwrap();
        let before = buffer.clone();

        assert_eq!(
            place(&mut buffer, &solid(), WIDTH, 0, false, Inversion::Normal),
            Err(FrameError::OutOfBounds)
        );
        // Partially off the right edge
        assert_eq!(
            place(&mut buffer, &solid(), WIDTH - 2, 0, false, Inversion::Normal),
            Err(FrameError::OutOfBounds)
        );
        // Partially off the bottom edge
        assert_eq!(
            place(&mut buffer, &solid(), 0, 44, false, Inversion::Normal),
            Err(FrameError::OutOfBounds)
        );
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_huge_column_is_out_of_bounds() {
        let mut buffer = PixelBuffer::new();
        assert_eq!(
            place(&mut buffer, &solid(), usize::MAX, 0, false, Inversion::Normal),
            Err(FrameError::OutOfBounds)
        );

        let placement = Placement {
            x: 1,
            span: RowSpan::from_mask(0b1),
            char_mode: false,
            inversion: Inversion::Normal,
        };
        assert_eq!(placement.check_bounds(usize::MAX), Err(FrameError::OutOfBounds));
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_rows_consumed_highest_page_first() {
        // Distinct bytes per row show which row lands on which page
        let mut buffer = PixelBuffer::new();
        let span = RowSpan::from_mask(0b0001_1100);
        let shifted = shift_columns(&[0x11, 0x22, 0x33], 1, 3, 0, 3).unwrap();
        let placement = Placement {
            x: 7,
            span,
            char_mode: false,
            inversion: Inversion::Normal,
        };
        composite(&mut buffer, &placement, &shifted).unwrap();

        assert_eq!(buffer.read(7, 2), Ok(0x11));
        assert_eq!(buffer.read(7, 3), Ok(0x22));
        assert_eq!(buffer.read(7, 4), Ok(0x33));
    }

    #[test]
    fn test_row_count_mismatch() {
        let mut buffer = PixelBuffer::new();
        let shifted = shift_columns(&[0xFF], 1, 1, 0, 1).unwrap();
        let placement = Placement {
            x: 0,
            span: RowSpan::from_mask(0b11),
            char_mode: false,
            inversion: Inversion::Normal,
        };
        assert_eq!(
            composite(&mut buffer, &placement, &shifted),
            Err(FrameError::InvalidGlyph)
        );
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_inverted_text_sets_background() {
        let glyph_data = [0b0000_0110];
        let glyph = Glyph::new(1, 8, &glyph_data);
        let mut buffer = PixelBuffer::new();
        place(&mut buffer, &glyph, 0, 0, true, Inversion::Inverted).unwrap();

        assert_eq!(buffer.read(0, 0), Ok(0b1111_1001));
    }

    #[test]
    fn test_inverted_bitmap_erases() {
        let mut buffer = PixelBuffer::new();
        for x in 0..5 {
            buffer.write(x, 0, 0xFF).unwrap();
        }
        let hole = [0x3C; 5];
        place(&mut buffer, &Glyph::new(5, 8, &hole), 0, 0, false, Inversion::Inverted).unwrap();

        for x in 0..5 {
            assert_eq!(buffer.read(x, 0), Ok(0xC3));
        }
    }

    #[test]
    fn test_inverted_then_normal_restores_or_result() {
        // (buf | !!d) | d == buf | d
        let data = [0x5A, 0x0F, 0x81];
        let complement = data.map(|b| !b);

        let mut twice = PixelBuffer::new();
        twice.write(1, 0, 0x20).unwrap();
        let mut once = twice.clone();

        place(&mut twice, &Glyph::new(3, 8, &complement), 0, 0, true, Inversion::Inverted).unwrap();
        place(&mut twice, &Glyph::new(3, 8, &data), 0, 0, true, Inversion::Normal).unwrap();
        place(&mut once, &Glyph::new(3, 8, &data), 0, 0, true, Inversion::Normal).unwrap();

        assert_eq!(twice, once);
    }

    proptest! {
        #[test]
        fn prop_aligned_roundtrip(
            width in 1usize..=12,
            rows in 1usize..=3,
            x in 0usize..72,
            page in 0usize..4,
            seed in vec(any::<u8>(), 36),
        ) {
            let data = &seed[..width * rows];
            let glyph = Glyph::new(width as u8, (rows * 8) as u8, data);
            let mut buffer = PixelBuffer::new();
            place(&mut buffer, &glyph, x, page * 8, false, Inversion::Normal).unwrap();

            for row in 0..rows {
                for col in 0..width {
                    prop_assert_eq!(buffer.read(x + col, page + row).unwrap(), data[col + row * width]);
                }
            }
        }

        #[test]
        fn prop_or_merge_is_idempotent(
            width in 1usize..=8,
            height in 1usize..=16,
            x in 0usize..76,
            y in 0usize..32,
            char_mode in any::<bool>(),
            seed in vec(any::<u8>(), 16),
        ) {
            let rows = height.div_ceil(8);
            let glyph = Glyph::new(width as u8, height as u8, &seed[..width * rows]);

            let mut once = PixelBuffer::new();
            place(&mut once, &glyph, x, y, char_mode, Inversion::Normal).unwrap();
            let mut twice = once.clone();
            place(&mut twice, &glyph, x, y, char_mode, Inversion::Normal).unwrap();

            prop_assert_eq!(once, twice);
        }
    }
}
