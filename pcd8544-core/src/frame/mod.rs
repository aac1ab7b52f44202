//! Page-addressed framebuffer and the glyph compositing pipeline
//!
//! A placement runs through three stages, leaf-first:
//!
//! 1. [`span`] works out which pages the glyph's rows land on
//! 2. [`shift`] re-slices the glyph's column bytes onto those pages
//! 3. [`compositor`] merges the re-sliced bytes into the [`PixelBuffer`]
//!
//! All bounds are checked before the first byte of the buffer changes.

pub mod buffer;
pub mod compositor;
pub mod shift;
pub mod span;

pub use buffer::PixelBuffer;
pub use compositor::{place, MergePolicy, Placement};
pub use shift::{shift_columns, ShiftedColumns};
pub use span::RowSpan;

/// Display width in pixels (columns)
pub const WIDTH: usize = 84;

/// Display height in pixels (rows)
pub const HEIGHT: usize = 48;

/// Rows per page
pub const PAGE_HEIGHT: usize = 8;

/// Number of pages
pub const PAGES: usize = HEIGHT / PAGE_HEIGHT;

/// Framebuffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Errors from framebuffer addressing and glyph placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Column or page outside the display
    OutOfBounds,
    /// Glyph data shorter than its declared size
    InvalidGlyph,
}

/// How new pixels are combined with what is already in the buffer
///
/// Passed per call rather than held as driver state, so one placement
/// cannot change how the next one merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Inversion {
    /// Additive merge: set pixels of the glyph turn on
    #[default]
    Normal,
    /// Inverted merge (highlighted text, erasing under inversion)
    Inverted,
}

impl Inversion {
    /// Whether the inverted merge policies apply
    pub const fn is_inverted(self) -> bool {
        matches!(self, Inversion::Inverted)
    }
}

impl From<bool> for Inversion {
    fn from(inverted: bool) -> Self {
        if inverted {
            Inversion::Inverted
        } else {
            Inversion::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(PAGES, 6);
        assert_eq!(BUFFER_SIZE, 504);
    }

    #[test]
    fn test_inversion_from_bool() {
        assert_eq!(Inversion::from(true), Inversion::Inverted);
        assert_eq!(Inversion::from(false), Inversion::Normal);
        assert!(!Inversion::default().is_inverted());
    }
}
