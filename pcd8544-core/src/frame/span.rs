//! Destination pages touched by a vertical placement

use super::{FrameError, HEIGHT, PAGES, PAGE_HEIGHT};

/// Set of pages a glyph placement writes to, one bit per page
///
/// Bit `p` covers rows `8p..8p+8`. The set bits are always contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowSpan {
    mask: u8,
}

impl RowSpan {
    /// Pages touched by a glyph of `height` rows whose top row is `y`
    ///
    /// The page holding `y` and the page holding `y + height - 1` are
    /// marked, plus every page strictly between them. A placement that
    /// starts on a page boundary with a height that is a multiple of 8
    /// touches exactly `height / 8` pages.
    pub fn resolve(y: usize, height: usize) -> Result<Self, FrameError> {
        if height == 0 || y >= HEIGHT || height > HEIGHT - y {
            return Err(FrameError::OutOfBounds);
        }

        let last_row = y + height - 1;
        let mut mask = 0u8;
        for page in 0..PAGES {
            let rows = page * PAGE_HEIGHT..(page + 1) * PAGE_HEIGHT;
            if rows.contains(&y) {
                mask |= 1 << page; // start page
            }
            if rows.contains(&last_row) {
                mask |= 1 << page; // end page
            }
        }
        for page in y / PAGE_HEIGHT + 1..last_row / PAGE_HEIGHT {
            mask |= 1 << page;
        }

        Ok(Self { mask })
    }

    /// Build a span from a raw page mask
    pub const fn from_mask(mask: u8) -> Self {
        Self { mask }
    }

    /// Raw page mask
    pub const fn mask(&self) -> u8 {
        self.mask
    }

    /// Number of pages touched
    pub const fn touched_page_count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Whether no page is touched
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Whether a page is in the span
    pub const fn contains(&self, page: usize) -> bool {
        page < 8 && self.mask & (1 << page) != 0
    }

    /// Lowest touched page
    pub fn first_page(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.mask.trailing_zeros() as usize)
    }

    /// Highest touched page
    pub fn last_page(&self) -> Option<usize> {
        (!self.is_empty()).then(|| 7 - self.mask.leading_zeros() as usize)
    }

    /// Touched pages from the highest down to the lowest
    pub fn pages_descending(&self) -> PagesDescending {
        PagesDescending { remaining: self.mask }
    }
}

/// Iterator over the set bits of a [`RowSpan`], most significant first
#[derive(Debug, Clone)]
pub struct PagesDescending {
    remaining: u8,
}

impl Iterator for PagesDescending {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let page = 7 - self.remaining.leading_zeros() as usize;
        self.remaining &= !(1 << page);
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PagesDescending {}
