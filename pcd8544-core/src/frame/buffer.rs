//! Page-addressed pixel store
//!
//! Mirrors the controller's display RAM: byte `x + page * WIDTH` holds
//! rows `8 * page .. 8 * page + 8` of column `x`, least significant bit on
//! top.

use super::{FrameError, BUFFER_SIZE, PAGES, PAGE_HEIGHT, WIDTH};

/// In-memory copy of the display RAM
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// One byte per column per page, page-major
    bytes: [u8; BUFFER_SIZE],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("set_bytes", &self.bytes.iter().filter(|&&b| b != 0).count())
            .finish()
    }
}

impl PixelBuffer {
    /// Create a cleared buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Byte index of a (column, page) cell
    fn index(x: usize, page: usize) -> Result<usize, FrameError> {
        if x >= WIDTH || page >= PAGES {
            return Err(FrameError::OutOfBounds);
        }
        Ok(x + page * WIDTH)
    }

    /// Read the byte at a column and page
    pub fn read(&self, x: usize, page: usize) -> Result<u8, FrameError> {
        Self::index(x, page).map(|i| self.bytes[i])
    }

    /// Overwrite the byte at a column and page
    pub fn write(&mut self, x: usize, page: usize, byte: u8) -> Result<(), FrameError> {
        let i = Self::index(x, page)?;
        self.bytes[i] = byte;
        Ok(())
    }

    /// OR a byte into the cell at a column and page
    pub fn or_into(&mut self, x: usize, page: usize, byte: u8) -> Result<(), FrameError> {
        let i = Self::index(x, page)?;
        self.bytes[i] |= byte;
        Ok(())
    }

    /// AND a byte into the cell at a column and page
    pub fn and_into(&mut self, x: usize, page: usize, byte: u8) -> Result<(), FrameError> {
        let i = Self::index(x, page)?;
        self.bytes[i] &= byte;
        Ok(())
    }

    /// Reset every byte to zero
    ///
    /// Memory only; [`Lcd::clear`](crate::Lcd::clear) also blanks the device.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Turn a single pixel on or off
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> Result<(), FrameError> {
        let i = Self::index(x, y / PAGE_HEIGHT)?;
        let mask = 1 << (y % PAGE_HEIGHT);
        if on {
            self.bytes[i] |= mask;
        } else {
            self.bytes[i] &= !mask;
        }
        Ok(())
    }

    /// Read a single pixel
    pub fn pixel(&self, x: usize, y: usize) -> Result<bool, FrameError> {
        let byte = self.read(x, y / PAGE_HEIGHT)?;
        Ok(byte & (1 << (y % PAGE_HEIGHT)) != 0)
    }

    /// One page row of column bytes
    pub fn page(&self, page: usize) -> Result<&[u8], FrameError> {
        let start = Self::index(0, page)?;
        Ok(&self.bytes[start..start + WIDTH])
    }

    /// The whole buffer in transmission order (page-major, column-minor)
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = PixelBuffer::new();
        assert!(buffer.is_blank());
        assert_eq!(buffer.as_bytes().len(), 504);
    }

    #[test]
    fn test_addressing_is_page_major() {
        let mut buffer = PixelBuffer::new();
        buffer.write(3, 2, 0xA5).unwrap();

        assert_eq!(buffer.as_bytes()[3 + 2 * WIDTH], 0xA5);
        assert_eq!(buffer.read(3, 2), Ok(0xA5));
        assert_eq!(buffer.page(2).unwrap()[3], 0xA5);
    }

    #[test]
    fn test_or_and_into() {
        let mut buffer = PixelBuffer::new();
        buffer.or_into(0, 0, 0x0F).unwrap();
        buffer.or_into(0, 0, 0xF0).unwrap();
        assert_eq!(buffer.read(0, 0), Ok(0xFF));

        buffer.and_into(0, 0, 0x3C).unwrap();
        assert_eq!(buffer.read(0, 0), Ok(0x3C));
    }

    #[test]
    fn test_out_of_bounds_is_reported() {
        let mut buffer = PixelBuffer::new();

        assert_eq!(buffer.read(WIDTH, 0), Err(FrameError::OutOfBounds));
        assert_eq!(buffer.read(0, PAGES), Err(FrameError::OutOfBounds));
        assert_eq!(buffer.write(WIDTH, 0, 0xFF), Err(FrameError::OutOfBounds));
        assert_eq!(buffer.or_into(0, PAGES, 0xFF), Err(FrameError::OutOfBounds));
        assert_eq!(buffer.and_into(WIDTH, PAGES, 0), Err(FrameError::OutOfBounds));
        assert_eq!(buffer.set_pixel(0, 48, true), Err(FrameError::OutOfBounds));

        // Nothing leaked into the neighbouring page
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_set_pixel() {
        let mut buffer = PixelBuffer::new();
        buffer.set_pixel(10, 13, true).unwrap();

        assert_eq!(buffer.read(10, 1), Ok(1 << 5));
        assert_eq!(buffer.pixel(10, 13), Ok(true));
        assert_eq!(buffer.pixel(10, 12), Ok(false));

        buffer.set_pixel(10, 13, false).unwrap();
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_clear() {
        let mut buffer = PixelBuffer::new();
        buffer.write(83, 5, 0xFF).unwrap();
        buffer.clear();
        assert!(buffer.is_blank());
    }
}
