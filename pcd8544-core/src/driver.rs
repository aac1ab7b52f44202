//! PCD8544 display driver
//!
//! Owns the framebuffer mirror and the transport. Drawing goes into the
//! buffer first; text and glyph placement then stream the whole buffer to
//! the controller. There is no dirty tracking: 504 bytes per refresh is
//! cheap next to the cost of tracking it on this bus.
//!
//! # Usage
//!
//! ```ignore
//! let mut lcd = Lcd::new(transport);
//! lcd.init(DisplayConfig::default())?;
//!
//! lcd.print("Hello", 0, 0, &FONT_6X8, Inversion::Normal)?;
//! lcd.print("menu", 20, 20, &FONT_6X8, Inversion::Inverted)?;
//! lcd.put_glyph(&arrow, 6, 20, Inversion::Normal)?;
//! ```

use crate::command;
use crate::config::{DisplayConfig, DisplayMode};
use crate::error::Error;
use crate::frame::{self, Inversion, PixelBuffer, RowSpan, HEIGHT, PAGES, PAGE_HEIGHT, WIDTH};
use crate::glyph::{Font, Glyph};
use crate::traits::DisplayTransport;

/// Position where the next unaddressed text append starts
///
/// Advisory only: any value is accepted, a bad one just makes the next
/// [`Lcd::append`] fail its bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Column
    pub x: u8,
    /// Pixel row
    pub y: u8,
}

/// Driver for one PCD8544 panel
pub struct Lcd<T> {
    transport: T,
    buffer: PixelBuffer,
    cursor: Cursor,
    config: DisplayConfig,
}

impl<T> Lcd<T>
where
    T: DisplayTransport,
{
    /// Create a driver around a transport
    ///
    /// The panel must already be out of reset; call [`init`](Self::init)
    /// before drawing.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: PixelBuffer::new(),
            cursor: Cursor::default(),
            config: DisplayConfig::default(),
        }
    }

    /// Program the analog settings and display mode, then clear the panel
    pub fn init(&mut self, config: DisplayConfig) -> Result<(), Error<T::Error>> {
        config.validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("pcd8544 init: {}", config);

        self.command(command::FUNCTION_SET_EXTENDED)?;
        for byte in config.extended_commands() {
            self.command(byte)?;
        }
        self.command(command::FUNCTION_SET_BASIC)?;
        self.command(config.mode.command())?;
        self.config = config;

        self.clear()
    }

    /// Change the operating voltage (contrast)
    pub fn set_contrast(&mut self, vop: u8) -> Result<(), Error<T::Error>> {
        let config = DisplayConfig { vop, ..self.config };
        config.validate()?;

        self.command(command::FUNCTION_SET_EXTENDED)?;
        self.command(command::SET_VOP | vop)?;
        self.command(command::FUNCTION_SET_BASIC)?;
        self.config = config;
        Ok(())
    }

    /// Put the controller into power-down
    ///
    /// Display RAM is kept. Call [`wake`](Self::wake) to resume.
    pub fn power_down(&mut self) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcd8544 power down");

        self.command(command::FUNCTION_SET_BASIC | command::FUNCTION_SET_POWER_DOWN)
    }

    /// Leave power-down and restore the display mode
    pub fn wake(&mut self) -> Result<(), Error<T::Error>> {
        self.command(command::FUNCTION_SET_BASIC)?;
        self.command(self.config.mode.command())
    }

    /// Switch between blank, normal, all-on and inverse video
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), Error<T::Error>> {
        self.command(mode.command())?;
        self.config.mode = mode;
        Ok(())
    }

    /// Point the controller's RAM address at a column and page
    pub fn set_xy(&mut self, x: u8, page: u8) -> Result<(), Error<T::Error>> {
        if x as usize >= WIDTH || page as usize >= PAGES {
            return Err(Error::OutOfBounds);
        }
        self.address(x, page)?;
        self.cursor = Cursor {
            x,
            y: page * PAGE_HEIGHT as u8,
        };
        Ok(())
    }

    /// Zero the framebuffer and the display RAM
    ///
    /// Every cleared byte is also sent to the panel, so this is a full
    /// refresh on its own.
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("pcd8544 clear");

        self.buffer.clear();
        self.address(0, 0)?;
        for _ in 0..frame::BUFFER_SIZE {
            self.transport.send_data(0x00).map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Stream the whole framebuffer to the panel
    ///
    /// Sets the address to the origin, then sends every byte page by page,
    /// column by column.
    pub fn flush(&mut self) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("pcd8544 flush");

        self.address(0, 0)?;
        self.transport
            .send_data_all(self.buffer.as_bytes())
            .map_err(Error::Transport)
    }

    /// Merge a bitmap into the buffer at `(x, y)` and refresh
    ///
    /// `y` may be any pixel row; the bitmap is split across pages as
    /// needed. With [`Inversion::Inverted`] the set bits of the bitmap
    /// erase what is underneath.
    ///
    /// On a transport error the buffer already holds the bitmap but the
    /// panel may not; [`flush`](Self::flush) alone retries the refresh.
    pub fn put_glyph(
        &mut self,
        glyph: &Glyph<'_>,
        x: u8,
        y: u8,
        inversion: Inversion,
    ) -> Result<(), Error<T::Error>> {
        let _span = frame::place(
            &mut self.buffer,
            glyph,
            x as usize,
            y as usize,
            false,
            inversion,
        )?;

        #[cfg(feature = "defmt")]
        defmt::trace!("glyph at ({}, {}) pages {=u8:b}", x, y, _span.mask());

        self.flush()
    }

    /// Draw text with its top-left pixel at `(x, y)` and refresh
    ///
    /// Characters outside `' '..='~'` are drawn as spaces. The whole
    /// string must fit on screen, and every glyph must be present in the
    /// font, or nothing is drawn. The cursor ends up just after the last
    /// character.
    ///
    /// On a transport error the buffer and cursor are already updated but
    /// the panel may not be; [`flush`](Self::flush) alone retries the
    /// refresh.
    pub fn print(
        &mut self,
        text: &str,
        x: u8,
        y: u8,
        font: &Font,
        inversion: Inversion,
    ) -> Result<(), Error<T::Error>> {
        let end_x = self.check_text(text, x as usize, y as usize, font)?;

        for (i, ch) in text.chars().enumerate() {
            let glyph = font.glyph(ch);
            frame::place(
                &mut self.buffer,
                &glyph,
                x as usize + i * font.width(),
                y as usize,
                true,
                inversion,
            )?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("text at ({}, {}): {=str}", x, y, text);

        // end_x <= WIDTH, so it fits in a u8
        self.cursor = Cursor {
            x: end_x as u8,
            y,
        };
        self.flush()
    }

    /// Draw text at the cursor and refresh
    pub fn append(
        &mut self,
        text: &str,
        font: &Font,
        inversion: Inversion,
    ) -> Result<(), Error<T::Error>> {
        let Cursor { x, y } = self.cursor;
        self.print(text, x, y, font, inversion)
    }

    /// Write page-aligned text straight to the panel, skipping the buffer
    ///
    /// Each glyph page-row is addressed and sent on its own, bottom row
    /// first. The framebuffer is not updated, so the next refresh
    /// overwrites this text.
    pub fn print_direct(
        &mut self,
        text: &str,
        x: u8,
        page: u8,
        font: &Font,
    ) -> Result<(), Error<T::Error>> {
        let end_x = self.check_text(text, x as usize, page as usize * PAGE_HEIGHT, font)?;

        let mut column = x;
        for ch in text.chars() {
            let glyph = font.glyph(ch);
            for row in (0..glyph.pages()).rev() {
                self.set_xy(column, page + row as u8)?;
                self.transport
                    .send_data_all(glyph.row(row))
                    .map_err(Error::Transport)?;
            }
            column += font.width() as u8;
        }

        self.cursor = Cursor {
            x: end_x as u8,
            y: page * PAGE_HEIGHT as u8,
        };
        Ok(())
    }

    /// Turn one pixel on or off in the buffer
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) -> Result<(), Error<T::Error>> {
        self.buffer.set_pixel(x as usize, y as usize, on)?;
        Ok(())
    }

    /// Switch off every pixel of a rectangle in the buffer
    pub fn clear_area(&mut self, x: u8, y: u8, width: u8, height: u8) -> Result<(), Error<T::Error>> {
        check_rect(x, y, width, height)?;
        for row in y..y + height {
            for col in x..x + width {
                self.buffer.set_pixel(col as usize, row as usize, false)?;
            }
        }
        Ok(())
    }

    /// Draw a horizontal line of `len` pixels in the buffer
    pub fn draw_hline(&mut self, x: u8, y: u8, len: u8) -> Result<(), Error<T::Error>> {
        check_rect(x, y, len, 1)?;
        for col in x..x + len {
            self.buffer.set_pixel(col as usize, y as usize, true)?;
        }
        Ok(())
    }

    /// Draw a vertical line of `len` pixels in the buffer
    pub fn draw_vline(&mut self, x: u8, y: u8, len: u8) -> Result<(), Error<T::Error>> {
        check_rect(x, y, 1, len)?;
        for row in y..y + len {
            self.buffer.set_pixel(x as usize, row as usize, true)?;
        }
        Ok(())
    }

    /// The framebuffer mirror
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Where the next [`append`](Self::append) starts
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the append cursor without touching the panel
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Settings last applied
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Direct access to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    fn command(&mut self, byte: u8) -> Result<(), Error<T::Error>> {
        self.transport.send_command(byte).map_err(Error::Transport)
    }

    /// Y then X address instructions, no bounds check, cursor untouched
    fn address(&mut self, x: u8, page: u8) -> Result<(), Error<T::Error>> {
        self.command(command::set_y(page))?;
        self.command(command::set_x(x))
    }

    /// Bounds-check a whole string and return the column after it
    fn check_text(
        &self,
        text: &str,
        x: usize,
        y: usize,
        font: &Font,
    ) -> Result<usize, Error<T::Error>> {
        for ch in text.chars() {
            font.glyph(ch).validate()?;
        }
        RowSpan::resolve(y, font.height())?;
        let width = font.text_width(text);
        if x >= WIDTH || width > WIDTH - x {
            return Err(Error::OutOfBounds);
        }
        Ok(x + width)
    }
}

/// Check that a rectangle lies inside the display
fn check_rect<E>(x: u8, y: u8, width: u8, height: u8) -> Result<(), Error<E>> {
    if x as usize + width as usize > WIDTH || y as usize + height as usize > HEIGHT {
        return Err(Error::OutOfBounds);
    }
    Ok(())
}
