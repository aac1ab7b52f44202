//! Byte transports
//!
//! Both transports drive DC low for commands and high for data.

pub mod bitbang;
pub mod spi;

pub use bitbang::BitBangTransport;
pub use spi::SpiTransport;

use embedded_hal::digital;
use pcd8544_core::traits::Mode;

/// Failure on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A GPIO line could not be driven
    Pin(digital::ErrorKind),
    /// The SPI device rejected a write
    Spi(embedded_hal::spi::ErrorKind),
}

impl BusError {
    pub(crate) fn pin<E: digital::Error>(err: E) -> Self {
        BusError::Pin(err.kind())
    }

    pub(crate) fn spi<E: embedded_hal::spi::Error>(err: E) -> Self {
        BusError::Spi(err.kind())
    }
}

/// Drive the DC line for a byte of the given mode
pub(crate) fn select_mode<DC: digital::OutputPin>(dc: &mut DC, mode: Mode) -> Result<(), BusError> {
    match mode {
        Mode::Command => dc.set_low(),
        Mode::Data => dc.set_high(),
    }
    .map_err(BusError::pin)
}
