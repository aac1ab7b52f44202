//! Hardware SPI transport
//!
//! The `SpiDevice` owns chip-select, so each write is framed by CE
//! without any help from this side. Only D/C is driven here.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use pcd8544_core::traits::{DisplayTransport, Mode};

use super::{select_mode, BusError};

/// PCD8544 link over an SPI device and a D/C pin
///
/// The bus must run in mode 0, MSB first, at 4 MHz or less.
pub struct SpiTransport<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiTransport<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give the device and pin back
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    fn write(&mut self, mode: Mode, bytes: &[u8]) -> Result<(), BusError> {
        select_mode(&mut self.dc, mode)?;
        self.spi.write(bytes).map_err(BusError::spi)
    }
}

impl<SPI, DC> DisplayTransport for SpiTransport<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = BusError;

    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(Mode::Command, &[byte])
    }

    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(Mode::Data, &[byte])
    }

    /// One transaction for the whole run
    fn send_data_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.write(Mode::Data, bytes)
    }
}
