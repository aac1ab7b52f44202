//! Bit-banged serial transport
//!
//! Clocks bytes out on plain GPIO lines. The controller samples DIN on the
//! rising edge of CLK, so each bit is set up with CLK low and latched by
//! driving it high.

use embedded_hal::digital::OutputPin;
use pcd8544_core::traits::{DisplayTransport, Mode};

use super::{select_mode, BusError};

/// PCD8544 serial link over four GPIO outputs
pub struct BitBangTransport<CLK, DIN, DC, CE> {
    clk: CLK,
    din: DIN,
    dc: DC,
    ce: CE,
}

impl<CLK, DIN, DC, CE> BitBangTransport<CLK, DIN, DC, CE>
where
    CLK: OutputPin,
    DIN: OutputPin,
    DC: OutputPin,
    CE: OutputPin,
{
    /// Create a transport from the clock, data, D/C and chip-enable pins
    ///
    /// CE is released so the controller ignores the bus until the first
    /// byte.
    pub fn new(clk: CLK, din: DIN, dc: DC, mut ce: CE) -> Result<Self, BusError> {
        ce.set_high().map_err(BusError::pin)?;
        Ok(Self { clk, din, dc, ce })
    }

    /// Give the pins back
    pub fn release(self) -> (CLK, DIN, DC, CE) {
        (self.clk, self.din, self.dc, self.ce)
    }

    fn write(&mut self, mode: Mode, byte: u8) -> Result<(), BusError> {
        select_mode(&mut self.dc, mode)?;
        self.ce.set_low().map_err(BusError::pin)?;
        self.shift_out(byte)?;
        self.ce.set_high().map_err(BusError::pin)
    }

    /// Eight bits, most significant first
    fn shift_out(&mut self, byte: u8) -> Result<(), BusError> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.din.set_high()
            } else {
                self.din.set_low()
            }
            .map_err(BusError::pin)?;
            self.clk.set_low().map_err(BusError::pin)?;
            self.clk.set_high().map_err(BusError::pin)?;
        }
        Ok(())
    }
}

impl<CLK, DIN, DC, CE> DisplayTransport for BitBangTransport<CLK, DIN, DC, CE>
where
    CLK: OutputPin,
    DIN: OutputPin,
    DC: OutputPin,
    CE: OutputPin,
{
    type Error = BusError;

    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(Mode::Command, byte)
    }

    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(Mode::Data, byte)
    }
}
