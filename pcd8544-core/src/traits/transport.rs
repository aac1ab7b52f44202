//! Display transport trait

/// Whether a byte on the bus is an instruction or display RAM data
///
/// Selected by the D/C line: low for commands, high for data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Instruction byte (D/C low)
    Command,
    /// Display RAM byte (D/C high)
    Data,
}

/// Byte-level link to the display controller
///
/// Each call must: drive D/C for the mode, assert chip-enable, clock out
/// the byte most-significant bit first, then release chip-enable. The bus
/// is write-only, so a failed write cannot be detected or retried here;
/// it is reported and the caller decides what to do.
pub trait DisplayTransport {
    /// Error type for bus writes
    type Error;

    /// Send one instruction byte
    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Send one display RAM byte
    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Send one byte in the given mode
    fn send(&mut self, mode: Mode, byte: u8) -> Result<(), Self::Error> {
        match mode {
            Mode::Command => self.send_command(byte),
            Mode::Data => self.send_data(byte),
        }
    }

    /// Send a run of display RAM bytes
    fn send_data_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.send_data(byte)?;
        }
        Ok(())
    }
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).send_command(byte)
    }

    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).send_data(byte)
    }
}
