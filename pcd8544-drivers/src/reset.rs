//! Hardware reset
//!
//! The controller's RAM and registers are undefined until RST has been
//! pulsed low, so this must run once after power-up and before
//! [`Lcd::init`](pcd8544_core::Lcd::init).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::transport::BusError;

/// Minimum RST low time is 100 ns; hold for a full microsecond
const RESET_PULSE_US: u32 = 1;

/// Pulse RST low, then release it
pub fn hard_reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), BusError>
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_low().map_err(BusError::pin)?;
    delay.delay_us(RESET_PULSE_US);
    rst.set_high().map_err(BusError::pin)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("pcd8544 reset");

    Ok(())
}
