//! Hardware transports for PCD8544 displays
//!
//! Implementations of [`pcd8544_core::DisplayTransport`] on top of
//! `embedded-hal` 1.0:
//!
//! - Bit-banged GPIO (CLK, DIN, DC, CE)
//! - `SpiDevice` plus a DC pin
//! - Reset pulse on the RST line

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod reset;
pub mod transport;

pub use reset::hard_reset;
pub use transport::{BitBangTransport, BusError, SpiTransport};
