//! Configuration types
//!
//! Panel settings applied by [`Lcd::init`](crate::Lcd::init).

pub mod display;

pub use display::*;
