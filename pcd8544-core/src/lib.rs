//! Framebuffer compositing engine for PCD8544 (Nokia 5110) LCDs
//!
//! The PCD8544 stores its 84x48 pixels as 6 pages of 8 vertically stacked
//! rows, one byte per column per page. This crate keeps a mirror of that
//! memory and merges glyphs into it at arbitrary (non page-aligned)
//! vertical offsets:
//!
//! - [`frame::span`] finds the pages a placement touches
//! - [`frame::shift`] re-slices glyph columns onto those pages
//! - [`frame::compositor`] merges the shifted bytes into the buffer
//! - [`frame::buffer`] is the page-addressed pixel store
//!
//! [`Lcd`] ties those stages together and streams the buffer through a
//! [`DisplayTransport`]. The transport is the only thing that touches the
//! bus, so everything here can be tested on the host against a recording
//! fake.
//!
//! # Architecture
//!
//! ```text
//! place glyph G at (x, y)
//!        │
//!        ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌─────────────┐
//! │   RowSpan    │──▶│shift_columns │──▶│  Compositor  │──▶│ PixelBuffer │
//! └──────────────┘   └──────────────┘   └──────────────┘   └─────────────┘
//!                                                                 │ flush
//!                                                                 ▼
//!                                                         DisplayTransport
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod glyph;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root for convenience
pub use config::{DisplayConfig, DisplayMode};
pub use driver::{Cursor, Lcd};
pub use error::Error;
pub use frame::{Inversion, PixelBuffer, RowSpan, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
pub use glyph::{Font, Glyph, FONT_12X16, FONT_6X8};
pub use traits::DisplayTransport;
