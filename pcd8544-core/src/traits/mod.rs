//! Hardware abstraction traits
//!
//! The compositing engine never touches pins. Everything it sends to the
//! controller goes through [`DisplayTransport`].

pub mod transport;

pub use transport::{DisplayTransport, Mode};
