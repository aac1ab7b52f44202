//! Driver error type

use crate::config::ConfigError;
use crate::frame::FrameError;

/// Errors that can occur while drawing to or talking to the display
///
/// `E` is the error type of the [`DisplayTransport`](crate::DisplayTransport)
/// in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Address outside the physical column/page range
    ///
    /// Nothing is written when this is returned.
    OutOfBounds,
    /// Glyph descriptor whose data does not cover `width * pages` bytes
    InvalidGlyph,
    /// Configuration value outside the controller's register range
    InvalidConfig(ConfigError),
    /// The transport could not complete a write
    Transport(E),
}

impl<E> Error<E> {
    /// Whether this error came from the bus rather than from the caller
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

impl<E> From<FrameError> for Error<E> {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::OutOfBounds => Error::OutOfBounds,
            FrameError::InvalidGlyph => Error::InvalidGlyph,
        }
    }
}

impl<E> From<ConfigError> for Error<E> {
    fn from(err: ConfigError) -> Self {
        Error::InvalidConfig(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_errors_convert() {
        let err: Error<()> = FrameError::OutOfBounds.into();
        assert_eq!(err, Error::OutOfBounds);
        let err: Error<()> = FrameError::InvalidGlyph.into();
        assert_eq!(err, Error::InvalidGlyph);
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_error_is_flagged() {
        let err: Error<u8> = Error::Transport(3);
        assert!(err.is_transport());
    }
}
