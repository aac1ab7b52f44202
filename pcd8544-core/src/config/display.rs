//! Display configuration
//!
//! Analog settings (Vop, temperature coefficient, bias) differ between
//! panel batches, so they are carried as a value instead of being baked
//! into the init sequence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command;

/// Display control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayMode {
    /// All pixels off regardless of RAM
    Blank,
    /// RAM contents shown as-is
    #[default]
    Normal,
    /// All pixels on regardless of RAM
    AllOn,
    /// RAM contents shown in inverse video
    Inverted,
}

impl DisplayMode {
    /// Display control instruction for this mode
    pub const fn command(self) -> u8 {
        match self {
            DisplayMode::Blank => command::DISPLAY_BLANK,
            DisplayMode::Normal => command::DISPLAY_NORMAL,
            DisplayMode::AllOn => command::DISPLAY_ALL_ON,
            DisplayMode::Inverted => command::DISPLAY_INVERTED,
        }
    }
}

/// Panel configuration sent during init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Operating voltage register (contrast), 0..=0x7F
    pub vop: u8,
    /// Temperature coefficient, 0..=3
    pub temp_coefficient: u8,
    /// Bias system, 0..=7 (2 selects the 1:48 multiplex rate)
    pub bias: u8,
    /// Display mode selected after init
    pub mode: DisplayMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            vop: 0x38,
            temp_coefficient: 0,
            bias: 2,
            mode: DisplayMode::Normal,
        }
    }
}

impl DisplayConfig {
    /// Create a config with the given contrast and default everything else
    pub fn with_vop(vop: u8) -> Self {
        Self {
            vop,
            ..Self::default()
        }
    }

    /// Check every field against its register width
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vop > command::MAX_VOP {
            return Err(ConfigError::Vop);
        }
        if self.temp_coefficient > command::MAX_TEMP_COEFF {
            return Err(ConfigError::TempCoefficient);
        }
        if self.bias > command::MAX_BIAS {
            return Err(ConfigError::Bias);
        }
        Ok(())
    }

    /// Extended-set instructions for the analog settings, in send order
    pub fn extended_commands(&self) -> [u8; 3] {
        [
            command::SET_VOP | self.vop,
            command::SET_TEMP_COEFF | self.temp_coefficient,
            command::SET_BIAS | self.bias,
        ]
    }
}

/// Field that failed [`DisplayConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Vop above 0x7F
    Vop,
    /// Temperature coefficient above 3
    TempCoefficient,
    /// Bias above 7
    Bias,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_init() {
        let config = DisplayConfig::default();
        assert!(config.validate().is_ok());
        // 0xB8 / 0x04 / 0x12 are the bytes a stock Nokia 5110 init sends
        assert_eq!(config.extended_commands(), [0xB8, 0x04, 0x12]);
        assert_eq!(config.mode.command(), 0x0C);
    }

    #[test]
    fn test_validate_rejects_wide_fields() {
        assert_eq!(
            DisplayConfig::with_vop(0x80).validate(),
            Err(ConfigError::Vop)
        );

        let config = DisplayConfig {
            temp_coefficient: 4,
            ..DisplayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TempCoefficient));

        let config = DisplayConfig {
            bias: 8,
            ..DisplayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Bias));
    }

    #[test]
    fn test_mode_commands() {
        assert_eq!(DisplayMode::Blank.command(), 0x08);
        assert_eq!(DisplayMode::AllOn.command(), 0x09);
        assert_eq!(DisplayMode::Inverted.command(), 0x0D);
    }
}
