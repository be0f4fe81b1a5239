//! Motor configuration and validation
//!
//! The host supplies motor settings as strings (direction, pin list,
//! speed, length). Every setter validates its input before storing it, so
//! a [`MotorConfig`] never holds a malformed value. Completeness is
//! checked by the driver constructor, never during movement.

use core::fmt;

use heapless::String;

use crate::traits::{Direction, Speed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum motor label length
pub const MAX_LABEL_LEN: usize = 16;

/// Number of coil control pins per motor
const PIN_COUNT: usize = 4;

/// Errors raised by configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Direction string was not "cw" or "ccw"
    InvalidDirection,
    /// Pin list was not 4 comma-separated, distinct, 1-2 digit numbers
    InvalidPins,
    /// Speed string was not "high" or "low"
    InvalidSpeed,
    /// Length string was not a finite number
    InvalidLength,
    /// No direction was configured
    MissingDirection,
    /// No pin list was configured
    MissingPins,
    /// No speed was configured
    MissingSpeed,
}

/// Ordered assignment of the 4 coil control pins
///
/// Position-correlated with the step sequence columns: pin `i` receives
/// bit `i` of each phase pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinSet([u8; PIN_COUNT]);

impl PinSet {
    /// Parse a comma-separated pin list, e.g. `"4,17,18,27"`
    ///
    /// Accepts exactly 4 comma-separated pin numbers of 1-2 decimal
    /// digits each (0-99), nothing before or after, no leading zeros,
    /// and all pins must be distinct. One motor owns its pins; a
    /// repeated pin would alias two coil lines.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let mut pins = [0u8; PIN_COUNT];
        let mut count = 0;

        for part in value.split(',') {
            if count == PIN_COUNT {
                return Err(ConfigError::InvalidPins);
            }
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::InvalidPins);
            }
            if part.len() == 2 && part.starts_with('0') {
                return Err(ConfigError::InvalidPins);
            }
            pins[count] = part.parse().map_err(|_| ConfigError::InvalidPins)?;
            count += 1;
        }

        if count != PIN_COUNT {
            return Err(ConfigError::InvalidPins);
        }

        for i in 0..PIN_COUNT {
            for j in (i + 1)..PIN_COUNT {
                if pins[i] == pins[j] {
                    return Err(ConfigError::InvalidPins);
                }
            }
        }

        Ok(Self(pins))
    }

    /// The pin numbers in assignment order
    pub fn as_array(&self) -> [u8; PIN_COUNT] {
        self.0
    }

    /// Iterate over the pin numbers in assignment order
    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.0.iter()
    }
}

impl fmt::Display for PinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

/// Motor configuration with optional fields
///
/// Fields arrive as strings from the host config layer and are validated
/// eagerly by the setters. A field that was never set stays `None`;
/// required fields are rejected when the driver is constructed.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorConfig {
    /// Motor label (e.g. "left", "right")
    pub name: String<MAX_LABEL_LEN>,
    direction: Option<Direction>,
    pins: Option<PinSet>,
    speed: Option<Speed>,
    length: Option<f32>,
}

impl MotorConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotation direction from its config string
    ///
    /// Accepts exactly `"cw"` or `"ccw"`, case-sensitive.
    pub fn set_direction(&mut self, value: &str) -> Result<(), ConfigError> {
        self.direction = Some(match value {
            "cw" => Direction::Clockwise,
            "ccw" => Direction::CounterClockwise,
            _ => return Err(ConfigError::InvalidDirection),
        });
        Ok(())
    }

    /// The configured direction, if set
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Set the coil pin assignment from a comma-separated list
    pub fn set_pins(&mut self, value: &str) -> Result<(), ConfigError> {
        self.pins = Some(PinSet::parse(value)?);
        Ok(())
    }

    /// The configured pin assignment, if set
    pub fn pins(&self) -> Option<&PinSet> {
        self.pins.as_ref()
    }

    /// Set the tick speed from its config string
    ///
    /// Accepts exactly `"high"` or `"low"`.
    pub fn set_speed(&mut self, value: &str) -> Result<(), ConfigError> {
        self.speed = Some(match value {
            "high" => Speed::High,
            "low" => Speed::Low,
            _ => return Err(ConfigError::InvalidSpeed),
        });
        Ok(())
    }

    /// The configured speed, if set
    pub fn speed(&self) -> Option<Speed> {
        self.speed
    }

    /// Set the initial arm length counter from a numeric string
    ///
    /// Accepts integers and decimals; non-finite values are rejected.
    pub fn set_length(&mut self, value: &str) -> Result<(), ConfigError> {
        let length: f32 = value.parse().map_err(|_| ConfigError::InvalidLength)?;
        if !length.is_finite() {
            return Err(ConfigError::InvalidLength);
        }
        self.length = Some(length);
        Ok(())
    }

    /// The configured initial length, if set
    pub fn length(&self) -> Option<f32> {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    #[test]
    fn test_direction_valid() {
        let mut config = MotorConfig::new();

        config.set_direction("cw").unwrap();
        assert_eq!(config.direction(), Some(Direction::Clockwise));

        config.set_direction("ccw").unwrap();
        assert_eq!(config.direction(), Some(Direction::CounterClockwise));
    }

    #[test]
    fn test_direction_invalid() {
        let mut config = MotorConfig::new();

        for value in ["CW", "Ccw", "clockwise", "", "cw "] {
            assert_eq!(
                config.set_direction(value),
                Err(ConfigError::InvalidDirection)
            );
        }
        // Failed sets leave the field untouched
        assert_eq!(config.direction(), None);
    }

    #[test]
    fn test_speed_valid() {
        let mut config = MotorConfig::new();

        config.set_speed("high").unwrap();
        assert_eq!(config.speed(), Some(Speed::High));

        config.set_speed("low").unwrap();
        assert_eq!(config.speed(), Some(Speed::Low));
    }

    #[test]
    fn test_speed_invalid() {
        let mut config = MotorConfig::new();

        for value in ["HIGH", "fast", "", "low "] {
            assert_eq!(config.set_speed(value), Err(ConfigError::InvalidSpeed));
        }
        assert_eq!(config.speed(), None);
    }

    #[test]
    fn test_pins_round_trip() {
        let pins = PinSet::parse("4,17,18,27").unwrap();
        assert_eq!(pins.as_array(), [4, 17, 18, 27]);

        let mut joined: String<16> = String::new();
        write!(joined, "{}", pins).unwrap();
        assert_eq!(joined.as_str(), "4,17,18,27");
    }

    #[test]
    fn test_pins_single_digit() {
        let pins = PinSet::parse("0,1,2,3").unwrap();
        assert_eq!(pins.as_array(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_pins_invalid() {
        for value in [
            "4,17,18",        // too few
            "4,17,18,27,22",  // too many
            "4,17,18,100",    // 3 digits
            "4,17,18,2a",     // non-digit
            "4, 17,18,27",    // embedded space
            " 4,17,18,27",    // leading space
            "4,17,18,27,",    // trailing comma
            "4,17,18,18",     // repeated pin
            "04,17,18,27",    // leading zero
            "",
        ] {
            assert_eq!(PinSet::parse(value), Err(ConfigError::InvalidPins));
        }
    }

    #[test]
    fn test_length_valid() {
        let mut config = MotorConfig::new();

        config.set_length("12").unwrap();
        assert_eq!(config.length(), Some(12.0));

        config.set_length("12.5").unwrap();
        assert_eq!(config.length(), Some(12.5));

        config.set_length("-3").unwrap();
        assert_eq!(config.length(), Some(-3.0));
    }

    #[test]
    fn test_length_invalid() {
        let mut config = MotorConfig::new();

        for value in ["abc", "", "12cm", "NaN", "inf"] {
            assert_eq!(config.set_length(value), Err(ConfigError::InvalidLength));
        }
        assert_eq!(config.length(), None);
    }

    #[test]
    fn test_empty_config() {
        let config = MotorConfig::new();
        assert!(config.name.is_empty());
        assert_eq!(config.direction(), None);
        assert_eq!(config.pins(), None);
        assert_eq!(config.speed(), None);
        assert_eq!(config.length(), None);
    }
}
