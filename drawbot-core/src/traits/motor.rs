//! Arm motor trait and shared vocabulary
//!
//! The arm motor changes the length of the cord holding the pen carriage:
//! lengthening lowers the pen away from the motor, shortening pulls it
//! closer. Path planning sits above this trait and never touches pins.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The configuration string for this direction
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Clockwise => "cw",
            Direction::CounterClockwise => "ccw",
        }
    }
}

/// Tick speed policy
///
/// At high speed the step cursor advances twice per tick, skipping the
/// intermediate coil energization. Faster rotation, rougher steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Speed {
    /// Two sequence advances per tick
    High,
    /// One sequence advance per tick
    Low,
}

impl Speed {
    /// The configuration string for this speed
    pub fn as_str(self) -> &'static str {
        match self {
            Speed::High => "high",
            Speed::Low => "low",
        }
    }
}

/// Trait for arm length motor drivers
///
/// Implementations drive one stepper that winds or unwinds the arm cord.
/// Each call is one logical tick; there is no internal queueing and no
/// retry, so errors surface to the immediate caller.
pub trait ArmDriver {
    /// Error type surfaced by pin access failures
    type Error;

    /// Put all assigned pins in a known, de-energized output state
    ///
    /// Idempotent, and independent of the step cursor.
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Push the pen carriage farther away from the motor by one tick
    fn lengthen(&mut self) -> Result<(), Self::Error>;

    /// Pull the pen carriage closer to the motor by one tick
    fn shorten(&mut self) -> Result<(), Self::Error>;

    /// Current logical arm length counter
    fn length(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Clockwise.opposite(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.opposite(), Direction::Clockwise);
    }

    #[test]
    fn test_config_strings() {
        assert_eq!(Direction::Clockwise.as_str(), "cw");
        assert_eq!(Direction::CounterClockwise.as_str(), "ccw");
        assert_eq!(Speed::High.as_str(), "high");
        assert_eq!(Speed::Low.as_str(), "low");
    }
}
