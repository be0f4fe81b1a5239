//! Arm length stepper driver
//!
//! Drives the 4-wire stepper that winds the arm cord, raising or lowering
//! the pen carriage. Each `lengthen`/`shorten` call is one logical tick:
//! the current phase pattern is asserted on the coil pins, then the step
//! cursor advances (twice at high speed, skipping the intermediate
//! energization).
//!
//! # Usage
//!
//! ```ignore
//! let mut config = MotorConfig::new();
//! config.set_direction("cw")?;
//! config.set_pins("4,17,18,27")?;
//! config.set_speed("low")?;
//!
//! let mut motor = ArmMotor::new(pin_driver, &config)?;
//! motor.reset()?;
//! motor.lengthen()?;
//! ```

use heapless::String;

use drawbot_core::config::{ConfigError, MotorConfig, PinSet, MAX_LABEL_LEN};
use drawbot_core::motion::StepCursor;
use drawbot_core::traits::{ArmDriver, Direction, Speed};
use drawbot_hal::gpio::{GpioError, Level, PinDriver, PinMode};

/// Arm length stepper controller
///
/// Owns the pin driver and its 4 assigned pins for the lifetime of the
/// controller. All state is serial: the step cursor mirrors the physical
/// coil phase, so callers embedding this in a concurrent host must
/// serialize access themselves.
pub struct ArmMotor<D> {
    driver: D,
    /// Motor label from the configuration
    name: String<MAX_LABEL_LEN>,
    /// Coil control pins, position-correlated with the sequence columns
    pins: PinSet,
    /// Rotational sense of a lengthening tick
    direction: Direction,
    /// Tick speed policy
    speed: Speed,
    /// Logical arm length counter
    length: f32,
    /// Position in the half-step sequence
    cursor: StepCursor,
}

impl<D: PinDriver> ArmMotor<D> {
    /// Create a controller from a validated configuration
    ///
    /// Direction, pins and speed are required; a missing length defaults
    /// to 0. Completeness is checked here, never during movement.
    pub fn new(driver: D, config: &MotorConfig) -> Result<Self, ConfigError> {
        let direction = config.direction().ok_or(ConfigError::MissingDirection)?;
        let pins = *config.pins().ok_or(ConfigError::MissingPins)?;
        let speed = config.speed().ok_or(ConfigError::MissingSpeed)?;
        let length = config.length().unwrap_or(0.0);

        Ok(Self {
            driver,
            name: config.name.clone(),
            pins,
            direction,
            speed,
            length,
            cursor: StepCursor::new(),
        })
    }

    /// The motor label
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The assigned coil pins
    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    /// The configured rotational direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Reconfigure the rotational direction
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// The configured tick speed
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Reconfigure the tick speed
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Re-zero or preset the arm length counter
    pub fn set_length(&mut self, length: f32) {
        self.length = length;
    }

    /// Current index into the half-step sequence
    pub fn step_index(&self) -> usize {
        self.cursor.index()
    }

    /// Assert the current phase pattern on the coil pins, in pin order
    fn energize(&mut self) -> Result<(), GpioError> {
        let pattern = self.cursor.pattern();
        for (pin, bit) in self.pins.as_array().iter().zip(pattern.iter()) {
            self.driver.write(*pin, Level::from(*bit))?;
        }
        Ok(())
    }

    /// Advance the cursor one entry in the configured rotational sense
    fn advance(&mut self, travel: i8) {
        let delta = match self.direction {
            Direction::Clockwise => travel,
            Direction::CounterClockwise => -travel,
        };
        self.cursor.advance(delta);
    }

    /// One logical tick: energize, then advance
    ///
    /// The cursor and length counter only move once the energize writes
    /// succeeded, so logical state never runs ahead of the coils.
    fn change_length(&mut self, travel: i8) -> Result<(), GpioError> {
        self.energize()?;

        self.advance(travel);
        if self.speed == Speed::High {
            // High speed means two sequence advances per tick
            self.advance(travel);
        }

        self.length += f32::from(travel);
        Ok(())
    }
}

impl<D: PinDriver> ArmDriver for ArmMotor<D> {
    type Error = GpioError;

    fn reset(&mut self) -> Result<(), GpioError> {
        // Fixed pin order; pin driver state is shared, so this stays
        // sequential. Pins already handled stay reset on failure.
        let pins = self.pins;
        for &pin in pins.iter() {
            if !self.driver.is_exported(pin)? {
                self.driver.export(pin, PinMode::Output)?;
            }
            self.driver.write(pin, Level::Low)?;
        }
        Ok(())
    }

    fn lengthen(&mut self) -> Result<(), GpioError> {
        self.change_length(1)
    }

    fn shorten(&mut self) -> Result<(), GpioError> {
        self.change_length(-1)
    }

    fn length(&self) -> f32 {
        self.length
    }
}
