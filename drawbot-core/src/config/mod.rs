//! Configuration types
//!
//! Motor configuration as delivered by the host's config layer, with
//! eager validation of every field.

pub mod motor;

pub use motor::{ConfigError, MotorConfig, PinSet, MAX_LABEL_LEN};
