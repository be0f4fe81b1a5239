//! Drawbot Hardware Abstraction Layer
//!
//! This crate defines the pin access traits that can be implemented by
//! platform-specific backends (sysfs GPIO, memory-mapped registers, test
//! doubles). This keeps the motor control logic independent of how pins
//! are actually driven.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (drawbot-drivers)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  drawbot-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  sysfs GPIO   │       │  test double  │
//! │  backend      │       │  (in tests)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinDriver`] - Pin-number-keyed digital output with
//!   export-on-demand semantics

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key types at crate root for convenience
pub use gpio::{GpioError, Level, PinDriver, PinMode};
