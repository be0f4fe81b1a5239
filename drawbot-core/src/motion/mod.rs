//! Step sequencing
//!
//! The half-step coil table and the cyclic cursor that walks it.

pub mod sequence;

pub use sequence::{StepCursor, HALF_STEP_SEQUENCE};
