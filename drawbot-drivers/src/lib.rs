//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in drawbot-core:
//!
//! - Arm length stepper driver (4-wire half-stepped motor)

#![no_std]
#![deny(unsafe_code)]

pub mod arm;
