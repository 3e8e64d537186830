//! Dual-channel digital thermometer core.
//!
//! Two temperature channels (an on-die sensor and an ADT7420 on I2C) are read
//! every 200 ms. Each channel has a slide-switch alarm limit mirrored to LEDs,
//! an RGB indicator that turns red above the limit, and half of an eight-digit
//! seven-segment display showing the reading in Celsius or Fahrenheit.
//!
//! The crate holds the hardware-independent logic. Peripherals are reached
//! through the traits in [`hal`]; [`mock`] provides in-memory versions for
//! tests and the desktop simulator.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while target builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// Diagnostics (macros must be declared before their users)
#[macro_use]
pub mod log_buffer;

// Configuration
pub mod config;

// Pure logic
pub mod channel;
pub mod convert;
pub mod digits;
pub mod render;
pub mod rgb;
pub mod switches;

// Peripherals
pub mod adt7420;
pub mod demo;
pub mod hal;
pub mod mock;

// Control loop
pub mod controller;

pub use channel::{Channel, TempUnit};
pub use controller::{Board, ChannelFrame, ControlLoop, Frame, StepError};
pub use convert::cel2fer;
pub use rgb::AlertColor;
pub use switches::Switches;
