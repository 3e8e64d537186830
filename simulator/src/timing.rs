//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the library.

use std::time::Duration;

use dual_thermo::config::POLL_PERIOD_MS;

/// Delay between control loop iterations.
pub const POLL_PERIOD: Duration = Duration::from_millis(POLL_PERIOD_MS as u64);
