//! Dual-channel thermometer simulator for the desktop.
//!
//! Runs the real control loop against mock peripherals and two sine-wave
//! sensors, printing the display, LEDs and RGB indicators each iteration.
//!
//! ```text
//! simulator [SWITCHES_HEX] [ITERATIONS] [-v]
//! ```
//!
//! `SWITCHES_HEX` is the 16-bit switch word (default `0x2832`: internal limit
//! 40, external limit 50, both Celsius). Without `ITERATIONS` the loop runs
//! until interrupted. `-v` also prints per-iteration debug log lines.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod console;
mod timing;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use dual_thermo::demo::DemoSensor;
use dual_thermo::log_buffer::LogLevel;
use dual_thermo::mock::{MockLeds, MockPwm, MockSevenSegment, MockSwitches};
use dual_thermo::{Board, ControlLoop};

use crate::console::{parse_switches, status};
use crate::timing::POLL_PERIOD;

/// Switch word used when none is given.
const DEFAULT_SWITCHES: u16 = 0x2832;

/// Command line options.
struct Options {
    switches: u16,
    iterations: Option<u32>,
    verbose: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        switches: DEFAULT_SWITCHES,
        iterations: None,
        verbose: false,
    };
    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "-v" {
            options.verbose = true;
            continue;
        }
        match positional {
            0 => options.switches = parse_switches(&arg).map_err(|e| format!("bad switch word '{arg}': {e}"))?,
            1 => options.iterations = Some(arg.parse().map_err(|e| format!("bad iteration count '{arg}': {e}"))?),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
        positional += 1;
    }
    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: simulator [SWITCHES_HEX] [ITERATIONS] [-v]");
            return ExitCode::from(2);
        }
    };

    let board = Board {
        switches: MockSwitches::new(options.switches),
        leds: MockLeds::new(),
        pwm: MockPwm::new(),
        sseg: MockSevenSegment::new(),
        internal: DemoSensor::on_die(),
        external: DemoSensor::ambient(),
    };
    let mut ctl = ControlLoop::new(board);
    if !options.verbose {
        ctl.log().set_min_level(LogLevel::Info);
    }
    ctl.init();

    let mut done = 0u32;
    loop {
        let frame_start = Instant::now();

        match ctl.step() {
            Ok(frame) => {
                let b = ctl.board();
                println!("{}", status(frame.tick, &b.sseg, b.leds.value(), &b.pwm));
            }
            Err(e) => eprintln!("{e}"),
        }
        ctl.log().drain(|entry| {
            println!("    {} {:>5} {}", entry.level.prefix(), entry.tick, entry.message);
        });

        done += 1;
        if options.iterations.is_some_and(|max| done >= max) {
            return ExitCode::SUCCESS;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < POLL_PERIOD {
            thread::sleep(POLL_PERIOD - elapsed);
        }
    }
}
