//! One iteration of the thermometer control loop.
//!
//! ```text
//! switches ──► limits ──► LEDs
//!          └─► units ─────────────────┐
//! sensors ──► Celsius ─► Fahrenheit ──┼─► digits ─► seven-segment
//!                    └─► alarm ─► RGB └─► decimal points
//! ```
//!
//! Nothing carries over between iterations except what the peripherals
//! themselves hold; every step re-reads the switches and both sensors and
//! rewrites every output.

use core::fmt;

use crate::channel::{Channel, TempUnit};
use crate::config::{POLL_PERIOD_MS, PWM_FREQ_HZ};
use crate::convert::cel2fer;
use crate::hal::{DigitalInput, DigitalOutput, PwmChannels, SevenSegment, TemperatureSensor};
use crate::log_buffer::LogBuffer;
use crate::render::{clear_disp, disp_dp, disp_temp, dp_mask};
use crate::rgb::{AlertColor, set_rgb};
use crate::switches::{Switches, mirror_limits};

// =============================================================================
// Board
// =============================================================================

/// The peripherals the loop drives, one field per collaborator.
#[derive(Debug)]
pub struct Board<SW, LED, PWM, SSEG, TI, TE> {
    /// Slide switches (limits and formats).
    pub switches: SW,
    /// LEDs mirroring the limits.
    pub leds: LED,
    /// PWM bank behind both RGB indicators.
    pub pwm: PWM,
    /// Eight-digit display.
    pub sseg: SSEG,
    /// On-die sensor (internal channel).
    pub internal: TI,
    /// External sensor.
    pub external: TE,
}

// =============================================================================
// Frame
// =============================================================================

/// What one channel showed during an iteration.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChannelFrame {
    /// Alarm limit from the switches.
    pub limit: u8,
    /// Display unit from the switches.
    pub unit: TempUnit,
    /// Sensor reading.
    pub temp_c: f32,
    /// Reading converted to Fahrenheit.
    pub temp_f: f32,
    /// Indicator colour.
    pub color: AlertColor,
    /// Whether the three-digit layout was used.
    pub over_hundred: bool,
}

/// Summary of one completed iteration.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Frame {
    /// Iteration number, starting at 0.
    pub tick: u32,
    /// Switch snapshot the iteration ran on.
    pub switches: Switches,
    /// Word written to the LEDs.
    pub led_word: u16,
    /// Internal channel.
    pub internal: ChannelFrame,
    /// External channel.
    pub external: ChannelFrame,
    /// Decimal point mask written to the display.
    pub dp_mask: u8,
}

impl Frame {
    /// The frame for `channel`.
    pub const fn channel(
        &self,
        channel: Channel,
    ) -> &ChannelFrame {
        match channel {
            Channel::Internal => &self.internal,
            Channel::External => &self.external,
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// A sensor failed; outputs after the LED mirror were left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError<A, B> {
    /// The on-die sensor read failed.
    InternalSensor(A),
    /// The external sensor read failed.
    ExternalSensor(B),
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Display for StepError<A, B> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InternalSensor(e) => write!(f, "internal sensor read failed: {e:?}"),
            Self::ExternalSensor(e) => write!(f, "external sensor read failed: {e:?}"),
        }
    }
}

// =============================================================================
// Control Loop
// =============================================================================

/// Drives a [`Board`] one iteration at a time.
///
/// The caller owns timing: call [`ControlLoop::init`] once, then
/// [`ControlLoop::step`] every [`ControlLoop::PERIOD_MS`] milliseconds.
#[derive(Debug)]
pub struct ControlLoop<SW, LED, PWM, SSEG, TI, TE> {
    board: Board<SW, LED, PWM, SSEG, TI, TE>,
    log: LogBuffer,
    tick: u32,
}

impl<SW, LED, PWM, SSEG, TI, TE> ControlLoop<SW, LED, PWM, SSEG, TI, TE>
where
    SW: DigitalInput,
    LED: DigitalOutput,
    PWM: PwmChannels,
    SSEG: SevenSegment,
    TI: TemperatureSensor,
    TE: TemperatureSensor,
{
    /// Delay the caller should leave between steps.
    pub const PERIOD_MS: u32 = POLL_PERIOD_MS;

    /// Take ownership of the peripherals.
    pub const fn new(board: Board<SW, LED, PWM, SSEG, TI, TE>) -> Self {
        Self {
            board,
            log: LogBuffer::new(),
            tick: 0,
        }
    }

    /// One-time peripheral setup.
    pub fn init(&mut self) {
        self.board.pwm.set_freq(PWM_FREQ_HZ);
        log_info!(self.log, "PWM {} Hz, poll {} ms", PWM_FREQ_HZ, POLL_PERIOD_MS);
    }

    /// Run one read-compute-write iteration.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] if either sensor fails. The LEDs have already
    /// been updated at that point; the RGB indicators and display keep what
    /// the previous iteration wrote.
    pub fn step(&mut self) -> Result<Frame, StepError<TI::Error, TE::Error>> {
        let tick = self.tick;
        self.tick = self.tick.wrapping_add(1);
        self.log.set_tick(tick);

        // User input
        let switches = Switches::read(&mut self.board.switches);
        let int_limit = switches.limit(Channel::Internal);
        let ext_limit = switches.limit(Channel::External);
        mirror_limits(&mut self.board.leds, u32::from(ext_limit), u32::from(int_limit));
        let int_unit = switches.unit(Channel::Internal);
        let ext_unit = switches.unit(Channel::External);

        // Sensing
        let int_c = match self.board.internal.read_celsius() {
            Ok(t) => t,
            Err(e) => {
                log_error!(self.log, "int sensor: {:?}", e);
                return Err(StepError::InternalSensor(e));
            }
        };
        let ext_c = match self.board.external.read_celsius() {
            Ok(t) => t,
            Err(e) => {
                log_error!(self.log, "ext sensor: {:?}", e);
                return Err(StepError::ExternalSensor(e));
            }
        };
        let int_f = cel2fer(int_c);
        let ext_f = cel2fer(ext_c);

        // RGB alarms (always judged in Celsius)
        let int_color = AlertColor::classify(int_c, int_limit);
        let ext_color = AlertColor::classify(ext_c, ext_limit);
        set_rgb(&mut self.board.pwm, int_color, Channel::Internal);
        set_rgb(&mut self.board.pwm, ext_color, Channel::External);

        // Seven-segment
        clear_disp(&mut self.board.sseg);
        let int_hund = disp_temp(&mut self.board.sseg, int_c, int_f, int_unit, Channel::Internal);
        let ext_hund = disp_temp(&mut self.board.sseg, ext_c, ext_f, ext_unit, Channel::External);
        disp_dp(&mut self.board.sseg, int_hund, ext_hund);

        let frame = Frame {
            tick,
            switches,
            led_word: switches.led_word(),
            internal: ChannelFrame {
                limit: int_limit,
                unit: int_unit,
                temp_c: int_c,
                temp_f: int_f,
                color: int_color,
                over_hundred: int_hund,
            },
            external: ChannelFrame {
                limit: ext_limit,
                unit: ext_unit,
                temp_c: ext_c,
                temp_f: ext_f,
                color: ext_color,
                over_hundred: ext_hund,
            },
            dp_mask: dp_mask(int_hund, ext_hund),
        };
        self.record(&frame);
        Ok(frame)
    }

    /// Diagnostics for a completed frame.
    fn record(
        &mut self,
        frame: &Frame,
    ) {
        for channel in Channel::ALL {
            let ch = frame.channel(channel);
            log_debug!(self.log, "{} {:.3} C lim {} {:?}", channel.label(), ch.temp_c, ch.limit, ch.unit);
            if ch.color.is_alarm() {
                log_warn!(self.log, "{} over limit: {:.1} C > {} C", channel.label(), ch.temp_c, ch.limit);
            }
        }
    }

    /// Iterations started so far.
    pub const fn tick(&self) -> u32 { self.tick }

    /// Diagnostic log.
    pub fn log(&mut self) -> &mut LogBuffer { &mut self.log }

    /// Borrow the peripherals.
    pub const fn board(&self) -> &Board<SW, LED, PWM, SSEG, TI, TE> { &self.board }

    /// Borrow the peripherals mutably (e.g. to flip mock switches).
    pub fn board_mut(&mut self) -> &mut Board<SW, LED, PWM, SSEG, TI, TE> { &mut self.board }

    /// Give the peripherals back.
    pub fn into_board(self) -> Board<SW, LED, PWM, SSEG, TI, TE> { self.board }
}

// =============================================================================
// Unit Tests
// =============================================================================
