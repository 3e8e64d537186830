//! In-memory peripherals for host tests and the desktop simulator.
//!
//! Each mock records what the core wrote so tests can assert on it without a
//! board. They hold fixed-size arrays only, so they also build for `no_std`.
//!
//! ```
//! use dual_thermo::channel::Channel;
//! use dual_thermo::mock::MockPwm;
//! use dual_thermo::rgb::{AlertColor, set_rgb};
//!
//! let mut pwm = MockPwm::new();
//! set_rgb(&mut pwm, AlertColor::Red, Channel::Internal);
//! assert_eq!(pwm.duty(5), 0.30);
//! ```

use core::convert::Infallible;

use crate::config::{BLANK, DIGIT_SLOTS, PWM_CHANNELS};
use crate::hal::{DigitalInput, DigitalOutput, PwmChannels, SevenSegment, TemperatureSensor};

// =============================================================================
// Switches / LEDs
// =============================================================================

/// Switch port returning a settable word.
#[derive(Debug, Default)]
pub struct MockSwitches {
    word: u16,
    reads: u32,
}

impl MockSwitches {
    /// Create a switch port with the given positions.
    pub const fn new(word: u16) -> Self { Self { word, reads: 0 } }

    /// Flip the switches.
    pub fn set(
        &mut self,
        word: u16,
    ) {
        self.word = word;
    }

    /// Number of full-word reads so far.
    pub const fn reads(&self) -> u32 { self.reads }
}

impl DigitalInput for MockSwitches {
    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.word
    }
}

/// LED port remembering the last word written.
#[derive(Debug, Default)]
pub struct MockLeds {
    value: u16,
    writes: u32,
}

impl MockLeds {
    /// Create a dark LED port.
    pub const fn new() -> Self { Self { value: 0, writes: 0 } }

    /// Last word written.
    pub const fn value(&self) -> u16 { self.value }

    /// Number of writes so far.
    pub const fn writes(&self) -> u32 { self.writes }
}

impl DigitalOutput for MockLeds {
    fn write(
        &mut self,
        value: u16,
    ) {
        self.value = value;
        self.writes += 1;
    }
}

// =============================================================================
// PWM
// =============================================================================

/// PWM bank holding the duty of every channel.
#[derive(Debug, Default)]
pub struct MockPwm {
    duty: [f64; PWM_CHANNELS],
    freq: u32,
}

impl MockPwm {
    /// Create a PWM bank with all channels off.
    pub const fn new() -> Self {
        Self {
            duty: [0.0; PWM_CHANNELS],
            freq: 0,
        }
    }

    /// Create a PWM bank with every channel at `duty`, to expose stale writes.
    pub const fn filled(duty: f64) -> Self {
        Self {
            duty: [duty; PWM_CHANNELS],
            freq: 0,
        }
    }

    /// Duty of one channel.
    pub const fn duty(
        &self,
        channel: usize,
    ) -> f64 {
        self.duty[channel]
    }

    /// All duties.
    pub const fn duties(&self) -> &[f64; PWM_CHANNELS] { &self.duty }

    /// Last frequency set.
    pub const fn freq(&self) -> u32 { self.freq }
}

impl PwmChannels for MockPwm {
    fn set_freq(
        &mut self,
        hz: u32,
    ) {
        self.freq = hz;
    }

    fn set_duty(
        &mut self,
        duty: f64,
        channel: usize,
    ) {
        // Out-of-range channels are ignored, like the PWM core.
        if let Some(slot) = self.duty.get_mut(channel) {
            *slot = duty;
        }
    }
}

// =============================================================================
// Seven-Segment
// =============================================================================

/// Seven-segment display backed by a digit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSevenSegment {
    digits: [u8; DIGIT_SLOTS],
    dp: u8,
    writes: u32,
}

impl MockSevenSegment {
    /// Create a display in the blank power-on state.
    pub const fn new() -> Self {
        Self {
            digits: [BLANK; DIGIT_SLOTS],
            dp: 0,
            writes: 0,
        }
    }

    /// Create a display with every slot and point set, to expose stale state.
    pub const fn filled(
        pattern: u8,
        dp: u8,
    ) -> Self {
        Self {
            digits: [pattern; DIGIT_SLOTS],
            dp,
            writes: 0,
        }
    }

    /// Pattern in one slot.
    pub const fn digit(
        &self,
        slot: usize,
    ) -> u8 {
        self.digits[slot]
    }

    /// All slots, index 0 = rightmost.
    pub const fn digits(&self) -> &[u8; DIGIT_SLOTS] { &self.digits }

    /// One channel's four slots from highest order (+3) down to the glyph (+0).
    pub const fn half(
        &self,
        base: usize,
    ) -> [u8; 4] {
        [self.digits[base + 3], self.digits[base + 2], self.digits[base + 1], self.digits[base]]
    }

    /// Decimal point mask.
    pub const fn decimal_points(&self) -> u8 { self.dp }

    /// Number of digit writes so far.
    pub const fn writes(&self) -> u32 { self.writes }
}

impl Default for MockSevenSegment {
    fn default() -> Self { Self::new() }
}

impl SevenSegment for MockSevenSegment {
    fn write_digit(
        &mut self,
        pattern: u8,
        slot: usize,
    ) {
        if let Some(digit) = self.digits.get_mut(slot) {
            *digit = pattern;
            self.writes += 1;
        }
    }

    fn set_decimal_points(
        &mut self,
        mask: u8,
    ) {
        self.dp = mask;
    }
}

// =============================================================================
// Sensors
// =============================================================================

/// Sensor returning a fixed reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSensor {
    temp_c: f32,
}

impl MockSensor {
    /// Create a sensor stuck at `temp_c`.
    pub const fn new(temp_c: f32) -> Self { Self { temp_c } }

    /// Change the reading.
    pub fn set(
        &mut self,
        temp_c: f32,
    ) {
        self.temp_c = temp_c;
    }
}

impl TemperatureSensor for MockSensor {
    type Error = Infallible;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> { Ok(self.temp_c) }
}

/// Transport error raised by [`FaultySensor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Sensor whose reads fail until it is reconnected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultySensor {
    temp_c: f32,
    connected: bool,
}

impl FaultySensor {
    /// Create a disconnected sensor that will report `temp_c` once reconnected.
    pub const fn disconnected(temp_c: f32) -> Self {
        Self {
            temp_c,
            connected: false,
        }
    }

    /// Plug the sensor back in.
    pub fn reconnect(&mut self) { self.connected = true; }
}

impl TemperatureSensor for FaultySensor {
    type Error = BusFault;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        if self.connected { Ok(self.temp_c) } else { Err(BusFault) }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_count_reads() {
        let mut sw = MockSwitches::new(0x1234);
        assert_eq!(sw.read(), 0x1234);
        sw.set(0xABCD);
        assert_eq!(sw.read(), 0xABCD);
        assert_eq!(sw.reads(), 2);
    }

    #[test]
    fn test_pwm_ignores_out_of_range_channel() {
        let mut pwm = MockPwm::new();
        pwm.set_duty(0.5, PWM_CHANNELS);
        assert!(pwm.duties().iter().all(|d| *d == 0.0));
        pwm.set_freq(50);
        assert_eq!(pwm.freq(), 50);
    }

    #[test]
    fn test_sseg_starts_blank() {
        let sseg = MockSevenSegment::new();
        assert!(sseg.digits().iter().all(|d| *d == BLANK));
        assert_eq!(sseg.decimal_points(), 0);
    }

    #[test]
    fn test_sseg_half_order() {
        let mut sseg = MockSevenSegment::new();
        for slot in 0..DIGIT_SLOTS {
            sseg.write_digit(slot as u8, slot);
        }
        assert_eq!(sseg.half(0), [3, 2, 1, 0]);
        assert_eq!(sseg.half(4), [7, 6, 5, 4]);
    }

    #[test]
    fn test_faulty_sensor_reconnects() {
        let mut sensor = FaultySensor::disconnected(21.5);
        assert_eq!(sensor.read_celsius(), Err(BusFault));
        sensor.reconnect();
        assert_eq!(sensor.read_celsius(), Ok(21.5));
    }
}
