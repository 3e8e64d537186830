//! RGB alarm indicators.
//!
//! Each channel owns a PWM triple `[blue, green, red]` starting at
//! [`Channel::rgb_base`]. Green means within limit, red means over. Blue is
//! wired but unused and is forced off on every update.

use crate::channel::Channel;
use crate::config::{RGB_CHANNELS, RGB_DUTY};
use crate::hal::PwmChannels;

/// Alarm state of one channel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum AlertColor {
    /// Reading at or below the limit.
    #[default]
    Green = 0,
    /// Reading above the limit.
    Red = 1,
}

impl AlertColor {
    /// Compare a Celsius reading against a switch limit.
    ///
    /// Always compares in Celsius, whatever unit the channel displays. Only a
    /// reading strictly above the limit raises the alarm; NaN stays green.
    #[inline]
    pub fn classify(
        temp_c: f32,
        limit: u8,
    ) -> Self {
        if temp_c > f32::from(limit) { Self::Red } else { Self::Green }
    }

    /// Offset of the lit colour inside the triple.
    #[inline]
    pub const fn offset(self) -> usize { 1 + self as usize }

    /// True for [`AlertColor::Red`].
    #[inline]
    pub const fn is_alarm(self) -> bool { matches!(self, Self::Red) }
}

/// Light one channel's indicator.
///
/// All three duties of the triple are zeroed before the active colour is
/// written, so a colour change never leaves the previous one glowing.
pub fn set_rgb<P: PwmChannels>(
    pwm: &mut P,
    color: AlertColor,
    channel: Channel,
) {
    let base = channel.rgb_base();
    for n in 0..RGB_CHANNELS {
        pwm.set_duty(0.0, base + n);
    }
    pwm.set_duty(RGB_DUTY, base + color.offset());
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPwm;

    fn close(
        a: f64,
        b: f64,
    ) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_external_green() {
        let mut pwm = MockPwm::new();
        set_rgb(&mut pwm, AlertColor::Green, Channel::External);
        assert!(close(pwm.duty(0), 0.0));
        assert!(close(pwm.duty(1), 0.30));
        assert!(close(pwm.duty(2), 0.0));
    }

    #[test]
    fn test_internal_red() {
        let mut pwm = MockPwm::new();
        set_rgb(&mut pwm, AlertColor::Red, Channel::Internal);
        assert!(close(pwm.duty(3), 0.0));
        assert!(close(pwm.duty(4), 0.0));
        assert!(close(pwm.duty(5), 0.30));
    }

    #[test]
    fn test_clears_previous_colour_and_blue() {
        let mut pwm = MockPwm::filled(1.0);
        set_rgb(&mut pwm, AlertColor::Red, Channel::External);
        assert!(close(pwm.duty(0), 0.0), "Blue must be forced off");
        assert!(close(pwm.duty(1), 0.0), "Green must not linger");
        assert!(close(pwm.duty(2), 0.30));
        // Other triple and spare channels untouched
        for ch in 3..8 {
            assert!(close(pwm.duty(ch), 1.0), "channel {ch} should be untouched");
        }
    }

    #[test]
    fn test_colour_switch_back_and_forth() {
        let mut pwm = MockPwm::new();
        set_rgb(&mut pwm, AlertColor::Red, Channel::Internal);
        set_rgb(&mut pwm, AlertColor::Green, Channel::Internal);
        assert!(close(pwm.duty(4), 0.30));
        assert!(close(pwm.duty(5), 0.0));
    }

    #[test]
    fn test_classify_strictly_above() {
        assert_eq!(AlertColor::classify(30.0, 30), AlertColor::Green);
        assert_eq!(AlertColor::classify(30.01, 30), AlertColor::Red);
        assert_eq!(AlertColor::classify(-5.0, 0), AlertColor::Green);
        assert_eq!(AlertColor::classify(0.5, 0), AlertColor::Red);
        assert_eq!(AlertColor::classify(f32::NAN, 0), AlertColor::Green);
    }

    #[test]
    fn test_color_offsets() {
        assert_eq!(AlertColor::Green.offset(), 1);
        assert_eq!(AlertColor::Red.offset(), 2);
        assert!(AlertColor::Red.is_alarm());
        assert!(!AlertColor::Green.is_alarm());
    }
}
