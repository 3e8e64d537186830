//! Demo temperature source for running the loop without sensors.
//!
//! Produces a slow sine wave per read so a desktop run walks through every
//! display state: negative clamping, single digit, the 100-degree layout
//! switch and alarm transitions. Uses micromath so it also runs on target.

use core::convert::Infallible;

use crate::hal::TemperatureSensor;

/// Sine-wave temperature generator.
#[derive(Clone, Copy, Debug)]
pub struct DemoSensor {
    center: f32,
    amplitude: f32,
    step: f32,
    phase: f32,
}

impl DemoSensor {
    /// Wave around `center` +/- `amplitude`, advancing `step` radians per read.
    pub const fn new(
        center: f32,
        amplitude: f32,
        step: f32,
    ) -> Self {
        Self {
            center,
            amplitude,
            step,
            phase: 0.0,
        }
    }

    /// Die temperature profile: warm, crosses 100 C at the peak.
    pub const fn on_die() -> Self { Self::new(70.0, 40.0, 0.05) }

    /// Room sensor profile: dips below zero, never reaches 100.
    pub const fn ambient() -> Self { Self::new(22.0, 30.0, 0.08) }

    /// Current phase in radians.
    pub const fn phase(&self) -> f32 { self.phase }

    /// Value at the current phase without advancing.
    pub fn peek(&self) -> f32 { self.center + self.amplitude * micromath::F32(self.phase).sin().0 }
}

impl TemperatureSensor for DemoSensor {
    type Error = Infallible;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        let value = self.peek();
        self.phase += self.step;
        // Keep phase bounded so f32 precision doesn't degrade over long runs
        if self.phase > core::f32::consts::TAU {
            self.phase -= core::f32::consts::TAU;
        }
        Ok(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_center() {
        let mut sensor = DemoSensor::new(25.0, 10.0, 0.1);
        let Ok(t) = sensor.read_celsius();
        assert!((t - 25.0).abs() < 0.01);
        assert!((sensor.phase() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_stays_within_amplitude() {
        let mut sensor = DemoSensor::new(25.0, 10.0, 0.3);
        for _ in 0..500 {
            let Ok(t) = sensor.read_celsius();
            assert!((14.9..=35.1).contains(&t), "{t} out of range");
        }
    }

    #[test]
    fn test_phase_wraps() {
        let mut sensor = DemoSensor::new(0.0, 1.0, 1.0);
        for _ in 0..100 {
            let _ = sensor.read_celsius();
            assert!(sensor.phase() <= core::f32::consts::TAU + 1.0);
        }
    }

    #[test]
    fn test_profiles_cover_display_states() {
        let mut die = DemoSensor::on_die();
        let mut room = DemoSensor::ambient();
        let mut die_max = f32::MIN;
        let mut room_min = f32::MAX;
        for _ in 0..200 {
            let Ok(d) = die.read_celsius();
            let Ok(r) = room.read_celsius();
            die_max = die_max.max(d);
            room_min = room_min.min(r);
        }
        assert!(die_max >= 100.0, "die profile should reach the three-digit layout");
        assert!(room_min < 0.0, "ambient profile should exercise clamping");
    }
}
