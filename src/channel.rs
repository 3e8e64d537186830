//! Measurement channels and display units.
//!
//! - [`Channel::Internal`]: on-die sensor, left display half, upper switch/LED bits
//! - [`Channel::External`]: ADT7420 sensor, right display half, lower switch/LED bits

use crate::config::{GLYPH_CELSIUS, GLYPH_FAHRENHEIT, RGB_CHANNELS, SLOTS_PER_CHANNEL};

/// One of the two independent measurement paths.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// External I2C sensor (right half, switches 0-7).
    External = 0,
    /// On-die sensor (left half, switches 8-15).
    Internal = 1,
}

impl Channel {
    /// Both channels, in the order the control loop renders them.
    pub const ALL: [Self; 2] = [Self::Internal, Self::External];

    /// First seven-segment slot owned by this channel (the unit glyph).
    #[inline]
    pub const fn slot_base(self) -> usize {
        match self {
            Self::External => 0,
            Self::Internal => SLOTS_PER_CHANNEL,
        }
    }

    /// First PWM channel of this channel's RGB triple.
    #[inline]
    pub const fn rgb_base(self) -> usize {
        match self {
            Self::External => 0,
            Self::Internal => RGB_CHANNELS,
        }
    }

    /// Short label for diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::External => "ext",
            Self::Internal => "int",
        }
    }
}

/// Temperature unit selected by a channel's format switch.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum TempUnit {
    /// Format switch off.
    #[default]
    Celsius,
    /// Format switch on.
    Fahrenheit,
}

impl TempUnit {
    /// Decode a format switch bit (0 = Celsius, anything else = Fahrenheit).
    #[inline]
    pub const fn from_flag(flag: u8) -> Self {
        if flag == 0 { Self::Celsius } else { Self::Fahrenheit }
    }

    /// Format flag as read from the switches.
    #[inline]
    pub const fn flag(self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }

    /// Hex pattern written to the unit slot.
    #[inline]
    pub const fn glyph(self) -> u8 {
        match self {
            Self::Celsius => GLYPH_CELSIUS,
            Self::Fahrenheit => GLYPH_FAHRENHEIT,
        }
    }

    /// Pick the reading matching this unit.
    #[inline]
    pub const fn select(
        self,
        temp_c: f32,
        temp_f: f32,
    ) -> f32 {
        match self {
            Self::Celsius => temp_c,
            Self::Fahrenheit => temp_f,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bases() {
        assert_eq!(Channel::External.slot_base(), 0);
        assert_eq!(Channel::Internal.slot_base(), 4);
    }

    #[test]
    fn test_rgb_bases() {
        assert_eq!(Channel::External.rgb_base(), 0);
        assert_eq!(Channel::Internal.rgb_base(), 3);
    }

    #[test]
    fn test_unit_from_flag() {
        assert_eq!(TempUnit::from_flag(0), TempUnit::Celsius);
        assert_eq!(TempUnit::from_flag(1), TempUnit::Fahrenheit);
        assert_eq!(TempUnit::Fahrenheit.flag(), 1);
        assert_eq!(TempUnit::default(), TempUnit::Celsius);
    }

    #[test]
    fn test_unit_glyphs() {
        assert_eq!(TempUnit::Celsius.glyph(), 0x0C);
        assert_eq!(TempUnit::Fahrenheit.glyph(), 0x0F);
    }

    #[test]
    fn test_unit_select() {
        assert_eq!(TempUnit::Celsius.select(10.0, 50.0), 10.0);
        assert_eq!(TempUnit::Fahrenheit.select(10.0, 50.0), 50.0);
    }
}
