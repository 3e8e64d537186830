//! Switch word decoding and LED limit mirror.
//!
//! ```text
//!  15 | 14 ........ 8 | 7 | 6 ........ 0
//!  Fi |  internal lim | Fe|  external lim
//! ```
//!
//! `Fi`/`Fe` select Fahrenheit for the internal/external channel. The LEDs
//! mirror both limits in the same positions with the format bits dark.

use crate::channel::{Channel, TempUnit};
use crate::config::{EXTERNAL_FORMAT_BIT, INTERNAL_FORMAT_BIT, INTERNAL_LIMIT_SHIFT, LIMIT_MASK};
use crate::hal::{DigitalInput, DigitalOutput};

/// Alarm limit (0-127) for `channel` from a switch word.
#[inline]
pub const fn get_temp_limit(
    switches: u16,
    channel: Channel,
) -> u8 {
    let limit = match channel {
        Channel::Internal => (switches >> INTERNAL_LIMIT_SHIFT) & LIMIT_MASK,
        Channel::External => switches & LIMIT_MASK,
    };
    limit as u8
}

/// Format flag for `channel` from a switch word (1 = Fahrenheit).
#[inline]
pub const fn get_temp_format(
    switches: u16,
    channel: Channel,
) -> u8 {
    let bit = match channel {
        Channel::Internal => INTERNAL_FORMAT_BIT,
        Channel::External => EXTERNAL_FORMAT_BIT,
    };
    ((switches >> bit) & 0x01) as u8
}

/// LED word showing both limits.
///
/// Both operands are re-masked to 7 bits even though decoded limits already
/// fit, so wider values never bleed into the format bit positions.
#[inline]
pub const fn disp_temp_limit(
    limit_external: u32,
    limit_internal: u32,
) -> u16 {
    let mask = LIMIT_MASK as u32;
    ((limit_external & mask) | ((limit_internal & mask) << INTERNAL_LIMIT_SHIFT)) as u16
}

/// One iteration's view of the switches. Read once, never re-read mid-iteration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Switches(pub u16);

impl Switches {
    /// Snapshot the switch port.
    pub fn read<I: DigitalInput>(input: &mut I) -> Self { Self(input.read()) }

    /// Raw switch word.
    #[inline]
    pub const fn bits(self) -> u16 { self.0 }

    /// Alarm limit for `channel`.
    #[inline]
    pub const fn limit(
        self,
        channel: Channel,
    ) -> u8 {
        get_temp_limit(self.0, channel)
    }

    /// Display unit for `channel`.
    #[inline]
    pub const fn unit(
        self,
        channel: Channel,
    ) -> TempUnit {
        TempUnit::from_flag(get_temp_format(self.0, channel))
    }

    /// LED mirror word for this snapshot's limits.
    #[inline]
    pub const fn led_word(self) -> u16 {
        disp_temp_limit(self.limit(Channel::External) as u32, self.limit(Channel::Internal) as u32)
    }
}

/// Write both limits to the LEDs.
pub fn mirror_limits<O: DigitalOutput>(
    leds: &mut O,
    limit_external: u32,
    limit_internal: u32,
) {
    leds.write(disp_temp_limit(limit_external, limit_internal));
}

// =============================================================================
// Unit Tests
// =============================================================================
