//! Board wiring and timing constants.
//!
//! Everything here is fixed by the board: switch/LED bit positions, the
//! seven-segment slot layout, PWM channel assignment and the external sensor
//! address. Values are compile-time constants with `const` assertions so a
//! bad edit fails the build instead of scrambling the display.

// =============================================================================
// Control Loop Timing
// =============================================================================

/// Delay between control loop iterations.
/// The loop itself does not sleep; the caller waits this long between steps.
pub const POLL_PERIOD_MS: u32 = 200;

/// PWM carrier frequency for the RGB indicators, set once at start-up.
pub const PWM_FREQ_HZ: u32 = 50;

// =============================================================================
// Switch / LED Bitfield Layout
// =============================================================================

/// Mask for a 7-bit alarm limit (0-127 degrees).
pub const LIMIT_MASK: u16 = 0x7F;

/// Shift of the internal channel's limit within the switch and LED words.
pub const INTERNAL_LIMIT_SHIFT: u16 = 8;

/// Switch bit selecting Fahrenheit for the external channel.
pub const EXTERNAL_FORMAT_BIT: u8 = 7;

/// Switch bit selecting Fahrenheit for the internal channel.
pub const INTERNAL_FORMAT_BIT: u8 = 15;

const _: () = assert!(EXTERNAL_FORMAT_BIT as u16 == INTERNAL_LIMIT_SHIFT - 1);
const _: () = assert!(INTERNAL_FORMAT_BIT as u16 == 2 * INTERNAL_LIMIT_SHIFT - 1);

// =============================================================================
// Seven-Segment Display
// =============================================================================

/// Total digit slots on the display (two halves of four).
pub const DIGIT_SLOTS: usize = 8;

/// Digit slots owned by one channel.
pub const SLOTS_PER_CHANNEL: usize = 4;

/// Pattern that lights no segments.
pub const BLANK: u8 = 0xFF;

/// Hex glyph shown in the unit slot for Celsius ("C").
pub const GLYPH_CELSIUS: u8 = 0x0C;

/// Hex glyph shown in the unit slot for Fahrenheit ("F").
pub const GLYPH_FAHRENHEIT: u8 = 0x0F;

const _: () = assert!(DIGIT_SLOTS == 2 * SLOTS_PER_CHANNEL);

// =============================================================================
// RGB Indicators
// =============================================================================

/// Number of PWM duty channels on the board.
pub const PWM_CHANNELS: usize = 8;

/// PWM channels per RGB triple (blue, green, red).
pub const RGB_CHANNELS: usize = 3;

/// Indicator brightness in percent.
pub const RGB_BRIGHTNESS_PERCENT: f64 = 30.0;

/// Duty cycle written to the lit colour of a triple.
pub const RGB_DUTY: f64 = RGB_BRIGHTNESS_PERCENT / 100.0;

const _: () = assert!(2 * RGB_CHANNELS <= PWM_CHANNELS);

// =============================================================================
// ADT7420 External Sensor
// =============================================================================

/// I2C address of the on-board ADT7420 (A0 and A1 strapped high).
pub const ADT7420_ADDR: u8 = 0x4B;

/// Temperature MSB register; the LSB follows with auto-increment.
pub const ADT7420_TEMP_REG: u8 = 0x00;

// =============================================================================
// Diagnostic Log
// =============================================================================

/// Maximum number of log entries kept between drains.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 48;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Mirrors the compile-time layout checks
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_sit_above_limits() {
        assert_eq!(LIMIT_MASK >> EXTERNAL_FORMAT_BIT, 0);
        assert_eq!(
            (LIMIT_MASK << INTERNAL_LIMIT_SHIFT) & (1 << INTERNAL_FORMAT_BIT),
            0,
            "Internal limit must not overlap its format bit"
        );
    }

    #[test]
    fn test_rgb_duty_is_thirty_percent() {
        assert!((RGB_DUTY - 0.30).abs() < 1e-12);
    }

    #[test]
    fn test_glyphs_are_hex_digits() {
        assert!(GLYPH_CELSIUS < 16);
        assert!(GLYPH_FAHRENHEIT < 16);
        assert_ne!(GLYPH_CELSIUS, GLYPH_FAHRENHEIT);
    }
}
