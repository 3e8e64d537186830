//! Seven-segment rendering: clear, per-channel temperature, decimal points.
//!
//! # Slot Layout
//!
//! ```text
//!  slot:  7   6   5   4 | 3   2   1   0
//!        --- internal --- | --- external ---
//!         H/T O/T t/O unit  H/T O/T t/O unit
//! ```
//!
//! The decimal point sits after the ones digit, so its slot moves with the
//! two-digit/three-digit layout of each half.

use crate::channel::{Channel, TempUnit};
use crate::config::{BLANK, DIGIT_SLOTS};
use crate::digits::TempDigits;
use crate::hal::SevenSegment;

/// Decimal point mask for every combination of `(internal >= 100, external >= 100)`.
///
/// Hand-assigned wiring positions: the external point sits on slot 2 (`TT.t`)
/// or slot 1 (`HHH`), the internal point on slot 6 or slot 5.
const DP_TABLE: [[u8; 2]; 2] = [
    // internal < 100
    [
        (1 << 2) | (1 << 6), // neither
        (1 << 1) | (1 << 6), // external only
    ],
    // internal >= 100
    [
        (1 << 2) | (1 << 5), // internal only
        (1 << 1) | (1 << 5), // both
    ],
];

/// Blank every digit and every decimal point.
///
/// Runs before both halves are drawn each iteration so a tens digit from the
/// previous reading cannot survive into a single-digit one.
pub fn clear_disp<S: SevenSegment>(sseg: &mut S) {
    for slot in 0..DIGIT_SLOTS {
        sseg.write_digit(BLANK, slot);
    }
    sseg.set_decimal_points(0x00);
}

/// Draw one channel's reading into its half of the display.
///
/// Returns whether the three-digit (>= 100) layout was used, which decides
/// where [`disp_dp`] puts the decimal point.
pub fn disp_temp<S: SevenSegment>(
    sseg: &mut S,
    temp_c: f32,
    temp_f: f32,
    unit: TempUnit,
    channel: Channel,
) -> bool {
    let digits = TempDigits::select(temp_c, temp_f, unit);
    write_digits(sseg, &digits, channel);
    digits.is_hundred_plus()
}

/// Write pre-computed digits into `channel`'s half.
pub fn write_digits<S: SevenSegment>(
    sseg: &mut S,
    digits: &TempDigits,
    channel: Channel,
) {
    let base = channel.slot_base();
    for (offset, pattern) in digits.patterns().into_iter().rev().enumerate() {
        sseg.write_digit(pattern, base + offset);
    }
}

/// Decimal point mask for both halves.
#[inline]
pub const fn dp_mask(
    internal_over_hundred: bool,
    external_over_hundred: bool,
) -> u8 {
    DP_TABLE[internal_over_hundred as usize][external_over_hundred as usize]
}

/// Place both decimal points.
pub fn disp_dp<S: SevenSegment>(
    sseg: &mut S,
    internal_over_hundred: bool,
    external_over_hundred: bool,
) {
    sseg.set_decimal_points(dp_mask(internal_over_hundred, external_over_hundred));
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::cel2fer;
    use crate::mock::MockSevenSegment;

    const B: u8 = BLANK;

    /// Clear, draw one channel, return (over-hundred, that half's slots +3..+0).
    fn draw(
        temp_c: f32,
        unit: TempUnit,
        channel: Channel,
    ) -> (bool, [u8; 4]) {
        let mut sseg = MockSevenSegment::filled(0x00, 0xFF);
        clear_disp(&mut sseg);
        let hund = disp_temp(&mut sseg, temp_c, cel2fer(temp_c), unit, channel);
        (hund, sseg.half(channel.slot_base()))
    }

    #[test]
    fn test_clear_blanks_everything() {
        let mut sseg = MockSevenSegment::filled(0x00, 0xFF);
        clear_disp(&mut sseg);
        assert!(sseg.digits().iter().all(|d| *d == 0xFF));
        assert_eq!(sseg.decimal_points(), 0x00);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut sseg = MockSevenSegment::filled(0x03, 0x22);
        clear_disp(&mut sseg);
        let once = sseg.clone();
        clear_disp(&mut sseg);
        assert_eq!(sseg.digits(), once.digits());
        assert_eq!(sseg.decimal_points(), once.decimal_points());
    }

    #[test]
    fn test_bench_vectors_both_halves() {
        use TempUnit::{Celsius, Fahrenheit};
        let cases: [(f32, TempUnit, bool, [u8; 4]); 12] = [
            (9.76, Celsius, false, [B, 9, 8, 0x0C]),
            (9.76, Fahrenheit, false, [4, 9, 6, 0x0F]),
            (37.75, Celsius, false, [3, 7, 8, 0x0C]),
            (37.75, Fahrenheit, true, [1, 0, 0, 0x0F]),
            (39.24, Celsius, false, [3, 9, 2, 0x0C]),
            (39.24, Fahrenheit, true, [1, 0, 3, 0x0F]),
            (105.49, Celsius, true, [1, 0, 5, 0x0C]),
            (105.49, Fahrenheit, true, [2, 2, 2, 0x0F]),
            (-5.32, Celsius, false, [B, 0, 0, 0x0C]),
            (-5.32, Fahrenheit, false, [2, 2, 4, 0x0F]),
            (-20.82, Celsius, false, [B, 0, 0, 0x0C]),
            (-20.82, Fahrenheit, false, [B, 0, 0, 0x0F]),
        ];
        for (temp_c, unit, want_hund, want) in cases {
            for channel in Channel::ALL {
                let (hund, half) = draw(temp_c, unit, channel);
                assert_eq!(hund, want_hund, "{temp_c} {unit:?} {channel:?}");
                assert_eq!(half, want, "{temp_c} {unit:?} {channel:?}");
            }
        }
    }

    #[test]
    fn test_disp_temp_touches_only_its_half() {
        let mut sseg = MockSevenSegment::new();
        disp_temp(&mut sseg, 25.0, cel2fer(25.0), TempUnit::Celsius, Channel::Internal);
        assert_eq!(sseg.half(0), [B, B, B, B]);
        assert_eq!(sseg.half(4), [2, 5, 0, 0x0C]);
        assert_eq!(sseg.writes(), 4);
        assert_eq!(sseg.decimal_points(), 0, "disp_temp must not set decimal points");
    }

    #[test]
    fn test_dp_table() {
        assert_eq!(dp_mask(true, true), (1 << 1) | (1 << 5));
        assert_eq!(dp_mask(true, false), (1 << 2) | (1 << 5));
        assert_eq!(dp_mask(false, true), (1 << 1) | (1 << 6));
        assert_eq!(dp_mask(false, false), (1 << 2) | (1 << 6));
    }

    #[test]
    fn test_dp_always_two_points() {
        for int in [false, true] {
            for ext in [false, true] {
                let mask = dp_mask(int, ext);
                assert_eq!(mask.count_ones(), 2);
                assert_ne!(mask & 0x0F, 0, "external half needs a point");
                assert_ne!(mask & 0xF0, 0, "internal half needs a point");
            }
        }
    }

    #[test]
    fn test_disp_dp_writes_mask() {
        let mut sseg = MockSevenSegment::new();
        disp_dp(&mut sseg, false, true);
        assert_eq!(sseg.decimal_points(), 0b0100_0010);
    }
}
