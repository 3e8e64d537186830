//! Temperature to seven-segment digit decomposition.
//!
//! A channel has four slots. Below 100 degrees it shows `TT.t` plus the unit
//! glyph (tens blank under 10), from 100 up it shows `HHH` with no fraction.
//!
//! # Rounding
//!
//! The two layouts round differently and must stay that way:
//!
//! - Below 100 the reading is rounded half-up to tenths as an integer and the
//!   whole part is that integer divided by ten (truncating). 9.76 becomes 98
//!   tenths, shown as `9.8`. 99.95 becomes 1000 tenths, i.e. whole 100, and
//!   switches to the three-digit layout.
//! - From 100 up the whole part is rounded directly from the float with
//!   `+ 0.5`, so 100.5 shows `101` while its tenths route would give 100.
//!
//! Whole values of 1000 or more wrap in the hundreds digit. The sensors on
//! this board cannot get there.

use crate::channel::TempUnit;
use crate::config::BLANK;

/// Digits of one channel's reading, ready to write to the display.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct TempDigits {
    /// Rounded whole degrees.
    pub whole: u32,
    /// Reading in tenths, rounded half-up.
    pub tenths_scaled: u32,
    /// Unit shown in the glyph slot.
    pub unit: TempUnit,
}

impl TempDigits {
    /// Decompose a reading already expressed in `unit`.
    ///
    /// Negative readings clamp to zero. Conversions saturate, so NaN shows as
    /// zero and infinity as wrapped digits instead of panicking.
    pub fn from_reading(
        temp: f32,
        unit: TempUnit,
    ) -> Self {
        let temp = if temp < 0.0 { 0.0 } else { temp };

        let tenths_scaled = (temp * 10.0 + 0.5) as u32;
        let whole = if temp >= 100.0 {
            // Coarse path: round the raw float to whole degrees
            (temp + 0.5) as u32
        } else {
            // Fine path: reuse the tenths rounding, truncate to whole
            tenths_scaled / 10
        };

        Self {
            whole,
            tenths_scaled,
            unit,
        }
    }

    /// Pick the reading for `unit` and decompose it.
    pub fn select(
        temp_c: f32,
        temp_f: f32,
        unit: TempUnit,
    ) -> Self {
        Self::from_reading(unit.select(temp_c, temp_f), unit)
    }

    /// Hundreds digit (wraps above 999).
    #[inline]
    pub const fn hundreds(&self) -> u8 { ((self.whole / 100) % 10) as u8 }

    /// Tens digit.
    #[inline]
    pub const fn tens(&self) -> u8 { ((self.whole / 10) % 10) as u8 }

    /// Ones digit.
    #[inline]
    pub const fn ones(&self) -> u8 { (self.whole % 10) as u8 }

    /// Tenths digit.
    #[inline]
    pub const fn tenths(&self) -> u8 { (self.tenths_scaled % 10) as u8 }

    /// Whether the three-digit layout applies.
    #[inline]
    pub const fn is_hundred_plus(&self) -> bool { self.whole >= 100 }

    /// Slot patterns from highest order (+3) down to the unit glyph (+0).
    pub const fn patterns(&self) -> [u8; 4] {
        let glyph = self.unit.glyph();
        if self.is_hundred_plus() {
            [self.hundreds(), self.tens(), self.ones(), glyph]
        } else {
            let tens = if self.whole >= 10 { self.tens() } else { BLANK };
            [tens, self.ones(), self.tenths(), glyph]
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
