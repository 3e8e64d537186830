//! Celsius to Fahrenheit conversion.

/// Fahrenheit degrees per Celsius degree (9/5, folded once).
const F_PER_C: f32 = 9.0 / 5.0;

/// Offset between the Celsius and Fahrenheit zero points.
const F_OFFSET: f32 = 32.0;

/// Convert a Celsius reading to Fahrenheit.
///
/// Plain IEEE arithmetic: negative and non-finite inputs pass straight through
/// the formula. Clamping for display happens later in the renderer.
#[inline]
pub fn cel2fer(temp_c: f32) -> f32 { temp_c * F_PER_C + F_OFFSET }

// =============================================================================
// Unit Tests
// =============================================================================
