//! Text rendering of the mock board for the terminal.
//!
//! ```text
//!  #0012  [ 109.C |  22.4C ]  LED 0101010_0010100  RGB int R ext G
//! ```

use core::fmt::Write;

use dual_thermo::Channel;
use dual_thermo::config::{DIGIT_SLOTS, SLOTS_PER_CHANNEL};
use dual_thermo::mock::{MockPwm, MockSevenSegment};
use dual_thermo::rgb::AlertColor;
use heapless::String;

/// One rendered terminal line.
pub type Line = String<96>;

/// Hex pattern as shown by a seven-segment digit; the unit glyphs are `C`/`F`.
pub const fn glyph_char(pattern: u8) -> char {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    if (pattern as usize) < HEX.len() { HEX[pattern as usize] as char } else { ' ' }
}

/// All eight slots, most significant first, with lit decimal points.
pub fn display(sseg: &MockSevenSegment) -> Line {
    let mut line = Line::new();
    let dp = sseg.decimal_points();
    let _ = line.push_str("[ ");
    for slot in (0..DIGIT_SLOTS).rev() {
        let _ = line.push(glyph_char(sseg.digit(slot)));
        if dp & (1 << slot) != 0 {
            let _ = line.push('.');
        }
        if slot == SLOTS_PER_CHANNEL {
            let _ = line.push_str(" | ");
        }
    }
    let _ = line.push_str(" ]");
    line
}

/// Indicator state of one channel: `G`, `R`, or `-` when dark.
pub fn rgb(
    pwm: &MockPwm,
    channel: Channel,
) -> char {
    let base = channel.rgb_base();
    if pwm.duty(base + AlertColor::Red.offset()) > 0.0 {
        'R'
    } else if pwm.duty(base + AlertColor::Green.offset()) > 0.0 {
        'G'
    } else {
        '-'
    }
}

/// Full status line for one iteration.
pub fn status(
    tick: u32,
    sseg: &MockSevenSegment,
    led_word: u16,
    pwm: &MockPwm,
) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "#{tick:04}  {}  LED {:07b}_{:07b}  RGB int {} ext {}",
        display(sseg),
        (led_word >> 8) & 0x7F,
        led_word & 0x7F,
        rgb(pwm, Channel::Internal),
        rgb(pwm, Channel::External),
    );
    line
}

/// Parse a switch word given as hex, with or without `0x`.
pub fn parse_switches(arg: &str) -> Result<u16, core::num::ParseIntError> {
    let digits = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")).unwrap_or(arg);
    u16::from_str_radix(digits, 16)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use dual_thermo::render::{clear_disp, disp_dp, disp_temp};
    use dual_thermo::rgb::set_rgb;
    use dual_thermo::{TempUnit, cel2fer};

    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph_char(7), '7');
        assert_eq!(glyph_char(0x0C), 'C');
        assert_eq!(glyph_char(0x0F), 'F');
        assert_eq!(glyph_char(0xFF), ' ');
    }

    #[test]
    fn test_display_line() {
        let mut sseg = MockSevenSegment::new();
        clear_disp(&mut sseg);
        let int = disp_temp(&mut sseg, 105.49, cel2fer(105.49), TempUnit::Celsius, Channel::Internal);
        let ext = disp_temp(&mut sseg, 9.76, cel2fer(9.76), TempUnit::Celsius, Channel::External);
        disp_dp(&mut sseg, int, ext);
        assert_eq!(display(&sseg).as_str(), "[ 105.C |  9.8C ]");
    }

    #[test]
    fn test_rgb_state() {
        let mut pwm = MockPwm::new();
        assert_eq!(rgb(&pwm, Channel::Internal), '-');
        set_rgb(&mut pwm, AlertColor::Red, Channel::Internal);
        set_rgb(&mut pwm, AlertColor::Green, Channel::External);
        assert_eq!(rgb(&pwm, Channel::Internal), 'R');
        assert_eq!(rgb(&pwm, Channel::External), 'G');
    }

    #[test]
    fn test_parse_switches() {
        assert_eq!(parse_switches("0x281E"), Ok(0x281E));
        assert_eq!(parse_switches("ffff"), Ok(0xFFFF));
        assert!(parse_switches("10000").is_err());
        assert!(parse_switches("zz").is_err());
    }
}
