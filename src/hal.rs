//! Peripheral capabilities the thermometer core drives.
//!
//! The core never touches registers. The platform layer implements these
//! traits for its GPIO, PWM, seven-segment and sensor cores and hands them to
//! the functions in [`switches`](crate::switches), [`rgb`](crate::rgb),
//! [`render`](crate::render) and [`controller`](crate::controller).
//! Host tests use the implementations in [`mock`](crate::mock).

/// Slide-switch input port.
pub trait DigitalInput {
    /// Read the whole 16-bit switch word.
    fn read(&mut self) -> u16;

    /// Read a single switch (0 or 1).
    fn read_bit(
        &mut self,
        bit: u8,
    ) -> u8 {
        ((self.read() >> (bit & 0x0F)) & 0x01) as u8
    }
}

/// LED output port. Writes are fire-and-forget.
pub trait DigitalOutput {
    /// Drive the 16 LEDs.
    fn write(
        &mut self,
        value: u16,
    );
}

/// Bank of independent PWM channels.
pub trait PwmChannels {
    /// Set the PWM carrier frequency for every channel.
    fn set_freq(
        &mut self,
        hz: u32,
    );

    /// Set one channel's duty cycle (0.0 - 1.0), applied immediately.
    fn set_duty(
        &mut self,
        duty: f64,
        channel: usize,
    );
}

/// Eight-digit seven-segment display with per-digit decimal points.
pub trait SevenSegment {
    /// Write a hex pattern (0-15) or [`BLANK`](crate::config::BLANK) to a slot (0-7).
    fn write_digit(
        &mut self,
        pattern: u8,
        slot: usize,
    );

    /// Set the decimal point mask (bit n lights the point of slot n).
    fn set_decimal_points(
        &mut self,
        mask: u8,
    );
}

/// Temperature source reporting degrees Celsius.
///
/// Implausible values (negative noise, out-of-range) are returned as-is; the
/// renderer clamps them. `Err` is reserved for transport failures such as an
/// I2C NACK. Sensors that cannot fail use [`core::convert::Infallible`].
pub trait TemperatureSensor {
    /// Transport error type.
    type Error: core::fmt::Debug;

    /// Take one reading.
    fn read_celsius(&mut self) -> Result<f32, Self::Error>;
}

impl<T: DigitalInput + ?Sized> DigitalInput for &mut T {
    fn read(&mut self) -> u16 { (**self).read() }

    fn read_bit(
        &mut self,
        bit: u8,
    ) -> u8 {
        (**self).read_bit(bit)
    }
}

impl<T: DigitalOutput + ?Sized> DigitalOutput for &mut T {
    fn write(
        &mut self,
        value: u16,
    ) {
        (**self).write(value);
    }
}

impl<T: PwmChannels + ?Sized> PwmChannels for &mut T {
    fn set_freq(
        &mut self,
        hz: u32,
    ) {
        (**self).set_freq(hz);
    }

    fn set_duty(
        &mut self,
        duty: f64,
        channel: usize,
    ) {
        (**self).set_duty(duty, channel);
    }
}

impl<T: SevenSegment + ?Sized> SevenSegment for &mut T {
    fn write_digit(
        &mut self,
        pattern: u8,
        slot: usize,
    ) {
        (**self).write_digit(pattern, slot);
    }

    fn set_decimal_points(
        &mut self,
        mask: u8,
    ) {
        (**self).set_decimal_points(mask);
    }
}

impl<T: TemperatureSensor + ?Sized> TemperatureSensor for &mut T {
    type Error = T::Error;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> { (**self).read_celsius() }
}
