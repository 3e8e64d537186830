//! ADT7420 external temperature sensor.
//!
//! The sensor runs in its power-on 13-bit mode: the temperature register pair
//! holds a left-justified two's complement value in 1/16 degree steps with the
//! three low bits used as flags.
//!
//! # References
//! - Datasheet: https://www.analog.com/media/en/technical-documentation/data-sheets/ADT7420.pdf

use core::fmt;

use embedded_hal::i2c::I2c;

use crate::config::{ADT7420_ADDR, ADT7420_TEMP_REG};
use crate::hal::TemperatureSensor;

/// Celsius degrees per LSB in 13-bit mode.
const LSB_PER_DEGREE: f32 = 16.0;

/// Offset that maps the 13-bit code of a negative reading to its value.
const NEGATIVE_OFFSET: i32 = 8192;

/// Convert the temperature register pair to degrees Celsius.
pub fn raw_to_celsius(
    msb: u8,
    lsb: u8,
) -> f32 {
    let word = u16::from_be_bytes([msb, lsb]);
    let code = i32::from(word >> 3);
    if word & 0x8000 != 0 {
        (code - NEGATIVE_OFFSET) as f32 / LSB_PER_DEGREE
    } else {
        code as f32 / LSB_PER_DEGREE
    }
}

/// Errors reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C transfer failed (NACK, arbitration loss, bus error).
    I2c(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "ADT7420 I2C transfer failed: {e:?}"),
        }
    }
}

/// ADT7420 on an I2C bus.
pub struct Adt7420<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Adt7420<I> {
    /// Driver for the board's sensor at [`ADT7420_ADDR`].
    pub fn new(i2c: I) -> Self { Self::with_address(i2c, ADT7420_ADDR) }

    /// Driver for a sensor strapped to another address (0x48-0x4B).
    pub fn with_address(
        i2c: I,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Bus address in use.
    pub const fn address(&self) -> u8 { self.address }

    /// Read the raw temperature register pair.
    pub fn read_raw(&mut self) -> Result<[u8; 2], Error<I::Error>> {
        let mut bytes = [0u8; 2];
        self.i2c
            .write_read(self.address, &[ADT7420_TEMP_REG], &mut bytes)
            .map_err(Error::I2c)?;
        Ok(bytes)
    }

    /// Give the bus back.
    pub fn release(self) -> I { self.i2c }
}

impl<I: I2c> TemperatureSensor for Adt7420<I> {
    type Error = Error<I::Error>;

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        let [msb, lsb] = self.read_raw()?;
        Ok(raw_to_celsius(msb, lsb))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    use super::*;

    /// Bus with one ADT7420 answering at `address`.
    struct FakeBus {
        address: u8,
        reg: [u8; 2],
        last_pointer: Option<u8>,
    }

    impl FakeBus {
        fn new(
            address: u8,
            reg: [u8; 2],
        ) -> Self {
            Self {
                address,
                reg,
                last_pointer: None,
            }
        }
    }

    impl ErrorType for FakeBus {
        type Error = ErrorKind;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if address != self.address {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.last_pointer = bytes.first().copied(),
                    Operation::Read(buf) => buf.copy_from_slice(&self.reg[..buf.len()]),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_raw_conversion() {
        assert_eq!(raw_to_celsius(0x00, 0x00), 0.0);
        assert_eq!(raw_to_celsius(0x0C, 0x80), 25.0);
        assert_eq!(raw_to_celsius(0x00, 0x08), 0.0625);
        assert_eq!(raw_to_celsius(0x4B, 0x00), 150.0);
    }

    #[test]
    fn test_raw_conversion_negative() {
        assert_eq!(raw_to_celsius(0xFF, 0x80), -1.0);
        assert_eq!(raw_to_celsius(0xE4, 0x80), -55.0);
    }

    #[test]
    fn test_flag_bits_ignored() {
        assert_eq!(raw_to_celsius(0x0C, 0x87), 25.0);
    }

    #[test]
    fn test_reads_temperature_register() {
        let mut sensor = Adt7420::new(FakeBus::new(0x4B, [0x0C, 0x80]));
        assert_eq!(sensor.address(), 0x4B);
        assert_eq!(sensor.read_celsius(), Ok(25.0));
        let bus = sensor.release();
        assert_eq!(bus.last_pointer, Some(0x00));
    }

    #[test]
    fn test_nack_is_reported() {
        let mut sensor = Adt7420::with_address(FakeBus::new(0x48, [0; 2]), 0x4B);
        let err = sensor.read_celsius().unwrap_err();
        assert_eq!(err, Error::I2c(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)));
    }
}
