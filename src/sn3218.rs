//! SN3218 LED controller driver.
//!
//! Register protocol for the 18-channel PWM controller behind the PiGlow.
//! All writes are batched multi-byte block writes against a fixed bus
//! address, and a frame only becomes visible once the update register is
//! latched.

use embedded_hal::i2c::I2c;

use crate::topology::LED_COUNT;
use crate::{Frame, PanelDriver};

/// Fixed bus address of the SN3218.
pub const I2C_ADDR: u8 = 0x54;

const CMD_ENABLE_OUTPUT: u8 = 0x00;
const CMD_SET_PWM_VALUES: u8 = 0x01;
const CMD_ENABLE_LEDS: u8 = 0x13;
const CMD_UPDATE: u8 = 0x16;

/// SN3218 driver over any blocking I2C bus.
pub struct Sn3218<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Sn3218<I2C> {
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Power up the output stage and unmask all three LED banks.
    pub fn enable(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(I2C_ADDR, &[CMD_ENABLE_OUTPUT, 0x01])?;
        self.i2c.write(I2C_ADDR, &[CMD_ENABLE_LEDS, 0xFF, 0xFF, 0xFF])
    }
}

impl<I2C: I2c> PanelDriver for Sn3218<I2C> {
    type Error = I2C::Error;

    fn set_all(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let mut block = [0u8; LED_COUNT + 1];
        block[0] = CMD_SET_PWM_VALUES;
        block[1..].copy_from_slice(frame);
        self.i2c.write(I2C_ADDR, &block)?;
        self.i2c.write(I2C_ADDR, &[CMD_UPDATE, 0xFF])
    }
}
