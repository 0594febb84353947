//! I2C bus transport for Raspberry Pi class hardware, via rppal.

use crate::error::{HwError, Result};
use beeper_traits::BusTransport;
use rppal::i2c::I2c;

pub struct I2cBus {
    i2c: I2c,
}

impl I2cBus {
    /// Open the default I2C bus (`/dev/i2c-1` on most Pi models).
    pub fn new() -> Result<Self> {
        let i2c = I2c::new().map_err(|e| HwError::Bus(e.to_string()))?;
        Ok(I2cBus { i2c })
    }
}

impl BusTransport for I2cBus {
    fn send(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.i2c
            .set_slave_address(u16::from(address))
            .map_err(|e| HwError::Bus(e.to_string()))?;
        let wrote = self
            .i2c
            .write(bytes)
            .map_err(|e| HwError::Bus(e.to_string()))?;
        if wrote != bytes.len() {
            return Err(Box::new(HwError::ShortWrite {
                expected: bytes.len(),
                wrote,
            }));
        }
        tracing::debug!(address, len = bytes.len(), "i2c write");
        Ok(())
    }
}
