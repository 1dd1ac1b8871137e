//! Bus interface implementation for the QMI8658
//!
//! This module provides an implementation of the `device-driver` register
//! interface for I2C communication with the QMI8658, including the bounded
//! write-retry policy used by the device firmware reference code.

use crate::{I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW};

use device_driver::RegisterInterface;

/// Number of attempts made for each single-register write before the last
/// bus error is reported to the caller. Reads are not retried.
pub const WRITE_ATTEMPTS: usize = 5;

/// Runtime selection of the device bus address.
///
/// The QMI8658 responds at one of two addresses depending on its SA0 pin.
/// [`Qmi8658Driver::init`](crate::Qmi8658Driver::init) probes both candidates
/// through this trait; implementors only need to re-point subsequent
/// transactions at the new address.
pub trait AddressSelect {
    /// Direct all following bus transactions at `address`.
    fn select_address(&mut self, address: u8);

    /// The currently selected 7-bit device address.
    fn address(&self) -> u8;
}

/// I2C interface for the QMI8658
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x6A, SA0 pin LOW)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::primary(i2c);
    /// let mut imu = Qmi8658Driver::new(interface);
    /// ```
    pub const fn primary(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x6B, SA0 pin HIGH)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    pub const fn secondary(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// For standard QMI8658 configurations, prefer [`primary()`](Self::primary)
    /// or [`secondary()`](Self::secondary).
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> AddressSelect for I2cInterface<I2C> {
    fn select_address(&mut self, address: u8) {
        self.address = address;
    }

    fn address(&self) -> u8 {
        self.address
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Multi-byte values are written as sequential single-byte transactions
        // at increasing register addresses, each with its own retry budget.
        for (offset, &value) in write_data.iter().enumerate() {
            let register = address.wrapping_add(offset as u8);
            let mut result = Ok(());
            for _ in 0..WRITE_ATTEMPTS {
                result = self.i2c.write(self.address, &[register, value]);
                if result.is_ok() {
                    break;
                }
            }
            result?;
        }
        Ok(())
    }
}
