#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod device;
pub mod fifo;
pub mod interface;
pub mod power;
pub mod registers;
pub mod sensors;
pub mod timestamp;

// Re-export main types
pub use config::{Qmi8658Config, SensorSelection};
pub use device::{AccelData, GyroData, Qmi8658Driver};
pub use fifo::{FIFO_MAX_BATCH, FifoDepth, FifoMode, FifoSample, FifoWatermark};
pub use interface::{AddressSelect, I2cInterface};
pub use power::{WomConfig, WomInterrupt, WomPinState, WomThreshold};
pub use sensors::{
    AccelOdr, AccelRange, AccelReading, AeOdr, GyroOdr, GyroRange, GyroReading, MagDevice, MagOdr,
    Quaternion, Velocity,
};
pub use timestamp::TimestampTracker;

/// QMI8658 I2C address when the SA0 pin is low (default: 0x6A)
///
/// First candidate probed by [`Qmi8658Driver::init`]. Use
/// [`I2cInterface::primary()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x6A;

/// QMI8658 I2C address when the SA0 pin is high (alternative: 0x6B)
///
/// Second candidate probed by [`Qmi8658Driver::init`]. Use
/// [`I2cInterface::secondary()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x6B;

/// Expected value of the `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x05;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the last value read)
    InvalidDevice(u8),
    /// Invalid configuration parameter
    InvalidConfig,
    /// FIFO drain request exceeds the output vector capacity (max 64 samples)
    FifoOverflow,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
