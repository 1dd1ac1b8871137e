//! Device configuration
//!
//! [`Qmi8658Config`] captures one complete operating point for the device.
//! [`Qmi8658Driver::init`](crate::Qmi8658Driver::init) applies the default
//! configuration; [`apply_config`](crate::Qmi8658Driver::apply_config)
//! switches to another at runtime.

use crate::sensors::{AccelOdr, AccelRange, AeOdr, GyroOdr, GyroRange, MagDevice, MagOdr};

/// Which sensors to run (CTRL7 enable flags)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSelection {
    /// Run the accelerometer
    pub accel: bool,
    /// Run the gyroscope
    pub gyro: bool,
    /// Run the external magnetometer
    pub mag: bool,
    /// Run the AttitudeEngine (forces accelerometer and gyroscope on)
    pub attitude_engine: bool,
}

impl SensorSelection {
    /// Accelerometer and gyroscope only
    pub const ACCEL_GYRO: Self = Self {
        accel: true,
        gyro: true,
        mag: false,
        attitude_engine: false,
    };

    /// Accelerometer only
    pub const ACCEL: Self = Self {
        accel: true,
        gyro: false,
        mag: false,
        attitude_engine: false,
    };

    /// All sensors off
    pub const NONE: Self = Self {
        accel: false,
        gyro: false,
        mag: false,
        attitude_engine: false,
    };

    /// AttitudeEngine (with its accelerometer and gyroscope inputs)
    pub const ATTITUDE_ENGINE: Self = Self {
        accel: true,
        gyro: true,
        mag: false,
        attitude_engine: true,
    };

    /// The selection with the AttitudeEngine's input sensors forced on
    ///
    /// The AttitudeEngine consumes the accelerometer and gyroscope streams,
    /// so selecting it implies both.
    #[must_use]
    pub const fn with_ae_inputs(self) -> Self {
        if self.attitude_engine {
            Self {
                accel: true,
                gyro: true,
                ..self
            }
        } else {
            self
        }
    }
}

/// Complete device operating point
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Qmi8658Config {
    /// Sensors to enable
    pub sensors: SensorSelection,
    /// Accelerometer full-scale range
    pub accel_range: AccelRange,
    /// Accelerometer output data rate
    pub accel_odr: AccelOdr,
    /// Gyroscope full-scale range
    pub gyro_range: GyroRange,
    /// Gyroscope output data rate
    pub gyro_odr: GyroOdr,
    /// Magnetometer output data rate
    pub mag_odr: MagOdr,
    /// External magnetometer device type
    pub mag_device: MagDevice,
    /// AttitudeEngine output data rate
    pub ae_odr: AeOdr,
}

impl Default for Qmi8658Config {
    /// Accelerometer ±2g and gyroscope ±512 dps, both at 125 Hz
    fn default() -> Self {
        Self {
            sensors: SensorSelection::ACCEL_GYRO,
            accel_range: AccelRange::G2,
            accel_odr: AccelOdr::Hz125,
            gyro_range: GyroRange::Dps512,
            gyro_odr: GyroOdr::Hz125,
            mag_odr: MagOdr::Hz125,
            mag_device: MagDevice::Akm09918,
            ae_odr: AeOdr::Hz128,
        }
    }
}
