//! Magnetometer interface configuration
//!
//! The QMI8658 has no internal magnetometer; it can master an external one
//! over its auxiliary I2C bus and fold the samples into its data stream and
//! AttitudeEngine. These types select the attached device and its sample rate
//! (CTRL4).

/// Supported external magnetometer device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagDevice {
    /// AKM AK09918 3-axis magnetometer
    Akm09918 = 2,
}

impl MagDevice {
    /// The CTRL4 `mDEV` field value for this device
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Magnetometer output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOdr {
    /// 1000 Hz
    Hz1000 = 0,
    /// 500 Hz
    Hz500 = 1,
    /// 250 Hz
    Hz250 = 2,
    /// 125 Hz
    Hz125 = 3,
    /// 62.5 Hz
    Hz62_5 = 4,
    /// 31.25 Hz
    Hz31_25 = 5,
}

impl MagOdr {
    /// The CTRL4 `mODR` field value for this rate
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
