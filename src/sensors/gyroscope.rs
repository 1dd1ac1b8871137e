//! Gyroscope sensor types and configuration
//!
//! Provides types, enums, and conversion helpers for the QMI8658's 3-axis
//! gyroscope.

/// Gyroscope full-scale range
///
/// Each step doubles the range and halves the resolution; the LSB/dps
/// divisors run from 1024 (±32 dps) down to 8 (±4096 dps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±32 dps range (most sensitive, least range)
    Dps32 = 0,
    /// ±64 dps range
    Dps64 = 1,
    /// ±128 dps range
    Dps128 = 2,
    /// ±256 dps range
    Dps256 = 3,
    /// ±512 dps range
    Dps512 = 4,
    /// ±1024 dps range
    Dps1024 = 5,
    /// ±2048 dps range
    Dps2048 = 6,
    /// ±4096 dps range (least sensitive, most range)
    Dps4096 = 7,
}

impl GyroRange {
    /// Get the sensitivity in LSB/dps
    #[must_use]
    pub const fn lsb_per_dps(self) -> u16 {
        1024 >> (self as u16)
    }

    /// Get the maximum measurable value in dps
    #[must_use]
    pub const fn max_value(self) -> u16 {
        32 << (self as u16)
    }

    /// The CTRL3 `gFS` field value for this range
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a CTRL3 `gFS` field value
    ///
    /// The field is three bits wide so all values are defined; out-of-range
    /// inputs (from a corrupted read) decode to the ±512 dps midpoint.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Dps32,
            1 => Self::Dps64,
            2 => Self::Dps128,
            3 => Self::Dps256,
            4 => Self::Dps512,
            5 => Self::Dps1024,
            6 => Self::Dps2048,
            7 => Self::Dps4096,
            _ => Self::Dps512,
        }
    }
}

/// Gyroscope output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    /// 8000 Hz
    Hz8000 = 0,
    /// 4000 Hz
    Hz4000 = 1,
    /// 2000 Hz
    Hz2000 = 2,
    /// 1000 Hz
    Hz1000 = 3,
    /// 500 Hz
    Hz500 = 4,
    /// 250 Hz
    Hz250 = 5,
    /// 125 Hz
    Hz125 = 6,
    /// 62.5 Hz
    Hz62_5 = 7,
    /// 31.25 Hz
    Hz31_25 = 8,
}

impl GyroOdr {
    /// The CTRL3 `gODR` field value for this rate
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Nominal output rate in Hz
    #[must_use]
    pub const fn rate_hz(self) -> f32 {
        match self {
            Self::Hz8000 => 8000.0,
            Self::Hz4000 => 4000.0,
            Self::Hz2000 => 2000.0,
            Self::Hz1000 => 1000.0,
            Self::Hz500 => 500.0,
            Self::Hz250 => 250.0,
            Self::Hz125 => 125.0,
            Self::Hz62_5 => 62.5,
            Self::Hz31_25 => 31.25,
        }
    }
}

/// Decoded gyroscope reading
///
/// Values are in degrees per second by default, or rad/s when the crate is
/// built with the `si-units` feature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroReading {
    /// X-axis angular rate
    pub x: f32,
    /// Y-axis angular rate
    pub y: f32,
    /// Z-axis angular rate
    pub z: f32,
}

impl GyroReading {
    /// Create a reading in degrees per second from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `lsb_per_dps` - Sensitivity from [`GyroRange::lsb_per_dps`]
    #[must_use]
    pub fn from_raw_dps(raw_x: i16, raw_y: i16, raw_z: i16, lsb_per_dps: u16) -> Self {
        let scale = 1.0 / f32::from(lsb_per_dps);
        Self {
            x: f32::from(raw_x) * scale,
            y: f32::from(raw_y) * scale,
            z: f32::from(raw_z) * scale,
        }
    }

    /// Create a reading in radians per second from raw sensor values
    #[must_use]
    pub fn from_raw_rads(raw_x: i16, raw_y: i16, raw_z: i16, lsb_per_dps: u16) -> Self {
        let scale = core::f32::consts::PI / 180.0 / f32::from(lsb_per_dps);
        Self {
            x: f32::from(raw_x) * scale,
            y: f32::from(raw_y) * scale,
            z: f32::from(raw_z) * scale,
        }
    }

    /// Get the magnitude of the angular rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
