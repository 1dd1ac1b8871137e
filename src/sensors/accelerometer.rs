//! Accelerometer sensor types and configuration
//!
//! Provides types, enums, and conversion helpers for the QMI8658's 3-axis
//! accelerometer.

/// Acceleration due to gravity in m/s², used by the `si-units` conversions
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range (least sensitive, most range)
    G16 = 3,
}

impl AccelRange {
    /// Get the sensitivity in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn lsb_per_g(self) -> u16 {
        match self {
            Self::G2 => 1 << 14,  // 16384 LSB/g
            Self::G4 => 1 << 13,  // 8192 LSB/g
            Self::G8 => 1 << 12,  // 4096 LSB/g
            Self::G16 => 1 << 11, // 2048 LSB/g
        }
    }

    /// Get the maximum measurable value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// The CTRL2 `aFS` field value for this range
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a CTRL2 `aFS` field value
    ///
    /// Field values above ±16g are not defined by the device; those decode to
    /// the ±8g midpoint so a scrambled register read still yields usable data.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::G2,
            1 => Self::G4,
            2 => Self::G8,
            3 => Self::G16,
            _ => Self::G8,
        }
    }
}

/// Accelerometer output data rate
///
/// Rates of 500 Hz and above require the high-speed oscillator; the
/// `LowPower*` rates run the accelerometer from the low-power oscillator
/// (21% / 3% duty cycle) and are only valid with the gyroscope disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOdr {
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
    /// 128 Hz, low-power mode (accelerometer-only)
    LowPower128Hz = 12,
    /// 21 Hz, low-power mode (accelerometer-only)
    LowPower21Hz = 13,
    /// 11 Hz, low-power mode (accelerometer-only)
    LowPower11Hz = 14,
    /// 3 Hz, low-power mode (accelerometer-only)
    LowPower3Hz = 15,
}

impl AccelOdr {
    /// The CTRL2 `aODR` field value for this rate
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
            Self::LowPower128Hz => 128.0,
            Self::LowPower21Hz => 21.0,
            Self::LowPower11Hz => 11.0,
            Self::LowPower3Hz => 3.0,
        }
    }

    /// Whether this rate runs from the low-power oscillator
    #[must_use]
    pub const fn is_low_power(self) -> bool {
        matches!(
            self,
            Self::LowPower128Hz | Self::LowPower21Hz | Self::LowPower11Hz | Self::LowPower3Hz
        )
    }
}

/// Decoded accelerometer reading
///
/// Values are in milli-g by default, or m/s² when the crate is built with the
/// `si-units` feature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelReading {
    /// X-axis acceleration
    pub x: f32,
    /// Y-axis acceleration
    pub y: f32,
    /// Z-axis acceleration
    pub z: f32,
}

impl AccelReading {
    /// Create a reading in milli-g from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `lsb_per_g` - Sensitivity from [`AccelRange::lsb_per_g`]
    #[must_use]
    pub fn from_raw_mg(raw_x: i16, raw_y: i16, raw_z: i16, lsb_per_g: u16) -> Self {
        let scale = 1000.0 / f32::from(lsb_per_g);
        Self {
            x: f32::from(raw_x) * scale,
            y: f32::from(raw_y) * scale,
            z: f32::from(raw_z) * scale,
        }
    }

    /// Create a reading in m/s² from raw sensor values
    #[must_use]
    pub fn from_raw_ms2(raw_x: i16, raw_y: i16, raw_z: i16, lsb_per_g: u16) -> Self {
        let scale = STANDARD_GRAVITY / f32::from(lsb_per_g);
        Self {
            x: f32::from(raw_x) * scale,
            y: f32::from(raw_y) * scale,
            z: f32::from(raw_z) * scale,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
