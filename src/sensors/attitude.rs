//! AttitudeEngine output types
//!
//! The AttitudeEngine is the QMI8658's on-chip motion coprocessor. At each of
//! its output intervals it publishes a delta orientation quaternion and a
//! delta velocity vector computed from the accelerometer and gyroscope
//! streams.

/// Fixed-point divisor for quaternion components (Q14)
const QUAT_LSB_DIV: f32 = (1 << 14) as f32;

/// Fixed-point divisor for velocity components (Q10)
const VELOCITY_LSB_DIV: f32 = (1 << 10) as f32;

/// AttitudeEngine output data rate
///
/// The AttitudeEngine integrates internally at the sensor rate and publishes
/// at this rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AeOdr {
    /// 1 Hz
    Hz1 = 0,
    /// 2 Hz
    Hz2 = 1,
    /// 4 Hz
    Hz4 = 2,
    /// 8 Hz
    Hz8 = 3,
    /// 16 Hz
    Hz16 = 4,
    /// 32 Hz
    Hz32 = 5,
    /// 64 Hz
    Hz64 = 6,
    /// 128 Hz
    Hz128 = 7,
}

impl AeOdr {
    /// The CTRL6 `sODR` field value for this rate
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Nominal output rate in Hz
    #[must_use]
    pub const fn rate_hz(self) -> u8 {
        1 << (self as u8)
    }
}

/// Delta orientation quaternion in Q14 fixed point, decoded to floats
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quaternion {
    /// Scalar component
    pub w: f32,
    /// X vector component
    pub x: f32,
    /// Y vector component
    pub y: f32,
    /// Z vector component
    pub z: f32,
}

impl Quaternion {
    /// Decode raw Q14 components in device order (w, x, y, z)
    #[must_use]
    pub fn from_raw(raw: [i16; 4]) -> Self {
        Self {
            w: f32::from(raw[0]) / QUAT_LSB_DIV,
            x: f32::from(raw[1]) / QUAT_LSB_DIV,
            y: f32::from(raw[2]) / QUAT_LSB_DIV,
            z: f32::from(raw[3]) / QUAT_LSB_DIV,
        }
    }

    /// Magnitude of the quaternion (1.0 for a pure rotation)
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Delta velocity vector in Q10 fixed point, decoded to floats
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Velocity {
    /// X-axis delta velocity
    pub x: f32,
    /// Y-axis delta velocity
    pub y: f32,
    /// Z-axis delta velocity
    pub z: f32,
}

impl Velocity {
    /// Decode raw Q10 components in device order (x, y, z)
    #[must_use]
    pub fn from_raw(raw: [i16; 3]) -> Self {
        Self {
            x: f32::from(raw[0]) / VELOCITY_LSB_DIV,
            y: f32::from(raw[1]) / VELOCITY_LSB_DIV,
            z: f32::from(raw[2]) / VELOCITY_LSB_DIV,
        }
    }
}
