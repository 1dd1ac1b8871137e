//! FIFO types and sample parsing
//!
//! The QMI8658 buffers sensor output in an onboard FIFO of up to 128 samples.
//! With both the accelerometer and gyroscope enabled each sample is a 12-byte
//! record: six little-endian `i16` words in the order ax, ay, az, gx, gy, gz.
//!
//! The queue is normally owned by the device for writing; the host requests
//! read access before draining and must hand the queue back afterwards. The
//! driver's [`fifo_drain`](crate::Qmi8658Driver::fifo_drain) does both ends of
//! that handshake itself.

use crate::device::{AccelData, GyroData};

/// Size of one FIFO sample record in bytes (accel + gyro, 6 x i16)
pub const FIFO_SAMPLE_BYTES: usize = 12;

/// Maximum number of samples a single drain call can return
pub const FIFO_MAX_BATCH: usize = 64;

/// FIFO operating mode (FIFO_CTRL bits 1:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled; sensor data is only available from the output registers
    Bypass = 0,
    /// Fill until full, then stop accepting samples
    Fifo = 1,
    /// Fill continuously, discarding the oldest samples when full
    Stream = 2,
}

impl FifoMode {
    /// The FIFO_CTRL `mode` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// FIFO depth in samples (FIFO_CTRL bits 3:2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoDepth {
    /// 16 samples
    Samples16 = 0,
    /// 32 samples
    Samples32 = 1,
    /// 64 samples
    Samples64 = 2,
    /// 128 samples
    Samples128 = 3,
}

impl FifoDepth {
    /// The FIFO_CTRL `depth` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Depth in samples
    #[must_use]
    pub const fn samples(self) -> u16 {
        16 << (self as u16)
    }
}

/// FIFO watermark level in samples (FIFO_WTM_TH)
///
/// When the queue holds at least this many samples the watermark status flag
/// is set, and the event can be routed to the INT1 pin with
/// [`fifo_configure_watermark`](crate::Qmi8658Driver::fifo_configure_watermark).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoWatermark(pub u8);

/// One decoded FIFO sample record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoSample {
    /// Raw accelerometer words
    pub accel: AccelData,
    /// Raw gyroscope words
    pub gyro: GyroData,
}

impl FifoSample {
    /// Parse a 12-byte FIFO record (little-endian, accel first)
    #[must_use]
    pub fn from_bytes(bytes: &[u8; FIFO_SAMPLE_BYTES]) -> Self {
        let word = |i: usize| i16::from_le_bytes([bytes[i], bytes[i + 1]]);
        Self {
            accel: AccelData {
                x: word(0),
                y: word(2),
                z: word(4),
            },
            gyro: GyroData {
                x: word(6),
                y: word(8),
                z: word(10),
            },
        }
    }
}
