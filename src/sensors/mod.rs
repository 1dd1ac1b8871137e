//! Sensor types and configuration
//!
//! Types, enums, and conversion helpers for the QMI8658's accelerometer,
//! gyroscope, magnetometer interface, and AttitudeEngine.

pub mod accelerometer;
pub mod attitude;
pub mod gyroscope;
pub mod magnetometer;

pub use accelerometer::{AccelOdr, AccelRange, AccelReading};
pub use attitude::{AeOdr, Quaternion, Velocity};
pub use gyroscope::{GyroOdr, GyroRange, GyroReading};
pub use magnetometer::{MagDevice, MagOdr};
