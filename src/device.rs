//! High-level driver API for the QMI8658
//!
//! This module provides a user-friendly interface to the QMI8658 sensor,
//! handling identity probing, sensor configuration, data decoding, and the
//! FIFO access-mode handshake.

use crate::registers::Qmi8658 as RegisterDevice;
use crate::{Error, I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW, WHO_AM_I_VALUE};

use crate::config::{Qmi8658Config, SensorSelection};
use crate::fifo::{FifoDepth, FifoMode, FifoSample, FifoWatermark, FIFO_MAX_BATCH, FIFO_SAMPLE_BYTES};
use crate::interface::AddressSelect;
use crate::power::WomConfig;
use crate::sensors::{
    AccelOdr, AccelRange, AccelReading, AeOdr, GyroOdr, GyroRange, GyroReading, MagDevice, MagOdr,
    Quaternion, Velocity,
};
use crate::timestamp::TimestampTracker;

use device_driver::RegisterInterface;

/// Number of identity-read attempts per candidate bus address
const PROBE_ATTEMPTS: usize = 5;

/// CTRL9 command requesting host read access to the FIFO
const CTRL_CMD_REQ_FIFO: u8 = 0x05;

// Burst-read window start addresses. Multi-byte output is read in one bus
// transaction to prevent torn samples; the windows and their sizes are part
// of the register map in `registers.rs`.
const TIMESTAMP_L: u8 = 0x30;
const TEMP_L: u8 = 0x33;
const AX_L: u8 = 0x35;
const GX_L: u8 = 0x3B;
const QUAT_WL: u8 = 0x49;
const FIFO_DATA: u8 = 0x17;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis angular rate (raw)
    pub x: i16,
    /// Y-axis angular rate (raw)
    pub y: i16,
    /// Z-axis angular rate (raw)
    pub z: i16,
}

/// Main driver for the QMI8658
pub struct Qmi8658Driver<I> {
    device: RegisterDevice<I>,
    config: Qmi8658Config,
    // Scale-factor state, updated on every range change
    accel_lsb_div: u16,
    gyro_lsb_div: u16,
    timestamp: TimestampTracker,
}

impl<I> Qmi8658Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new QMI8658 driver instance
    ///
    /// This does not touch the bus. Call [`init`](Self::init) to probe for
    /// the device and apply the default configuration.
    pub fn new(interface: I) -> Self {
        let config = Qmi8658Config::default();
        Self {
            device: RegisterDevice::new(interface),
            config,
            accel_lsb_div: config.accel_range.lsb_per_g(),
            gyro_lsb_div: config.gyro_range.lsb_per_dps(),
            timestamp: TimestampTracker::new(),
        }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> Qmi8658Config {
        self.config
    }

    /// Current accelerometer sensitivity in LSB/g
    #[must_use]
    pub fn accel_sensitivity(&self) -> u16 {
        self.accel_lsb_div
    }

    /// Current gyroscope sensitivity in LSB/dps
    #[must_use]
    pub fn gyro_sensitivity(&self) -> u16 {
        self.gyro_lsb_div
    }

    /// Probe for the device and bring it up with the default configuration
    ///
    /// The QMI8658 responds at 0x6A or 0x6B depending on its SA0 pin. Both
    /// candidates are probed, each with a handful of identity-read attempts;
    /// a NACK at an unpopulated address counts as a mismatch, not a fatal
    /// error. Once found, the serial interface is set to auto-increment
    /// bursts and the default operating point (accelerometer ±2g, gyroscope
    /// ±512 dps, both 125 Hz) is applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the last identity value seen if
    /// no candidate address answers with the expected identity, or a bus
    /// error from the subsequent configuration writes.
    pub fn init(&mut self) -> Result<(), Error<I::Error>>
    where
        I: AddressSelect,
    {
        let mut last_seen = 0u8;
        let mut found = false;

        'probe: for address in [I2C_ADDRESS_SA0_LOW, I2C_ADDRESS_SA0_HIGH] {
            self.device.interface.select_address(address);
            for _ in 0..PROBE_ATTEMPTS {
                if let Ok(reg) = self.device.who_am_i().read() {
                    last_seen = reg.who_am_i();
                    if last_seen == WHO_AM_I_VALUE {
                        found = true;
                        break 'probe;
                    }
                }
            }
        }

        if !found {
            return Err(Error::InvalidDevice(last_seen));
        }

        #[cfg(feature = "defmt")]
        {
            let revision = self.read_revision()?;
            defmt::debug!(
                "QMI8658 found at address {=u8:#04x}, revision {=u8:#04x}",
                self.device.interface.address(),
                revision
            );
        }

        // Startup value 0x60: address auto-increment and big-endian serial
        // mode, sensors left running
        self.device.ctrl_1().write(|w| {
            w.set_serial_big_endian(true);
            w.set_serial_auto_increment(true);
        })?;

        self.apply_config(Qmi8658Config::default())?;
        self.timestamp.reset();

        #[cfg(feature = "defmt")]
        {
            let mut ctrl = [0u8; 7];
            self.device.interface.read_register(0x02, 56, &mut ctrl)?;
            defmt::debug!("CTRL1..CTRL7 readback: {=[u8]:#04x}", ctrl);
        }

        Ok(())
    }

    /// Read the device identity register
    ///
    /// Should return 0x05 for a valid QMI8658.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_chip_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Read the device revision register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_revision(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.revision().read()?;
        Ok(reg.revision())
    }

    /// Apply a complete operating point
    ///
    /// When the AttitudeEngine is selected its fixed accelerometer/gyroscope
    /// input configuration takes precedence over per-sensor rates; otherwise
    /// each selected sensor is configured individually. Finishes by writing
    /// the sensor-enable register.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn apply_config(&mut self, config: Qmi8658Config) -> Result<(), Error<I::Error>> {
        self.config = config;

        if config.sensors.attitude_engine {
            self.configure_attitude_engine(config.ae_odr)?;
        } else {
            if config.sensors.accel {
                self.configure_accelerometer(config.accel_range, config.accel_odr, true, false)?;
            }
            if config.sensors.gyro {
                self.configure_gyroscope(config.gyro_range, config.gyro_odr, true, false)?;
            }
            if config.sensors.mag {
                self.configure_magnetometer(config.mag_device, config.mag_odr)?;
            }
        }

        self.enable_sensors(config.sensors)
    }

    /// Configure the accelerometer range, rate, filtering, and self-test
    ///
    /// Updates the stored scale factor used by the decoding reads.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_accelerometer(
        &mut self,
        range: AccelRange,
        odr: AccelOdr,
        low_pass: bool,
        self_test: bool,
    ) -> Result<(), Error<I::Error>> {
        self.accel_lsb_div = range.lsb_per_g();
        self.config.accel_range = range;
        self.config.accel_odr = odr;

        self.device.ctrl_2().write(|w| {
            w.set_a_fs(range.bits());
            w.set_a_odr(odr.bits());
            w.set_a_self_test(self_test);
        })?;

        // The shared filter register is read back first, but the value
        // written is always zero: both low-pass filters stay off regardless
        // of `low_pass`. Confirm against the datasheet before wiring the
        // requested filter mode through.
        let _ = low_pass;
        self.device.ctrl_5().read()?;
        self.device.ctrl_5().write(|_| {})?;

        Ok(())
    }

    /// Configure the gyroscope range, rate, filtering, and self-test
    ///
    /// Updates the stored scale factor used by the decoding reads.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_gyroscope(
        &mut self,
        range: GyroRange,
        odr: GyroOdr,
        low_pass: bool,
        self_test: bool,
    ) -> Result<(), Error<I::Error>> {
        self.gyro_lsb_div = range.lsb_per_dps();
        self.config.gyro_range = range;
        self.config.gyro_odr = odr;

        self.device.ctrl_3().write(|w| {
            w.set_g_fs(range.bits());
            w.set_g_odr(odr.bits());
            w.set_g_self_test(self_test);
        })?;

        // Same filter-register handling as the accelerometer: read, then
        // write zero (gyroscope filter bits are the high nibble)
        let _ = low_pass;
        self.device.ctrl_5().read()?;
        self.device.ctrl_5().write(|_| {})?;

        Ok(())
    }

    /// Configure the external magnetometer device and rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_magnetometer(
        &mut self,
        device: MagDevice,
        odr: MagOdr,
    ) -> Result<(), Error<I::Error>> {
        self.config.mag_device = device;
        self.config.mag_odr = odr;

        self.device.ctrl_4().write(|w| {
            w.set_m_dev(device.bits());
            w.set_m_odr(odr.bits());
        })?;

        Ok(())
    }

    /// Configure the AttitudeEngine output rate
    ///
    /// Reapplies the stored accelerometer and gyroscope configuration (with
    /// filtering requested and self-test off) and the magnetometer
    /// configuration, since the AttitudeEngine consumes those streams.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_attitude_engine(&mut self, odr: AeOdr) -> Result<(), Error<I::Error>> {
        self.config.ae_odr = odr;

        self.configure_accelerometer(self.config.accel_range, self.config.accel_odr, true, false)?;
        self.configure_gyroscope(self.config.gyro_range, self.config.gyro_odr, true, false)?;
        self.configure_magnetometer(self.config.mag_device, self.config.mag_odr)?;

        self.device.ctrl_6().write(|w| {
            w.set_ae_odr(odr.bits());
        })?;

        Ok(())
    }

    /// Write the sensor-enable register
    ///
    /// Selecting the AttitudeEngine forces its accelerometer and gyroscope
    /// inputs on.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_sensors(&mut self, selection: SensorSelection) -> Result<(), Error<I::Error>> {
        let selection = selection.with_ae_inputs();
        self.config.sensors = selection;

        self.device.ctrl_7().write(|w| {
            w.set_accel_en(selection.accel);
            w.set_gyro_en(selection.gyro);
            w.set_mag_en(selection.mag);
            w.set_attitude_engine_en(selection.attitude_engine);
        })?;

        Ok(())
    }

    /// Enter wake-on-motion mode
    ///
    /// Disables all sensors, reconfigures the accelerometer for ±2g at the
    /// 21 Hz low-power rate, programs the threshold and interrupt routing
    /// into the calibration registers, and re-enables the accelerometer
    /// alone. Leave the mode with [`disable_wake_on_motion`](Self::disable_wake_on_motion)
    /// followed by [`apply_config`](Self::apply_config).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_wake_on_motion(&mut self, config: &WomConfig) -> Result<(), Error<I::Error>> {
        self.enable_sensors(SensorSelection::NONE)?;
        self.configure_accelerometer(AccelRange::G2, AccelOdr::LowPower21Hz, false, false)?;

        self.device.cal_one_l().write(|w| {
            w.set_value(config.cal_low());
        })?;
        self.device.cal_one_h().write(|w| {
            w.set_value(config.cal_high());
        })?;

        self.enable_sensors(SensorSelection::ACCEL)
    }

    /// Leave wake-on-motion mode
    ///
    /// Disables all sensors and clears the motion threshold. The previous
    /// operating point is not restored; call [`apply_config`](Self::apply_config)
    /// to resume normal sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_wake_on_motion(&mut self) -> Result<(), Error<I::Error>> {
        self.enable_sensors(SensorSelection::NONE)?;
        self.device.cal_one_l().write(|w| {
            w.set_value(0);
        })?;
        Ok(())
    }

    /// Read the data-availability status register (STATUS0) as a raw byte
    ///
    /// Bits 0-3 flag new accelerometer, gyroscope, magnetometer, and
    /// AttitudeEngine data respectively.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status_0(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.status_zero().read()?;

        // Reconstruct the raw register value from individual bits
        let mut value = 0u8;
        if reg.accel_avail() {
            value |= 0x01;
        }
        if reg.gyro_avail() {
            value |= 0x02;
        }
        if reg.mag_avail() {
            value |= 0x04;
        }
        if reg.ae_avail() {
            value |= 0x08;
        }

        Ok(value)
    }

    /// Read the event status register (STATUS1) as a raw byte
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status_1(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.status_one().read()?;

        let mut value = 0u8;
        if reg.cmd_done() {
            value |= 0x01;
        }
        if reg.wake_on_motion() {
            value |= 0x04;
        }

        Ok(value)
    }

    /// Read the temperature sensor in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I::Error>> {
        // Read both bytes atomically to prevent torn reads
        let mut buffer = [0u8; 2];
        self.device.interface.read_register(TEMP_L, 16, &mut buffer)?;

        let raw = i16::from_le_bytes([buffer[0], buffer[1]]);
        Ok(f32::from(raw) / 256.0)
    }

    /// Read raw accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        let mut buffer = [0u8; 6];
        self.device.interface.read_register(AX_L, 48, &mut buffer)?;
        Ok(decode_accel_words(&buffer))
    }

    /// Read and decode accelerometer data
    ///
    /// Values are in milli-g, or m/s² with the `si-units` feature.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self) -> Result<AccelReading, Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(self.decode_accel(raw))
    }

    /// Read raw gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        let mut buffer = [0u8; 6];
        self.device.interface.read_register(GX_L, 48, &mut buffer)?;
        Ok(decode_gyro_words(&buffer))
    }

    /// Read and decode gyroscope data
    ///
    /// Values are in degrees per second, or rad/s with the `si-units`
    /// feature.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self) -> Result<GyroReading, Error<I::Error>> {
        let raw = self.read_gyro_raw()?;
        Ok(self.decode_gyro(raw))
    }

    /// Read raw accelerometer and gyroscope data in one bus transaction
    ///
    /// The two output windows are adjacent, so a single 12-byte burst keeps
    /// the pair sample-coherent.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_gyro_raw(&mut self) -> Result<(AccelData, GyroData), Error<I::Error>> {
        let mut buffer = [0u8; 12];
        self.device.interface.read_register(AX_L, 96, &mut buffer)?;

        let accel = decode_accel_words(&buffer[0..6]);
        let gyro = decode_gyro_words(&buffer[6..12]);
        Ok((accel, gyro))
    }

    /// Read and decode a coherent accelerometer + gyroscope sample
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_gyro(&mut self) -> Result<(AccelReading, GyroReading), Error<I::Error>> {
        let (accel, gyro) = self.read_accel_gyro_raw()?;
        Ok((self.decode_accel(accel), self.decode_gyro(gyro)))
    }

    /// Read a coherent accelerometer + gyroscope sample with its timestamp
    ///
    /// The timestamp is the widened sample counter, read just before the
    /// data window.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_gyro_timestamped(
        &mut self,
    ) -> Result<(AccelReading, GyroReading, u32), Error<I::Error>> {
        let timestamp = self.read_timestamp()?;
        let (accel, gyro) = self.read_accel_gyro()?;
        Ok((accel, gyro, timestamp))
    }

    /// Read the AttitudeEngine delta quaternion and delta velocity
    ///
    /// The 14-byte output window holds the four quaternion words followed by
    /// the three velocity words.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_attitude_engine(&mut self) -> Result<(Quaternion, Velocity), Error<I::Error>> {
        let mut buffer = [0u8; 14];
        self.device
            .interface
            .read_register(QUAT_WL, 112, &mut buffer)?;

        let word = |i: usize| i16::from_le_bytes([buffer[i], buffer[i + 1]]);
        let quat = Quaternion::from_raw([word(0), word(2), word(4), word(6)]);
        let velocity = Velocity::from_raw([word(8), word(10), word(12)]);

        Ok((quat, velocity))
    }

    /// Read the sample counter and fold it into the widened timestamp
    ///
    /// The counter registers are only coherent while the host owns FIFO read
    /// access, so this read is bracketed by the access-mode handshake: read
    /// access is requested first and write access is always restored, even
    /// when the counter read itself fails.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_timestamp(&mut self) -> Result<u32, Error<I::Error>> {
        self.fifo_set_read_mode()?;
        let result = self.read_timestamp_counter();
        let restore = self.fifo_set_write_mode();

        let raw = result?;
        restore?;

        let widened = self.timestamp.update(raw);
        #[cfg(feature = "defmt")]
        defmt::trace!("timestamp {=u32}", widened);

        Ok(widened)
    }

    fn read_timestamp_counter(&mut self) -> Result<u32, Error<I::Error>> {
        let mut buffer = [0u8; 3];
        self.device
            .interface
            .read_register(TIMESTAMP_L, 24, &mut buffer)?;

        Ok(u32::from(buffer[0]) | u32::from(buffer[1]) << 8 | u32::from(buffer[2]) << 16)
    }

    /// Configure the FIFO operating mode and depth
    ///
    /// Writing the control register also returns queue ownership to the
    /// device (write access).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_configure(&mut self, mode: FifoMode, depth: FifoDepth) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().write(|w| {
            w.set_mode(mode.bits());
            w.set_depth(depth.bits());
        })?;
        Ok(())
    }

    /// Configure the FIFO with a watermark interrupt on INT1
    ///
    /// Sets mode and depth, programs the watermark threshold, and routes the
    /// watermark event to the INT1 pin. The interrupt enable is a
    /// read-modify-write so the serial-interface bits in the same control
    /// register survive.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_configure_watermark(
        &mut self,
        mode: FifoMode,
        depth: FifoDepth,
        watermark: FifoWatermark,
    ) -> Result<(), Error<I::Error>> {
        self.fifo_configure(mode, depth)?;

        self.device.fifo_wtm_th().write(|w| {
            w.set_threshold(watermark.0);
        })?;

        self.device.ctrl_1().modify(|w| {
            w.set_fifo_watermark_int_en(true);
        })?;

        Ok(())
    }

    /// Read the FIFO status register as a raw byte
    ///
    /// Bit 4 = not empty, bit 5 = overflow, bit 6 = watermark, bit 7 = full;
    /// bits 1:0 are the sample-count high bits.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_status(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;

        // Reconstruct the raw register value from individual bits
        let mut value = reg.count_high() & 0b11;
        if reg.not_empty() {
            value |= 0x10;
        }
        if reg.overflow() {
            value |= 0x20;
        }
        if reg.watermark() {
            value |= 0x40;
        }
        if reg.full() {
            value |= 0x80;
        }

        Ok(value)
    }

    /// Whether the FIFO holds no samples
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_is_empty(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(!reg.not_empty())
    }

    /// Whether the FIFO is full
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_is_full(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(reg.full())
    }

    /// Number of samples currently queued (0-1023)
    ///
    /// The 10-bit count spans two registers: the low byte in the sample-count
    /// register and the top two bits in the status register.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_count(&mut self) -> Result<u16, Error<I::Error>> {
        let low = self.device.fifo_smpl_cnt().read()?;
        let high = self.device.fifo_status().read()?;

        Ok(u16::from(high.count_high() & 0b11) << 8 | u16::from(low.count_low()))
    }

    /// Drain up to `samples` records from the FIFO
    ///
    /// Requests host read access, reads one 12-byte record per sample from
    /// the data port, and always hands the queue back to the device before
    /// returning: a failed record read still restores write access, and the
    /// read failure takes precedence in the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FifoOverflow`] if `samples` exceeds
    /// [`FIFO_MAX_BATCH`], or a bus error from the transfers.
    pub fn fifo_drain(
        &mut self,
        samples: usize,
    ) -> Result<heapless::Vec<FifoSample, FIFO_MAX_BATCH>, Error<I::Error>> {
        if samples > FIFO_MAX_BATCH {
            return Err(Error::FifoOverflow);
        }

        self.fifo_set_read_mode()?;
        let result = self.fifo_read_records(samples);
        let restore = self.fifo_set_write_mode();

        let records = result?;
        restore?;

        Ok(records)
    }

    fn fifo_read_records(
        &mut self,
        samples: usize,
    ) -> Result<heapless::Vec<FifoSample, FIFO_MAX_BATCH>, Error<I::Error>> {
        let mut records = heapless::Vec::new();

        for _ in 0..samples {
            // The data port returns successive queued bytes at one address
            let mut buffer = [0u8; FIFO_SAMPLE_BYTES];
            self.device
                .interface
                .read_register(FIFO_DATA, (FIFO_SAMPLE_BYTES * 8) as u32, &mut buffer)?;

            if records.push(FifoSample::from_bytes(&buffer)).is_err() {
                return Err(Error::FifoOverflow);
            }
        }

        Ok(records)
    }

    /// Request host read access to the FIFO
    ///
    /// Issues the CTRL9 FIFO-request command. Pair every call with
    /// [`fifo_set_write_mode`](Self::fifo_set_write_mode); prefer
    /// [`fifo_drain`](Self::fifo_drain), which does both ends itself.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_set_read_mode(&mut self) -> Result<(), Error<I::Error>> {
        self.device.ctrl_9().write(|w| {
            w.set_cmd(CTRL_CMD_REQ_FIFO);
        })?;
        Ok(())
    }

    /// Return FIFO ownership to the device (write access)
    ///
    /// Clears the read-access bit with a read-modify-write so the configured
    /// mode and depth survive.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_set_write_mode(&mut self) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().modify(|w| {
            w.set_read_mode(false);
        })?;
        Ok(())
    }

    fn decode_accel(&self, raw: AccelData) -> AccelReading {
        #[cfg(not(feature = "si-units"))]
        {
            AccelReading::from_raw_mg(raw.x, raw.y, raw.z, self.accel_lsb_div)
        }
        #[cfg(feature = "si-units")]
        {
            AccelReading::from_raw_ms2(raw.x, raw.y, raw.z, self.accel_lsb_div)
        }
    }

    fn decode_gyro(&self, raw: GyroData) -> GyroReading {
        #[cfg(not(feature = "si-units"))]
        {
            GyroReading::from_raw_dps(raw.x, raw.y, raw.z, self.gyro_lsb_div)
        }
        #[cfg(feature = "si-units")]
        {
            GyroReading::from_raw_rads(raw.x, raw.y, raw.z, self.gyro_lsb_div)
        }
    }
}

fn decode_accel_words(buffer: &[u8]) -> AccelData {
    AccelData {
        x: i16::from_le_bytes([buffer[0], buffer[1]]),
        y: i16::from_le_bytes([buffer[2], buffer[3]]),
        z: i16::from_le_bytes([buffer[4], buffer[5]]),
    }
}

fn decode_gyro_words(buffer: &[u8]) -> GyroData {
    GyroData {
        x: i16::from_le_bytes([buffer[0], buffer[1]]),
        y: i16::from_le_bytes([buffer[2], buffer[3]]),
        z: i16::from_le_bytes([buffer[4], buffer[5]]),
    }
}
