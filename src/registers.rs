//! Register definitions for the QMI8658
//!
//! The QMI8658 has a flat 8-bit register address space (no bank switching).
//! Multi-byte sensor data windows are little-endian and read as raw bursts
//! through the interface; the individual byte registers are listed here so the
//! map stays bit-exact against the datasheet.

device_driver::create_device!(
    device_name: Qmi8658,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device identity register (0x00)
        /// Expected value: 0x05
        register WhoAmI {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// Device identity (should read 0x05)
            who_am_i: uint = 0..8,
        },

        /// REVISION_ID - Device revision register (0x01)
        register Revision {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            /// Revision code
            revision: uint = 0..8,
        },

        /// CTRL1 - Serial interface and sensor enable (0x02)
        register Ctrl1 {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            /// Disable the internal 2 MHz oscillator
            sensor_disable: bool = 0,
            reserved_low: uint = 1..2,
            /// Route the FIFO watermark interrupt to the INT1 pin
            fifo_watermark_int_en: bool = 2,
            reserved_mid: uint = 3..5,
            /// Serial reads return data most-significant byte first
            serial_big_endian: bool = 5,
            /// Auto-increment the register address during burst transfers
            serial_auto_increment: bool = 6,
            /// SPI 3-wire mode select
            spi_three_wire: bool = 7,
        },

        /// CTRL2 - Accelerometer configuration (0x03)
        register Ctrl2 {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            /// Accelerometer output data rate
            a_odr: uint = 0..4,
            /// Accelerometer full-scale range (0=±2g .. 3=±16g)
            a_fs: uint = 4..7,
            /// Accelerometer self-test enable
            a_self_test: bool = 7,
        },

        /// CTRL3 - Gyroscope configuration (0x04)
        register Ctrl3 {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            /// Gyroscope output data rate
            g_odr: uint = 0..4,
            /// Gyroscope full-scale range (0=±32dps .. 7=±4096dps)
            g_fs: uint = 4..7,
            /// Gyroscope self-test enable
            g_self_test: bool = 7,
        },

        /// CTRL4 - Magnetometer configuration (0x05)
        register Ctrl4 {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            /// Magnetometer output data rate
            m_odr: uint = 0..3,
            /// Attached magnetometer device type
            m_dev: uint = 3..7,
            reserved_top: uint = 7..8,
        },

        /// CTRL5 - Low-pass filter configuration (0x06)
        register Ctrl5 {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            /// Accelerometer low-pass filter enable
            a_lpf_en: bool = 0,
            /// Accelerometer low-pass filter bandwidth mode
            a_lpf_mode: uint = 1..3,
            reserved_a: uint = 3..4,
            /// Gyroscope low-pass filter enable
            g_lpf_en: bool = 4,
            /// Gyroscope low-pass filter bandwidth mode
            g_lpf_mode: uint = 5..7,
            reserved_g: uint = 7..8,
        },

        /// CTRL6 - AttitudeEngine configuration (0x07)
        register Ctrl6 {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            /// AttitudeEngine output data rate
            ae_odr: uint = 0..3,
            reserved_mid: uint = 3..7,
            /// Motion-on-demand mode
            motion_on_demand: bool = 7,
        },

        /// CTRL7 - Sensor enable flags (0x08)
        register Ctrl7 {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// Accelerometer enable
            accel_en: bool = 0,
            /// Gyroscope enable
            gyro_en: bool = 1,
            /// Magnetometer enable
            mag_en: bool = 2,
            /// AttitudeEngine enable
            attitude_engine_en: bool = 3,
            reserved_top: uint = 4..8,
        },

        /// CTRL9 - Host command register, write only (0x0A)
        register Ctrl9 {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            /// Command code
            cmd: uint = 0..8,
        },

        /// CAL1_L - Calibration register 1 low byte (0x0B)
        ///
        /// Holds the wake-on-motion threshold in mg (1 mg/LSB) when
        /// wake-on-motion is configured.
        register CalOneL {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;

            /// Calibration value low byte
            value: uint = 0..8,
        },

        /// CAL1_H - Calibration register 1 high byte (0x0C)
        ///
        /// Holds the wake-on-motion interrupt select, initial pin state and
        /// blanking time when wake-on-motion is configured.
        register CalOneH {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;

            /// Calibration value high byte
            value: uint = 0..8,
        },

        /// FIFO_WTM_TH - FIFO watermark threshold in samples (0x13)
        register FifoWtmTh {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            /// Watermark level in samples
            threshold: uint = 0..8,
        },

        /// FIFO_CTRL - FIFO mode, depth and access-mode control (0x14)
        register FifoCtrl {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;

            /// Operating mode (0=bypass, 1=FIFO, 2=stream)
            mode: uint = 0..2,
            /// Depth code (0=16 .. 3=128 samples)
            depth: uint = 2..4,
            reserved_mid: uint = 4..7,
            /// Host read-access mode; clear to return the queue to the device
            read_mode: bool = 7,
        },

        /// FIFO_SMPL_CNT - FIFO sample count low byte (0x15)
        register FifoSmplCnt {
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;

            /// Sample count bits 7:0
            count_low: uint = 0..8,
        },

        /// FIFO_STATUS - FIFO status flags and count high bits (0x16)
        register FifoStatus {
            const ADDRESS = 0x16;
            const SIZE_BITS = 8;

            /// Sample count bits 9:8
            count_high: uint = 0..2,
            reserved_low: uint = 2..4,
            /// Queue holds at least one sample
            not_empty: bool = 4,
            /// Queue has overflowed
            overflow: bool = 5,
            /// Watermark level reached
            watermark: bool = 6,
            /// Queue is full
            full: bool = 7,
        },

        /// FIFO_DATA - FIFO data port (0x17)
        ///
        /// Reading this address repeatedly returns successive queued bytes;
        /// the device advances its internal read pointer, not the address.
        register FifoData {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;

            /// Next queued byte
            data: uint = 0..8,
        },

        /// STATUS0 - Sensor data availability flags (0x2E)
        register StatusZero {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// New accelerometer data available
            accel_avail: bool = 0,
            /// New gyroscope data available
            gyro_avail: bool = 1,
            /// New magnetometer data available
            mag_avail: bool = 2,
            /// New AttitudeEngine data available
            ae_avail: bool = 3,
            reserved_top: uint = 4..8,
        },

        /// STATUS1 - Miscellaneous event flags (0x2F)
        register StatusOne {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;

            /// CTRL9 command has completed
            cmd_done: bool = 0,
            reserved_low: uint = 1..2,
            /// Wake-on-motion event detected
            wake_on_motion: bool = 2,
            reserved_top: uint = 3..8,
        },

        /// TIMESTAMP_LOW - Sample timestamp bits 7:0 (0x30)
        register TimestampL {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;

            /// Timestamp low byte
            value: uint = 0..8,
        },

        /// TIMESTAMP_MID - Sample timestamp bits 15:8 (0x31)
        register TimestampM {
            const ADDRESS = 0x31;
            const SIZE_BITS = 8;

            /// Timestamp middle byte
            value: uint = 0..8,
        },

        /// TIMESTAMP_HIGH - Sample timestamp bits 23:16 (0x32)
        register TimestampH {
            const ADDRESS = 0x32;
            const SIZE_BITS = 8;

            /// Timestamp high byte
            value: uint = 0..8,
        },

        /// TEMP_L - Temperature fractional byte (0x33)
        register TempL {
            const ADDRESS = 0x33;
            const SIZE_BITS = 8;

            /// Temperature low byte (1/256 °C per LSB)
            value: uint = 0..8,
        },

        /// TEMP_H - Temperature integer byte (0x34)
        register TempH {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;

            /// Temperature high byte (°C, two's complement)
            value: uint = 0..8,
        },

        /// AX_L..AZ_H - Accelerometer output, little-endian i16 per axis (0x35..0x3A)
        register AccelXL { const ADDRESS = 0x35; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Accelerometer X high byte
        register AccelXH { const ADDRESS = 0x36; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Accelerometer Y low byte
        register AccelYL { const ADDRESS = 0x37; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Accelerometer Y high byte
        register AccelYH { const ADDRESS = 0x38; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Accelerometer Z low byte
        register AccelZL { const ADDRESS = 0x39; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Accelerometer Z high byte
        register AccelZH { const ADDRESS = 0x3A; const SIZE_BITS = 8; value: uint = 0..8, },

        /// GX_L..GZ_H - Gyroscope output, little-endian i16 per axis (0x3B..0x40)
        register GyroXL { const ADDRESS = 0x3B; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Gyroscope X high byte
        register GyroXH { const ADDRESS = 0x3C; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Gyroscope Y low byte
        register GyroYL { const ADDRESS = 0x3D; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Gyroscope Y high byte
        register GyroYH { const ADDRESS = 0x3E; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Gyroscope Z low byte
        register GyroZL { const ADDRESS = 0x3F; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Gyroscope Z high byte
        register GyroZH { const ADDRESS = 0x40; const SIZE_BITS = 8; value: uint = 0..8, },

        /// dQW_L..dQZ_H - AttitudeEngine quaternion output (0x49..0x50)
        register QuatWL { const ADDRESS = 0x49; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion W high byte
        register QuatWH { const ADDRESS = 0x4A; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion X low byte
        register QuatXL { const ADDRESS = 0x4B; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion X high byte
        register QuatXH { const ADDRESS = 0x4C; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion Y low byte
        register QuatYL { const ADDRESS = 0x4D; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion Y high byte
        register QuatYH { const ADDRESS = 0x4E; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion Z low byte
        register QuatZL { const ADDRESS = 0x4F; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Quaternion Z high byte
        register QuatZH { const ADDRESS = 0x50; const SIZE_BITS = 8; value: uint = 0..8, },

        /// dVX_L..dVZ_H - AttitudeEngine velocity output (0x51..0x56)
        register VelXL { const ADDRESS = 0x51; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Velocity X high byte
        register VelXH { const ADDRESS = 0x52; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Velocity Y low byte
        register VelYL { const ADDRESS = 0x53; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Velocity Y high byte
        register VelYH { const ADDRESS = 0x54; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Velocity Z low byte
        register VelZL { const ADDRESS = 0x55; const SIZE_BITS = 8; value: uint = 0..8, },
        /// Velocity Z high byte
        register VelZH { const ADDRESS = 0x56; const SIZE_BITS = 8; value: uint = 0..8, },
    }
);
