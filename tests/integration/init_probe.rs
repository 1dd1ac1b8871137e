//! Integration tests for device bring-up and address probing

use crate::common::mock_interface::MockInterface;
use crate::common::Operation;
use qmi8658::{Qmi8658Driver, I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW};

const CTRL1: u8 = 0x02;
const CTRL2: u8 = 0x03;
const CTRL3: u8 = 0x04;
const CTRL7: u8 = 0x08;

#[test]
fn test_init_finds_device_at_default_address() {
    let interface = MockInterface::new();
    let mut driver = Qmi8658Driver::new(interface);

    driver.init().unwrap();

    assert_eq!(driver.read_chip_id().unwrap(), 0x05);
    assert_eq!(driver.read_revision().unwrap(), 0x7C);
}

#[test]
fn test_init_probes_alternate_address() {
    let interface = MockInterface::new();
    let shared = interface.clone();
    shared.set_device_address(I2C_ADDRESS_SA0_HIGH);

    let mut driver = Qmi8658Driver::new(interface);
    driver.init().unwrap();

    // Both candidates were tried, in order
    let selections: Vec<u8> = shared
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::SelectAddress { address } => Some(*address),
            _ => None,
        })
        .collect();
    assert_eq!(selections, vec![I2C_ADDRESS_SA0_LOW, I2C_ADDRESS_SA0_HIGH]);

    assert_eq!(driver.read_chip_id().unwrap(), 0x05);
}

#[test]
fn test_init_rejects_wrong_identity() {
    let interface = MockInterface::new();
    let shared = interface.clone();
    shared.set_who_am_i(0xAA);

    let mut driver = Qmi8658Driver::new(interface);

    assert!(matches!(
        driver.init(),
        Err(qmi8658::Error::InvalidDevice(0xAA))
    ));
}

#[test]
fn test_init_applies_startup_and_default_configuration() {
    let interface = MockInterface::new();
    let shared = interface.clone();
    let mut driver = Qmi8658Driver::new(interface);

    driver.init().unwrap();

    // Serial-interface startup value: auto-increment + big-endian
    assert_eq!(shared.get_register(CTRL1) & 0x60, 0x60);

    // Default operating point: accel ±2g @ 125 Hz, gyro ±512 dps @ 125 Hz,
    // both sensors enabled
    assert_eq!(shared.get_register(CTRL2), 6);
    assert_eq!(shared.get_register(CTRL3), (4 << 4) | 6);
    assert_eq!(shared.get_register(CTRL7), 0b0011);
    assert_eq!(driver.accel_sensitivity(), 1 << 14);
    assert_eq!(driver.gyro_sensitivity(), 64);
}

#[test]
fn test_full_capture_workflow() {
    let interface = MockInterface::new();
    let shared = interface.clone();
    let mut driver = Qmi8658Driver::new(interface);
    driver.init().unwrap();

    // Stream into a 128-sample queue, then drain what accumulated
    driver
        .fifo_configure(qmi8658::FifoMode::Stream, qmi8658::FifoDepth::Samples128)
        .unwrap();

    shared.push_fifo_record([0, 0, 16384], [0, 0, 0]);
    shared.push_fifo_record([0, 0, 16384], [640, 0, 0]);
    shared.set_fifo_count(2);

    let available = driver.fifo_count().unwrap();
    assert_eq!(available, 2);

    let samples = driver.fifo_drain(available as usize).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].accel.z, 16384);
    assert_eq!(samples[1].gyro.x, 640);

    // Queue handed back to the device for writing
    assert!(!shared.fifo_read_mode());

    // Direct reads still work after the FIFO session
    shared.set_temperature_data(30 * 256);
    assert!((driver.read_temperature().unwrap() - 30.0).abs() < 0.01);
}
