//! Unit tests for wake-on-motion entry and exit

use crate::common::create_mock_driver;
use qmi8658::{Qmi8658Config, WomConfig, WomInterrupt, WomPinState, WomThreshold};

const CTRL2: u8 = 0x03;
const CTRL7: u8 = 0x08;
const CAL1_L: u8 = 0x0B;
const CAL1_H: u8 = 0x0C;

#[test]
fn test_enable_wake_on_motion_sequence() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.enable_wake_on_motion(&WomConfig::default()).unwrap();

    // Accelerometer dropped to ±2g at the 21 Hz low-power rate
    assert_eq!(interface.get_register(CTRL2), 13);
    assert_eq!(driver.accel_sensitivity(), 1 << 14);

    // Threshold and routing in the calibration registers
    assert_eq!(interface.get_register(CAL1_L), 32);
    assert_eq!(interface.get_register(CAL1_H), 0x00);

    // Sensors were disabled for reconfiguration, then the accelerometer
    // alone re-enabled
    let ctrl7_writes = interface.writes_to(CTRL7);
    assert_eq!(ctrl7_writes.first(), Some(&0b0000));
    assert_eq!(ctrl7_writes.last(), Some(&0b0001));
    assert_eq!(interface.get_register(CTRL7), 0b0001);
}

#[test]
fn test_wake_on_motion_full_routing() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .enable_wake_on_motion(&WomConfig {
            threshold: WomThreshold::High,
            interrupt: WomInterrupt::Int2,
            initial_state: WomPinState::High,
            blanking_samples: 4,
        })
        .unwrap();

    assert_eq!(interface.get_register(CAL1_L), 128);
    assert_eq!(interface.get_register(CAL1_H), 0x80 | 0x40 | 4);
}

#[test]
fn test_disable_wake_on_motion() {
    let (mut driver, interface) = create_mock_driver();

    driver.enable_wake_on_motion(&WomConfig::default()).unwrap();
    driver.disable_wake_on_motion().unwrap();

    assert_eq!(interface.get_register(CAL1_L), 0);
    assert_eq!(interface.get_register(CTRL7), 0b0000);
}

#[test]
fn test_resume_after_wake_on_motion() {
    let (mut driver, interface) = create_mock_driver();

    driver.enable_wake_on_motion(&WomConfig::default()).unwrap();
    driver.disable_wake_on_motion().unwrap();
    driver.apply_config(Qmi8658Config::default()).unwrap();

    // Back at the default operating point
    assert_eq!(interface.get_register(CTRL2), 6);
    assert_eq!(interface.get_register(CTRL7), 0b0011);
    assert_eq!(driver.gyro_sensitivity(), 64);
}
