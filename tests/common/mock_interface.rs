//! Mock interface implementation for testing the QMI8658 driver

use device_driver::RegisterInterface;
use qmi8658::{AddressSelect, I2C_ADDRESS_SA0_LOW, WHO_AM_I_VALUE};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// CTRL9 register address
const CTRL9: u8 = 0x0A;
/// FIFO control register address
const FIFO_CTRL: u8 = 0x14;
/// FIFO data port address
const FIFO_DATA: u8 = 0x17;
/// CTRL9 command requesting host FIFO read access
const CMD_REQ_FIFO: u8 = 0x05;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
    /// Bus address re-selection
    SelectAddress {
        /// New 7-bit device address
        address: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u8, u8>,

    /// Bus address the simulated device answers at
    device_address: u8,

    /// Bus address currently selected by the driver
    selected_address: u8,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// FIFO byte stream returned by reads of the data port
    fifo_stream: Vec<u8>,
    fifo_read_pos: usize,

    /// Fail the FIFO data-port read with this zero-based record index
    fail_fifo_record: Option<usize>,
    fifo_records_read: usize,

    /// Data-port reads issued without host read access
    fifo_reads_outside_read_mode: usize,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            device_address: I2C_ADDRESS_SA0_LOW,
            selected_address: I2C_ADDRESS_SA0_LOW,
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            fifo_stream: Vec::new(),
            fifo_read_pos: 0,
            fail_fifo_record: None,
            fifo_records_read: 0,
            fifo_reads_outside_read_mode: 0,
        };

        // Default identity (0x05) and a non-zero revision
        state.registers.insert(0x00, WHO_AM_I_VALUE);
        state.registers.insert(0x01, 0x7C);

        state
    }

    fn in_fifo_read_mode(&self) -> bool {
        self.registers.get(&FIFO_CTRL).copied().unwrap_or(0) & 0x80 != 0
    }

    /// Store a little-endian i16 triple starting at `base`
    fn set_axis_words(&mut self, base: u8, x: i16, y: i16, z: i16) {
        for (i, value) in [x, y, z].into_iter().enumerate() {
            let [low, high] = value.to_le_bytes();
            self.registers.insert(base + (i as u8) * 2, low);
            self.registers.insert(base + (i as u8) * 2 + 1, high);
        }
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with default register values
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    #[allow(dead_code)]
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    #[allow(dead_code)]
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set the identity register value
    #[allow(dead_code)]
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(0x00, value);
    }

    /// Move the simulated device to another bus address
    ///
    /// Transactions at any other address are NACKed.
    #[allow(dead_code)]
    pub fn set_device_address(&self, address: u8) {
        self.state.borrow_mut().device_address = address;
    }

    /// Set accelerometer output (little-endian words at 0x35)
    #[allow(dead_code)]
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_axis_words(0x35, x, y, z);
    }

    /// Set gyroscope output (little-endian words at 0x3B)
    #[allow(dead_code)]
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_axis_words(0x3B, x, y, z);
    }

    /// Set the raw temperature words (1/256 °C per LSB)
    #[allow(dead_code)]
    pub fn set_temperature_data(&self, raw: i16) {
        let [low, high] = raw.to_le_bytes();
        let mut state = self.state.borrow_mut();
        state.registers.insert(0x33, low);
        state.registers.insert(0x34, high);
    }

    /// Set the 24-bit sample counter registers
    #[allow(dead_code)]
    pub fn set_timestamp(&self, raw: u32) {
        let mut state = self.state.borrow_mut();
        state.registers.insert(0x30, (raw & 0xFF) as u8);
        state.registers.insert(0x31, ((raw >> 8) & 0xFF) as u8);
        state.registers.insert(0x32, ((raw >> 16) & 0xFF) as u8);
    }

    /// Set the AttitudeEngine output window (quaternion then velocity)
    #[allow(dead_code)]
    pub fn set_attitude_data(&self, quat: [i16; 4], velocity: [i16; 3]) {
        let mut state = self.state.borrow_mut();
        let mut address = 0x49u8;
        for value in quat.into_iter().chain(velocity) {
            let [low, high] = value.to_le_bytes();
            state.registers.insert(address, low);
            state.registers.insert(address + 1, high);
            address += 2;
        }
    }

    /// Set the FIFO sample count registers (low byte + status high bits)
    #[allow(dead_code)]
    pub fn set_fifo_count(&self, count: u16) {
        let mut state = self.state.borrow_mut();
        state.registers.insert(0x15, (count & 0xFF) as u8);
        let status = state.registers.get(&0x16).copied().unwrap_or(0);
        state
            .registers
            .insert(0x16, (status & !0b11) | ((count >> 8) & 0b11) as u8);
    }

    /// Set the FIFO status register (flags in the high nibble)
    #[allow(dead_code)]
    pub fn set_fifo_status(&self, value: u8) {
        self.set_register(0x16, value);
    }

    /// Queue one 12-byte FIFO record (accel then gyro words, little-endian)
    #[allow(dead_code)]
    pub fn push_fifo_record(&self, accel: [i16; 3], gyro: [i16; 3]) {
        let mut state = self.state.borrow_mut();
        for value in accel.into_iter().chain(gyro) {
            state.fifo_stream.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Fail the data-port read for the record with this zero-based index
    #[allow(dead_code)]
    pub fn fail_fifo_record(&self, index: usize) {
        self.state.borrow_mut().fail_fifo_record = Some(index);
    }

    /// Whether the simulated FIFO is in host read-access mode
    #[allow(dead_code)]
    pub fn fifo_read_mode(&self) -> bool {
        self.state.borrow().in_fifo_read_mode()
    }

    /// Number of data-port reads issued without host read access
    #[allow(dead_code)]
    pub fn fifo_reads_outside_read_mode(&self) -> usize {
        self.state.borrow().fifo_reads_outside_read_mode
    }

    /// Inject a read failure on the next read operation
    #[allow(dead_code)]
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    #[allow(dead_code)]
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    #[allow(dead_code)]
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    #[allow(dead_code)]
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// All values written to one register, in order
    #[allow(dead_code)]
    pub fn writes_to(&self, address: u8) -> Vec<u8> {
        self.state
            .borrow()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::WriteRegister { address: a, value } if *a == address => Some(*value),
                _ => None,
            })
            .collect()
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
    /// No device at the selected bus address
    Nack,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        if state.selected_address != state.device_address {
            return Err(MockError::Nack);
        }

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // The data port streams queued bytes instead of addressed registers
        if address == FIFO_DATA {
            if !state.in_fifo_read_mode() {
                state.fifo_reads_outside_read_mode += 1;
            }

            if state.fail_fifo_record == Some(state.fifo_records_read) {
                state.fail_fifo_record = None;
                return Err(MockError::Communication);
            }
            state.fifo_records_read += 1;

            for byte in read_data.iter_mut() {
                *byte = if state.fifo_read_pos < state.fifo_stream.len() {
                    let value = state.fifo_stream[state.fifo_read_pos];
                    state.fifo_read_pos += 1;
                    value
                } else {
                    0
                };
                state.operations.push(Operation::ReadRegister {
                    address,
                    value: *byte,
                });
            }
            return Ok(());
        }

        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);

            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        if state.selected_address != state.device_address {
            return Err(MockError::Nack);
        }

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);

            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });

            // The FIFO-request command hands read access to the host
            if reg_addr == CTRL9 && byte == CMD_REQ_FIFO {
                let ctrl = state.registers.get(&FIFO_CTRL).copied().unwrap_or(0);
                state.registers.insert(FIFO_CTRL, ctrl | 0x80);
                // Command completion flag in STATUS1
                state.registers.insert(0x2F, 0x01);
            }
        }

        Ok(())
    }
}

impl AddressSelect for MockInterface {
    fn select_address(&mut self, address: u8) {
        let mut state = self.state.borrow_mut();
        state.selected_address = address;
        state.operations.push(Operation::SelectAddress { address });
    }

    fn address(&self) -> u8 {
        self.state.borrow().selected_address
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
