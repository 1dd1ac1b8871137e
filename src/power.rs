//! Wake-on-motion configuration
//!
//! Wake-on-motion puts the device into a low-power accelerometer-only state
//! and raises an interrupt pin when acceleration on any axis exceeds a
//! threshold. The threshold and interrupt routing live in the CAL1 register
//! pair while the mode is active; leaving the mode requires a full sensor
//! reconfiguration.

/// Wake-on-motion threshold in mg (1 mg/LSB)
///
/// Any `u8` is a valid threshold; these are the two working points used by
/// the device reference firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WomThreshold {
    /// 32 mg, wakes on light handling
    Low = 32,
    /// 128 mg, wakes on a deliberate shake
    High = 128,
}

/// Interrupt pin used to signal a wake-on-motion event (CAL1_H bit 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WomInterrupt {
    /// Route the event to INT1
    Int1 = 0,
    /// Route the event to INT2
    Int2 = 1 << 6,
}

/// Initial (resting) level of the selected interrupt pin (CAL1_H bit 7)
///
/// The pin toggles away from this level when motion is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WomPinState {
    /// Pin rests low, pulses high on motion
    Low = 0,
    /// Pin rests high, pulses low on motion
    High = 1 << 7,
}

/// Wake-on-motion configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WomConfig {
    /// Motion threshold in mg
    pub threshold: WomThreshold,
    /// Interrupt pin selection
    pub interrupt: WomInterrupt,
    /// Resting level of the interrupt pin
    pub initial_state: WomPinState,
    /// Interrupt blanking time in number of accelerometer samples (0-63);
    /// motion during the first samples after entry is ignored
    pub blanking_samples: u8,
}

impl Default for WomConfig {
    fn default() -> Self {
        Self {
            threshold: WomThreshold::Low,
            interrupt: WomInterrupt::Int1,
            initial_state: WomPinState::Low,
            blanking_samples: 0,
        }
    }
}

impl WomConfig {
    const BLANKING_MASK: u8 = 0x3F;

    /// The CAL1_L register value (threshold in mg)
    #[must_use]
    pub const fn cal_low(&self) -> u8 {
        self.threshold as u8
    }

    /// The CAL1_H register value (interrupt select, pin state, blanking time)
    #[must_use]
    pub const fn cal_high(&self) -> u8 {
        self.interrupt as u8 | self.initial_state as u8 | (self.blanking_samples & Self::BLANKING_MASK)
    }
}
