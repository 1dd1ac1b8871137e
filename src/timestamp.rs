//! Sample timestamp widening
//!
//! The device exposes a free-running 24-bit sample counter. This module
//! widens successive reads into a monotonic `u32` by detecting wraparound,
//! matching the unwrap arithmetic of the device reference firmware.

/// Modulus of the hardware timestamp counter
pub const TIMESTAMP_MODULUS: u32 = 1 << 24;

/// Wraparound-aware widening of the 24-bit hardware timestamp
///
/// Feed every raw counter read through [`update`](Self::update) in order.
/// Detection assumes the counter advances by less than a full period between
/// reads, so the caller must poll at least once per counter wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimestampTracker {
    last: u32,
}

impl TimestampTracker {
    /// Create a tracker with no history (first update is returned as-is)
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Fold the next raw 24-bit counter value into the widened timestamp
    ///
    /// Returns the widened value, which is also retained as the new
    /// reference point.
    pub fn update(&mut self, raw: u32) -> u32 {
        if raw > self.last {
            self.last = raw;
        } else {
            self.last = raw + TIMESTAMP_MODULUS - self.last;
        }
        self.last
    }

    /// The most recent widened timestamp
    #[must_use]
    pub const fn last(&self) -> u32 {
        self.last
    }

    /// Forget the history; the next update is returned as-is
    pub fn reset(&mut self) {
        self.last = 0;
    }
}
