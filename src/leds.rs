//! 8-level LED bar indicator.
//!
//! A level n in [0, 8] lights the first n outputs and clears the
//! rest. Stateless and idempotent; driven only by the console path,
//! so last-writer-wins is acceptable.

use crate::config::MAX_LEVEL;

/// Clamp a requested level into [0, MAX_LEVEL].
pub fn clamp_level(level: i32) -> u8 {
    level.clamp(0, MAX_LEVEL as i32) as u8
}

/// Bitmask of active outputs for a (clamped) level; bit i is LED i.
pub fn level_mask(level: u8) -> u8 {
    let level = level.min(MAX_LEVEL) as u16;
    ((1u16 << level) - 1) as u8
}

#[cfg(feature = "embedded")]
pub use bank::LedBank;

#[cfg(feature = "embedded")]
mod bank {
    use embassy_nrf::gpio::Output;

    use crate::config::LED_COUNT;

    use super::level_mask;

    /// The bank of 8 discrete outputs.
    pub struct LedBank<'d> {
        outputs: [Output<'d>; LED_COUNT],
    }

    impl<'d> LedBank<'d> {
        pub fn new(outputs: [Output<'d>; LED_COUNT]) -> Self {
            Self { outputs }
        }

        /// Drive the bank to `level`; out-of-range levels saturate at
        /// the top of the bar.
        pub fn set_level(&mut self, level: u8) {
            let mask = level_mask(level);
            for (i, led) in self.outputs.iter_mut().enumerate() {
                if mask & (1 << i) != 0 {
                    led.set_high();
                } else {
                    led.set_low();
                }
            }
        }
    }
}
