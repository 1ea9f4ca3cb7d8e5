//! Microsecond busy-wait primitive.
//!
//! The embassy time driver runs off RTC1 at 32.768 kHz, far too coarse
//! for the sub-40-µs windows of the sensor and RTC links. All
//! microsecond-sensitive code funnels through this one cycle-counted
//! delay so the timing model lives in a single place.

use crate::config::CPU_CLOCK_MHZ;

/// Busy-wait for at least `us` microseconds.
pub fn delay_us(us: u32) {
    cortex_m::asm::delay(us * CPU_CLOCK_MHZ);
}
