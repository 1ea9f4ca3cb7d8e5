//! Unified error type for rotoclock.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! `defmt::Format` is derived behind the `defmt` feature so host-side
//! tests build without an on-target logger.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensor link
    /// A handshake or bit wait on the sensor line exceeded its
    /// timing window.
    Timeout,

    /// The 5-byte sensor payload failed its checksum.
    Checksum,

    // Console
    /// A write command did not match the `LED <n>` / `SET <HH>:<MM>:<SS>`
    /// grammar.
    InvalidCommand,
}
