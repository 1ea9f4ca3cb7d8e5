//! DS1302 real-time-clock subsystem.
//!
//! Split in two layers:
//!
//! - [`frame`] - register addresses, BCD packing, and the time record
//!   itself. Pure, host-testable.
//! - [`ds1302`] - the bit-banged 3-wire transaction layer (RST/SCLK/DAT).
//!   Target only.
//!
//! The link has no error channel: a wiring or timing fault yields a
//! garbage time, which the chip cannot report and this layer does not
//! try to detect.

pub mod frame;

#[cfg(feature = "embedded")]
pub mod ds1302;
