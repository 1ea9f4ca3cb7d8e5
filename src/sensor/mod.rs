//! DHT11 environmental sensor subsystem.
//!
//! - [`decode`] - bit accumulation, pulse classification, and checksum
//!   validation of the 40-bit frame. Pure, host-testable.
//! - [`cache`] - TTL cache over the last good sample; absorbs sensor
//!   failures so callers never see them. Pure, host-testable.
//! - [`dht11`] - the single-wire timed pulse protocol. Target only;
//!   contains the system's only hard-real-time section.

pub mod cache;
pub mod decode;

#[cfg(feature = "embedded")]
pub mod dht11;
