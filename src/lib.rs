//! Test-only library interface for rotoclock.
//!
//! This crate root exposes the pure logic modules that can be tested
//! on the host (no embedded hardware required): protocol framing, bit
//! decoding, debounce/press classification, the UI state machine, and
//! the console text protocol.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature; the GPIO driver layers (`rtc::ds1302`,
//! `sensor::dht11`, `leds::LedBank`) only exist in that build.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod error;
pub mod leds;
pub mod rtc;
pub mod sensor;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod timing;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
