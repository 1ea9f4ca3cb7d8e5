//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   DS1302 RST     → P0.03
//   DS1302 SCLK    → P0.04
//   DS1302 DAT     → P0.28
//   Encoder A      → P0.11
//   Encoder B      → P0.12
//   Encoder switch → P0.24
//   DHT11 data     → P0.30
//   LED bar 0..7   → P0.13, P0.14, P0.15, P0.16, P1.10, P1.11, P1.12, P1.13
//   Console UART   → TX P0.06, RX P0.08 (115200 8N1)

// Input

/// Per-source edge debounce window (ms). Edges closer than this to the
/// previous accepted edge on the same source are discarded.
pub const INPUT_DEBOUNCE_MS: u64 = 6;

/// Button hold time (ms) at or above which a release classifies as a
/// long press.
pub const LONG_PRESS_MS: u64 = 1000;

/// Cooldown (ms) between page switches, independent of the input
/// debounce window.
pub const PAGE_SWITCH_COOLDOWN_MS: u64 = 200;

// DS1302 RTC link

/// Settle time (µs) after raising RST before the first clock edge.
pub const DS1302_SETTLE_US: u32 = 4;

/// Half-period (µs) of the bit-banged SCLK. Conservative; the chip
/// tolerates down to 1 µs at 2 V.
pub const DS1302_CLOCK_HALF_US: u32 = 2;

// DHT11 sensor link

/// Start-signal low time (ms). The datasheet minimum is 18 ms.
pub const DHT_START_LOW_MS: u64 = 20;

/// Release time (µs) between the start signal and handing the line to
/// the sensor.
pub const DHT_RELEASE_US: u32 = 40;

/// Timeout (µs) for each leg of the sensor's low-high-low handshake.
pub const DHT_HANDSHAKE_TIMEOUT_US: u32 = 100;

/// Timeout (µs) waiting for the rising edge of a data bit.
pub const DHT_EDGE_TIMEOUT_US: u32 = 70;

/// Cap (µs) on measuring how long a data bit stays high.
pub const DHT_HIGH_CAP_US: u32 = 100;

/// A data pulse high for longer than this (µs) decodes as a 1 bit.
pub const DHT_ONE_THRESHOLD_US: u32 = 40;

/// Time-to-live (ms) of a cached sensor sample. Also the minimum
/// spacing between acquisition attempts when the sensor is failing.
pub const SENSOR_CACHE_TTL_MS: u64 = 2000;

// Indicator

/// Number of discrete outputs in the LED bar.
pub const LED_COUNT: usize = 8;

/// Highest indicator level (all outputs active).
pub const MAX_LEVEL: u8 = 8;

// Console

/// Capacity of one formatted status line.
pub const STATUS_LINE_CAP: usize = 160;

/// Capacity of one received command line.
pub const CMD_LINE_CAP: usize = 64;

// Startup

/// Time written to the RTC when the chip reports its oscillator was
/// halted (first power-up or backup supply lost). There is no wall
/// clock on the target; `SET` over the console is the provisioning path.
pub const POWER_ON_TIME: (u8, u8, u8) = (12, 0, 0);

/// CPU clock (MHz) used to convert microseconds into busy-wait cycles.
pub const CPU_CLOCK_MHZ: u32 = 64;
