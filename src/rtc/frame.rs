//! DS1302 register layout and BCD time packing.
//!
//! Command byte layout (datasheet table 3):
//! ```text
//! Bit 7: always 1
//! Bit 6: 0 = clock registers, 1 = RAM
//! Bit 5-1: register address
//! Bit 0: 1 = read, 0 = write
//! ```
//! Register payloads are BCD. Bit 7 of the seconds register is the
//! clock-halt flag; bit 7 of hours selects 12-hour mode (we always
//! write 0 for 24-hour operation).

/// Burst-read command: returns all eight clock registers in one
/// transaction, seconds first.
pub const CMD_CLOCK_BURST_READ: u8 = 0xBF;

/// Single-register write commands for the three fields we model.
pub const CMD_WRITE_SECONDS: u8 = 0x80;
pub const CMD_WRITE_MINUTES: u8 = 0x82;
pub const CMD_WRITE_HOURS: u8 = 0x84;

/// Write-protect register and its two payloads.
pub const CMD_WRITE_PROTECT: u8 = 0x8E;
pub const WP_SET: u8 = 0x80;
pub const WP_CLEAR: u8 = 0x00;

/// Registers returned by a burst read. We use the first three
/// (seconds, minutes, hours) and discard the calendar registers.
pub const BURST_READ_REGS: usize = 8;

/// Decode one BCD byte (each nibble one decimal digit).
pub fn bcd_decode(b: u8) -> u8 {
    (b & 0x0F) + (b >> 4) * 10
}

/// Encode a value 0-99 as BCD.
pub fn bcd_encode(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}

/// Wrap an edited field component back into `[0, max]`.
///
/// A single step below zero lands on `max`; a single step above `max`
/// lands on zero. Applied after every delta, so fields never drift
/// further out of range than one step.
pub fn wrap(value: i32, max: i32) -> u8 {
    if value < 0 {
        max as u8
    } else if value > max {
        0
    } else {
        value as u8
    }
}

/// A wall-clock time as kept on the chip: hours, minutes, seconds and
/// the oscillator-halted flag.
///
/// Two live instances exist at runtime: the authoritative `current`
/// time (refreshed from hardware) and the edit buffer (working copy
/// while in edit mode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Clock-halt flag as read from bit 7 of the seconds register.
    pub halted: bool,
}

impl ClockTime {
    /// A running (not halted) time. Fields must already be in range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            halted: false,
        }
    }

    /// Build a time from unchecked integers, wrap-clamping each field.
    ///
    /// This is the clamp rule shared by the edit deltas and the `SET`
    /// console command: `SET 24:61:99` becomes `00:00:00`.
    pub fn wrapped(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour: wrap(hour, 23),
            minute: wrap(minute, 59),
            second: wrap(second, 59),
            halted: false,
        }
    }

    /// Decode the first three registers of a burst read.
    pub fn decode_burst(seconds: u8, minutes: u8, hours: u8) -> Self {
        Self {
            halted: seconds & 0x80 != 0,
            second: bcd_decode(seconds & 0x7F),
            minute: bcd_decode(minutes),
            hour: bcd_decode(hours & 0x3F),
        }
    }

    /// Seconds register payload. Bit 7 written as 0 so the oscillator
    /// runs after every write.
    pub fn seconds_byte(&self) -> u8 {
        bcd_encode(self.second) & 0x7F
    }

    /// Minutes register payload.
    pub fn minutes_byte(&self) -> u8 {
        bcd_encode(self.minute)
    }

    /// Hours register payload (24-hour mode).
    pub fn hours_byte(&self) -> u8 {
        bcd_encode(self.hour) & 0x3F
    }
}
