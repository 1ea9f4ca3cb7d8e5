//! Line-oriented text protocol.
//!
//! One status record per read:
//! ```text
//! HH:MM:SS MODE=<RUN|EDIT> FIELD=<HOUR|MIN|SEC> PAGE=<0|1|2> TEMP=<int> HUM=<int>
//! ```
//! and two write commands:
//! ```text
//! LED <n>             set indicator level, n clamped to [0, 8]
//! SET <HH>:<MM>:<SS>  wrap-clamp fields, write to the RTC, force run mode
//! ```
//! Anything else is rejected with [`Error::InvalidCommand`] and has no
//! effect. Formatting and parsing are pure; the UART wiring lives in
//! `main.rs`.

use core::fmt::Write;

use heapless::String;

use crate::config::STATUS_LINE_CAP;
use crate::error::Error;
use crate::leds::clamp_level;
use crate::rtc::frame::ClockTime;
use crate::sensor::decode::SensorSample;
use crate::ui::{Field, Page};

/// A parsed write command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    SetLevel(u8),
    SetTime(ClockTime),
}

/// Everything one status line reports, snapshotted from the
/// controller state.
pub struct StatusSnapshot {
    pub time: ClockTime,
    pub editing: bool,
    pub field: Field,
    pub page: Page,
    pub sample: Option<SensorSample>,
}

/// Format one status line. TEMP/HUM are -1 until a sensor sample has
/// ever succeeded.
pub fn format_status(snap: &StatusSnapshot) -> String<STATUS_LINE_CAP> {
    let (temp, hum) = match snap.sample {
        Some(s) => (s.temperature as i16, s.humidity as i16),
        None => (-1, -1),
    };
    let mut line = String::new();
    // Cannot overflow: the longest possible record is well under the
    // line capacity.
    let _ = writeln!(
        line,
        "{:02}:{:02}:{:02} MODE={} FIELD={} PAGE={} TEMP={} HUM={}",
        snap.time.hour,
        snap.time.minute,
        snap.time.second,
        if snap.editing { "EDIT" } else { "RUN" },
        snap.field.label(),
        snap.page.index(),
        temp,
        hum,
    );
    line
}

/// Parse one command line. Either the command fully applies (after
/// clamping) or the line is rejected - there are no partial effects.
pub fn parse_command(line: &str) -> Result<Command, Error> {
    let line = line.trim();
    if let Some(arg) = line.strip_prefix("LED ") {
        let level: i32 = arg.trim().parse().map_err(|_| Error::InvalidCommand)?;
        return Ok(Command::SetLevel(clamp_level(level)));
    }
    if let Some(arg) = line.strip_prefix("SET ") {
        return parse_hms(arg.trim()).ok_or(Error::InvalidCommand);
    }
    Err(Error::InvalidCommand)
}

fn parse_hms(s: &str) -> Option<Command> {
    let mut parts = s.split(':');
    let hour: i32 = parts.next()?.parse().ok()?;
    let minute: i32 = parts.next()?.parse().ok()?;
    let second: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::SetTime(ClockTime::wrapped(hour, minute, second)))
}
