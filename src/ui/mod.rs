//! User interface subsystem - rotary encoder, push button, pages.
//!
//! The UI is a small state machine over three pages with a per-page
//! edit sub-mode on the clock page. Hardware edges are debounced and
//! classified into [`InputEvent`]s by per-source tasks, queued on a
//! single-consumer channel, and drained by the controller task - no
//! state is touched from edge context.
//!
//! ## Components
//!
//! - [`input_logic`] - debouncing and press-duration classification
//! - [`state`] - the page/edit-mode automaton

pub mod input_logic;
pub mod state;

/// Display pages, cycled by rotation while not editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Time display; the only page with an edit sub-mode.
    Clock,
    /// Temperature and humidity.
    Weather,
    /// Discomfort index (rendered by the console consumer).
    Index,
}

impl Page {
    /// Wire index as reported on the status line.
    pub fn index(self) -> u8 {
        match self {
            Page::Clock => 0,
            Page::Weather => 1,
            Page::Index => 2,
        }
    }

    pub fn next(self) -> Page {
        match self {
            Page::Clock => Page::Weather,
            Page::Weather => Page::Index,
            Page::Index => Page::Clock,
        }
    }

    pub fn prev(self) -> Page {
        match self {
            Page::Clock => Page::Index,
            Page::Weather => Page::Clock,
            Page::Index => Page::Weather,
        }
    }
}

/// Which field of the edit buffer a rotation delta applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Second,
    Minute,
    Hour,
}

impl Field {
    /// Short-press cycling order: HOUR → MIN → SEC → HOUR.
    pub fn advance(self) -> Field {
        match self {
            Field::Hour => Field::Minute,
            Field::Minute => Field::Second,
            Field::Second => Field::Hour,
        }
    }

    /// Label as reported on the status line.
    pub fn label(self) -> &'static str {
        match self {
            Field::Hour => "HOUR",
            Field::Minute => "MIN",
            Field::Second => "SEC",
        }
    }
}

/// Rotation sense, read from the encoder's B line at the accepted
/// edge on A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Press classification by held duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

/// Debounced, classified input events (after per-source filtering).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    Rotate(Direction),
    Press(PressKind),
}
