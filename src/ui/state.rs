//! The page/edit-mode automaton.
//!
//! All transitions are pure; the two slow RTC transactions (snapshot
//! on entering edit mode, commit on leaving it) are returned as
//! [`UiAction`]s for the controller task to execute outside the state
//! mutation, so no hardware transaction ever runs "under the lock".

use crate::config::PAGE_SWITCH_COOLDOWN_MS;
use crate::rtc::frame::{wrap, ClockTime};
use crate::ui::{Direction, Field, Page, PressKind};

/// Hardware side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiAction {
    None,
    /// Read the RTC and feed the result to [`UiState::begin_edit`].
    LoadEdit,
    /// Write this time to the RTC; edit mode has already been left.
    Commit(ClockTime),
}

/// The shared UI state: authoritative time, edit buffer, page, mode
/// and field cursor. Owned by the controller task.
pub struct UiState {
    /// Last time read from (or written to) the chip.
    pub current: ClockTime,
    /// Working copy while in edit mode.
    pub edit: ClockTime,
    pub edit_mode: bool,
    pub field: Field,
    pub page: Page,
    last_page_switch_ms: Option<u64>,
}

impl UiState {
    pub fn new(current: ClockTime) -> Self {
        Self {
            current,
            edit: current,
            edit_mode: false,
            field: Field::Hour,
            page: Page::Clock,
            last_page_switch_ms: None,
        }
    }

    /// One rotation step: a page switch in run mode (subject to the
    /// page-switch cooldown), a field delta in edit mode.
    pub fn on_rotate(&mut self, direction: Direction, now_ms: u64) {
        if self.edit_mode {
            if self.page == Page::Clock {
                self.apply_delta(direction);
            }
            return;
        }

        if let Some(last) = self.last_page_switch_ms {
            if now_ms.saturating_sub(last) < PAGE_SWITCH_COOLDOWN_MS {
                return;
            }
        }
        self.page = match direction {
            Direction::Clockwise => self.page.next(),
            Direction::CounterClockwise => self.page.prev(),
        };
        self.last_page_switch_ms = Some(now_ms);
    }

    fn apply_delta(&mut self, direction: Direction) {
        let delta = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        };
        match self.field {
            Field::Second => self.edit.second = wrap(self.edit.second as i32 + delta, 59),
            Field::Minute => self.edit.minute = wrap(self.edit.minute as i32 + delta, 59),
            Field::Hour => self.edit.hour = wrap(self.edit.hour as i32 + delta, 23),
        }
    }

    /// One classified button press. Short presses cycle the field
    /// cursor while editing; long presses enter or commit edit mode
    /// on the clock page and do nothing elsewhere.
    pub fn on_press(&mut self, kind: PressKind) -> UiAction {
        match kind {
            PressKind::Short => {
                if self.edit_mode && self.page == Page::Clock {
                    self.field = self.field.advance();
                }
                UiAction::None
            }
            PressKind::Long => {
                if self.page != Page::Clock {
                    return UiAction::None;
                }
                if !self.edit_mode {
                    UiAction::LoadEdit
                } else {
                    self.edit_mode = false;
                    UiAction::Commit(self.edit)
                }
            }
        }
    }

    /// Enter edit mode with a fresh hardware snapshot.
    pub fn begin_edit(&mut self, current: ClockTime) {
        self.current = current;
        self.edit = current;
        self.edit_mode = true;
        self.field = Field::Hour;
    }

    /// Force run mode without committing (the `SET` command path).
    pub fn leave_edit(&mut self) {
        self.edit_mode = false;
    }

    /// True when the edit buffer is what the consumer should see.
    pub fn editing(&self) -> bool {
        self.edit_mode && self.page == Page::Clock
    }

    /// The time to report: the edit buffer while editing on the clock
    /// page, the authoritative time otherwise.
    pub fn displayed_time(&self) -> ClockTime {
        if self.editing() {
            self.edit
        } else {
            self.current
        }
    }
}
