//! Edge debouncing and press-duration classification.
//!
//! Both are pure over millisecond timestamps supplied by the caller,
//! so they are testable without a clock.

use crate::config::{INPUT_DEBOUNCE_MS, LONG_PRESS_MS};
use crate::ui::PressKind;

/// Per-source edge filter: rejects any edge within the debounce
/// window of the previous accepted edge on the same source.
pub struct Debouncer {
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            last_accepted_ms: None,
        }
    }

    /// Accept or reject an edge at `now_ms`. Accepting updates the
    /// window; rejected edges do not.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < INPUT_DEBOUNCE_MS {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Classifies a press/release cycle into a short or long press.
///
/// The press timestamp is consumed on release, so exactly one action
/// fires per cycle; a release with no recorded press is dropped.
pub struct PressTracker {
    pressed_at_ms: Option<u64>,
}

impl PressTracker {
    pub const fn new() -> Self {
        Self { pressed_at_ms: None }
    }

    /// Feed one debounced button edge. Returns the classified press
    /// on the release edge, `None` otherwise.
    pub fn on_edge(&mut self, pressed: bool, now_ms: u64) -> Option<PressKind> {
        if pressed {
            self.pressed_at_ms = Some(now_ms);
            return None;
        }
        let held = now_ms.saturating_sub(self.pressed_at_ms.take()?);
        if held >= LONG_PRESS_MS {
            Some(PressKind::Long)
        } else {
            Some(PressKind::Short)
        }
    }
}
