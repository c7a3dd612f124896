//! Cursor focus and blink state machine.

use std::time::Duration;

use tracing::trace;

use crate::host::TerminalHost;

/// Blink states the cursor moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Not prompting: no timer, no visible cursor.
    Idle,
    /// Prompting with keyboard focus: timer armed, phase toggling.
    FocusedBlinking,
    /// Prompting without focus: cursor hidden, no timer.
    UnfocusedSteady,
}

/// Owns logical input focus and the blink phase.
///
/// The controller never schedules anything itself; it asks the host to
/// arm or disarm the repeating timer and flips its phase when the tick
/// comes back.
#[derive(Debug)]
pub struct CursorController {
    focused: bool,
    phase: bool,
    state: CursorState,
}

impl CursorController {
    pub fn new() -> Self {
        Self {
            focused: false,
            phase: false,
            state: CursorState::Idle,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// True while the blink phase has the cursor cell painted.
    pub fn phase(&self) -> bool {
        self.phase
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Re-derives the blink state from `prompting` and the focus flag.
    ///
    /// Any armed timer is stopped before the new state arms its own;
    /// no transition path may leave two timers live. Entering the
    /// blinking state starts with the cursor painted; every other
    /// state forces it hidden.
    pub fn recompute<H: TerminalHost>(
        &mut self,
        prompting: bool,
        interval: Duration,
        host: &mut H,
    ) {
        let next = if !prompting {
            CursorState::Idle
        } else if self.focused {
            CursorState::FocusedBlinking
        } else {
            CursorState::UnfocusedSteady
        };

        host.stop_blink_timer();
        match next {
            CursorState::FocusedBlinking => {
                self.phase = true;
                host.start_blink_timer(interval);
            }
            CursorState::Idle | CursorState::UnfocusedSteady => {
                self.phase = false;
            }
        }

        if next != self.state {
            trace!(from = ?self.state, to = ?next, "cursor state change");
        }
        self.state = next;
    }

    /// Flips the blink phase on a timer tick. Returns whether the
    /// display needs recomposing; ticks arriving outside the blinking
    /// state are ignored.
    pub fn tick(&mut self) -> bool {
        if self.state != CursorState::FocusedBlinking {
            return false;
        }
        self.phase = !self.phase;
        true
    }
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new()
    }
}
