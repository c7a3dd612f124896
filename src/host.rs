//! Host integration surface.
//!
//! The widget never touches a screen, style sheet, or timer directly.
//! Everything it needs from the embedding environment goes through
//! [`TerminalHost`]; the host in turn feeds events back through the
//! `Terminal::handle_*` entry points.

use std::time::Duration;

use crate::theme::StyleRule;

/// Capabilities an embedding environment supplies to the widget.
///
/// The host owns two logical controls: an editable single-line input
/// (real or emulated) whose key, focus, and text-change events it
/// forwards to the widget, and a read-only multi-line display the
/// widget repaints through [`set_display_text`]. All obligations are
/// infallible from the widget's perspective; a host that can fail
/// internally deals with that on its own side.
///
/// [`set_display_text`]: TerminalHost::set_display_text
pub trait TerminalHost {
    /// Replaces the display control's entire text.
    fn set_display_text(&mut self, text: &str);

    /// Scrolls the display to its bottom. Called after every repaint.
    fn scroll_to_bottom(&mut self);

    /// Appends a global style rule. Rules accumulate for the host's
    /// lifetime and are never removed.
    fn append_style_rule(&mut self, rule: &StyleRule);

    /// Swaps the active theme class on the widget container, which also
    /// carries the fixed [`CONTAINER_CLASS`] root class. The theme class
    /// may have no installed rule, in which case the display keeps its
    /// unstyled appearance.
    ///
    /// [`CONTAINER_CLASS`]: crate::settings::CONTAINER_CLASS
    fn set_theme_class(&mut self, class: &str);

    /// Arms the repeating blink timer. The widget always disarms
    /// before re-arming, so at most one timer is ever requested.
    fn start_blink_timer(&mut self, interval: Duration);

    /// Disarms the blink timer. Must be a no-op when none is armed.
    fn stop_blink_timer(&mut self);

    /// Moves keyboard focus to the input control. The host reports the
    /// resulting focus change back through `Terminal::handle_focus`.
    fn focus_input(&mut self);
}

/// Pointer events on the display control, as reported by the host.
///
/// Drives click-to-focus without stealing focus from a text selection:
/// `Down` marks a click candidate, any `Move` with an active selection
/// cancels it, and `Up` with no selection converts the candidate into a
/// [`TerminalHost::focus_input`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMouse {
    Down,
    Move { selection_active: bool },
    Up { selection_active: bool },
}
