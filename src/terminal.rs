//! The terminal widget facade.
//!
//! [`Terminal`] owns all widget state and wires the pieces together:
//! scrollback writes, the single-outstanding line-read protocol,
//! history recall, cursor blink, and theme application. The embedding
//! host supplies controls and timers through [`TerminalHost`] and feeds
//! raw events back through the `handle_*` entry points.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::oneshot;
use tracing::{debug, trace};

use crate::cursor::CursorController;
use crate::error::{AlreadyPrompting, ValidationError};
use crate::history::HistoryBuffer;
use crate::host::{DisplayMouse, TerminalHost};
use crate::input::{self, route_key, EditAction, KeyDisposition, LineAction};
use crate::render::compose_display;
use crate::settings::{DEFAULT_BLINK_INTERVAL_MS, DEFAULT_PROMPT, DEFAULT_THEME, LINE_TERMINATOR};
use crate::theme::{theme_class, StyleRule, ThemeRegistry};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Construction options for [`Terminal`].
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Record submitted lines for Up/Down recall.
    pub history: bool,
    /// Prompt prefix shown before the input line.
    pub prompt: String,
    /// Cursor blink interval. Zero falls back to the default interval
    /// at mount; `set_cursor_rate` rejects zero outright.
    pub blink_interval: Duration,
    /// Theme applied at construction.
    pub theme: String,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            history: false,
            prompt: DEFAULT_PROMPT.to_string(),
            blink_interval: Duration::from_millis(DEFAULT_BLINK_INTERVAL_MS),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// LineRead
// ---------------------------------------------------------------------------

/// Resolution handle for one line read.
///
/// Resolves with the submitted text when Enter lands, or `None` if the
/// widget is dropped first. There is no timeout and no cancellation.
#[derive(Debug)]
pub struct LineRead {
    rx: oneshot::Receiver<String>,
}

impl LineRead {
    /// Non-blocking poll for hosts that pump events in a synchronous
    /// loop. `None` while the read is still pending, and also `None`
    /// if the widget was dropped without resolving it.
    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}

impl Future for LineRead {
    type Output = Option<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(Result::ok)
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// The line terminal widget.
///
/// One instance per mounted widget. All mutation happens synchronously
/// inside method calls; the embedding event loop is expected to
/// serialize them. Dropping the widget disarms the blink timer and
/// resolves any outstanding read to `None`.
pub struct Terminal<H: TerminalHost> {
    host: H,
    registry: ThemeRegistry,
    scrollback: String,
    prompt: String,
    blink_interval: Duration,
    prompting: bool,
    pending: Option<oneshot::Sender<String>>,
    input: String,
    caret: usize,
    theme: String,
    cursor: CursorController,
    history: HistoryBuffer,
    display_clicked: bool,
}

impl<H: TerminalHost> Terminal<H> {
    /// Mounts the widget on `host` with default options.
    pub fn new(host: H, registry: ThemeRegistry) -> Self {
        Self::with_options(host, registry, TerminalOptions::default())
    }

    /// Mounts the widget on `host`: replays every registered style rule
    /// into it, applies the starting theme class, and paints the empty
    /// display. A zero blink interval in the options falls back to the
    /// default so no degenerate timer can ever be requested.
    pub fn with_options(host: H, registry: ThemeRegistry, options: TerminalOptions) -> Self {
        let blink_interval = if options.blink_interval.is_zero() {
            debug!("zero blink interval in options, using the default");
            Duration::from_millis(DEFAULT_BLINK_INTERVAL_MS)
        } else {
            options.blink_interval
        };
        let mut term = Self {
            host,
            registry,
            scrollback: String::new(),
            prompt: options.prompt,
            blink_interval,
            prompting: false,
            pending: None,
            input: String::new(),
            caret: 0,
            theme: options.theme,
            cursor: CursorController::new(),
            history: HistoryBuffer::new(options.history),
            display_clicked: false,
        };
        for rule in term.registry.style_rules() {
            term.host.append_style_rule(&rule);
        }
        term.host.set_theme_class(&theme_class(&term.theme));
        term.render();
        term
    }

    // -- scrollback and line reads ------------------------------------------

    /// Appends one committed line (plus the line terminator) to the
    /// scrollback and repaints.
    pub fn write_line(&mut self, message: &str) {
        self.scrollback.push_str(message);
        self.scrollback.push_str(LINE_TERMINATOR);
        self.render();
    }

    /// Opens a line read and returns its resolution handle.
    ///
    /// At most one read may be outstanding; a second request is
    /// rejected with [`AlreadyPrompting`], never queued. Opening a
    /// read clears the input line and parks the history cursor past
    /// the newest entry.
    pub fn prompt_line(&mut self) -> Result<LineRead, AlreadyPrompting> {
        if self.prompting {
            return Err(AlreadyPrompting);
        }
        let (tx, rx) = oneshot::channel();
        self.pending = Some(tx);
        self.prompting = true;
        self.history.reset_cursor();
        self.input.clear();
        self.caret = 0;
        trace!("line read opened");
        self.recompute_cursor();
        self.render();
        Ok(LineRead { rx })
    }

    /// True exactly while a line read is outstanding.
    pub fn is_line_prompting(&self) -> bool {
        self.prompting
    }

    // -- appearance ---------------------------------------------------------

    /// Replaces the prompt prefix.
    pub fn set_line_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
        self.recompute_cursor();
        self.render();
    }

    /// Changes the blink interval. Takes effect immediately: a running
    /// timer is restarted at the new rate.
    pub fn set_cursor_rate(&mut self, interval: Duration) -> Result<(), ValidationError> {
        if interval.is_zero() {
            return Err(ValidationError::ZeroBlinkInterval);
        }
        self.blink_interval = interval;
        self.recompute_cursor();
        self.render();
        Ok(())
    }

    /// Registers a theme on the owned registry and installs its style
    /// rule into the host. The rule is also returned for embedders
    /// that manage styling themselves.
    pub fn add_theme(
        &mut self,
        name: &str,
        background: &str,
        foreground: &str,
    ) -> Result<StyleRule, ValidationError> {
        let rule = self.registry.add(name, background, foreground)?;
        self.host.append_style_rule(&rule);
        Ok(rule)
    }

    /// Applies a theme by swapping the container class. Unregistered
    /// names are applied as-is; the display then falls back to its
    /// unstyled appearance.
    pub fn set_theme(&mut self, name: &str) {
        if !self.registry.contains(name) {
            debug!(theme = name, "applying unregistered theme");
        }
        self.theme = name.to_string();
        self.host.set_theme_class(&theme_class(name));
    }

    /// Currently applied theme name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Current prompt prefix.
    pub fn line_prompt(&self) -> &str {
        &self.prompt
    }

    /// Current blink interval.
    pub fn cursor_rate(&self) -> Duration {
        self.blink_interval
    }

    /// Whether submitted lines are being recorded for recall.
    pub fn history_enabled(&self) -> bool {
        self.history.is_enabled()
    }

    /// Read-only view of the owned theme registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Turns history recall on or off at runtime. Turning it off
    /// discards recorded lines; setting the current value is a no-op.
    pub fn set_history_enabled(&mut self, enabled: bool) {
        self.history.set_enabled(enabled);
    }

    // -- host event entry points --------------------------------------------

    /// Routes one key-down event from the host's input control and
    /// reports whether the widget consumed it.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyDisposition {
        let action = route_key(code, modifiers, self.prompting);
        match action {
            LineAction::CaretLeft => {
                if self.caret > 0 {
                    self.caret -= 1;
                }
                self.after_handled_key();
            }
            LineAction::CaretRight => {
                if self.caret < input::char_count(&self.input) {
                    self.caret += 1;
                }
                self.after_handled_key();
            }
            LineAction::HistoryPrevious => {
                let recalled = self.history.recall_previous().map(str::to_string);
                if let Some(text) = recalled {
                    self.set_input_from_history(text);
                }
                self.after_handled_key();
            }
            LineAction::HistoryNext => {
                let recalled = self.history.recall_next().map(str::to_string);
                if let Some(text) = recalled {
                    self.set_input_from_history(text);
                }
                self.after_handled_key();
            }
            LineAction::Submit => self.submit_line(),
            LineAction::Native | LineAction::Suppressed => {}
        }
        action.disposition()
    }

    /// Applies one emulated native edit while a read is outstanding.
    /// Editing implies focus: the logical input becomes focused.
    pub fn apply_edit(&mut self, action: EditAction) {
        if !self.prompting {
            return;
        }
        match action {
            EditAction::Insert(c) => {
                input::insert_char_at_caret(&mut self.input, &mut self.caret, c);
            }
            EditAction::Backspace => {
                if self.caret > 0 {
                    input::delete_char_before_caret(&mut self.input, &mut self.caret);
                }
            }
            EditAction::DeleteForward => {
                if self.caret < input::char_count(&self.input) {
                    input::delete_char_at_caret(&mut self.input, self.caret);
                }
            }
            EditAction::MoveToStart => self.caret = 0,
            EditAction::MoveToEnd => self.caret = input::char_count(&self.input),
        }
        self.cursor.set_focused(true);
        self.after_handled_key();
    }

    /// Adopts the state of a host-owned editable control after it
    /// mutated natively. `caret` is a char offset and is clamped to
    /// the new text. Editing implies focus.
    pub fn sync_input(&mut self, text: &str, caret: usize) {
        if !self.prompting {
            return;
        }
        self.input = text.to_string();
        self.caret = caret.min(input::char_count(&self.input));
        self.cursor.set_focused(true);
        self.after_handled_key();
    }

    /// Reports a focus change on the logical input control.
    pub fn handle_focus(&mut self, focused: bool) {
        self.cursor.set_focused(focused);
        self.recompute_cursor();
        self.render();
    }

    /// Delivers one blink-timer tick back from the host.
    pub fn handle_blink_tick(&mut self) {
        if self.cursor.tick() {
            self.render();
        }
    }

    /// Feeds one pointer event from the display control. A click
    /// (down then up without selecting) asks the host to focus the
    /// input; dragging out a selection never steals focus.
    pub fn handle_display_mouse(&mut self, event: DisplayMouse) {
        match event {
            DisplayMouse::Down => self.display_clicked = true,
            DisplayMouse::Move { selection_active } => {
                if selection_active {
                    self.display_clicked = false;
                }
            }
            DisplayMouse::Up { selection_active } => {
                if self.display_clicked && !selection_active {
                    trace!("display click focuses input");
                    self.host.focus_input();
                }
                self.display_clicked = false;
            }
        }
    }

    // -- accessors ----------------------------------------------------------

    /// The bound host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the bound host, for host-specific pumping.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current input line text and caret (char offset).
    pub fn input_line(&self) -> (&str, usize) {
        (&self.input, self.caret)
    }

    // -- internals ----------------------------------------------------------

    fn set_input_from_history(&mut self, text: String) {
        self.caret = input::char_count(&text);
        self.input = text;
    }

    fn submit_line(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.caret = 0;
        self.history.push(&line);
        self.prompting = false;
        trace!("line read resolved");
        if let Some(tx) = self.pending.take() {
            // The reader may have been dropped; the line is discarded.
            let _ = tx.send(line);
        }
        self.recompute_cursor();
        self.render();
    }

    fn after_handled_key(&mut self) {
        self.recompute_cursor();
        self.render();
    }

    fn recompute_cursor(&mut self) {
        self.cursor
            .recompute(self.prompting, self.blink_interval, &mut self.host);
    }

    fn render(&mut self) {
        let text = compose_display(
            &self.scrollback,
            self.prompting,
            &self.prompt,
            &self.input,
            self.caret,
            self.cursor.phase(),
        );
        self.host.set_display_text(&text);
        self.host.scroll_to_bottom();
    }
}

impl<H: TerminalHost> Drop for Terminal<H> {
    fn drop(&mut self) {
        self.host.stop_blink_timer();
    }
}
