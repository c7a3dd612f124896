//! Crossterm-backed reference host.
//!
//! `ScreenHost` satisfies the widget's host contract on a real
//! terminal: it repaints the display text into the alternate screen,
//! resolves theme classes against the style rules installed in it, and
//! models the repeating blink timer as a deadline the event pump polls.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::QueueableCommand;
use tracing::debug;

use crate::host::TerminalHost;
use crate::settings::{SCREEN_FALLBACK_COLUMNS, SCREEN_FALLBACK_ROWS};
use crate::theme::{StyleRule, Theme};

#[derive(Debug, Clone, Copy)]
struct BlinkDeadline {
    interval: Duration,
    due: Instant,
}

/// Reference [`TerminalHost`] painting into a crossterm terminal.
pub struct ScreenHost<W: Write> {
    out: W,
    display: String,
    rules: BTreeMap<String, Theme>,
    active_class: Option<String>,
    colors_enabled: bool,
    blink: Option<BlinkDeadline>,
    focus_requested: bool,
    entered: bool,
}

impl ScreenHost<io::Stdout> {
    /// Host writing to stdout, the demo binary's configuration.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ScreenHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            display: String::new(),
            rules: BTreeMap::new(),
            active_class: None,
            colors_enabled: true,
            blink: None,
            focus_requested: false,
            entered: false,
        }
    }

    /// Disables theme colors; the display paints with the terminal's
    /// own palette.
    pub fn set_colors_enabled(&mut self, enabled: bool) {
        self.colors_enabled = enabled;
    }

    /// Switches the terminal into widget mode: raw input, alternate
    /// screen, mouse and focus reporting, hardware cursor hidden (the
    /// widget paints its own).
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(EnterAlternateScreen)?;
        self.out.queue(EnableMouseCapture)?;
        self.out.queue(EnableFocusChange)?;
        self.out.queue(Hide)?;
        self.out.flush()?;
        self.entered = true;
        Ok(())
    }

    /// Restores the terminal. Safe to call when not entered.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.out.queue(Show)?;
        self.out.queue(DisableFocusChange)?;
        self.out.queue(DisableMouseCapture)?;
        self.out.queue(LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    /// True once a blink tick is due; advances the deadline past `now`
    /// so each call reports one tick at most.
    pub fn poll_blink(&mut self, now: Instant) -> bool {
        let Some(mut blink) = self.blink else {
            return false;
        };
        if now < blink.due {
            return false;
        }
        // A zero period can never advance the deadline past `now`;
        // disarm instead of spinning in the catch-up loop.
        if blink.interval.is_zero() {
            self.blink = None;
            return true;
        }
        while blink.due <= now {
            blink.due += blink.interval;
        }
        self.blink = Some(blink);
        true
    }

    /// Time remaining until the next blink deadline, if one is armed.
    pub fn until_blink(&self, now: Instant) -> Option<Duration> {
        self.blink.map(|b| b.due.saturating_duration_since(now))
    }

    /// Takes the pending click-to-focus request, if any. The widget
    /// asks for focus through the host; the event pump converts the
    /// request into a focus event on its next turn.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Repaints the current display, e.g. after a terminal resize.
    pub fn refresh(&mut self) {
        self.repaint();
    }

    fn active_theme(&self) -> Option<Theme> {
        let class = self.active_class.as_deref()?;
        self.rules.get(class).copied()
    }

    fn repaint(&mut self) {
        if let Err(e) = self.try_repaint() {
            debug!("repaint failed: {e}");
        }
    }

    fn try_repaint(&mut self) -> io::Result<()> {
        let (cols, rows) =
            terminal::size().unwrap_or((SCREEN_FALLBACK_COLUMNS, SCREEN_FALLBACK_ROWS));

        match self.active_theme().filter(|_| self.colors_enabled) {
            Some(theme) => {
                self.out
                    .queue(SetBackgroundColor(theme.background.to_crossterm()))?;
                self.out
                    .queue(SetForegroundColor(theme.foreground.to_crossterm()))?;
            }
            None => {
                self.out.queue(ResetColor)?;
            }
        }
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(MoveTo(0, 0))?;

        // Tail of the display pinned to the viewport; long rows are
        // clipped rather than wrapped so they cannot push the tail out.
        let lines: Vec<&str> = self.display.split("\r\n").collect();
        let first = lines.len().saturating_sub(rows as usize);
        for (i, line) in lines[first..].iter().enumerate() {
            if i > 0 {
                self.out.queue(Print("\r\n"))?;
            }
            if line.chars().count() > cols as usize {
                let clipped: String = line.chars().take(cols as usize).collect();
                self.out.queue(Print(clipped))?;
            } else {
                self.out.queue(Print(line))?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> TerminalHost for ScreenHost<W> {
    fn set_display_text(&mut self, text: &str) {
        self.display = text.to_string();
        self.repaint();
    }

    fn scroll_to_bottom(&mut self) {
        // Repaint already pins the tail of the display to the viewport.
    }

    fn append_style_rule(&mut self, rule: &StyleRule) {
        self.rules.insert(rule.class.clone(), rule.theme);
    }

    fn set_theme_class(&mut self, class: &str) {
        self.active_class = Some(class.to_string());
        self.repaint();
    }

    fn start_blink_timer(&mut self, interval: Duration) {
        self.blink = Some(BlinkDeadline {
            interval,
            due: Instant::now() + interval,
        });
    }

    fn stop_blink_timer(&mut self) {
        self.blink = None;
    }

    fn focus_input(&mut self) {
        self.focus_requested = true;
    }
}

impl<W: Write> Drop for ScreenHost<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
