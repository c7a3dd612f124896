//! Shared test fixtures for widget unit tests.
//!
//! [`MockHost`] records every host call so tests can assert on repaint
//! content, timer discipline, and focus requests. Cloning it yields a
//! probe backed by the same recording, which lets a test keep observing
//! after handing the host to the widget.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::host::TerminalHost;
use crate::theme::StyleRule;

/// One recorded host call. Display text lives in the mock state rather
/// than the log to keep call sequences readable in assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetDisplayText,
    ScrollToBottom,
    AppendStyleRule(String),
    SetThemeClass(String),
    StartBlinkTimer(Duration),
    StopBlinkTimer,
    FocusInput,
}

#[derive(Debug, Default)]
struct MockHostState {
    calls: Vec<HostCall>,
    display: String,
    theme_class: Option<String>,
    rules: Vec<StyleRule>,
    armed_interval: Option<Duration>,
    focus_requests: usize,
}

/// Recording implementation of [`TerminalHost`].
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Rc<RefCell<MockHostState>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every host call recorded so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.borrow().calls.clone()
    }

    /// The display text as of the latest repaint.
    pub fn display(&self) -> String {
        self.state.borrow().display.clone()
    }

    /// The currently applied theme class, if any.
    pub fn theme_class(&self) -> Option<String> {
        self.state.borrow().theme_class.clone()
    }

    /// Classes of the style rules installed so far, in order.
    pub fn rule_classes(&self) -> Vec<String> {
        self.state
            .borrow()
            .rules
            .iter()
            .map(|r| r.class.clone())
            .collect()
    }

    /// Interval of the armed blink timer, or `None` when disarmed.
    pub fn armed_interval(&self) -> Option<Duration> {
        self.state.borrow().armed_interval
    }

    /// How many times the widget requested input focus.
    pub fn focus_requests(&self) -> usize {
        self.state.borrow().focus_requests
    }

    /// Asserts every timer arm was preceded by a disarm, so at most
    /// one timer can ever have been live.
    pub fn assert_single_timer_discipline(&self) {
        let mut armed = false;
        for call in &self.state.borrow().calls {
            match call {
                HostCall::StartBlinkTimer(_) => {
                    assert!(!armed, "start_blink_timer while a timer was armed");
                    armed = true;
                }
                HostCall::StopBlinkTimer => armed = false,
                _ => {}
            }
        }
    }
}

impl TerminalHost for MockHost {
    fn set_display_text(&mut self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.display = text.to_string();
        state.calls.push(HostCall::SetDisplayText);
    }

    fn scroll_to_bottom(&mut self) {
        self.state.borrow_mut().calls.push(HostCall::ScrollToBottom);
    }

    fn append_style_rule(&mut self, rule: &StyleRule) {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::AppendStyleRule(rule.class.clone()));
        state.rules.push(rule.clone());
    }

    fn set_theme_class(&mut self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.theme_class = Some(class.to_string());
        state.calls.push(HostCall::SetThemeClass(class.to_string()));
    }

    fn start_blink_timer(&mut self, interval: Duration) {
        let mut state = self.state.borrow_mut();
        state.armed_interval = Some(interval);
        state.calls.push(HostCall::StartBlinkTimer(interval));
    }

    fn stop_blink_timer(&mut self) {
        let mut state = self.state.borrow_mut();
        state.armed_interval = None;
        state.calls.push(HostCall::StopBlinkTimer);
    }

    fn focus_input(&mut self) {
        let mut state = self.state.borrow_mut();
        state.focus_requests += 1;
        state.calls.push(HostCall::FocusInput);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_shares_the_recording() {
        let mut host = MockHost::new();
        let probe = host.clone();
        host.set_display_text("hello");
        host.scroll_to_bottom();
        assert_eq!(probe.display(), "hello");
        assert_eq!(
            probe.calls(),
            vec![HostCall::SetDisplayText, HostCall::ScrollToBottom]
        );
    }

    #[test]
    fn timer_discipline_catches_double_arm() {
        let mut host = MockHost::new();
        host.stop_blink_timer();
        host.start_blink_timer(Duration::from_millis(450));
        host.stop_blink_timer();
        host.start_blink_timer(Duration::from_millis(450));
        host.assert_single_timer_discipline();
        assert_eq!(host.armed_interval(), Some(Duration::from_millis(450)));
    }

    #[test]
    #[should_panic(expected = "start_blink_timer while a timer was armed")]
    fn timer_discipline_panics_on_duplicate_timer() {
        let mut host = MockHost::new();
        host.start_blink_timer(Duration::from_millis(450));
        host.start_blink_timer(Duration::from_millis(450));
        host.assert_single_timer_discipline();
    }
}
