//! Recording host fixture for integration tests.
//!
//! Integration tests drive the widget through its public API only, so
//! this module supplies a host that keeps every obligation the widget
//! invokes in an ordered log for later assertions.

use std::time::Duration;

use lineterm::host::TerminalHost;
use lineterm::theme::StyleRule;

/// One recorded host obligation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Display(String),
    Scroll,
    Rule(String),
    ThemeClass(String),
    TimerStart(Duration),
    TimerStop,
    Focus,
}

/// Host that records every call instead of owning a screen.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest display text pushed by the widget.
    pub fn display(&self) -> &str {
        self.events
            .iter()
            .rev()
            .find_map(|event| match event {
                HostEvent::Display(text) => Some(text.as_str()),
                _ => None,
            })
            .unwrap_or("")
    }

    /// Classes of every installed style rule, in order.
    pub fn rule_classes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Rule(class) => Some(class.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Interval of the currently armed blink timer, if any.
    pub fn armed_timer(&self) -> Option<Duration> {
        let mut armed = None;
        for event in &self.events {
            match event {
                HostEvent::TimerStart(interval) => armed = Some(*interval),
                HostEvent::TimerStop => armed = None,
                _ => {}
            }
        }
        armed
    }

    /// Number of focus requests the widget has issued.
    pub fn focus_requests(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, HostEvent::Focus))
            .count()
    }
}

impl TerminalHost for RecordingHost {
    fn set_display_text(&mut self, text: &str) {
        self.events.push(HostEvent::Display(text.to_string()));
    }

    fn scroll_to_bottom(&mut self) {
        self.events.push(HostEvent::Scroll);
    }

    fn append_style_rule(&mut self, rule: &StyleRule) {
        self.events.push(HostEvent::Rule(rule.class.clone()));
    }

    fn set_theme_class(&mut self, class: &str) {
        self.events.push(HostEvent::ThemeClass(class.to_string()));
    }

    fn start_blink_timer(&mut self, interval: Duration) {
        self.events.push(HostEvent::TimerStart(interval));
    }

    fn stop_blink_timer(&mut self) {
        self.events.push(HostEvent::TimerStop);
    }

    fn focus_input(&mut self) {
        self.events.push(HostEvent::Focus);
    }
}
