//! Minimal alternate host embedding the line widget.
//!
//! Run with:
//!   cargo run --example embedded_host

use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use lineterm::host::TerminalHost;
use lineterm::input::{edit_for_key, KeyDisposition};
use lineterm::terminal::{Terminal, TerminalOptions};
use lineterm::theme::{StyleRule, ThemeRegistry};

/// Host that prints each repaint as a framed snapshot instead of
/// owning a screen.
struct PrintHost;

impl TerminalHost for PrintHost {
    fn set_display_text(&mut self, text: &str) {
        println!("---");
        for line in text.split("\r\n") {
            println!("| {line}");
        }
    }

    fn scroll_to_bottom(&mut self) {}

    fn append_style_rule(&mut self, rule: &StyleRule) {
        println!("style rule installed: {}", rule.class);
    }

    fn set_theme_class(&mut self, class: &str) {
        println!("theme class: {class}");
    }

    fn start_blink_timer(&mut self, _interval: Duration) {}

    fn stop_blink_timer(&mut self) {}

    fn focus_input(&mut self) {}
}

/// Feeds one line of scripted keystrokes through the widget's router,
/// exactly as an interactive pump would.
fn type_line(term: &mut Terminal<PrintHost>, text: &str) {
    for ch in text.chars() {
        let code = KeyCode::Char(ch);
        if term.handle_key(code, KeyModifiers::NONE) == KeyDisposition::Native {
            if let Some(action) = edit_for_key(code, KeyModifiers::NONE) {
                term.apply_edit(action);
            }
        }
    }
    term.handle_key(KeyCode::Enter, KeyModifiers::NONE);
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let mut registry = ThemeRegistry::new();
    registry
        .add("gruvbox_dark", "282828", "ebdbb2")
        .map_err(|err| format!("failed to register theme: {err}"))?;

    let options = TerminalOptions {
        history: true,
        ..TerminalOptions::default()
    };
    let mut term = Terminal::with_options(PrintHost, registry, options);
    term.set_theme("gruvbox_dark");
    term.write_line("embedded session");

    let read = term.prompt_line().map_err(|err| err.to_string())?;
    type_line(&mut term, "hello widget");
    match read.await {
        Some(line) => term.write_line(&format!("got: {line}")),
        None => return Err("line read dropped before resolving".to_string()),
    }

    Ok(())
}
