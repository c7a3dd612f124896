//! End-to-end line sessions driven through the public API.
//!
//! Every test mounts the widget on the recording host fixture and
//! feeds it the same key, focus, and mouse signals a real event pump
//! would.

mod host_fixture;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use host_fixture::{HostEvent, RecordingHost};
use lineterm::host::DisplayMouse;
use lineterm::input::{edit_for_key, KeyDisposition};
use lineterm::settings::{CURSOR_BLOCK, DEFAULT_BLINK_INTERVAL_MS, DEFAULT_PROMPT};
use lineterm::terminal::{Terminal, TerminalOptions};
use lineterm::theme::ThemeRegistry;

fn mounted(history: bool) -> Terminal<RecordingHost> {
    let options = TerminalOptions {
        history,
        ..TerminalOptions::default()
    };
    Terminal::with_options(RecordingHost::new(), ThemeRegistry::new(), options)
}

fn type_keys(term: &mut Terminal<RecordingHost>, text: &str) {
    for ch in text.chars() {
        let code = KeyCode::Char(ch);
        if term.handle_key(code, KeyModifiers::NONE) == KeyDisposition::Native {
            if let Some(action) = edit_for_key(code, KeyModifiers::NONE) {
                term.apply_edit(action);
            }
        }
    }
}

fn submit(term: &mut Terminal<RecordingHost>, text: &str) -> Option<String> {
    let mut read = term.prompt_line().expect("read slot free");
    type_keys(term, text);
    term.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    read.try_recv()
}

#[tokio::test]
async fn submitted_line_resolves_the_awaited_read() {
    let mut term = mounted(false);
    let read = term.prompt_line().expect("first read");
    type_keys(&mut term, "hello");
    term.handle_key(KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(read.await, Some("hello".to_string()));
    assert!(!term.is_line_prompting());
}

#[tokio::test]
async fn dropping_the_widget_resolves_the_read_with_none() {
    let mut term = mounted(false);
    let read = term.prompt_line().expect("first read");
    drop(term);

    assert_eq!(read.await, None);
}

#[test]
fn second_read_is_rejected_while_one_is_outstanding() {
    let mut term = mounted(false);
    let _read = term.prompt_line().expect("first read");

    assert!(term.prompt_line().is_err());
    assert!(term.is_line_prompting());
}

#[test]
fn echo_session_accumulates_scrollback() {
    let mut term = mounted(false);
    let line = submit(&mut term, "one").expect("resolved");
    term.write_line(&format!("{DEFAULT_PROMPT}{line}"));

    assert!(term.host().display().ends_with("> one\r\n"));
}

#[test]
fn history_recall_walks_newest_first_and_down_steps_back() {
    let mut term = mounted(true);
    for text in ["a", "b", "c"] {
        assert_eq!(submit(&mut term, text).as_deref(), Some(text));
    }

    let _read = term.prompt_line().expect("read");
    term.handle_key(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(term.input_line().0, "c");
    term.handle_key(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(term.input_line().0, "b");
    term.handle_key(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(term.input_line().0, "a");
    term.handle_key(KeyCode::Down, KeyModifiers::NONE);
    assert_eq!(term.input_line().0, "b");
}

#[test]
fn disabled_history_leaves_arrows_inert() {
    let mut term = mounted(false);
    let _ = submit(&mut term, "remembered?");

    let _read = term.prompt_line().expect("read");
    term.handle_key(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(term.input_line().0, "");
}

#[test]
fn theme_validation_gates_registration_but_not_application() {
    let mut term = mounted(false);
    assert!(term.add_theme("Bad Name!", "ffffff", "000000").is_err());
    assert!(term.add_theme("ok_1", "zz0000", "000000").is_err());
    assert!(term.add_theme("ok_1", "a1b2c3", "000000").is_ok());

    term.set_theme("ok_1");
    assert_eq!(term.theme(), "ok_1");
    assert_eq!(
        term.host().rule_classes(),
        vec!["t_theme_default", "t_theme_ok_1"]
    );
}

#[test]
fn focused_prompt_shows_the_block_glyph() {
    let mut term = mounted(false);
    let _read = term.prompt_line().expect("read");
    term.handle_focus(true);

    assert!(term.host().display().ends_with(CURSOR_BLOCK));
    assert_eq!(
        term.host().armed_timer(),
        Some(Duration::from_millis(DEFAULT_BLINK_INTERVAL_MS))
    );
}

#[test]
fn blink_timer_never_stacks_across_a_session() {
    let mut term = mounted(false);
    let mut read = term.prompt_line().expect("read");
    term.handle_focus(true);
    term.handle_blink_tick();
    term.handle_focus(false);
    term.handle_focus(true);
    type_keys(&mut term, "x");
    term.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    let _ = read.try_recv();

    let mut armed = false;
    for event in &term.host().events {
        match event {
            HostEvent::TimerStart(_) => {
                assert!(!armed, "timer started while one was armed");
                armed = true;
            }
            HostEvent::TimerStop => armed = false,
            _ => {}
        }
    }
    assert!(!armed, "timer left armed after submit");
}

#[test]
fn idle_write_line_never_paints_prompt_or_cursor() {
    let mut term = mounted(false);
    term.write_line("first");
    term.write_line("second");

    assert_eq!(term.host().display(), "first\r\nsecond\r\n");
}

#[test]
fn plain_click_focuses_the_input_but_a_selection_does_not() {
    let mut term = mounted(false);
    let _read = term.prompt_line().expect("read");

    term.handle_display_mouse(DisplayMouse::Down);
    term.handle_display_mouse(DisplayMouse::Up {
        selection_active: false,
    });
    assert_eq!(term.host().focus_requests(), 1);

    term.handle_display_mouse(DisplayMouse::Down);
    term.handle_display_mouse(DisplayMouse::Move {
        selection_active: true,
    });
    term.handle_display_mouse(DisplayMouse::Up {
        selection_active: true,
    });
    assert_eq!(term.host().focus_requests(), 1);
}
