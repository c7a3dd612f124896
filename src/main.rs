//! Demo binary: a full-screen echo shell built on the line widget.

mod cli;

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use lineterm::build_info;
use lineterm::config::load_config;
use lineterm::error::{TerminalError, ValidationError};
use lineterm::host::DisplayMouse;
use lineterm::input::{edit_for_key, KeyDisposition};
use lineterm::screen::ScreenHost;
use lineterm::settings::{
    DEFAULT_BLINK_INTERVAL_MS, DEFAULT_PROMPT, DEFAULT_THEME, EVENT_POLL_MS,
};
use lineterm::terminal::{Terminal, TerminalOptions};
use lineterm::theme::ThemeRegistry;

fn main() {
    let args = cli::Args::parse();

    // Diagnostics go to stderr so the widget's screen stays clean.
    // Enable with e.g. RUST_LOG=lineterm=trace and redirect stderr.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Runs the echo shell until Ctrl+C or Esc.
fn run(args: cli::Args) -> Result<(), TerminalError> {
    let config = load_config(args.config.as_deref())?;

    // CLI flags win over file values, file values over built-ins.
    let prompt = args
        .prompt
        .or(config.prompt)
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    let rate_ms = match args.rate {
        Some(0) => return Err(ValidationError::ZeroBlinkInterval.into()),
        Some(ms) => ms,
        None => config.rate_ms.unwrap_or(DEFAULT_BLINK_INTERVAL_MS),
    };
    let theme = args
        .theme
        .or(config.theme)
        .unwrap_or_else(|| DEFAULT_THEME.to_string());
    let history = !args.no_history && config.history.unwrap_or(true);

    let mut registry = ThemeRegistry::new();
    registry.add("gruvbox_dark", "282828", "ebdbb2")?;
    registry.add("gruvbox_light", "fbf1c7", "3c3836")?;
    for entry in &config.themes {
        registry.add(&entry.name, &entry.background, &entry.foreground)?;
    }

    let mut host = ScreenHost::stdout();
    host.set_colors_enabled(!args.no_color);
    host.enter()?;

    let options = TerminalOptions {
        history,
        prompt,
        blink_interval: Duration::from_millis(rate_ms),
        theme: DEFAULT_THEME.to_string(),
    };
    let mut term = Terminal::with_options(host, registry, options);
    if theme != DEFAULT_THEME {
        term.set_theme(&theme);
    }

    term.write_line(&format!("lineterm {}", build_info::CURRENT.banner()));
    term.write_line("type a line and press enter; ctrl+c or esc exits");
    term.write_line("");

    let mut read = term.prompt_line()?;
    let mut dragging = false;
    loop {
        if let Some(line) = read.try_recv() {
            let echoed = format!("{}{line}", term.line_prompt());
            term.write_line(&echoed);
            read = term.prompt_line()?;
        }

        if term.host_mut().take_focus_request() {
            term.handle_focus(true);
        }
        if term.host_mut().poll_blink(Instant::now()) {
            term.handle_blink_tick();
        }

        // Wake in time for the next blink even when no events arrive.
        let budget = Duration::from_millis(EVENT_POLL_MS);
        let wait = match term.host().until_blink(Instant::now()) {
            Some(next) => budget.min(next),
            None => budget,
        };
        if !event::poll(wait)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                    continue;
                }
                // Exit keys are a pump decision, not widget routing.
                if key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    break;
                }
                if term.handle_key(key.code, key.modifiers) == KeyDisposition::Native {
                    if let Some(action) = edit_for_key(key.code, key.modifiers) {
                        term.apply_edit(action);
                    }
                }
            }
            Event::FocusGained => term.handle_focus(true),
            Event::FocusLost => term.handle_focus(false),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => {
                    dragging = false;
                    term.handle_display_mouse(DisplayMouse::Down);
                }
                MouseEventKind::Drag(_) => {
                    dragging = true;
                    term.handle_display_mouse(DisplayMouse::Move {
                        selection_active: true,
                    });
                }
                MouseEventKind::Moved => {
                    term.handle_display_mouse(DisplayMouse::Move {
                        selection_active: false,
                    });
                }
                MouseEventKind::Up(_) => {
                    term.handle_display_mouse(DisplayMouse::Up {
                        selection_active: dragging,
                    });
                    dragging = false;
                }
                _ => {}
            },
            Event::Resize(_, _) => term.host_mut().refresh(),
            _ => {}
        }
    }

    term.host_mut().leave()?;
    Ok(())
}
