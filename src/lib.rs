//! Lineterm — an embeddable line-based terminal widget.
//!
//! This crate provides a scrollback display with line-oriented input,
//! history recall, themes, and a blinking cursor. The widget is driven
//! through a [`host::TerminalHost`] so it can be embedded in any frontend;
//! a crossterm-backed host for real terminals ships in [`screen`].
//!
//! # Quick start
//!
//! ```no_run
//! use lineterm::screen::ScreenHost;
//! use lineterm::terminal::{Terminal, TerminalOptions};
//! use lineterm::theme::ThemeRegistry;
//!
//! # async fn example() {
//! let host = ScreenHost::stdout();
//! let registry = ThemeRegistry::new();
//! let mut term = Terminal::with_options(host, registry, TerminalOptions::default());
//! term.write_line("lineterm demo");
//! let read = term.prompt_line().unwrap();
//! if let Some(line) = read.await {
//!     term.write_line(&line);
//! }
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod cursor;
pub mod error;
pub mod history;
pub mod host;
pub mod input;
pub mod render;
pub mod screen;
pub mod settings;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
