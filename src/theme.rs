//! Theme registry and display color handling.
//!
//! A theme is a background/foreground pair addressed by name. Registering
//! one produces a [`StyleRule`] that style-sheet hosts can install
//! verbatim; cell-based hosts read the palette off the rule instead.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::ValidationError;
use crate::settings::{DEFAULT_THEME, OUTPUT_CLASS, THEME_CLASS_PREFIX};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB display color parsed from six lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parses `rrggbb` into a color. Accepts exactly six chars of
    /// `[0-9a-f]`; `channel` names the field being parsed for error
    /// reporting.
    pub fn parse(channel: &'static str, value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidColor {
            channel,
            value: value.to_string(),
        };
        if value.len() != 6 || !value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(invalid());
        }
        let byte =
            |range: Range<usize>| u8::from_str_radix(&value[range], 16).map_err(|_| invalid());
        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    /// Lowercase `rrggbb` rendering, without a leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The same color as a crossterm RGB value, for cell-based hosts.
    pub fn to_crossterm(self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A named display palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
}

/// Style rule generated for a registered theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Class placed on the widget container while the theme is active.
    pub class: String,
    /// Full rule text targeting the display control under that class.
    pub css: String,
    /// The palette itself, for hosts that paint cells rather than
    /// cascade style rules.
    pub theme: Theme,
}

/// Container class selecting a theme's style rule.
pub fn theme_class(name: &str) -> String {
    format!("{THEME_CLASS_PREFIX}{name}")
}

/// True when `name` matches `[0-9a-z_]+`.
fn valid_theme_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'_'))
}

fn style_rule(name: &str, theme: Theme) -> StyleRule {
    let class = theme_class(name);
    let bg = theme.background.hex();
    let fg = theme.foreground.hex();
    let css = format!(
        ".{class} .{OUTPUT_CLASS} {{ background-color: #{bg}; color: #{fg}; border: 1px #{fg} solid; }}"
    );
    StyleRule { class, css, theme }
}

// ---------------------------------------------------------------------------
// ThemeRegistry
// ---------------------------------------------------------------------------

/// Named themes owned by a widget instance.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Builds a registry seeded with the `default` theme: black
    /// background, white foreground.
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(
            DEFAULT_THEME.to_string(),
            Theme {
                background: Color { r: 0x00, g: 0x00, b: 0x00 },
                foreground: Color { r: 0xff, g: 0xff, b: 0xff },
            },
        );
        Self { themes }
    }

    /// Validates and registers a theme, returning its style rule.
    /// Re-registering a name replaces the palette and yields a fresh
    /// rule; earlier rules are never rolled back, the newest wins.
    pub fn add(
        &mut self,
        name: &str,
        background: &str,
        foreground: &str,
    ) -> Result<StyleRule, ValidationError> {
        if !valid_theme_name(name) {
            return Err(ValidationError::InvalidThemeName(name.to_string()));
        }
        let theme = Theme {
            background: Color::parse("background", background)?,
            foreground: Color::parse("foreground", foreground)?,
        };
        self.themes.insert(name.to_string(), theme);
        Ok(style_rule(name, theme))
    }

    /// Looks up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered theme names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Style rules for every registered theme, in name order. Used to
    /// replay the rule set into a freshly bound host.
    pub fn style_rules(&self) -> Vec<StyleRule> {
        self.themes
            .iter()
            .map(|(name, theme)| style_rule(name, *theme))
            .collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
