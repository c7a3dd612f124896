//! Centralized widget settings and glyph constants.
//!
//! Single place to tweak the default prompt, blink timing, cursor glyphs,
//! and the theme class naming shared by the widget and its hosts.

// ---------------------------------------------------------------------------
// Prompt / timing defaults
// ---------------------------------------------------------------------------

/// Prompt prefix applied when the embedder sets none.
pub const DEFAULT_PROMPT: &str = "> ";

/// Cursor blink interval applied when the embedder sets none.
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 450;

/// Terminator appended to every committed scrollback line.
pub const LINE_TERMINATOR: &str = "\r\n";

// ---------------------------------------------------------------------------
// Cursor glyphs
// ---------------------------------------------------------------------------

/// Full-block glyph painted over the caret cell during the on phase.
pub const CURSOR_BLOCK: char = '\u{2588}';

/// Off-phase rest glyph (NBSP + ZWSP) shown after the input when the
/// caret sits at the end of the line; keeps the caret cell wide without
/// painting it.
pub const CURSOR_REST: &str = "\u{a0}\u{200b}";

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

/// Theme every registry starts with.
pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_THEME_BACKGROUND: &str = "000000";
pub const DEFAULT_THEME_FOREGROUND: &str = "ffffff";

/// Class prefix for per-theme style rules.
pub const THEME_CLASS_PREFIX: &str = "t_theme_";

/// Root class hosts put on the widget container, next to the active
/// theme class.
pub const CONTAINER_CLASS: &str = "t_container";

/// Class hosts put on the display control; style rules target it.
pub const OUTPUT_CLASS: &str = "t_output";

// ---------------------------------------------------------------------------
// Demo event pump
// ---------------------------------------------------------------------------

/// Poll interval for the demo event pump.
pub const EVENT_POLL_MS: u64 = 80;

/// Viewport size assumed when the terminal size is unavailable.
pub const SCREEN_FALLBACK_COLUMNS: u16 = 80;
pub const SCREEN_FALLBACK_ROWS: u16 = 24;
