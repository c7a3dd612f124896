//! Key routing and input-line editing helpers.
//!
//! [`route_key`] is the dispatch table applied to every key-down event:
//! it decides whether the widget consumes the key, leaves it to the
//! host's native editing, or drops it. Hosts without a native editable
//! control translate the leftover keys through [`edit_for_key`].

use crossterm::event::{KeyCode, KeyModifiers};

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Host-facing verdict for a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The widget consumed the key; the host must not apply it.
    Handled,
    /// The host's native text editing applies.
    Native,
    /// Drop the key entirely.
    Suppressed,
}

/// What the router decided to do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    CaretLeft,
    CaretRight,
    HistoryPrevious,
    HistoryNext,
    Submit,
    Native,
    Suppressed,
}

impl LineAction {
    pub fn disposition(self) -> KeyDisposition {
        match self {
            Self::Native => KeyDisposition::Native,
            Self::Suppressed => KeyDisposition::Suppressed,
            _ => KeyDisposition::Handled,
        }
    }
}

/// Routes one key-down event. While idle every key is suppressed; the
/// widget accepts no input between line reads. While prompting,
/// navigation and submission are consumed regardless of modifiers,
/// Ctrl+V is left native so paste keeps working, any other control
/// chord is dropped, and everything else falls through to native
/// editing.
pub fn route_key(code: KeyCode, modifiers: KeyModifiers, prompting: bool) -> LineAction {
    if !prompting {
        return LineAction::Suppressed;
    }
    match code {
        KeyCode::Enter => LineAction::Submit,
        KeyCode::Left => LineAction::CaretLeft,
        KeyCode::Right => LineAction::CaretRight,
        KeyCode::Up => LineAction::HistoryPrevious,
        KeyCode::Down => LineAction::HistoryNext,
        KeyCode::Char('v') | KeyCode::Char('V')
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            LineAction::Native
        }
        _ if modifiers.contains(KeyModifiers::CONTROL) => LineAction::Suppressed,
        _ => LineAction::Native,
    }
}

// ---------------------------------------------------------------------------
// Native-edit translation
// ---------------------------------------------------------------------------

/// A single edit applied to the input line, for hosts that emulate the
/// native editing a browser control would supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    DeleteForward,
    MoveToStart,
    MoveToEnd,
}

/// Maps a key the router left `Native` to the edit it stands for.
/// Returns `None` for keys with no editing meaning.
pub fn edit_for_key(code: KeyCode, modifiers: KeyModifiers) -> Option<EditAction> {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match code {
        KeyCode::Char(c) => Some(EditAction::Insert(c)),
        KeyCode::Backspace => Some(EditAction::Backspace),
        KeyCode::Delete => Some(EditAction::DeleteForward),
        KeyCode::Home => Some(EditAction::MoveToStart),
        KeyCode::End => Some(EditAction::MoveToEnd),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Caret arithmetic
// ---------------------------------------------------------------------------

/// Insert one char at the current caret position.
pub(crate) fn insert_char_at_caret(buffer: &mut String, caret: &mut usize, ch: char) {
    let byte_idx = byte_index_at_char(buffer, *caret);
    buffer.insert(byte_idx, ch);
    *caret += 1;
}

/// Delete one char immediately before the caret.
pub(crate) fn delete_char_before_caret(buffer: &mut String, caret: &mut usize) {
    let start = byte_index_at_char(buffer, *caret - 1);
    let end = byte_index_at_char(buffer, *caret);
    buffer.replace_range(start..end, "");
    *caret -= 1;
}

/// Delete one char at the current caret position.
pub(crate) fn delete_char_at_caret(buffer: &mut String, caret: usize) {
    let start = byte_index_at_char(buffer, caret);
    let end = byte_index_at_char(buffer, caret + 1);
    buffer.replace_range(start..end, "");
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
pub(crate) fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    let total_chars = s.chars().count();
    if char_idx >= total_chars {
        return s.len();
    }
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Return total char count for a UTF-8 string.
pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}
