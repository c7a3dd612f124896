//! Display-text composition.
//!
//! The rendered display is a pure function of the widget state: the
//! committed scrollback, and, while a line read is outstanding, the
//! prompt plus the input line with the blink cursor painted in.

use crate::input::{byte_index_at_char, char_count};
use crate::settings::{CURSOR_BLOCK, CURSOR_REST};

/// Composes the full display text. While idle only the scrollback is
/// shown. While prompting the active line follows it: with the caret at
/// the end of the input the cursor is appended (block glyph during the
/// on phase, an invisible width-preserving rest glyph otherwise); with
/// the caret inside the input the char under it is swapped for the
/// block glyph during the on phase and left untouched otherwise.
pub fn compose_display(
    scrollback: &str,
    prompting: bool,
    prompt: &str,
    input: &str,
    caret: usize,
    phase: bool,
) -> String {
    if !prompting {
        return scrollback.to_string();
    }

    let mut text = String::with_capacity(scrollback.len() + prompt.len() + input.len() + 4);
    text.push_str(scrollback);
    text.push_str(prompt);

    if caret >= char_count(input) {
        text.push_str(input);
        if phase {
            text.push(CURSOR_BLOCK);
        } else {
            text.push_str(CURSOR_REST);
        }
    } else if phase {
        text.push_str(&input_with_block_at(input, caret));
    } else {
        text.push_str(input);
    }
    text
}

/// The input line with the char at `caret` replaced by the block glyph.
/// Replacement happens on char boundaries, never byte offsets.
fn input_with_block_at(input: &str, caret: usize) -> String {
    let start = byte_index_at_char(input, caret);
    let end = byte_index_at_char(input, caret + 1);
    let mut out = String::with_capacity(input.len() + 2);
    out.push_str(&input[..start]);
    out.push(CURSOR_BLOCK);
    out.push_str(&input[end..]);
    out
}
