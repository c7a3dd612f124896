//! Submitted-line history with a recall cursor.

/// Ordered list of submitted lines plus a recall cursor.
///
/// The cursor ranges over `0..=entries.len()`; `len` means "past the
/// newest entry", which is where every new line read starts.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
    enabled: bool,
}

impl HistoryBuffer {
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turns recall on or off. Turning it off discards all entries, so
    /// an off/on cycle starts from an empty buffer.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        self.entries.clear();
        self.cursor = 0;
    }

    /// Records a submitted line and parks the cursor past it.
    /// Every submission is recorded, empty lines included.
    pub fn push(&mut self, line: &str) {
        if !self.enabled {
            return;
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Parks the cursor past the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Steps the cursor toward older entries, returning the entry it
    /// lands on. `None` when already at the oldest entry or disabled.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if !self.enabled || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Steps the cursor toward newer entries, returning the entry it
    /// lands on. `None` when already at the newest entry or disabled.
    pub fn recall_next(&mut self) -> Option<&str> {
        if !self.enabled || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
