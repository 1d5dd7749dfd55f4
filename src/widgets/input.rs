//! The add-item text field.
//!
//! Holds the value and cursor of the single text-entry control. Key handling
//! returns an [`InputOutcome`] so the card decides what a submit or cancel
//! means; this type never talks to the store.

use crate::event::input::Key;

/// Placeholder shown while the field is empty.
pub const PLACEHOLDER: &str = "+ Add an item...";

/// What a key press did to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The value or cursor changed.
    Edited,
    /// Enter on a non-blank value. Carries the trimmed text; the field is cleared.
    Submit(String),
    /// Escape. The field is cleared and should lose focus.
    Cancel,
    /// Nothing happened (e.g. Enter on a blank value).
    Ignored,
}

// ---------------------------------------------------------------------------
// AddItemInput
// ---------------------------------------------------------------------------

/// Text state of the add-item field.
///
/// The cursor position is tracked as a byte offset into the value string.
/// All cursor operations are char-boundary safe.
#[derive(Debug, Clone, Default)]
pub struct AddItemInput {
    value: String,
    cursor_position: usize,
}

impl AddItemInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_position = self.value.len();
    }

    /// Clear the input value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    /// Return the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: Key) -> InputOutcome {
        match key {
            Key::Char(ch) => {
                self.insert_char(ch);
                InputOutcome::Edited
            }
            Key::Backspace => {
                self.delete_char();
                InputOutcome::Edited
            }
            Key::Delete => {
                self.delete_forward();
                InputOutcome::Edited
            }
            Key::Left => {
                self.move_cursor_left();
                InputOutcome::Edited
            }
            Key::Right => {
                self.move_cursor_right();
                InputOutcome::Edited
            }
            Key::Home => {
                self.cursor_position = 0;
                InputOutcome::Edited
            }
            Key::End => {
                self.cursor_position = self.value.len();
                InputOutcome::Edited
            }
            Key::Enter => {
                let text = self.value.trim().to_owned();
                if text.is_empty() {
                    return InputOutcome::Ignored;
                }
                self.clear();
                InputOutcome::Submit(text)
            }
            Key::Escape => {
                self.clear();
                InputOutcome::Cancel
            }
        }
    }

    /// Insert a character at the current cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor_position, ch);
        self.cursor_position += ch.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor_position);
        self.cursor_position = prev;
    }

    /// Delete the character after the cursor (delete forward).
    pub fn delete_forward(&mut self) {
        if self.cursor_position >= self.value.len() {
            return;
        }
        let next = self.next_char_boundary();
        self.value.drain(self.cursor_position..next);
    }

    /// Move the cursor left by one character.
    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    /// Move the cursor right by one character.
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> AddItemInput {
        let mut input = AddItemInput::new();
        for ch in text.chars() {
            input.handle_key(Key::Char(ch));
        }
        input
    }

    #[test]
    fn typing_appends() {
        let input = typed("milk");
        assert_eq!(input.value(), "milk");
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn enter_submits_trimmed_and_clears() {
        let mut input = typed("  eggs ");
        assert_eq!(
            input.handle_key(Key::Enter),
            InputOutcome::Submit("eggs".into())
        );
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn enter_on_blank_is_ignored() {
        let mut input = typed("   ");
        assert_eq!(input.handle_key(Key::Enter), InputOutcome::Ignored);
        assert_eq!(input.value(), "   ");
    }

    #[test]
    fn escape_clears() {
        let mut input = typed("bread");
        assert_eq!(input.handle_key(Key::Escape), InputOutcome::Cancel);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = typed("abc");
        input.handle_key(Key::Backspace);
        assert_eq!(input.value(), "ab");
        input.handle_key(Key::Home);
        input.handle_key(Key::Delete);
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn backspace_at_start_does_nothing() {
        let mut input = typed("a");
        input.handle_key(Key::Home);
        input.handle_key(Key::Backspace);
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn insert_in_middle() {
        let mut input = typed("ac");
        input.handle_key(Key::Left);
        input.handle_key(Key::Char('b'));
        assert_eq!(input.value(), "abc");
        input.handle_key(Key::End);
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn unicode_insert_and_delete() {
        let mut input = typed("café");
        assert_eq!(input.cursor_position(), 5);
        input.handle_key(Key::Backspace);
        assert_eq!(input.value(), "caf");
        input.handle_key(Key::Left);
        input.handle_key(Key::Right);
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut input = AddItemInput::new();
        input.set_value("jam");
        assert_eq!(input.cursor_position(), 3);
        input.clear();
        assert_eq!(input.value(), "");
    }
}
