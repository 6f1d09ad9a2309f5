//! Single-line edit buffer for the search prompt.

use unicode_width::UnicodeWidthStr;

/// Search text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text[..byte_idx].width()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Takes the text out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Backspace semantics. Returns false at the start of the buffer.
    pub fn delete_prev_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
        true
    }

    /// Delete-key semantics. Returns false at the end of the buffer.
    pub fn delete_next_char(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
        true
    }

    /// Removes everything before the cursor (unix line-kill).
    pub fn delete_to_head(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(..byte_idx, "");
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) -> bool {
        let moved = self.cursor > 0;
        self.cursor = self.cursor.saturating_sub(1);
        moved
    }

    pub fn move_right(&mut self) -> bool {
        let moved = self.cursor < self.char_len();
        if moved {
            self.cursor += 1;
        }
        moved
    }

    pub fn move_head(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.char_len();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn char_to_byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(idx, _)| idx)
}
