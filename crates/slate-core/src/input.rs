/// Single-line text input buffer with a byte-offset cursor.
///
/// The cursor always sits on a UTF-8 character boundary.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for terminal cursor placement.
    pub fn cursor_chars(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_read() {
        let mut input = InputState::new();
        for c in "abc".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 3);
    }

    #[test]
    fn insert_at_cursor_position() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.backspace();
        assert_eq!(input.as_str(), "");

        input.insert_char('a');
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "b");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn clear_resets_buffer_and_cursor() {
        let mut input = InputState::new();
        input.insert_char('x');
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('\u{00e9}'); // 2 bytes
        input.insert_char('b');
        assert_eq!(input.cursor_pos(), 4);
        assert_eq!(input.cursor_chars(), 3);

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_pos(), 1);
        input.backspace();
        assert_eq!(input.as_str(), "\u{00e9}b");
    }
}
