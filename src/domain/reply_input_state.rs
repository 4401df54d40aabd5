//! Text held by the reply input. Nothing is ever sent; the field only edits.

const MAX_REPLY_CHARS: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplyInputState {
    text: String,
    /// Cursor as a byte offset, always on a char boundary.
    cursor: usize,
}

impl ReplyInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position counted in chars, for placing the terminal cursor.
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_REPLY_CHARS {
            return false;
        }

        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> ReplyInputState {
        let mut state = ReplyInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn typing_appends_and_advances_cursor() {
        let state = typed("hey");

        assert_eq!(state.text(), "hey");
        assert_eq!(state.cursor_chars(), 3);
    }

    #[test]
    fn insert_in_the_middle_after_moving_left() {
        let mut state = typed("hllo");
        state.move_home();
        state.move_right();

        state.insert_char('e');

        assert_eq!(state.text(), "hello");
        assert_eq!(state.cursor_chars(), 2);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_chars() {
        let mut state = typed("añb");

        state.backspace();
        assert_eq!(state.text(), "añ");

        state.move_left();
        state.delete();
        assert_eq!(state.text(), "a");
        assert_eq!(state.cursor_chars(), 1);
    }

    #[test]
    fn edits_at_the_edges_are_noops() {
        let mut state = ReplyInputState::default();

        state.backspace();
        state.delete();
        state.move_left();
        state.move_right();

        assert!(state.is_empty());
        assert_eq!(state.cursor_chars(), 0);
    }

    #[test]
    fn rejects_input_beyond_limit() {
        let mut state = typed(&"x".repeat(MAX_REPLY_CHARS));

        assert!(!state.insert_char('y'));
        assert_eq!(state.text().chars().count(), MAX_REPLY_CHARS);
    }
}
