use crossterm::event::KeyCode;

/// Manages text input cursor and scrolling state
#[derive(Debug, Clone)]
pub struct TextInputState {
    cursor_pos: usize,    // Character index (0 = before first char)
    scroll_offset: usize, // For horizontal scrolling when text > width
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInputState {
    /// Create a new TextInputState with cursor at start
    pub fn new() -> Self {
        Self {
            cursor_pos: 0,
            scroll_offset: 0,
        }
    }

    /// Get current cursor position
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Get current scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set cursor position to the end of the given text
    pub fn set_cursor_to_end(&mut self, text: &str) {
        self.cursor_pos = text.chars().count();
    }

    /// Handle a key press and update text value
    /// Returns Some(new_value) if text changed, None if only cursor moved
    pub fn handle_key(&mut self, key: KeyCode, current_value: &str) -> Option<String> {
        let char_count = current_value.chars().count();
        // Typed text can outrun a stale cursor when the value is swapped
        // out from under the state (form reset), so clamp first.
        self.cursor_pos = self.cursor_pos.min(char_count);

        match key {
            KeyCode::Char(c) => {
                let mut chars: Vec<char> = current_value.chars().collect();
                chars.insert(self.cursor_pos, c);
                self.cursor_pos += 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Backspace => {
                // Delete character before cursor
                if self.cursor_pos > 0 {
                    let mut chars: Vec<char> = current_value.chars().collect();
                    chars.remove(self.cursor_pos - 1);
                    self.cursor_pos -= 1;
                    Some(chars.into_iter().collect())
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                // Delete character at cursor position
                if self.cursor_pos < char_count {
                    let mut chars: Vec<char> = current_value.chars().collect();
                    chars.remove(self.cursor_pos);
                    Some(chars.into_iter().collect())
                } else {
                    None
                }
            }
            KeyCode::Left => {
                if self.cursor_pos > 0 {
                    self.cursor_pos -= 1;
                }
                None
            }
            KeyCode::Right => {
                if self.cursor_pos < char_count {
                    self.cursor_pos += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = char_count;
                None
            }
            _ => None,
        }
    }

    /// Update scroll offset to keep cursor visible
    /// Called during rendering
    pub fn update_scroll(&mut self, visible_width: usize, text: &str) {
        let char_count = text.chars().count();

        if self.cursor_pos < self.scroll_offset {
            // Cursor moved left of visible area
            self.scroll_offset = self.cursor_pos;
        } else if self.cursor_pos >= self.scroll_offset + visible_width {
            // Cursor moved right of visible area
            self.scroll_offset = self.cursor_pos.saturating_sub(visible_width - 1);
        }

        // Clamp scroll offset
        let max_offset = char_count.saturating_sub(visible_width);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_inserts_at_cursor() {
        let mut state = TextInputState::new();
        let v = state.handle_key(KeyCode::Char('a'), "").unwrap();
        let v = state.handle_key(KeyCode::Char('c'), &v).unwrap();
        state.handle_key(KeyCode::Left, &v);
        let v = state.handle_key(KeyCode::Char('b'), &v).unwrap();
        assert_eq!(v, "abc");
        assert_eq!(state.cursor_pos(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut state = TextInputState::new();
        assert!(state.handle_key(KeyCode::Backspace, "abc").is_none());
    }

    #[test]
    fn stale_cursor_is_clamped() {
        let mut state = TextInputState::new();
        state.set_cursor_to_end("a long previous value");
        let v = state.handle_key(KeyCode::Char('x'), "ab").unwrap();
        assert_eq!(v, "abx");
    }
}
