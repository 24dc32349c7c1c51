use crossterm::event::KeyCode;

/// Manages multi-line text cursor and vertical scrolling state.
///
/// The value itself stays with the app (single `String`, `\n`
/// separated); this state only tracks where the cursor is and which
/// line is scrolled to the top of the viewport.
#[derive(Debug, Clone)]
pub struct TextAreaState {
    cursor_row: usize,
    cursor_col: usize,    // Character index within the row
    scroll_offset: usize, // First visible line
}

impl Default for TextAreaState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAreaState {
    pub fn new() -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
            scroll_offset: 0,
        }
    }

    /// Get cursor position as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Get current scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn lines(value: &str) -> Vec<&str> {
        // split keeps the trailing empty line after a final '\n'
        value.split('\n').collect()
    }

    fn clamp(&mut self, lines: &[&str]) {
        self.cursor_row = self.cursor_row.min(lines.len().saturating_sub(1));
        let line_len = lines
            .get(self.cursor_row)
            .map(|l| l.chars().count())
            .unwrap_or(0);
        self.cursor_col = self.cursor_col.min(line_len);
    }

    /// Handle a key press and update text value
    /// Returns Some(new_value) if text changed, None if only cursor moved
    pub fn handle_key(&mut self, key: KeyCode, current_value: &str) -> Option<String> {
        let lines = Self::lines(current_value);
        self.clamp(&lines);

        match key {
            KeyCode::Char(c) => {
                let mut row: Vec<char> = lines[self.cursor_row].chars().collect();
                row.insert(self.cursor_col, c);
                self.cursor_col += 1;
                Some(Self::rebuild(&lines, self.cursor_row, row))
            }
            KeyCode::Enter => {
                // Split the current line at the cursor
                let row: Vec<char> = lines[self.cursor_row].chars().collect();
                let before: String = row[..self.cursor_col].iter().collect();
                let after: String = row[self.cursor_col..].iter().collect();
                let mut new_lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                new_lines[self.cursor_row] = before;
                new_lines.insert(self.cursor_row + 1, after);
                self.cursor_row += 1;
                self.cursor_col = 0;
                Some(new_lines.join("\n"))
            }
            KeyCode::Backspace => {
                if self.cursor_col > 0 {
                    let mut row: Vec<char> = lines[self.cursor_row].chars().collect();
                    row.remove(self.cursor_col - 1);
                    self.cursor_col -= 1;
                    Some(Self::rebuild(&lines, self.cursor_row, row))
                } else if self.cursor_row > 0 {
                    // Merge with previous line
                    let mut new_lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                    let removed = new_lines.remove(self.cursor_row);
                    self.cursor_row -= 1;
                    self.cursor_col = new_lines[self.cursor_row].chars().count();
                    new_lines[self.cursor_row].push_str(&removed);
                    Some(new_lines.join("\n"))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                let row_len = lines[self.cursor_row].chars().count();
                if self.cursor_col < row_len {
                    let mut row: Vec<char> = lines[self.cursor_row].chars().collect();
                    row.remove(self.cursor_col);
                    Some(Self::rebuild(&lines, self.cursor_row, row))
                } else if self.cursor_row + 1 < lines.len() {
                    // Merge next line into this one
                    let mut new_lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                    let removed = new_lines.remove(self.cursor_row + 1);
                    new_lines[self.cursor_row].push_str(&removed);
                    Some(new_lines.join("\n"))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = lines[self.cursor_row].chars().count();
                }
                None
            }
            KeyCode::Right => {
                let row_len = lines[self.cursor_row].chars().count();
                if self.cursor_col < row_len {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
                None
            }
            KeyCode::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp(&lines);
                }
                None
            }
            KeyCode::Down => {
                if self.cursor_row + 1 < lines.len() {
                    self.cursor_row += 1;
                    self.clamp(&lines);
                }
                None
            }
            KeyCode::Home => {
                self.cursor_col = 0;
                None
            }
            KeyCode::End => {
                self.cursor_col = lines[self.cursor_row].chars().count();
                None
            }
            _ => None,
        }
    }

    fn rebuild(lines: &[&str], row_index: usize, new_row: Vec<char>) -> String {
        let mut out: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        out[row_index] = new_row.into_iter().collect();
        out.join("\n")
    }

    /// Update scroll offset to keep the cursor row visible
    /// Called during rendering
    pub fn update_scroll(&mut self, visible_rows: usize, value: &str) {
        let line_count = Self::lines(value).len();

        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if visible_rows > 0 && self.cursor_row >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.cursor_row.saturating_sub(visible_rows - 1);
        }

        let max_offset = line_count.saturating_sub(visible_rows.max(1));
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_splits_line_at_cursor() {
        let mut state = TextAreaState::new();
        let v = state.handle_key(KeyCode::Char('a'), "").unwrap();
        let v = state.handle_key(KeyCode::Char('b'), &v).unwrap();
        state.handle_key(KeyCode::Left, &v);
        let v = state.handle_key(KeyCode::Enter, &v).unwrap();
        assert_eq!(v, "a\nb");
        assert_eq!(state.cursor(), (1, 0));
    }

    #[test]
    fn backspace_at_line_start_merges_lines() {
        let mut state = TextAreaState::new();
        state.cursor_row = 1;
        state.cursor_col = 0;
        let v = state.handle_key(KeyCode::Backspace, "ab\ncd").unwrap();
        assert_eq!(v, "abcd");
        assert_eq!(state.cursor(), (0, 2));
    }

    #[test]
    fn vertical_movement_clamps_column() {
        let mut state = TextAreaState::new();
        state.cursor_row = 1;
        state.cursor_col = 5;
        state.handle_key(KeyCode::Up, "ab\nlonger");
        assert_eq!(state.cursor(), (0, 2));
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut state = TextAreaState::new();
        let value = "1\n2\n3\n4\n5\n6";
        state.cursor_row = 5;
        state.update_scroll(4, value);
        assert_eq!(state.scroll_offset(), 2);
        state.cursor_row = 0;
        state.update_scroll(4, value);
        assert_eq!(state.scroll_offset(), 0);
    }
}
