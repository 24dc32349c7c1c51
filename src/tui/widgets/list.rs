use crate::tui::Element;
use crossterm::event::KeyCode;

/// Trait for items that can be displayed in a list
pub trait ListItem {
    type Msg: Clone;

    /// Render this item as an Element
    fn to_element(&self, is_selected: bool) -> Element<Self::Msg>;
}

/// Manages list selection and scrolling state
#[derive(Debug, Clone)]
pub struct ListState {
    selected: Option<usize>,
    scroll_offset: usize,
    scroll_off: usize, // Rows from edge before scrolling (like vim scrolloff)
    wrap_around: bool, // Wrap to bottom/top when reaching edges
    viewport_height: Option<usize>, // Last known viewport height from renderer
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Create a new ListState with no selection
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            scroll_off: 3,
            wrap_around: true,
            viewport_height: None,
        }
    }

    /// Create a new ListState with first item selected
    pub fn with_selection() -> Self {
        Self {
            selected: Some(0),
            ..Self::new()
        }
    }

    /// Set the viewport height (called by renderer with actual area height)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = Some(height);
    }

    /// Get currently selected index
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Get current scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set selected index without adjusting scroll
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Set selected index and adjust scroll to ensure it's visible
    pub fn select_and_scroll(&mut self, index: Option<usize>, item_count: usize) {
        self.selected = index;
        if let Some(height) = self.viewport_height {
            self.update_scroll(height, item_count);
        }
    }

    /// Handle navigation key, returns true if handled.
    /// Uses stored viewport_height if available, otherwise the fallback.
    pub fn handle_key(&mut self, key: KeyCode, item_count: usize, visible_height: usize) -> bool {
        if item_count == 0 {
            return false;
        }

        let height = self.viewport_height.unwrap_or(visible_height);

        match key {
            KeyCode::Up => {
                self.move_up(item_count, height);
                true
            }
            KeyCode::Down => {
                self.move_down(item_count, height);
                true
            }
            KeyCode::PageUp => {
                self.page_up(height, item_count);
                true
            }
            KeyCode::PageDown => {
                self.page_down(item_count, height);
                true
            }
            KeyCode::Home => {
                self.selected = Some(0);
                self.update_scroll(height, item_count);
                true
            }
            KeyCode::End => {
                self.selected = Some(item_count - 1);
                self.update_scroll(height, item_count);
                true
            }
            _ => false,
        }
    }

    fn move_up(&mut self, item_count: usize, visible_height: usize) {
        if let Some(sel) = self.selected {
            if sel > 0 {
                self.selected = Some(sel - 1);
            } else if self.wrap_around {
                self.selected = Some(item_count - 1);
            }
        } else {
            self.selected = Some(0);
        }
        self.update_scroll(visible_height, item_count);
    }

    fn move_down(&mut self, item_count: usize, visible_height: usize) {
        if let Some(sel) = self.selected {
            if sel < item_count - 1 {
                self.selected = Some(sel + 1);
            } else if self.wrap_around {
                self.selected = Some(0);
            }
        } else {
            self.selected = Some(0);
        }
        self.update_scroll(visible_height, item_count);
    }

    fn page_up(&mut self, visible_height: usize, item_count: usize) {
        self.selected = Some(
            self.selected
                .map(|sel| sel.saturating_sub(visible_height))
                .unwrap_or(0),
        );
        self.update_scroll(visible_height, item_count);
    }

    fn page_down(&mut self, item_count: usize, visible_height: usize) {
        self.selected = Some(
            self.selected
                .map(|sel| (sel + visible_height).min(item_count - 1))
                .unwrap_or(0),
        );
        self.update_scroll(visible_height, item_count);
    }

    /// Update scroll offset based on selection and visible height
    /// Called during rendering to ensure scrolloff is maintained
    pub fn update_scroll(&mut self, visible_height: usize, item_count: usize) {
        if let Some(sel) = self.selected {
            let min_scroll =
                sel.saturating_sub(visible_height.saturating_sub(self.scroll_off + 1));
            let max_scroll = sel.saturating_sub(self.scroll_off);

            if self.scroll_offset < min_scroll {
                self.scroll_offset = min_scroll;
            } else if self.scroll_offset > max_scroll {
                self.scroll_offset = max_scroll;
            }

            // Clamp to valid range
            let max_offset = item_count.saturating_sub(visible_height);
            self.scroll_offset = self.scroll_offset.min(max_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_from_none_selects_first() {
        let mut state = ListState::new();
        state.handle_key(KeyCode::Down, 5, 10);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn navigation_wraps_at_edges() {
        let mut state = ListState::with_selection();
        state.handle_key(KeyCode::Up, 3, 10);
        assert_eq!(state.selected(), Some(2));
        state.handle_key(KeyCode::Down, 3, 10);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn scroll_keeps_selection_in_viewport() {
        let mut state = ListState::with_selection();
        for _ in 0..9 {
            state.handle_key(KeyCode::Down, 20, 5);
        }
        assert_eq!(state.selected(), Some(9));
        assert!(state.scroll_offset() > 0);
        assert!(state.scroll_offset() <= 9);
    }

    #[test]
    fn empty_list_ignores_keys() {
        let mut state = ListState::new();
        assert!(!state.handle_key(KeyCode::Down, 0, 10));
        assert_eq!(state.selected(), None);
    }
}
