use ratatui::layout::Rect;

use crate::tui::widgets::SelectEvent;

/// A dropdown that must be drawn after the main UI so it overlays
/// whatever is below the select
pub struct DropdownInfo<Msg> {
    pub select_area: Rect,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub highlight: usize,
    pub on_select: Option<fn(SelectEvent) -> Msg>,
}

/// Collects open dropdowns during rendering for the overlay pass
pub struct DropdownRegistry<Msg> {
    dropdowns: Vec<DropdownInfo<Msg>>,
}

impl<Msg> DropdownRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            dropdowns: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.dropdowns.clear();
    }

    pub fn register(&mut self, info: DropdownInfo<Msg>) {
        self.dropdowns.push(info);
    }

    pub fn dropdowns(&self) -> &[DropdownInfo<Msg>] {
        &self.dropdowns
    }
}
