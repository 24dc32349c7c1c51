use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Information about a focusable element
pub struct FocusableInfo<Msg> {
    pub id: FocusId,
    pub rect: Rect,
    pub on_key: Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send>,
    pub on_focus: Option<Msg>,
    pub on_blur: Option<Msg>,
    pub inside_panel: bool, // True if this element is inside a Panel
}

/// Stores focus information for UI elements, rebuilt every frame in
/// view order. Tab order is registration order.
pub struct FocusRegistry<Msg> {
    focusables: Vec<FocusableInfo<Msg>>,
}

impl<Msg: Clone> FocusRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            focusables: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.focusables.clear();
    }

    pub fn register_focusable(&mut self, info: FocusableInfo<Msg>) {
        // Duplicate IDs break Tab navigation, catch them early
        if self.focusables.iter().any(|f| f.id == info.id) {
            #[cfg(debug_assertions)]
            panic!(
                "Duplicate FocusId detected: {:?}. Each focusable element must have a unique ID.",
                info.id
            );

            #[cfg(not(debug_assertions))]
            log::warn!("Duplicate FocusId: {:?} - last registration wins", info.id);
        }

        self.focusables.push(info);
    }

    pub fn find(&self, id: &FocusId) -> Option<&FocusableInfo<Msg>> {
        self.focusables.iter().find(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FocusId) -> bool {
        self.focusables.iter().any(|f| &f.id == id)
    }

    /// Find the topmost focusable at a screen position (later
    /// registrations render on top, so search in reverse)
    pub fn find_at_position(&self, x: u16, y: u16) -> Option<FocusId> {
        self.focusables
            .iter()
            .rev()
            .find(|f| point_in_rect(x, y, f.rect))
            .map(|f| f.id.clone())
    }

    /// Move focus to the next focusable element, wrapping around.
    /// Returns the new focused ID, or None if there are no focusables.
    pub fn next_focus(&self, current: Option<&FocusId>) -> Option<FocusId> {
        if self.focusables.is_empty() {
            return None;
        }

        match current {
            None => Some(self.focusables[0].id.clone()),
            Some(id) => {
                let current_index = self.focusables.iter().position(|f| &f.id == id)?;
                let next_index = (current_index + 1) % self.focusables.len();
                Some(self.focusables[next_index].id.clone())
            }
        }
    }

    /// Move focus to the previous focusable element, wrapping around.
    pub fn prev_focus(&self, current: Option<&FocusId>) -> Option<FocusId> {
        if self.focusables.is_empty() {
            return None;
        }

        match current {
            None => Some(self.focusables[self.focusables.len() - 1].id.clone()),
            Some(id) => {
                let current_index = self.focusables.iter().position(|f| &f.id == id)?;
                let prev_index = if current_index == 0 {
                    self.focusables.len() - 1
                } else {
                    current_index - 1
                };
                Some(self.focusables[prev_index].id.clone())
            }
        }
    }
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focusable(id: &str, rect: Rect) -> FocusableInfo<u32> {
        FocusableInfo {
            id: FocusId::from(id),
            rect,
            on_key: Box::new(|_| DispatchTarget::PassThrough),
            on_focus: None,
            on_blur: None,
            inside_panel: false,
        }
    }

    #[test]
    fn tab_order_wraps() {
        let mut registry: FocusRegistry<u32> = FocusRegistry::new();
        registry.register_focusable(focusable("a", Rect::new(0, 0, 5, 1)));
        registry.register_focusable(focusable("b", Rect::new(0, 1, 5, 1)));

        let first = registry.next_focus(None).unwrap();
        assert_eq!(first, FocusId::from("a"));
        let second = registry.next_focus(Some(&first)).unwrap();
        assert_eq!(second, FocusId::from("b"));
        let wrapped = registry.next_focus(Some(&second)).unwrap();
        assert_eq!(wrapped, FocusId::from("a"));
    }

    #[test]
    fn find_at_position_prefers_topmost() {
        let mut registry: FocusRegistry<u32> = FocusRegistry::new();
        registry.register_focusable(focusable("under", Rect::new(0, 0, 10, 10)));
        registry.register_focusable(focusable("over", Rect::new(2, 2, 4, 4)));

        assert_eq!(registry.find_at_position(3, 3), Some(FocusId::from("over")));
        assert_eq!(registry.find_at_position(0, 0), Some(FocusId::from("under")));
        assert_eq!(registry.find_at_position(50, 50), None);
    }
}
