use ratatui::layout::Rect;

/// Maps screen regions to click messages, rebuilt every frame during
/// rendering.
pub struct InteractionRegistry<Msg> {
    clicks: Vec<(Rect, Msg)>,
}

impl<Msg: Clone> InteractionRegistry<Msg> {
    pub fn new() -> Self {
        Self { clicks: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.clicks.clear();
    }

    pub fn register_click(&mut self, rect: Rect, msg: Msg) {
        self.clicks.push((rect, msg));
    }

    /// Find the message for a click at a position. Iterates in reverse
    /// so elements rendered later (overlays) win.
    pub fn find_click(&self, x: u16, y: u16) -> Option<Msg> {
        self.clicks
            .iter()
            .rev()
            .find(|(rect, _)| Self::point_in_rect(x, y, *rect))
            .map(|(_, msg)| msg.clone())
    }

    fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_win_clicks() {
        let mut registry: InteractionRegistry<u32> = InteractionRegistry::new();
        registry.register_click(Rect::new(0, 0, 10, 10), 1);
        registry.register_click(Rect::new(2, 2, 4, 4), 2);

        assert_eq!(registry.find_click(3, 3), Some(2));
        assert_eq!(registry.find_click(0, 0), Some(1));
        assert_eq!(registry.find_click(20, 20), None);
    }
}
