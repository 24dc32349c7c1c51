use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{DropdownRegistry, FocusRegistry, FocusableInfo, InteractionRegistry};
use crate::tui::widgets::ListEvent;
use crate::tui::{Element, LayoutConstraint, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
};

/// Create on_key handler for lists (navigation and activation)
pub fn list_on_key<Msg: Clone + Send + 'static>(
    selected: Option<usize>,
    on_navigate: Option<fn(KeyCode) -> Msg>,
    on_activate: Option<fn(usize) -> Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| match key_event.code {
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Home
        | KeyCode::End => match on_navigate {
            Some(f) => DispatchTarget::AppMsg(f(key_event.code)),
            None => DispatchTarget::PassThrough,
        },
        // Enter activates the selected item
        KeyCode::Enter => match (selected, on_activate) {
            (Some(idx), Some(activate)) => DispatchTarget::AppMsg(activate(idx)),
            _ => DispatchTarget::PassThrough,
        },
        _ => DispatchTarget::PassThrough,
    })
}

/// Render List element
pub fn render_list<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    dropdown_registry: &mut DropdownRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    items: &[Element<Msg>],
    selected: Option<usize>,
    scroll_offset: usize,
    on_select: &Option<fn(usize) -> Msg>,
    on_activate: &Option<fn(usize) -> Msg>,
    on_navigate: &Option<fn(KeyCode) -> Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    area: Rect,
    inside_panel: bool,
    render_fn: impl Fn(
        &mut Frame,
        &Theme,
        &mut InteractionRegistry<Msg>,
        &mut FocusRegistry<Msg>,
        &mut DropdownRegistry<Msg>,
        Option<&FocusId>,
        &Element<Msg>,
        Rect,
        bool,
    ),
) {
    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: list_on_key(selected, *on_navigate, *on_activate),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
        inside_panel,
    });

    let is_focused = focused_id == Some(id);

    let visible_height = area.height as usize;

    // Virtual scrolling: only render visible items
    let start_idx = scroll_offset.min(items.len());
    let end_idx = (start_idx + visible_height).min(items.len());

    let visible_items: Vec<_> = items[start_idx..end_idx]
        .iter()
        .map(|item| (LayoutConstraint::Length(1), item.clone()))
        .collect();

    if !visible_items.is_empty() {
        let constraints = visible_items
            .iter()
            .map(|_| Constraint::Length(1))
            .collect::<Vec<_>>();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for ((_, child), chunk) in visible_items.iter().zip(chunks.iter()) {
            render_fn(
                frame,
                theme,
                registry,
                focus_registry,
                dropdown_registry,
                focused_id,
                child,
                *chunk,
                inside_panel,
            );
        }

        // Register click handlers for list items
        if let Some(on_select_fn) = on_select {
            for (idx, chunk) in chunks.iter().enumerate() {
                let item_idx = start_idx + idx;
                if item_idx < items.len() {
                    registry.register_click(*chunk, on_select_fn(item_idx));
                }
            }
        }
    }

    // Render scrollbar thumb if the list overflows
    if items.len() > visible_height {
        let scrollbar_position = (scroll_offset as f32 / (items.len() - visible_height) as f32
            * (area.height - 1) as f32) as u16;

        if scrollbar_position < area.height {
            let thumb_area = Rect {
                x: area.x + area.width - 1,
                y: area.y + scrollbar_position,
                width: 1,
                height: 1,
            };
            let thumb = Block::default().style(Style::default().fg(theme.border_primary));
            frame.render_widget(thumb, thumb_area);
        }
    }

    // Only render focus border if NOT inside a panel
    // (panels show focus on their border instead)
    if is_focused && !inside_panel {
        let border = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_primary));
        frame.render_widget(border, area);
    }
}
