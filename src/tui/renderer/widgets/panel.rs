use crate::tui::element::FocusId;
use crate::tui::renderer::{DropdownRegistry, FocusRegistry, InteractionRegistry};
use crate::tui::{Element, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

/// Check if an element or its descendants contain a focused widget (excluding buttons).
/// Used for panel focus styling: input widgets light up the enclosing
/// panel border instead of drawing their own.
pub fn element_contains_focused_non_button<Msg>(
    element: &Element<Msg>,
    focused_id: &FocusId,
) -> bool {
    match element {
        Element::TextInput { id, .. }
        | Element::TextArea { id, .. }
        | Element::Select { id, .. }
        | Element::Checkbox { id, .. }
        | Element::List { id, .. } => id == focused_id,
        Element::Column { items, .. } | Element::Row { items, .. } => items
            .iter()
            .any(|(_, child)| element_contains_focused_non_button(child, focused_id)),
        Element::Container { child, .. } | Element::Panel { child, .. } => {
            element_contains_focused_non_button(child, focused_id)
        }
        // Buttons draw their own focus border
        Element::Button { .. } => false,
        _ => false,
    }
}

/// Check if an element tree contains a Panel that itself contains a
/// focused widget (excluding buttons). A panel delegates focus styling
/// to the innermost panel around the focused widget.
pub fn element_contains_focused_non_button_panel<Msg>(
    element: &Element<Msg>,
    focused_id: &FocusId,
) -> bool {
    match element {
        Element::Panel { child, .. } => element_contains_focused_non_button(child, focused_id),
        Element::Column { items, .. } | Element::Row { items, .. } => items
            .iter()
            .any(|(_, child)| element_contains_focused_non_button_panel(child, focused_id)),
        Element::Container { child, .. } => {
            element_contains_focused_non_button_panel(child, focused_id)
        }
        _ => false,
    }
}

/// Render Panel element
pub fn render_panel<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    dropdown_registry: &mut DropdownRegistry<Msg>,
    focused_id: Option<&FocusId>,
    child: &Element<Msg>,
    title: &Option<String>,
    area: Rect,
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
    let child_has_focused_widget = focused_id
        .map(|fid| element_contains_focused_non_button(child, fid))
        .unwrap_or(false);

    let has_nested_focused_panel = focused_id
        .map(|fid| element_contains_focused_non_button_panel(child, fid))
        .unwrap_or(false);

    // Highlight only the innermost panel around the focused widget
    let border_color = if child_has_focused_widget && !has_nested_focused_panel {
        theme.accent_primary
    } else {
        theme.border_secondary
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_base));
    if let Some(title_text) = title {
        block = block.title(title_text.as_str());
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Render child in the inner area, marking it as inside a panel
    render_fn(
        frame,
        theme,
        registry,
        focus_registry,
        dropdown_registry,
        focused_id,
        child,
        inner_area,
        true,
    );
}
