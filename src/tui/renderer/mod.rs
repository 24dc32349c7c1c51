use crate::tui::element::FocusId;
use crate::tui::widgets::SelectEvent;
use crate::tui::{Element, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

mod dropdown_registry;
mod focus_registry;
mod interaction_registry;
mod widgets;

pub use dropdown_registry::{DropdownInfo, DropdownRegistry};
pub use focus_registry::{FocusRegistry, FocusableInfo};
pub use interaction_registry::InteractionRegistry;

use widgets::*;

/// Renders elements to the terminal
pub struct Renderer;

impl Renderer {
    pub fn render<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        dropdown_registry: &mut DropdownRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        Self::render_element(
            frame,
            theme,
            registry,
            focus_registry,
            dropdown_registry,
            focused_id,
            element,
            area,
            false,
        );
        // After the main UI, render open dropdowns as overlays
        Self::render_dropdowns(frame, theme, registry, dropdown_registry);
    }

    fn render_element<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        dropdown_registry: &mut DropdownRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
        inside_panel: bool,
    ) {
        if primitives::is_primitive(element) {
            primitives::render_primitive(frame, theme, element, area);
            return;
        }

        match element {
            Element::Button {
                id,
                label,
                on_press,
                on_focus,
                on_blur,
                style,
            } => {
                render_button(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    id,
                    label,
                    on_press,
                    on_focus,
                    on_blur,
                    style,
                    area,
                    inside_panel,
                );
            }

            Element::Checkbox {
                id,
                label,
                checked,
                on_toggle,
                on_focus,
                on_blur,
            } => {
                render_checkbox(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    id,
                    label,
                    *checked,
                    on_toggle,
                    on_focus,
                    on_blur,
                    area,
                    inside_panel,
                );
            }

            Element::Column { items, .. } => {
                layout::render_column(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    dropdown_registry,
                    focused_id,
                    items,
                    area,
                    inside_panel,
                    Self::render_element,
                );
            }

            Element::Row { items, .. } => {
                layout::render_row(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    dropdown_registry,
                    focused_id,
                    items,
                    area,
                    inside_panel,
                    Self::render_element,
                );
            }

            Element::Container { child, padding } => {
                layout::render_container(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    dropdown_registry,
                    focused_id,
                    child,
                    *padding,
                    area,
                    inside_panel,
                    Self::render_element,
                );
            }

            Element::Panel { child, title } => {
                render_panel(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    dropdown_registry,
                    focused_id,
                    child,
                    title,
                    area,
                    Self::render_element,
                );
            }

            Element::List {
                id,
                items,
                selected,
                scroll_offset,
                on_select,
                on_activate,
                on_navigate,
                on_focus,
                on_blur,
            } => {
                render_list(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    dropdown_registry,
                    focused_id,
                    id,
                    items,
                    *selected,
                    *scroll_offset,
                    on_select,
                    on_activate,
                    on_navigate,
                    on_focus,
                    on_blur,
                    area,
                    inside_panel,
                    Self::render_element,
                );
            }

            Element::TextInput {
                id,
                value,
                cursor_pos,
                scroll_offset,
                placeholder,
                on_event,
                on_focus,
                on_blur,
            } => {
                render_text_input(
                    frame,
                    theme,
                    focus_registry,
                    focused_id,
                    id,
                    value,
                    *cursor_pos,
                    *scroll_offset,
                    placeholder,
                    on_event,
                    on_focus,
                    on_blur,
                    area,
                    inside_panel,
                );
            }

            Element::TextArea {
                id,
                value,
                cursor,
                scroll_offset,
                placeholder,
                on_event,
                on_focus,
                on_blur,
                ..
            } => {
                render_text_area(
                    frame,
                    theme,
                    focus_registry,
                    focused_id,
                    id,
                    value,
                    *cursor,
                    *scroll_offset,
                    placeholder,
                    on_event,
                    on_focus,
                    on_blur,
                    area,
                    inside_panel,
                );
            }

            Element::Select {
                id,
                options,
                selected,
                is_open,
                highlight,
                on_event,
                on_focus,
                on_blur,
            } => {
                render_select(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    dropdown_registry,
                    focused_id,
                    id,
                    options,
                    *selected,
                    *is_open,
                    *highlight,
                    on_event,
                    on_focus,
                    on_blur,
                    area,
                    inside_panel,
                );
            }

            // Primitives are handled at the top of the function
            Element::None | Element::Text { .. } | Element::StyledText { .. } => {
                unreachable!("Primitives should be handled before the match statement")
            }
        }
    }

    /// Render all registered dropdowns as overlays (called after main UI rendering)
    fn render_dropdowns<Msg: Clone>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        dropdown_registry: &DropdownRegistry<Msg>,
    ) {
        for dropdown in dropdown_registry.dropdowns() {
            // Position below the select, or above if there is no room
            let dropdown_height = (dropdown.options.len() as u16).min(10) + 2; // +2 for borders
            let dropdown_y = if dropdown.select_area.y
                + dropdown.select_area.height
                + dropdown_height
                <= frame.area().height
            {
                dropdown.select_area.y + dropdown.select_area.height
            } else {
                dropdown.select_area.y.saturating_sub(dropdown_height)
            };

            let dropdown_area = Rect {
                x: dropdown.select_area.x,
                y: dropdown_y,
                width: dropdown.select_area.width,
                height: dropdown_height,
            };

            // Clear the area to remove any bleed-through
            frame.render_widget(Clear, dropdown_area);

            // Solid background fill under the options
            let background = Paragraph::new("").style(Style::default().bg(theme.bg_base));
            frame.render_widget(background, dropdown_area);

            let dropdown_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_primary));

            let dropdown_inner = dropdown_block.inner(dropdown_area);
            frame.render_widget(dropdown_block, dropdown_area);

            // Small lists, no virtual scrolling needed
            let max_visible = dropdown_inner.height as usize;
            let num_to_render = dropdown.options.len().min(max_visible);

            for idx in 0..num_to_render {
                let line_area = Rect {
                    x: dropdown_inner.x,
                    y: dropdown_inner.y + idx as u16,
                    width: dropdown_inner.width,
                    height: 1,
                };

                let option_text = &dropdown.options[idx];

                let (prefix, fg_color, bg_color) = if idx == dropdown.highlight {
                    ("> ", theme.text_primary, theme.bg_surface)
                } else if Some(idx) == dropdown.selected {
                    ("✓ ", theme.accent_success, theme.bg_base)
                } else {
                    ("  ", theme.text_primary, theme.bg_base)
                };

                let option_display = format!("{}{}", prefix, option_text);
                let option_widget = Paragraph::new(option_display)
                    .style(Style::default().fg(fg_color).bg(bg_color));
                frame.render_widget(option_widget, line_area);

                // Register click handler for this option
                if let Some(event_fn) = dropdown.on_select {
                    registry.register_click(line_area, event_fn(SelectEvent::Select(idx)));
                }
            }
        }
    }
}
