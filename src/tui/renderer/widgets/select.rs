use crate::tui::Theme;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{
    DropdownInfo, DropdownRegistry, FocusRegistry, FocusableInfo, InteractionRegistry,
};
use crate::tui::widgets::SelectEvent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

/// Create on_key handler for select elements (dropdown navigation)
pub fn select_on_key<Msg: Clone + Send + 'static>(
    is_open: bool,
    on_event: Option<fn(SelectEvent) -> Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| {
        let Some(on_event) = on_event else {
            return DispatchTarget::PassThrough;
        };
        if !is_open {
            // Closed: Enter/Space opens the dropdown, Esc passes
            // through for unfocus
            match key_event.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    DispatchTarget::AppMsg(on_event(SelectEvent::Navigate(key_event.code)))
                }
                _ => DispatchTarget::PassThrough,
            }
        } else {
            // Open: Up/Down/Enter/Esc drive the dropdown
            match key_event.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc => {
                    DispatchTarget::AppMsg(on_event(SelectEvent::Navigate(key_event.code)))
                }
                _ => DispatchTarget::PassThrough,
            }
        }
    })
}

/// Render Select element
pub fn render_select<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    dropdown_registry: &mut DropdownRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    options: &[String],
    selected: usize,
    is_open: bool,
    highlight: usize,
    on_event: &Option<fn(SelectEvent) -> Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    area: Rect,
    inside_panel: bool,
) {
    // Blur closes the dropdown via the event pattern
    let on_blur_handler = match on_event {
        Some(event_fn) => Some(event_fn(SelectEvent::Blur)),
        None => on_blur.clone(),
    };

    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: select_on_key(is_open, *on_event),
        on_focus: on_focus.clone(),
        on_blur: on_blur_handler,
        inside_panel,
    });

    let selected_text = options.get(selected).map(String::as_str).unwrap_or("");

    // Render borderless: selected value + arrow (like TextInput)
    let arrow = if is_open { " ▲" } else { " ▼" };
    let display_text = format!(" {}{}", selected_text, arrow);

    let text_widget = Paragraph::new(display_text).style(Style::default().fg(theme.text_primary));
    frame.render_widget(text_widget, area);

    // Click toggles the dropdown
    if let Some(event_fn) = on_event {
        registry.register_click(area, event_fn(SelectEvent::Navigate(KeyCode::Enter)));
    }

    // If open, register dropdown for overlay rendering (after main UI)
    if is_open && !options.is_empty() {
        dropdown_registry.register(DropdownInfo {
            select_area: area,
            options: options.to_vec(),
            selected: Some(selected),
            highlight,
            on_select: *on_event,
        });
    }
}
