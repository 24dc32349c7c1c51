use crate::tui::Theme;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, FocusableInfo};
use crate::tui::widgets::TextInputEvent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::Paragraph,
};

/// Create on_key handler for text inputs
pub fn text_input_on_key<Msg: Clone + Send + 'static>(
    on_event: Option<fn(TextInputEvent) -> Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| match key_event.code {
        KeyCode::Enter => match on_event {
            Some(f) => DispatchTarget::AppMsg(f(TextInputEvent::Submit)),
            None => DispatchTarget::PassThrough,
        },
        // Let runtime handle unfocus
        KeyCode::Esc => DispatchTarget::PassThrough,
        KeyCode::Tab | KeyCode::BackTab => DispatchTarget::PassThrough,
        _ => match on_event {
            Some(f) => DispatchTarget::AppMsg(f(TextInputEvent::Changed(key_event.code))),
            None => DispatchTarget::PassThrough,
        },
    })
}

/// Render TextInput element
pub fn render_text_input<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    value: &str,
    cursor_pos: usize,
    scroll_offset: usize,
    placeholder: &Option<String>,
    on_event: &Option<fn(TextInputEvent) -> Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    area: Rect,
    inside_panel: bool,
) {
    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: text_input_on_key(*on_event),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
        inside_panel,
    });

    let is_focused = focused_id == Some(id);

    // Visible width minus minimal padding
    let visible_width = area.width.saturating_sub(2) as usize;

    let chars: Vec<char> = value.chars().collect();
    let start_idx = scroll_offset.min(chars.len());
    let end_idx = (start_idx + visible_width).min(chars.len());
    let visible_text: String = chars[start_idx..end_idx].iter().collect();

    let cursor_in_visible = cursor_pos.saturating_sub(start_idx);

    let display_text = if value.is_empty() && !is_focused {
        // Show placeholder
        match placeholder {
            Some(ph) => format!(" {}", ph),
            None => String::from(" "),
        }
    } else if is_focused && cursor_in_visible <= visible_text.chars().count() {
        let mut chars: Vec<char> = visible_text.chars().collect();
        chars.insert(cursor_in_visible, '│');
        let text: String = chars.into_iter().collect();
        format!(" {}", text)
    } else {
        format!(" {}", visible_text)
    };

    let text_style = if value.is_empty() && !is_focused {
        // Placeholder style: italic, dim color
        Style::default().fg(theme.border_primary).italic()
    } else {
        Style::default().fg(theme.text_primary)
    };

    // Render text without border
    let widget = Paragraph::new(display_text).style(text_style);
    frame.render_widget(widget, area);
}
