use crate::tui::Theme;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, FocusableInfo};
use crate::tui::widgets::TextAreaEvent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

/// Create on_key handler for text areas. Unlike single-line inputs,
/// Enter inserts a newline instead of submitting.
pub fn text_area_on_key<Msg: Clone + Send + 'static>(
    on_event: Option<fn(TextAreaEvent) -> Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| match key_event.code {
        // Let runtime handle unfocus
        KeyCode::Esc => DispatchTarget::PassThrough,
        KeyCode::Tab | KeyCode::BackTab => DispatchTarget::PassThrough,
        _ => match on_event {
            Some(f) => DispatchTarget::AppMsg(f(TextAreaEvent::Changed(key_event.code))),
            None => DispatchTarget::PassThrough,
        },
    })
}

/// Render TextArea element
pub fn render_text_area<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    value: &str,
    cursor: (usize, usize),
    scroll_offset: usize,
    placeholder: &Option<String>,
    on_event: &Option<fn(TextAreaEvent) -> Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    area: Rect,
    inside_panel: bool,
) {
    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: text_area_on_key(*on_event),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
        inside_panel,
    });

    let is_focused = focused_id == Some(id);

    if value.is_empty() && !is_focused {
        let text = match placeholder {
            Some(ph) => format!(" {}", ph),
            None => String::from(" "),
        };
        let widget =
            Paragraph::new(text).style(Style::default().fg(theme.border_primary).italic());
        frame.render_widget(widget, area);
        return;
    }

    let (cursor_row, cursor_col) = cursor;
    let visible_rows = area.height as usize;
    let all_lines: Vec<&str> = value.split('\n').collect();
    let start_row = scroll_offset.min(all_lines.len().saturating_sub(1));
    let end_row = (start_row + visible_rows).min(all_lines.len());

    let mut lines: Vec<Line> = Vec::with_capacity(end_row - start_row);
    for (row_idx, raw) in all_lines[start_row..end_row].iter().enumerate() {
        let absolute_row = start_row + row_idx;
        let text = if is_focused && absolute_row == cursor_row {
            let mut chars: Vec<char> = raw.chars().collect();
            let col = cursor_col.min(chars.len());
            chars.insert(col, '│');
            let with_cursor: String = chars.into_iter().collect();
            format!(" {}", with_cursor)
        } else {
            format!(" {}", raw)
        };
        lines.push(Line::from(text));
    }

    let widget = Paragraph::new(lines).style(Style::default().fg(theme.text_primary));
    frame.render_widget(widget, area);
}
