use crate::tui::Theme;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, FocusableInfo, InteractionRegistry};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

/// Create on_key handler for buttons (Enter or Space activates)
pub fn button_on_key<Msg: Clone + Send + 'static>(
    on_press: Option<Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| match key_event.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(msg) = on_press.clone() {
                DispatchTarget::AppMsg(msg)
            } else {
                DispatchTarget::PassThrough
            }
        }
        _ => DispatchTarget::PassThrough,
    })
}

/// Render Button element
pub fn render_button<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    label: &str,
    on_press: &Option<Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    style: &Option<Style>,
    area: Rect,
    inside_panel: bool,
) {
    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: button_on_key(on_press.clone()),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
        inside_panel,
    });

    if let Some(msg) = on_press {
        registry.register_click(area, msg.clone());
    }

    let is_focused = focused_id == Some(id);

    let default_style = Style::default().fg(theme.text_primary);
    // Buttons always show their own focus border, panels don't take
    // over for them
    let border_style = if is_focused {
        Style::default().fg(theme.accent_primary)
    } else {
        Style::default().fg(theme.border_secondary)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let widget = Paragraph::new(label)
        .block(block)
        .alignment(Alignment::Center)
        .style(style.unwrap_or(default_style));
    frame.render_widget(widget, area);
}
