use crossterm::event::KeyCode;

/// Event type for TextInput widget
#[derive(Clone, Debug)]
pub enum TextInputEvent {
    /// Input changed (includes typing, backspace, etc.)
    Changed(KeyCode),
    /// Submit action (Enter key)
    Submit,
}

/// Event type for TextArea widget
#[derive(Clone, Debug)]
pub enum TextAreaEvent {
    /// Input changed (typing, backspace, newline, cursor movement)
    Changed(KeyCode),
}

/// Event type for List widget
#[derive(Clone, Debug)]
pub enum ListEvent {
    /// Navigation keys (Up/Down/PageUp/PageDown/Home/End)
    Navigate(KeyCode),
    /// Item selected (Enter or click)
    Select,
}

/// Event type for Select widget
#[derive(Clone, Debug)]
pub enum SelectEvent {
    /// Navigation in dropdown (Up/Down)
    Navigate(KeyCode),
    /// Option selected (Enter or click)
    Select(usize),
    /// Widget lost focus (close dropdown)
    Blur,
}
