use crossterm::event::{KeyCode, KeyModifiers};

/// A keyboard shortcut: key code plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers |= KeyModifiers::CONTROL;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers |= KeyModifiers::ALT;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers |= KeyModifiers::SHIFT;
        self
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.code == code && self.modifiers == modifiers
    }
}

/// Declarative event sources an app listens to while it runs
pub enum Subscription<Msg> {
    /// Global keyboard shortcut, handled before focus routing falls
    /// through to nothing
    Keyboard {
        key: KeyBinding,
        description: String,
        msg: Msg,
    },
}

impl<Msg> Subscription<Msg> {
    pub fn keyboard(key: KeyBinding, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key,
            description: description.into(),
            msg,
        }
    }
}
