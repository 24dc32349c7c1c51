use ratatui::style::Style;
use ratatui::text::Line;

use super::{Element, FocusId, LayoutConstraint};
use crate::tui::widgets::{SelectEvent, TextAreaEvent, TextInputEvent};

/// Builder for StyledText elements
pub struct StyledTextBuilder<Msg> {
    pub(super) line: Line<'static>,
    pub(super) background: Option<Style>,
    pub(super) _phantom: std::marker::PhantomData<Msg>,
}

impl<Msg> StyledTextBuilder<Msg> {
    pub fn background(mut self, style: Style) -> Self {
        self.background = Some(style);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::StyledText {
            line: self.line,
            background: self.background,
        }
    }
}

/// Builder for Button elements
pub struct ButtonBuilder<Msg> {
    pub(super) id: FocusId,
    pub(super) label: String,
    pub(super) on_press: Option<Msg>,
    pub(super) on_focus: Option<Msg>,
    pub(super) on_blur: Option<Msg>,
    pub(super) style: Option<Style>,
}

impl<Msg> ButtonBuilder<Msg> {
    pub fn on_press(mut self, msg: Msg) -> Self {
        self.on_press = Some(msg);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Button {
            id: self.id,
            label: self.label,
            on_press: self.on_press,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
            style: self.style,
        }
    }
}

/// Builder for Checkbox elements
pub struct CheckboxBuilder<Msg> {
    pub(super) id: FocusId,
    pub(super) label: String,
    pub(super) checked: bool,
    pub(super) on_toggle: Option<Msg>,
    pub(super) on_focus: Option<Msg>,
    pub(super) on_blur: Option<Msg>,
}

impl<Msg> CheckboxBuilder<Msg> {
    pub fn on_toggle(mut self, msg: Msg) -> Self {
        self.on_toggle = Some(msg);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Checkbox {
            id: self.id,
            label: self.label,
            checked: self.checked,
            on_toggle: self.on_toggle,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}

/// Builder for Column elements
pub struct ColumnBuilder<Msg> {
    pub(super) items: Vec<(LayoutConstraint, Element<Msg>)>,
    pub(super) spacing: u16,
}

impl<Msg> ColumnBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 1,
        }
    }

    pub fn from_items(items: Vec<(LayoutConstraint, Element<Msg>)>) -> Self {
        Self { items, spacing: 1 }
    }

    pub fn add(mut self, element: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, element));
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Column {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for ColumnBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Row elements
pub struct RowBuilder<Msg> {
    pub(super) items: Vec<(LayoutConstraint, Element<Msg>)>,
    pub(super) spacing: u16,
}

impl<Msg> RowBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 1,
        }
    }

    pub fn from_items(items: Vec<(LayoutConstraint, Element<Msg>)>) -> Self {
        Self { items, spacing: 1 }
    }

    pub fn add(mut self, element: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, element));
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Row {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for RowBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Container elements
pub struct ContainerBuilder<Msg> {
    pub(super) child: Box<Element<Msg>>,
    pub(super) padding: u16,
}

impl<Msg> ContainerBuilder<Msg> {
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Container {
            child: self.child,
            padding: self.padding,
        }
    }
}

/// Builder for Panel elements
pub struct PanelBuilder<Msg> {
    pub(super) child: Box<Element<Msg>>,
    pub(super) title: Option<String>,
}

impl<Msg> PanelBuilder<Msg> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Panel {
            child: self.child,
            title: self.title,
        }
    }
}

/// Builder for List elements
pub struct ListBuilder<Msg> {
    pub(super) id: FocusId,
    pub(super) items: Vec<Element<Msg>>,
    pub(super) selected: Option<usize>,
    pub(super) scroll_offset: usize,
    pub(super) on_select: Option<fn(usize) -> Msg>,
    pub(super) on_activate: Option<fn(usize) -> Msg>,
    pub(super) on_navigate: Option<fn(crossterm::event::KeyCode) -> Msg>,
    pub(super) on_focus: Option<Msg>,
    pub(super) on_blur: Option<Msg>,
}

impl<Msg> ListBuilder<Msg> {
    pub fn on_select(mut self, f: fn(usize) -> Msg) -> Self {
        self.on_select = Some(f);
        self
    }

    pub fn on_activate(mut self, f: fn(usize) -> Msg) -> Self {
        self.on_activate = Some(f);
        self
    }

    pub fn on_navigate(mut self, f: fn(crossterm::event::KeyCode) -> Msg) -> Self {
        self.on_navigate = Some(f);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::List {
            id: self.id,
            items: self.items,
            selected: self.selected,
            scroll_offset: self.scroll_offset,
            on_select: self.on_select,
            on_activate: self.on_activate,
            on_navigate: self.on_navigate,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}

/// Builder for TextInput elements
pub struct TextInputBuilder<Msg> {
    pub(super) id: FocusId,
    pub(super) value: String,
    pub(super) cursor_pos: usize,
    pub(super) scroll_offset: usize,
    pub(super) placeholder: Option<String>,
    pub(super) on_event: Option<fn(TextInputEvent) -> Msg>,
    pub(super) on_focus: Option<Msg>,
    pub(super) on_blur: Option<Msg>,
}

impl<Msg> TextInputBuilder<Msg> {
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn on_event(mut self, f: fn(TextInputEvent) -> Msg) -> Self {
        self.on_event = Some(f);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::TextInput {
            id: self.id,
            value: self.value,
            cursor_pos: self.cursor_pos,
            scroll_offset: self.scroll_offset,
            placeholder: self.placeholder,
            on_event: self.on_event,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}

/// Builder for TextArea elements
pub struct TextAreaBuilder<Msg> {
    pub(super) id: FocusId,
    pub(super) value: String,
    pub(super) cursor: (usize, usize),
    pub(super) scroll_offset: usize,
    pub(super) rows: u16,
    pub(super) placeholder: Option<String>,
    pub(super) on_event: Option<fn(TextAreaEvent) -> Msg>,
    pub(super) on_focus: Option<Msg>,
    pub(super) on_blur: Option<Msg>,
}

impl<Msg> TextAreaBuilder<Msg> {
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn on_event(mut self, f: fn(TextAreaEvent) -> Msg) -> Self {
        self.on_event = Some(f);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::TextArea {
            id: self.id,
            value: self.value,
            cursor: self.cursor,
            scroll_offset: self.scroll_offset,
            rows: self.rows,
            placeholder: self.placeholder,
            on_event: self.on_event,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}

/// Builder for Select elements
pub struct SelectBuilder<Msg> {
    pub(super) id: FocusId,
    pub(super) options: Vec<String>,
    pub(super) selected: usize,
    pub(super) is_open: bool,
    pub(super) highlight: usize,
    pub(super) on_event: Option<fn(SelectEvent) -> Msg>,
    pub(super) on_focus: Option<Msg>,
    pub(super) on_blur: Option<Msg>,
}

impl<Msg> SelectBuilder<Msg> {
    pub fn on_event(mut self, f: fn(SelectEvent) -> Msg) -> Self {
        self.on_event = Some(f);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Select {
            id: self.id,
            options: self.options,
            selected: self.selected,
            is_open: self.is_open,
            highlight: self.highlight,
            on_event: self.on_event,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}
