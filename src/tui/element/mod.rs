use ratatui::style::Style;
use ratatui::text::Line;

mod builders;
pub use builders::*;

/// Stable identifier for focusable UI elements. Owned strings rather
/// than statics: form controls are generated from runtime schemas, so
/// ids like `field-email` only exist once a catalog has loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for FocusId {
    fn from(s: &str) -> Self {
        FocusId(s.to_string())
    }
}

impl From<String> for FocusId {
    fn from(s: String) -> Self {
        FocusId(s)
    }
}

/// Layout constraints for sizing elements within containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConstraint {
    /// Fixed size (exact number of lines/columns)
    Length(u16),
    /// Minimum size (at least this many lines/columns)
    Min(u16),
    /// Proportional fill (weight for distributing remaining space)
    Fill(u16),
}

/// Declarative UI elements that compose to form the view
#[derive(Clone)]
pub enum Element<Msg> {
    /// Empty element that renders nothing
    None,

    /// Static text
    Text { content: String, style: Option<Style> },

    /// Styled text with multiple spans
    StyledText {
        line: Line<'static>,
        background: Option<Style>,
    },

    /// Interactive button
    Button {
        id: FocusId,
        label: String,
        on_press: Option<Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
        style: Option<Style>,
    },

    /// Boolean toggle with its label rendered adjacent
    Checkbox {
        id: FocusId,
        label: String,
        checked: bool,
        on_toggle: Option<Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
    },

    /// Vertical layout container
    Column {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Horizontal layout container
    Row {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Container with padding/margins
    Container {
        child: Box<Element<Msg>>,
        padding: u16,
    },

    /// Panel with border
    Panel {
        child: Box<Element<Msg>>,
        title: Option<String>,
    },

    /// Scrollable list of items
    List {
        id: FocusId,
        items: Vec<Element<Msg>>,
        selected: Option<usize>,
        scroll_offset: usize,
        on_select: Option<fn(usize) -> Msg>,
        on_activate: Option<fn(usize) -> Msg>,
        on_navigate: Option<fn(crossterm::event::KeyCode) -> Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
    },

    /// Single-line text input
    TextInput {
        id: FocusId,
        value: String,
        cursor_pos: usize,
        scroll_offset: usize,
        placeholder: Option<String>,
        on_event: Option<fn(crate::tui::widgets::TextInputEvent) -> Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
    },

    /// Multi-line text input with a fixed visible height
    TextArea {
        id: FocusId,
        value: String,
        cursor: (usize, usize),
        scroll_offset: usize,
        rows: u16,
        placeholder: Option<String>,
        on_event: Option<fn(crate::tui::widgets::TextAreaEvent) -> Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
    },

    /// Select/Dropdown widget
    Select {
        id: FocusId,
        options: Vec<String>,
        selected: usize,
        is_open: bool,
        highlight: usize,
        on_event: Option<fn(crate::tui::widgets::SelectEvent) -> Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
    },
}

impl<Msg> Element<Msg> {
    /// Create a text element
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: None,
        }
    }

    /// Create a styled text element with optional background fill
    pub fn styled_text(line: Line<'static>) -> StyledTextBuilder<Msg> {
        StyledTextBuilder {
            line,
            background: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create a button element
    pub fn button(id: impl Into<FocusId>, label: impl Into<String>) -> ButtonBuilder<Msg> {
        ButtonBuilder {
            id: id.into(),
            label: label.into(),
            on_press: None,
            on_focus: None,
            on_blur: None,
            style: None,
        }
    }

    /// Create a checkbox element
    pub fn checkbox(
        id: impl Into<FocusId>,
        label: impl Into<String>,
        checked: bool,
    ) -> CheckboxBuilder<Msg> {
        CheckboxBuilder {
            id: id.into(),
            label: label.into(),
            checked,
            on_toggle: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// Create a column layout from children with default constraints
    pub fn column(children: Vec<Element<Msg>>) -> ColumnBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();
        ColumnBuilder { items, spacing: 1 }
    }

    /// Create a row layout from children with default constraints
    pub fn row(children: Vec<Element<Msg>>) -> RowBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();
        RowBuilder { items, spacing: 1 }
    }

    /// Wrap element in a container
    pub fn container(child: Element<Msg>) -> ContainerBuilder<Msg> {
        ContainerBuilder {
            child: Box::new(child),
            padding: 1,
        }
    }

    /// Wrap element in a panel with border
    pub fn panel(child: Element<Msg>) -> PanelBuilder<Msg> {
        PanelBuilder {
            child: Box::new(child),
            title: None,
        }
    }

    /// Create a list element from items
    pub fn list<T>(
        id: impl Into<FocusId>,
        items: &[T],
        state: &crate::tui::widgets::ListState,
    ) -> ListBuilder<Msg>
    where
        T: crate::tui::widgets::ListItem<Msg = Msg>,
    {
        let elements = items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_element(state.selected() == Some(i)))
            .collect();

        ListBuilder {
            id: id.into(),
            items: elements,
            selected: state.selected(),
            scroll_offset: state.scroll_offset(),
            on_select: None,
            on_activate: None,
            on_navigate: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// Create a text input element
    pub fn text_input(
        id: impl Into<FocusId>,
        value: &str,
        state: &crate::tui::widgets::TextInputState,
    ) -> TextInputBuilder<Msg> {
        TextInputBuilder {
            id: id.into(),
            value: value.to_string(),
            cursor_pos: state.cursor_pos(),
            scroll_offset: state.scroll_offset(),
            placeholder: None,
            on_event: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// Create a multi-line text area element
    pub fn text_area(
        id: impl Into<FocusId>,
        value: &str,
        state: &crate::tui::widgets::TextAreaState,
    ) -> TextAreaBuilder<Msg> {
        TextAreaBuilder {
            id: id.into(),
            value: value.to_string(),
            cursor: state.cursor(),
            scroll_offset: state.scroll_offset(),
            rows: 4,
            placeholder: None,
            on_event: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// Create a select/dropdown element
    pub fn select(
        id: impl Into<FocusId>,
        options: Vec<String>,
        state: &mut crate::tui::widgets::SelectState,
    ) -> SelectBuilder<Msg> {
        // Update state with current option count
        state.update_option_count(options.len());

        SelectBuilder {
            id: id.into(),
            options,
            selected: state.selected(),
            is_open: state.is_open(),
            highlight: state.highlighted(),
            on_event: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// Get the default layout constraint for this element type
    pub fn default_constraint(&self) -> LayoutConstraint {
        match self {
            Element::None => LayoutConstraint::Length(0),
            Element::Text { .. } => LayoutConstraint::Length(1),
            Element::StyledText { .. } => LayoutConstraint::Length(1),
            Element::Button { .. } => LayoutConstraint::Length(3),
            Element::Checkbox { .. } => LayoutConstraint::Length(1),
            Element::Column { .. } => LayoutConstraint::Fill(1),
            Element::Row { .. } => LayoutConstraint::Fill(1),
            Element::Container { .. } => LayoutConstraint::Fill(1),
            Element::Panel { child, .. } => {
                // Panel sizes to child + 2 lines for borders (top + bottom)
                match child.default_constraint() {
                    LayoutConstraint::Length(n) => LayoutConstraint::Length(n + 2),
                    LayoutConstraint::Min(n) => LayoutConstraint::Min(n + 2),
                    LayoutConstraint::Fill(w) => LayoutConstraint::Fill(w),
                }
            }
            Element::List { .. } => LayoutConstraint::Fill(1),
            Element::TextInput { .. } => LayoutConstraint::Length(1),
            Element::TextArea { rows, .. } => LayoutConstraint::Length(*rows),
            Element::Select { .. } => LayoutConstraint::Length(1), // Borderless like TextInput
        }
    }
}

impl<Msg> Default for Element<Msg> {
    fn default() -> Self {
        Element::None
    }
}
