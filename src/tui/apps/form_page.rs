use std::collections::HashMap;
use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;

use crate::api::{
    CatalogResponse, DemoApi, FieldDescriptor, FieldKind, FieldValue, FormsApi, Item,
    SubmissionResponse,
};
use crate::forms::{FormState, filter, validate};
use crate::tui::element::ColumnBuilder;
use crate::tui::widgets::{
    ListItem, ListState, SelectEvent, SelectState, TextAreaEvent, TextAreaState, TextInputEvent,
    TextInputState,
};
use crate::tui::{App, Command, Element, KeyBinding, LayoutConstraint, Resource, Subscription, Theme};
use crate::{col, row, spacer, use_constraints};

// Fallback list height for key handling; the real viewport height is
// only known during rendering.
const LIST_FALLBACK_HEIGHT: usize = 10;

/// Per-field editor state. Checkboxes are stateless (the value is the
/// whole state), so they have no entry here.
enum FieldEditor {
    Input(TextInputState),
    Area(TextAreaState),
    Choice(SelectState),
}

/// The item catalog page: searchable sidebar plus the form for the
/// currently opened item.
pub struct FormPageState {
    client: Arc<dyn FormsApi>,
    catalog: Resource<Vec<Item>, String>,
    search: String,
    search_state: TextInputState,
    sidebar: ListState,
    selected_item: Option<String>,
    form: FormState,
    editors: HashMap<String, FieldEditor>,
    active_field: Option<String>,
}

impl Default for FormPageState {
    fn default() -> Self {
        Self {
            client: Arc::new(DemoApi),
            catalog: Resource::NotAsked,
            search: String::new(),
            search_state: TextInputState::new(),
            sidebar: ListState::new(),
            selected_item: None,
            form: FormState::default(),
            editors: HashMap::new(),
            active_field: None,
        }
    }
}

#[derive(Clone)]
pub enum Msg {
    ReloadRequested,
    ItemsFetched(Result<CatalogResponse, String>),
    SearchEvent(TextInputEvent),
    ListNavigated(KeyCode),
    ItemSelected(usize),
    ItemActivated(usize),
    FieldFocused(String),
    FieldInput(TextInputEvent),
    FieldAreaInput(TextAreaEvent),
    FieldSelect(SelectEvent),
    CheckboxToggled(String),
    SubmitRequested,
    SubmitFinished {
        generation: u64,
        result: Result<SubmissionResponse, String>,
    },
    QuitRequested,
}

/// What the main area shows. Exactly one of these holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DisplayState {
    Loading,
    Failed,
    Empty,
    Prompt,
    Form,
}

pub(crate) fn display_state(
    catalog: &Resource<Vec<Item>, String>,
    selected_item: Option<&str>,
) -> DisplayState {
    match catalog {
        Resource::NotAsked | Resource::Loading => DisplayState::Loading,
        Resource::Failure(_) => DisplayState::Failed,
        Resource::Success(items) if items.is_empty() => DisplayState::Empty,
        Resource::Success(items) => match selected_item {
            Some(id) if items.iter().any(|i| i.id == id) => DisplayState::Form,
            _ => DisplayState::Prompt,
        },
    }
}

struct SidebarRow {
    name: String,
    is_open: bool,
}

impl ListItem for SidebarRow {
    type Msg = Msg;

    fn to_element(&self, is_selected: bool) -> Element<Msg> {
        let theme = crate::global_runtime_config().theme();
        let style = if is_selected {
            Style::default().fg(theme.text_primary).bg(theme.bg_surface)
        } else if self.is_open {
            Style::default().fg(theme.accent_primary)
        } else {
            Style::default().fg(theme.text_primary)
        };
        Element::styled_text(Line::from(format!(" {}", self.name)).style(style)).build()
    }
}

pub struct FormPage;

impl FormPage {
    fn fetch_items(state: &FormPageState) -> Command<Msg> {
        let client = state.client.clone();
        Command::perform(
            async move { client.fetch_items().await.map_err(|e| e.to_string()) },
            Msg::ItemsFetched,
        )
    }

    fn open_item(state: &mut FormPageState, item: Item) {
        state.form.reset(&item.fields);
        state.editors = build_editors(&item.fields, &state.form);
        state.active_field = None;
        state.selected_item = Some(item.id);
    }

    fn submit(state: &mut FormPageState) -> Command<Msg> {
        // Ignore activations while a submission is already in flight
        if state.form.submitting {
            return Command::None;
        }
        let Some(item) = selected_item(state).cloned() else {
            return Command::None;
        };

        state.form.error = None;
        state.form.result = None;

        if let Err(message) = validate(&item.fields, &state.form.values) {
            state.form.error = Some(message);
            return Command::None;
        }

        state.form.submitting = true;
        let generation = state.form.generation;
        let payload = state.form.payload(&item.fields);
        let client = state.client.clone();
        let name = item.name.clone();
        log::info!("submitting form for {:?}", name);
        Command::perform(
            async move {
                client
                    .submit_form(&name, payload)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Msg::SubmitFinished { generation, result },
        )
    }

    fn handle_select_event(state: &mut FormPageState, event: SelectEvent) {
        let Some(field_id) = state.active_field.clone() else {
            return;
        };
        let Some(field) = selected_item(state)
            .and_then(|item| item.fields.iter().find(|f| f.id == field_id))
            .cloned()
        else {
            return;
        };
        let Some(FieldEditor::Choice(select)) = state.editors.get_mut(&field_id) else {
            return;
        };

        let committed = match event {
            SelectEvent::Navigate(KeyCode::Enter | KeyCode::Char(' ')) if !select.is_open() => {
                select.open();
                None
            }
            SelectEvent::Navigate(KeyCode::Enter) => {
                select.select_highlighted();
                Some(select.selected())
            }
            SelectEvent::Navigate(KeyCode::Esc) => {
                select.close();
                None
            }
            other => {
                let committed = select.handle_event(other);
                if committed.is_some() {
                    select.close();
                }
                committed
            }
        };

        if let Some(index) = committed {
            if let Some(option) = field.options.get(index) {
                state
                    .form
                    .set_value(&field_id, FieldValue::text(option.value.clone()));
            }
        }
    }
}

impl App for FormPage {
    type State = FormPageState;
    type Msg = Msg;

    fn init() -> Command<Msg> {
        Command::perform(std::future::ready(()), |_| Msg::ReloadRequested)
    }

    fn update(state: &mut FormPageState, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::ReloadRequested => {
                if state.catalog.is_loading() {
                    return Command::None;
                }
                state.catalog = Resource::Loading;
                Self::fetch_items(state)
            }

            Msg::ItemsFetched(Ok(response)) => {
                if response.success {
                    log::info!("{}", response.message);
                    state.catalog = Resource::Success(response.items);
                } else {
                    state.catalog = Resource::Failure(format!(
                        "Failed to load items: {}",
                        response.message
                    ));
                }
                Command::None
            }

            Msg::ItemsFetched(Err(reason)) => {
                log::error!("catalog fetch failed: {}", reason);
                state.catalog = Resource::Failure(format!("Failed to load items: {}", reason));
                Command::None
            }

            Msg::SearchEvent(TextInputEvent::Changed(code)) => {
                if let Some(new_value) = state.search_state.handle_key(code, &state.search) {
                    state.search = new_value;
                    // Indexes shift when the filter changes
                    state.sidebar.select(None);
                }
                Command::None
            }

            Msg::SearchEvent(TextInputEvent::Submit) => Command::None,

            Msg::ListNavigated(code) => {
                let count = visible_items(state).len();
                state.sidebar.handle_key(code, count, LIST_FALLBACK_HEIGHT);
                Command::None
            }

            Msg::ItemSelected(index) => {
                state.sidebar.select(Some(index));
                Command::None
            }

            Msg::ItemActivated(index) => {
                let item = visible_items(state).get(index).map(|i| (*i).clone());
                if let Some(item) = item {
                    state.sidebar.select(Some(index));
                    Self::open_item(state, item);
                }
                Command::None
            }

            Msg::FieldFocused(id) => {
                state.active_field = Some(id);
                Command::None
            }

            Msg::FieldInput(TextInputEvent::Changed(code)) => {
                let Some(field_id) = state.active_field.clone() else {
                    return Command::None;
                };
                let current = state
                    .form
                    .value(&field_id)
                    .map(|v| v.as_text().to_string())
                    .unwrap_or_default();
                if let Some(FieldEditor::Input(input)) = state.editors.get_mut(&field_id) {
                    if let Some(new_value) = input.handle_key(code, &current) {
                        state.form.set_value(&field_id, FieldValue::text(new_value));
                    }
                }
                Command::None
            }

            Msg::FieldInput(TextInputEvent::Submit) => Self::update(state, Msg::SubmitRequested),

            Msg::FieldAreaInput(TextAreaEvent::Changed(code)) => {
                let Some(field_id) = state.active_field.clone() else {
                    return Command::None;
                };
                let current = state
                    .form
                    .value(&field_id)
                    .map(|v| v.as_text().to_string())
                    .unwrap_or_default();
                if let Some(FieldEditor::Area(area)) = state.editors.get_mut(&field_id) {
                    if let Some(new_value) = area.handle_key(code, &current) {
                        state.form.set_value(&field_id, FieldValue::text(new_value));
                    }
                }
                Command::None
            }

            Msg::FieldSelect(event) => {
                Self::handle_select_event(state, event);
                Command::None
            }

            Msg::CheckboxToggled(id) => {
                let checked = state
                    .form
                    .value(&id)
                    .map(FieldValue::as_bool)
                    .unwrap_or(false);
                state.form.set_value(&id, FieldValue::Bool(!checked));
                Command::None
            }

            Msg::SubmitRequested => Self::submit(state),

            Msg::SubmitFinished { generation, result } => {
                // A reset or reselect happened after this submission
                // started; its outcome no longer applies
                if generation != state.form.generation {
                    log::debug!("dropping stale submission result");
                    return Command::None;
                }
                state.form.submitting = false;
                match result {
                    Ok(response) if response.success => {
                        state.form.result = Some(response);
                    }
                    Ok(response) => {
                        state.form.error = Some(response.message);
                    }
                    Err(reason) => {
                        state.form.error = Some(format!("Submission failed: {}", reason));
                    }
                }
                Command::None
            }

            Msg::QuitRequested => Command::Quit,
        }
    }

    fn view(state: &mut FormPageState, theme: &Theme) -> Element<Msg> {
        use_constraints!();
        let sidebar = sidebar_panel(state, theme);
        let main = main_panel(state, theme);
        row![
            sidebar => Length(34),
            main => Fill(1),
        ]
    }

    fn subscriptions(state: &FormPageState) -> Vec<Subscription<Msg>> {
        let mut subs = vec![
            Subscription::keyboard(KeyBinding::new(KeyCode::Char('q')), "Quit", Msg::QuitRequested),
            Subscription::keyboard(
                KeyBinding::new(KeyCode::Char('c')).ctrl(),
                "Quit",
                Msg::QuitRequested,
            ),
        ];
        if state.catalog.is_failure() {
            subs.push(Subscription::keyboard(
                KeyBinding::new(KeyCode::Char('r')),
                "Retry fetch",
                Msg::ReloadRequested,
            ));
        }
        subs
    }

    fn title() -> &'static str {
        "Form Deck"
    }

    fn status(state: &FormPageState, theme: &Theme) -> Option<Line<'static>> {
        let hint = match display_state(&state.catalog, state.selected_item.as_deref()) {
            DisplayState::Failed => "r: retry · q: quit",
            DisplayState::Form => "Tab: next field · Enter: activate · Esc: unfocus · q: quit",
            _ => "Tab: focus · Enter: open item · q: quit",
        };
        Some(Line::from(hint).style(Style::default().fg(theme.text_tertiary)))
    }
}

fn selected_item(state: &FormPageState) -> Option<&Item> {
    let id = state.selected_item.as_deref()?;
    state.catalog.value()?.iter().find(|item| item.id == id)
}

fn visible_items(state: &FormPageState) -> Vec<&Item> {
    state
        .catalog
        .value()
        .map(|items| filter(items, &state.search))
        .unwrap_or_default()
}

fn build_editors(fields: &[FieldDescriptor], form: &FormState) -> HashMap<String, FieldEditor> {
    let mut editors = HashMap::new();
    for field in fields {
        let seeded = form.value(&field.id).map(FieldValue::as_text).unwrap_or("");
        let editor = match field.kind {
            FieldKind::Checkbox => continue,
            FieldKind::Textarea => FieldEditor::Area(TextAreaState::new()),
            FieldKind::Select => {
                let index = field
                    .options
                    .iter()
                    .position(|option| option.value == seeded)
                    .unwrap_or(0);
                FieldEditor::Choice(SelectState::with_selected(index))
            }
            _ => {
                let mut input = TextInputState::new();
                input.set_cursor_to_end(seeded);
                FieldEditor::Input(input)
            }
        };
        editors.insert(field.id.clone(), editor);
    }
    editors
}

fn sidebar_panel(state: &mut FormPageState, theme: &Theme) -> Element<Msg> {
    use_constraints!();

    state.search_state.update_scroll(30, &state.search);
    let search = Element::text_input("search-input", &state.search, &state.search_state)
        .placeholder("Search items...")
        .on_event(Msg::SearchEvent)
        .build();

    let body = match &state.catalog {
        Resource::Success(items) if items.is_empty() => {
            Element::Text {
                content: "No items loaded.".to_string(),
                style: Some(Style::default().fg(theme.text_tertiary)),
            }
        }
        Resource::Success(items) => {
            let filtered = filter(items, &state.search);
            if filtered.is_empty() {
                Element::Text {
                    content: "No matching items found.".to_string(),
                    style: Some(Style::default().fg(theme.text_tertiary)),
                }
            } else {
                let rows: Vec<SidebarRow> = filtered
                    .iter()
                    .map(|item| SidebarRow {
                        name: item.name.clone(),
                        is_open: state.selected_item.as_deref() == Some(item.id.as_str()),
                    })
                    .collect();
                Element::list("item-list", &rows, &state.sidebar)
                    .on_select(Msg::ItemSelected)
                    .on_activate(Msg::ItemActivated)
                    .on_navigate(Msg::ListNavigated)
                    .build()
            }
        }
        _ => Element::None,
    };

    let content = col![
        search => Length(1),
        body => Fill(1),
    ];
    Element::panel(content).title("Items").build()
}

fn main_panel(state: &mut FormPageState, theme: &Theme) -> Element<Msg> {
    let content = match display_state(&state.catalog, state.selected_item.as_deref()) {
        DisplayState::Loading => Element::Text {
            content: "Loading available forms...".to_string(),
            style: Some(Style::default().fg(theme.text_secondary)),
        },
        DisplayState::Failed => {
            use_constraints!();
            let message = state.catalog.error().cloned().unwrap_or_default();
            col![
                Element::Text {
                    content: format!("Error: {}", message),
                    style: Some(theme.error_style()),
                } => Length(1),
                Element::Text {
                    content: "Press 'r' to retry.".to_string(),
                    style: Some(Style::default().fg(theme.text_tertiary)),
                } => Length(1),
                spacer!() => Fill(1),
            ]
        }
        DisplayState::Empty => Element::Text {
            content: "No forms available. Please check the API.".to_string(),
            style: Some(Style::default().fg(theme.text_secondary)),
        },
        DisplayState::Prompt => Element::Text {
            content: "Select an item from the sidebar to open its form.".to_string(),
            style: Some(Style::default().fg(theme.text_secondary)),
        },
        DisplayState::Form => form_panel(state, theme),
    };
    Element::panel(content).build()
}

fn form_panel(state: &mut FormPageState, theme: &Theme) -> Element<Msg> {
    use LayoutConstraint::*;

    let FormPageState {
        catalog,
        selected_item,
        editors,
        form,
        ..
    } = state;
    let item = match catalog.value().and_then(|items| {
        items
            .iter()
            .find(|item| selected_item.as_deref() == Some(item.id.as_str()))
    }) {
        Some(item) => item,
        None => return Element::None,
    };

    let mut rows: Vec<(LayoutConstraint, Element<Msg>)> = Vec::new();

    rows.push((
        Length(1),
        Element::Text {
            content: format!("Form for: {}", item.name),
            style: Some(Style::default().fg(theme.accent_tertiary).bold()),
        },
    ));
    rows.push((Length(1), Element::text("")));

    for field in &item.fields {
        rows.push((Length(1), label_line(field, theme)));
        let height = match field.kind {
            FieldKind::Textarea => 4,
            _ => 1,
        };
        rows.push((Length(height), field_element(field, form, editors, theme)));
        rows.push((Length(1), Element::text("")));
    }

    if let Some(error) = &form.error {
        rows.push((
            Length(1),
            Element::Text {
                content: error.clone(),
                style: Some(theme.error_style()),
            },
        ));
        rows.push((Length(1), Element::text("")));
    }

    let button_label = if form.submitting {
        "Submitting..."
    } else {
        "Submit"
    };
    let button = Element::button("submit-button", button_label)
        .on_press(Msg::SubmitRequested)
        .build();
    let button_row = crate::tui::element::RowBuilder::from_items(vec![
        (Length(18), button),
        (Fill(1), Element::None),
    ])
    .spacing(0)
    .build();
    rows.push((Length(3), button_row));

    if let Some(result) = &form.result {
        rows.push((Length(1), Element::text("")));
        rows.push((
            Length(1),
            Element::Text {
                content: result.message.clone(),
                style: Some(theme.success_style()),
            },
        ));
        let pretty = serde_json::to_string_pretty(&result.submitted_data)
            .unwrap_or_else(|_| result.submitted_data.to_string());
        for line in pretty.lines() {
            rows.push((
                Length(1),
                Element::Text {
                    content: line.to_string(),
                    style: Some(Style::default().fg(theme.text_secondary)),
                },
            ));
        }
    }

    rows.push((Fill(1), Element::None));

    ColumnBuilder::from_items(rows).spacing(0).build()
}

fn label_line(field: &FieldDescriptor, theme: &Theme) -> Element<Msg> {
    let marker = if field.required { " *" } else { "" };
    Element::Text {
        content: format!("{}{}", field.label, marker),
        style: Some(Style::default().fg(theme.text_tertiary)),
    }
}

fn field_element(
    field: &FieldDescriptor,
    form: &FormState,
    editors: &mut HashMap<String, FieldEditor>,
    theme: &Theme,
) -> Element<Msg> {
    let focus_id = format!("field-{}", field.id);
    match &field.kind {
        FieldKind::Checkbox => {
            let checked = form
                .value(&field.id)
                .map(FieldValue::as_bool)
                .unwrap_or(false);
            Element::checkbox(focus_id, field.label.clone(), checked)
                .on_toggle(Msg::CheckboxToggled(field.id.clone()))
                .on_focus(Msg::FieldFocused(field.id.clone()))
                .build()
        }
        FieldKind::Select => {
            let Some(FieldEditor::Choice(select)) = editors.get_mut(&field.id) else {
                return Element::None;
            };
            let options: Vec<String> = field.options.iter().map(|o| o.label.clone()).collect();
            Element::select(focus_id, options, select)
                .on_event(Msg::FieldSelect)
                .on_focus(Msg::FieldFocused(field.id.clone()))
                .build()
        }
        FieldKind::Textarea => {
            let Some(FieldEditor::Area(area)) = editors.get_mut(&field.id) else {
                return Element::None;
            };
            let text = form.value(&field.id).map(FieldValue::as_text).unwrap_or("");
            area.update_scroll(4, text);
            Element::text_area(focus_id, text, area)
                .rows(4)
                .on_event(Msg::FieldAreaInput)
                .on_focus(Msg::FieldFocused(field.id.clone()))
                .build()
        }
        FieldKind::Unknown(tag) => Element::Text {
            content: format!("Unsupported field type: {}", tag),
            style: Some(theme.warning_style()),
        },
        _ => {
            let Some(FieldEditor::Input(input)) = editors.get_mut(&field.id) else {
                return Element::None;
            };
            let text = form.value(&field.id).map(FieldValue::as_text).unwrap_or("");
            input.update_scroll(40, text);
            Element::text_input(focus_id, text, input)
                .on_event(Msg::FieldInput)
                .on_focus(Msg::FieldFocused(field.id.clone()))
                .build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SelectOption;

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                id: "alpha".to_string(),
                name: "Alpha Request".to_string(),
                fields: vec![
                    FieldDescriptor::new("title", "Title", FieldKind::Text).required(),
                    FieldDescriptor::new("contact", "Contact", FieldKind::Email),
                    FieldDescriptor::new("priority", "Priority", FieldKind::Select)
                        .options(vec![
                            SelectOption::new("", "Select Priority"),
                            SelectOption::new("low", "Low"),
                            SelectOption::new("high", "High"),
                        ])
                        .default_value(FieldValue::text("low")),
                    FieldDescriptor::new("urgent", "Urgent", FieldKind::Checkbox),
                ],
            },
            Item {
                id: "beta".to_string(),
                name: "Beta Survey".to_string(),
                fields: vec![FieldDescriptor::new("notes", "Notes", FieldKind::Textarea)],
            },
        ]
    }

    fn loaded_state() -> FormPageState {
        let mut state = FormPageState::default();
        let response = CatalogResponse {
            success: true,
            message: "Items fetched successfully".to_string(),
            items: sample_items(),
        };
        FormPage::update(&mut state, Msg::ItemsFetched(Ok(response)));
        state
    }

    fn opened_state() -> FormPageState {
        let mut state = loaded_state();
        FormPage::update(&mut state, Msg::ItemActivated(0));
        state
    }

    #[test]
    fn init_triggers_fetch_on_reload() {
        let mut state = FormPageState::default();
        let cmd = FormPage::update(&mut state, Msg::ReloadRequested);
        assert!(state.catalog.is_loading());
        assert!(matches!(cmd, Command::Perform(_)));
    }

    #[test]
    fn reload_is_ignored_while_loading() {
        let mut state = FormPageState::default();
        FormPage::update(&mut state, Msg::ReloadRequested);
        let cmd = FormPage::update(&mut state, Msg::ReloadRequested);
        assert!(matches!(cmd, Command::None));
    }

    #[test]
    fn fetch_failure_is_reported_with_cause() {
        let mut state = FormPageState::default();
        FormPage::update(&mut state, Msg::ItemsFetched(Err("timeout".to_string())));
        assert_eq!(
            state.catalog.error().map(String::as_str),
            Some("Failed to load items: timeout")
        );
    }

    #[test]
    fn unsuccessful_envelope_is_a_failure() {
        let mut state = FormPageState::default();
        let response = CatalogResponse {
            success: false,
            message: "backend offline".to_string(),
            items: Vec::new(),
        };
        FormPage::update(&mut state, Msg::ItemsFetched(Ok(response)));
        assert_eq!(
            state.catalog.error().map(String::as_str),
            Some("Failed to load items: backend offline")
        );
    }

    #[test]
    fn activating_item_seeds_form_and_editors() {
        let state = opened_state();
        assert_eq!(state.selected_item.as_deref(), Some("alpha"));
        assert_eq!(state.form.value("title"), Some(&FieldValue::text("")));
        assert_eq!(state.form.value("priority"), Some(&FieldValue::text("low")));
        assert_eq!(state.form.value("urgent"), Some(&FieldValue::Bool(false)));
        // Select editor starts on the seeded option
        match state.editors.get("priority") {
            Some(FieldEditor::Choice(select)) => assert_eq!(select.selected(), 1),
            _ => panic!("expected select editor"),
        }
        // Checkboxes carry no editor state
        assert!(!state.editors.contains_key("urgent"));
    }

    #[test]
    fn reselect_resets_form() {
        let mut state = opened_state();
        state.active_field = Some("title".to_string());
        FormPage::update(
            &mut state,
            Msg::FieldInput(TextInputEvent::Changed(KeyCode::Char('x'))),
        );
        let generation = state.form.generation;

        FormPage::update(&mut state, Msg::ItemActivated(0));
        assert_eq!(state.form.value("title"), Some(&FieldValue::text("")));
        assert_eq!(state.form.generation, generation + 1);
    }

    #[test]
    fn typing_updates_the_active_field() {
        let mut state = opened_state();
        FormPage::update(&mut state, Msg::FieldFocused("title".to_string()));
        for c in ['H', 'i'] {
            FormPage::update(
                &mut state,
                Msg::FieldInput(TextInputEvent::Changed(KeyCode::Char(c))),
            );
        }
        assert_eq!(state.form.value("title"), Some(&FieldValue::text("Hi")));
    }

    #[test]
    fn checkbox_toggles_value() {
        let mut state = opened_state();
        FormPage::update(&mut state, Msg::CheckboxToggled("urgent".to_string()));
        assert_eq!(state.form.value("urgent"), Some(&FieldValue::Bool(true)));
        FormPage::update(&mut state, Msg::CheckboxToggled("urgent".to_string()));
        assert_eq!(state.form.value("urgent"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn select_commit_stores_option_value_not_label() {
        let mut state = opened_state();
        FormPage::update(&mut state, Msg::FieldFocused("priority".to_string()));
        // Option count is normally refreshed during rendering
        if let Some(FieldEditor::Choice(select)) = state.editors.get_mut("priority") {
            select.update_option_count(3);
        }
        FormPage::update(&mut state, Msg::FieldSelect(SelectEvent::Select(2)));
        assert_eq!(
            state.form.value("priority"),
            Some(&FieldValue::text("high"))
        );
    }

    #[test]
    fn validation_failure_sets_error_without_submitting() {
        let mut state = opened_state();
        let cmd = FormPage::update(&mut state, Msg::SubmitRequested);
        assert!(matches!(cmd, Command::None));
        assert_eq!(
            state.form.error.as_deref(),
            Some("Please fill in the required field: \"Title\"")
        );
        assert!(!state.form.submitting);
    }

    fn fill_required(state: &mut FormPageState) {
        state.form.set_value("title", FieldValue::text("Hello"));
    }

    #[test]
    fn invalid_email_blocks_submission() {
        let mut state = opened_state();
        fill_required(&mut state);
        state.form.set_value("contact", FieldValue::text("nope"));
        let cmd = FormPage::update(&mut state, Msg::SubmitRequested);
        assert!(matches!(cmd, Command::None));
        assert_eq!(
            state.form.error.as_deref(),
            Some("Please enter a valid email address for \"Contact\"")
        );
    }

    #[test]
    fn valid_form_starts_submission() {
        let mut state = opened_state();
        fill_required(&mut state);
        let cmd = FormPage::update(&mut state, Msg::SubmitRequested);
        assert!(matches!(cmd, Command::Perform(_)));
        assert!(state.form.submitting);
        assert!(state.form.error.is_none());
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut state = opened_state();
        fill_required(&mut state);
        FormPage::update(&mut state, Msg::SubmitRequested);
        let cmd = FormPage::update(&mut state, Msg::SubmitRequested);
        assert!(matches!(cmd, Command::None));
        assert!(state.form.submitting);
    }

    #[test]
    fn successful_submission_stores_result() {
        let mut state = opened_state();
        fill_required(&mut state);
        FormPage::update(&mut state, Msg::SubmitRequested);
        let response = SubmissionResponse {
            success: true,
            message: "Form for \"Alpha Request\" submitted successfully!".to_string(),
            submitted_data: serde_json::json!({"title": "Hello"}),
        };
        let generation = state.form.generation;
        FormPage::update(
            &mut state,
            Msg::SubmitFinished {
                generation,
                result: Ok(response),
            },
        );
        assert!(!state.form.submitting);
        assert!(state.form.error.is_none());
        assert!(state.form.result.is_some());
    }

    #[test]
    fn unsuccessful_submission_uses_message_as_error() {
        let mut state = opened_state();
        fill_required(&mut state);
        FormPage::update(&mut state, Msg::SubmitRequested);
        let response = SubmissionResponse {
            success: false,
            message: "quota exceeded".to_string(),
            submitted_data: serde_json::Value::Null,
        };
        let generation = state.form.generation;
        FormPage::update(
            &mut state,
            Msg::SubmitFinished {
                generation,
                result: Ok(response),
            },
        );
        assert_eq!(state.form.error.as_deref(), Some("quota exceeded"));
        assert!(state.form.result.is_none());
    }

    #[test]
    fn failed_submission_wraps_reason() {
        let mut state = opened_state();
        fill_required(&mut state);
        FormPage::update(&mut state, Msg::SubmitRequested);
        let generation = state.form.generation;
        FormPage::update(
            &mut state,
            Msg::SubmitFinished {
                generation,
                result: Err("connection reset".to_string()),
            },
        );
        assert_eq!(
            state.form.error.as_deref(),
            Some("Submission failed: connection reset")
        );
    }

    #[test]
    fn stale_submission_is_discarded() {
        let mut state = opened_state();
        fill_required(&mut state);
        FormPage::update(&mut state, Msg::SubmitRequested);
        let stale_generation = state.form.generation;

        // User re-opens the item while the submission is in flight
        FormPage::update(&mut state, Msg::ItemActivated(0));

        let response = SubmissionResponse {
            success: true,
            message: "late".to_string(),
            submitted_data: serde_json::Value::Null,
        };
        FormPage::update(
            &mut state,
            Msg::SubmitFinished {
                generation: stale_generation,
                result: Ok(response),
            },
        );
        assert!(state.form.result.is_none());
        assert!(!state.form.submitting);
    }

    #[test]
    fn search_narrows_sidebar() {
        let mut state = loaded_state();
        for c in ['b', 'e'] {
            FormPage::update(
                &mut state,
                Msg::SearchEvent(TextInputEvent::Changed(KeyCode::Char(c))),
            );
        }
        let names: Vec<&str> = visible_items(&state)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Beta Survey"]);
    }

    #[test]
    fn display_states_are_mutually_exclusive() {
        let items = sample_items();

        assert_eq!(display_state(&Resource::NotAsked, None), DisplayState::Loading);
        assert_eq!(display_state(&Resource::Loading, None), DisplayState::Loading);
        assert_eq!(
            display_state(&Resource::Failure("boom".to_string()), None),
            DisplayState::Failed
        );
        assert_eq!(
            display_state(&Resource::Success(Vec::new()), None),
            DisplayState::Empty
        );
        assert_eq!(
            display_state(&Resource::Success(items.clone()), None),
            DisplayState::Prompt
        );
        assert_eq!(
            display_state(&Resource::Success(items), Some("alpha")),
            DisplayState::Form
        );
    }

    #[test]
    fn retry_binding_only_offered_after_failure() {
        let mut state = FormPageState::default();
        let has_retry = |state: &FormPageState| {
            FormPage::subscriptions(state).iter().any(|s| {
                matches!(
                    s,
                    Subscription::Keyboard { key, .. }
                        if key.code == KeyCode::Char('r')
                )
            })
        };
        assert!(!has_retry(&state));
        FormPage::update(&mut state, Msg::ItemsFetched(Err("down".to_string())));
        assert!(has_retry(&state));
    }
}
