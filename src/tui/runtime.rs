use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;

use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{DropdownRegistry, FocusRegistry, InteractionRegistry, Renderer};
use crate::tui::subscription::KeyBinding;
use crate::tui::{App, Command, Subscription};

/// Drives a single app: owns its state, routes events into messages,
/// executes commands, and renders each frame.
pub struct Runtime<A: App> {
    state: A::State,
    registry: InteractionRegistry<A::Msg>,
    focus_registry: FocusRegistry<A::Msg>,
    dropdown_registry: DropdownRegistry<A::Msg>,
    focused: Option<FocusId>,
    pending_futures: Vec<Pin<Box<dyn Future<Output = A::Msg> + Send>>>,
    key_subscriptions: HashMap<KeyBinding, A::Msg>,
    should_quit: bool,
}

impl<A: App> Runtime<A> {
    pub fn new() -> Self {
        let mut runtime = Self {
            state: A::State::default(),
            registry: InteractionRegistry::new(),
            focus_registry: FocusRegistry::new(),
            dropdown_registry: DropdownRegistry::new(),
            focused: None,
            pending_futures: Vec::new(),
            key_subscriptions: HashMap::new(),
            should_quit: false,
        };
        let init = A::init();
        runtime.execute_command(init);
        runtime
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run a message through update and execute the resulting command
    pub fn process_message(&mut self, msg: A::Msg) {
        let command = A::update(&mut self.state, msg);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command<A::Msg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd);
                }
            }
            Command::Perform(future) => {
                self.pending_futures.push(future);
            }
            Command::SetFocus(id) => {
                self.set_focus(id);
            }
            Command::ClearFocus => {
                self.blur_focused();
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn set_focus(&mut self, id: FocusId) {
        if self.focused.as_ref() == Some(&id) {
            return;
        }
        self.blur_focused();
        let on_focus = self
            .focus_registry
            .find(&id)
            .and_then(|f| f.on_focus.clone());
        self.focused = Some(id);
        if let Some(msg) = on_focus {
            self.process_message(msg);
        }
    }

    fn blur_focused(&mut self) {
        if let Some(old) = self.focused.take() {
            let on_blur = self
                .focus_registry
                .find(&old)
                .and_then(|f| f.on_blur.clone());
            if let Some(msg) = on_blur {
                self.process_message(msg);
            }
        }
    }

    /// Poll pending async commands without blocking. Completed futures
    /// feed their message back into update.
    pub fn poll_async_commands(&mut self) {
        let waker = futures::task::noop_waker();
        let mut context = Context::from_waker(&waker);

        let mut completed = Vec::new();
        for (index, future) in self.pending_futures.iter_mut().enumerate() {
            if let Poll::Ready(msg) = future.as_mut().poll(&mut context) {
                completed.push((index, msg));
            }
        }

        // Remove in reverse so the earlier indices stay valid
        for (index, msg) in completed.into_iter().rev() {
            self.pending_futures.remove(index);
            self.process_message(msg);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Esc blurs the focused widget before anything else sees it
        if key.code == KeyCode::Esc && self.focused.is_some() {
            self.blur_focused();
            return;
        }

        match key.code {
            KeyCode::Tab => {
                if let Some(next) = self.focus_registry.next_focus(self.focused.as_ref()) {
                    self.set_focus(next);
                }
                return;
            }
            KeyCode::BackTab => {
                if let Some(prev) = self.focus_registry.prev_focus(self.focused.as_ref()) {
                    self.set_focus(prev);
                }
                return;
            }
            _ => {}
        }

        // Route to the focused widget first
        if let Some(focused) = self.focused.clone() {
            let target = self
                .focus_registry
                .find(&focused)
                .map(|f| (f.on_key)(key));
            match target {
                Some(DispatchTarget::AppMsg(msg)) => {
                    self.process_message(msg);
                    return;
                }
                Some(DispatchTarget::PassThrough) | None => {}
            }
        }

        // Fall through to global key subscriptions
        let binding = KeyBinding {
            code: key.code,
            modifiers: key.modifiers,
        };
        if let Some(msg) = self.key_subscriptions.get(&binding).cloned() {
            self.process_message(msg);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Focus whatever was clicked before dispatching the
                // click message, so per-widget focus tracking stays
                // ahead of the click handler
                if let Some(id) = self
                    .focus_registry
                    .find_at_position(mouse.column, mouse.row)
                {
                    self.set_focus(id);
                }
                if let Some(msg) = self.registry.find_click(mouse.column, mouse.row) {
                    self.process_message(msg);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                // Scroll acts as Up/Down on the focused widget when
                // the pointer is over it
                let over_focused = self
                    .focused
                    .as_ref()
                    .and_then(|id| self.focus_registry.find(id))
                    .map(|f| {
                        mouse.column >= f.rect.x
                            && mouse.column < f.rect.x + f.rect.width
                            && mouse.row >= f.rect.y
                            && mouse.row < f.rect.y + f.rect.height
                    })
                    .unwrap_or(false);
                if over_focused {
                    let code = if mouse.kind == MouseEventKind::ScrollUp {
                        KeyCode::Up
                    } else {
                        KeyCode::Down
                    };
                    self.handle_key(KeyEvent::from(code));
                }
            }
            _ => {}
        }
    }

    fn update_subscriptions(&mut self) {
        self.key_subscriptions.clear();
        for subscription in A::subscriptions(&self.state) {
            match subscription {
                Subscription::Keyboard { key, msg, .. } => {
                    self.key_subscriptions.insert(key, msg);
                }
            }
        }
    }

    /// Render a frame: header with title and status, then the app view
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = crate::global_runtime_config().theme();

        self.update_subscriptions();

        // Registries are rebuilt from scratch every frame
        self.registry.clear();
        self.focus_registry.clear();
        self.dropdown_registry.clear();

        let status = A::status(&self.state, &theme);
        let header_height = if status.is_some() { 2 } else { 1 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header_height), Constraint::Min(0)])
            .split(frame.area());

        let title = Line::from(A::title()).style(Style::default().fg(theme.accent_tertiary).bold());
        frame.render_widget(ratatui::widgets::Paragraph::new(title), chunks[0]);
        if let Some(status_line) = status {
            let status_area = ratatui::layout::Rect {
                x: chunks[0].x,
                y: chunks[0].y + 1,
                width: chunks[0].width,
                height: 1,
            };
            frame.render_widget(ratatui::widgets::Paragraph::new(status_line), status_area);
        }

        let element = A::view(&mut self.state, &theme);

        Renderer::render(
            frame,
            &theme,
            &mut self.registry,
            &mut self.focus_registry,
            &mut self.dropdown_registry,
            self.focused.as_ref(),
            &element,
            chunks[1],
        );

        // Views are dynamic; drop focus that points at an element the
        // app no longer renders
        if let Some(focused) = &self.focused {
            if !self.focus_registry.contains(focused) {
                self.focused = None;
            }
        }
    }
}

impl<A: App> Default for Runtime<A> {
    fn default() -> Self {
        Self::new()
    }
}
