use crate::tui::{Command, Element, Subscription, Theme};

/// The Elm-architecture contract an application implements.
///
/// State is owned by the runtime; every input becomes a `Msg`, every
/// `Msg` goes through `update`, and `view` rebuilds the UI from state
/// each frame.
pub trait App {
    type State: Default + Send;
    type Msg: Clone + Send + 'static;

    /// Process a message, mutate state, optionally return a side effect
    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    /// Build the UI tree from current state
    fn view(state: &mut Self::State, theme: &Theme) -> Element<Self::Msg>;

    /// Event sources this app subscribes to (global key bindings)
    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>> {
        let _ = state;
        Vec::new()
    }

    /// Title shown in the header line
    fn title() -> &'static str;

    /// Optional status line under the title
    fn status(state: &Self::State, theme: &Theme) -> Option<ratatui::text::Line<'static>> {
        let _ = (state, theme);
        None
    }

    /// Command to run once at startup
    fn init() -> Command<Self::Msg> {
        Command::None
    }
}
