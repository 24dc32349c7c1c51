use std::future::Future;
use std::pin::Pin;

use crate::tui::element::FocusId;

/// Where a focused widget wants a key event routed
pub enum DispatchTarget<Msg> {
    /// Deliver this message to the app's update function
    AppMsg(Msg),
    /// Widget did not handle the key; fall through to global handling
    PassThrough,
}

/// Commands represent side effects to execute after an update
pub enum Command<Msg> {
    /// No side effect
    None,

    /// Execute multiple commands
    Batch(Vec<Command<Msg>>),

    /// Run an async task that produces a message
    Perform(Pin<Box<dyn Future<Output = Msg> + Send>>),

    /// Set focus to a specific element
    SetFocus(FocusId),

    /// Clear focus from whatever holds it
    ClearFocus,

    /// Quit the application
    Quit,
}

impl<Msg> Command<Msg> {
    /// Convenience constructor for async commands
    pub fn perform<F, T>(future: F, to_msg: impl Fn(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        Command::Perform(Box::pin(async move {
            let value = future.await;
            to_msg(value)
        }))
    }

    /// Batch multiple commands together
    pub fn batch(commands: Vec<Command<Msg>>) -> Self {
        Command::Batch(commands)
    }

    pub fn set_focus(id: impl Into<FocusId>) -> Self {
        Command::SetFocus(id.into())
    }
}
