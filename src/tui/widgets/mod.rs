mod events;
mod list;
mod select;
mod text_area;
mod text_input;

pub use events::{ListEvent, SelectEvent, TextAreaEvent, TextInputEvent};
pub use list::{ListItem, ListState};
pub use select::SelectState;
pub use text_area::TextAreaState;
pub use text_input::TextInputState;
