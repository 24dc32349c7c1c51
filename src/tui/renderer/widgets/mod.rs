pub mod button;
pub mod checkbox;
pub mod layout;
pub mod list;
pub mod panel;
pub mod primitives;
pub mod select;
pub mod text_area;
pub mod text_input;

pub use button::render_button;
pub use checkbox::render_checkbox;
pub use list::render_list;
pub use panel::render_panel;
pub use select::render_select;
pub use text_area::render_text_area;
pub use text_input::render_text_input;
