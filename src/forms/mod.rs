mod filter;
mod state;
mod validate;

pub use filter::filter;
pub use state::FormState;
pub use validate::validate;
