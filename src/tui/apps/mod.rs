mod form_page;

pub use form_page::FormPage;
