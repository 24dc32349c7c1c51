mod client;
mod models;

pub use client::{DemoApi, FormsApi};
pub use models::{
    CatalogResponse, FieldDescriptor, FieldKind, FieldValue, Item, SelectOption,
    SubmissionResponse,
};
