pub mod config;
pub mod document;
pub mod error;

pub use document::store::DocumentStore;
pub use document::{DocumentDraft, DocumentRecord, DocumentStatus};
pub use error::StoreError;
