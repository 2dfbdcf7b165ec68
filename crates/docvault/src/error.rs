use thiserror::Error;

/// Failures surfaced by the document store.
///
/// Keyed mutations (update, delete, patches) deliberately do not report a
/// missing id: a keyed UPDATE/DELETE matches at most one row and matching
/// zero is a tolerated outcome. Only `get` returns `NotFound`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("document {0} not found")]
    NotFound(i64),
}
