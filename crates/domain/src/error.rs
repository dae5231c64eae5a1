//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`NetDevError`]
//! via `#[from]`. Adapters box their own error types into
//! [`NetDevError::Storage`].

/// Top-level error for every device operation.
#[derive(Debug, thiserror::Error)]
pub enum NetDevError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    AlreadyExists(#[from] AlreadyExistsError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by client input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("attribute FQDN is invalid")]
    InvalidFqdn,

    #[error("attribute Model is invalid")]
    InvalidModel { model: String },
}

/// The requested record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An insert-if-absent collided with an existing record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} already created")]
pub struct AlreadyExistsError {
    pub entity: &'static str,
    pub id: String,
}
