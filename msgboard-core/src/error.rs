//! Structured error types for msgboard-core.
//!
//! Library consumers get `thiserror` enums they can match on;
//! the binary wraps them with `anyhow` context.

use thiserror::Error;
use uuid::Uuid;

/// Text reported when no live record has the requested id
pub const MESSAGE_NOT_FOUND: &str = "mensagem não encontrada";

/// Text reported when an update payload names a different record
pub const MESSAGE_ID_MISMATCH: &str = "mensagem não apresenta o ID correto";

/// Persistence-layer failure
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing engine failed (connection, query, constraint)
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A stored row breaks the record invariants
    #[error("corrupt record {id}: {reason}")]
    Corrupt { id: Uuid, reason: String },
}

impl StoreError {
    /// Wrap any backend error
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(source))
    }

    /// Create a corrupt record error
    pub fn corrupt(id: Uuid, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            id,
            reason: reason.into(),
        }
    }
}

/// Broad category of a service failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing record, or an update payload whose id disagrees with the target
    NotFound,
    /// Anything the store reported
    StoreFailure,
}

/// Error returned by [`crate::MessageService`] operations
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No live record with this id
    #[error("{}", MESSAGE_NOT_FOUND)]
    NotFound { id: Uuid },

    /// Update payload embeds a different id (or none)
    #[error("{}", MESSAGE_ID_MISMATCH)]
    IdMismatch { id: Uuid, payload_id: Option<Uuid> },

    /// Store failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::IdMismatch { .. } => ErrorKind::NotFound,
            Self::Store(_) => ErrorKind::StoreFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
