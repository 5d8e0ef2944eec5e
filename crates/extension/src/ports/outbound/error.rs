//! Error types for host port operations.

/// Host round-trip failures, with enough context to act on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// Item (or other host entity) not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The host refused or failed an operation.
    #[error("Host rejected {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    /// The host SDK is not ready (scene not loaded, page detached, ...).
    #[error("Host unavailable: {0}")]
    Unavailable(String),
}

impl HostError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Rejected error with operation context.
    pub fn rejected(operation: &'static str, message: impl ToString) -> Self {
        Self::Rejected {
            operation,
            message: message.to_string(),
        }
    }

    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
