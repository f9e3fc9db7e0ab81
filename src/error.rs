//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Swimlane not found
    #[error("swimlane not found: {id}")]
    SwimlaneNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },
}

impl BoardError {
    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Check whether this error is a missing-entity reference.
    ///
    /// Drag-and-drop races rapid pointer events against re-renders, so an
    /// operation naming an entity that no longer exists is a normal outcome.
    /// The store treats these as silent no-ops rather than hard failures.
    pub fn is_reference_miss(&self) -> bool {
        matches!(
            self,
            Self::CardNotFound { .. } | Self::ListNotFound { .. } | Self::SwimlaneNotFound { .. }
        )
    }
}
