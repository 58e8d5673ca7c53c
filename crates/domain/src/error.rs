//! Unified error types for the domain layer
//!
//! Every roster operation reports failures through [`DomainError`], so the
//! engine can map them onto transport responses without inspecting strings.

use thiserror::Error;

use crate::ids::CharacterId;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., level out of range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Another record already uses this id
    #[error("Character id {0} already exists")]
    DuplicateId(CharacterId),

    /// Another record already uses this name
    #[error("Character name '{0}' already exists")]
    DuplicateName(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// The message is surfaced to API clients verbatim, so it should read as
    /// a complete sentence.
    ///
    /// # Example
    /// ```
    /// use roster_domain::DomainError;
    ///
    /// let err = DomainError::validation("Level must be between 1 and 99");
    /// assert_eq!(err.to_string(), "Validation failed: Level must be between 1 and 99");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: CharacterId) -> Self {
        Self::DuplicateId(id)
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
