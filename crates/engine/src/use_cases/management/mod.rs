//! Management use cases for CRUD-style operations.

mod character;

pub use character::{CharacterCrud, CharacterInput, EMPTY_INPUT};

use roster_domain::DomainError;

/// Shared error type for management use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManagementError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("ID already exists")]
    DuplicateId,
    #[error("Name already exists")]
    DuplicateName,
}

impl From<DomainError> for ManagementError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::NotFound,
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => Self::InvalidInput(msg),
            DomainError::DuplicateId(_) => Self::DuplicateId,
            DomainError::DuplicateName(_) => Self::DuplicateName,
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub character: CharacterCrud,
}

impl ManagementUseCases {
    pub fn new(character: CharacterCrud) -> Self {
        Self { character }
    }
}
