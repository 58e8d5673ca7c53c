//! Character CRUD operations.

use std::sync::Arc;

use roster_domain::{Character, CharacterId};

use crate::infrastructure::ports::CharacterRepo;

use super::ManagementError;

/// Message reported when a create or update arrives without a record.
pub const EMPTY_INPUT: &str = "Request body is empty";

/// What a caller supplied as a character record.
///
/// Kept unresolved until the use case decides, so that an update against a
/// missing id reports `NotFound` before complaining about the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterInput {
    /// Nothing usable was sent.
    Missing,
    /// Something was sent but it is not a character record.
    Malformed(String),
    Provided(Character),
}

impl CharacterInput {
    fn into_candidate(self) -> Result<Character, ManagementError> {
        match self {
            Self::Missing => Err(ManagementError::InvalidInput(EMPTY_INPUT.to_string())),
            Self::Malformed(msg) => Err(ManagementError::InvalidInput(msg)),
            Self::Provided(character) => Ok(character),
        }
    }
}

impl From<Character> for CharacterInput {
    fn from(character: Character) -> Self {
        Self::Provided(character)
    }
}

pub struct CharacterCrud {
    repo: Arc<dyn CharacterRepo>,
}

impl CharacterCrud {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Vec<Character> {
        self.repo.list().await
    }

    pub async fn get(&self, id: CharacterId) -> Result<Character, ManagementError> {
        self.repo.get(id).await.ok_or(ManagementError::NotFound)
    }

    /// Create a character.
    ///
    /// Check order: input present, level, id uniqueness, name uniqueness.
    pub async fn create(&self, input: CharacterInput) -> Result<Character, ManagementError> {
        let candidate = input.into_candidate()?;
        let id = candidate.id;

        match self.repo.insert(candidate).await {
            Ok(created) => {
                tracing::info!(character_id = %id, name = %created.name, "Character created");
                Ok(created)
            }
            Err(e) => {
                tracing::debug!(character_id = %id, error = %e, "Character create rejected");
                Err(e.into())
            }
        }
    }

    /// Replace the character at `id` with a full record.
    ///
    /// Check order: existence, input present, level, id uniqueness, name
    /// uniqueness.
    pub async fn update(
        &self,
        id: CharacterId,
        input: CharacterInput,
    ) -> Result<Character, ManagementError> {
        if self.repo.get(id).await.is_none() {
            tracing::debug!(character_id = %id, "Character update for unknown id");
            return Err(ManagementError::NotFound);
        }

        let replacement = input.into_candidate()?;

        match self.repo.replace(id, replacement).await {
            Ok(updated) => {
                tracing::info!(
                    character_id = %id,
                    new_character_id = %updated.id,
                    "Character updated"
                );
                Ok(updated)
            }
            Err(e) => {
                tracing::debug!(character_id = %id, error = %e, "Character update rejected");
                Err(e.into())
            }
        }
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), ManagementError> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(character_id = %id, name = %removed.name, "Character deleted");
        Ok(())
    }
}
