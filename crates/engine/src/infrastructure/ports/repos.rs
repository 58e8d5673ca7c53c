//! Repository port traits for character storage.

use async_trait::async_trait;
use roster_domain::{Character, CharacterId, DomainError};

/// Storage for the character roster.
///
/// Every mutating method must be atomic with respect to its own validation:
/// no other mutation may land between a uniqueness check and the write it
/// guards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// All characters in insertion order.
    async fn list(&self) -> Vec<Character>;

    async fn get(&self, id: CharacterId) -> Option<Character>;

    /// Validate and append. Returns the stored record.
    async fn insert(&self, character: Character) -> Result<Character, DomainError>;

    /// Validate and replace the record at `id` in place. Returns the stored record.
    async fn replace(
        &self,
        id: CharacterId,
        character: Character,
    ) -> Result<Character, DomainError>;

    /// Remove the record at `id`. Returns the removed record.
    async fn delete(&self, id: CharacterId) -> Result<Character, DomainError>;
}
