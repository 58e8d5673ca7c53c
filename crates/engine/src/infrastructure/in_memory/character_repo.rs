use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_domain::{starter_party, Character, CharacterId, DomainError, Roster};

use crate::infrastructure::ports::CharacterRepo;

/// Process-local character store.
///
/// Reads share the lock; every mutation holds the write guard across the
/// roster's validation and the write itself.
pub struct InMemoryCharacterRepo {
    roster: RwLock<Roster>,
}

impl InMemoryCharacterRepo {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: RwLock::new(roster),
        }
    }

    /// Store pre-loaded with the starter party.
    pub fn seeded() -> Result<Self, DomainError> {
        let roster = Roster::from_characters(starter_party())?;
        tracing::debug!(count = roster.len(), "Seeded character roster");
        Ok(Self::new(roster))
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn list(&self) -> Vec<Character> {
        self.roster.read().await.list().to_vec()
    }

    async fn get(&self, id: CharacterId) -> Option<Character> {
        self.roster.read().await.get(id).ok().cloned()
    }

    async fn insert(&self, character: Character) -> Result<Character, DomainError> {
        let mut roster = self.roster.write().await;
        roster.create(character).cloned()
    }

    async fn replace(
        &self,
        id: CharacterId,
        character: Character,
    ) -> Result<Character, DomainError> {
        let mut roster = self.roster.write().await;
        roster.update(id, character).cloned()
    }

    async fn delete(&self, id: CharacterId) -> Result<Character, DomainError> {
        self.roster.write().await.delete(id)
    }
}
