//! Character entity

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::Level;

/// A playable character record.
///
/// `level` is kept as the raw integer the caller supplied so that an
/// out-of-range value can reach the roster and be rejected there, after the
/// existence check of an update. Use [`Character::checked_level`] to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub job: String,
    pub weapon: String,
    pub level: i64,
}

impl Character {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        job: impl Into<String>,
        weapon: impl Into<String>,
        level: i64,
    ) -> Self {
        Self {
            id: CharacterId::new(id),
            name: name.into(),
            job: job.into(),
            weapon: weapon.into(),
            level,
        }
    }

    pub fn checked_level(&self) -> Result<Level, DomainError> {
        Level::new(self.level)
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }
}
