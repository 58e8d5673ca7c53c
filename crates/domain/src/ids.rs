use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Caller-supplied identifier of a character.
///
/// Ids are never generated by the roster; clients choose them and the roster
/// only enforces uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(i64);

impl CharacterId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CharacterId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CharacterId> for i64 {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}

impl FromStr for CharacterId {
    type Err = DomainError;

    /// Parses a base-10 integer, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not an integer id", s)))
    }
}
