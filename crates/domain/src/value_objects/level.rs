//! Character level bounds

use crate::error::DomainError;

/// Lowest level a character may have.
pub const MIN_LEVEL: i64 = 1;

/// Highest level a character may have.
pub const MAX_LEVEL: i64 = 99;

/// A character level within `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Create a validated level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with [`Level::range_message`] when
    /// `raw` is outside the inclusive range.
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&raw) {
            return Err(DomainError::validation(Self::range_message()));
        }
        // In range, so it fits in a u8.
        Ok(Self(raw as u8))
    }

    /// The message reported for any level outside the bounds.
    pub fn range_message() -> String {
        format!("Level must be between {} and {}", MIN_LEVEL, MAX_LEVEL)
    }

    pub fn value(self) -> i64 {
        i64::from(self.0)
    }
}
