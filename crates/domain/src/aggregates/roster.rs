//! Roster aggregate - the ordered character collection and its invariants
//!
//! # Invariants
//!
//! After every successful mutation:
//! - no two characters share an `id`
//! - no two characters share a `name` (case-sensitive)
//! - every `level` is within `MIN_LEVEL..=MAX_LEVEL`
//!
//! Records keep insertion order. Lookups are linear scans; rosters are small.

use crate::entities::Character;
use crate::error::DomainError;
use crate::ids::CharacterId;

const ENTITY: &str = "Character";

/// Ordered, invariant-preserving collection of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster by creating each record in order.
    ///
    /// Fails with the first violation, exactly as a sequence of
    /// [`Roster::create`] calls would.
    pub fn from_characters(
        characters: impl IntoIterator<Item = Character>,
    ) -> Result<Self, DomainError> {
        let mut roster = Self::new();
        for character in characters {
            roster.create(character)?;
        }
        Ok(roster)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn list(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: CharacterId) -> Result<&Character, DomainError> {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate and append a new character.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// level, then id uniqueness, then name uniqueness.
    pub fn create(&mut self, candidate: Character) -> Result<&Character, DomainError> {
        candidate.checked_level()?;

        if self.contains(candidate.id) {
            return Err(DomainError::duplicate_id(candidate.id));
        }

        if self.characters.iter().any(|c| c.name == candidate.name) {
            return Err(DomainError::duplicate_name(candidate.name));
        }

        let index = self.characters.len();
        self.characters.push(candidate);
        Ok(&self.characters[index])
    }

    /// Replace the record at `id` with `replacement`, keeping its position.
    ///
    /// Check order: existence, level, id uniqueness (only when the id
    /// changes), name uniqueness against every other record.
    pub fn update(
        &mut self,
        id: CharacterId,
        replacement: Character,
    ) -> Result<&Character, DomainError> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        replacement.checked_level()?;

        if replacement.id != id && self.contains(replacement.id) {
            return Err(DomainError::duplicate_id(replacement.id));
        }

        let name_taken = self
            .characters
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.name == replacement.name);
        if name_taken {
            return Err(DomainError::duplicate_name(replacement.name));
        }

        self.characters[index] = replacement;
        Ok(&self.characters[index])
    }

    /// Remove the record at `id` and return it.
    pub fn delete(&mut self, id: CharacterId) -> Result<Character, DomainError> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;
        Ok(self.characters.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::starter_party;

    fn seeded() -> Roster {
        Roster::from_characters(starter_party()).unwrap()
    }

    fn barret() -> Character {
        Character::new(4, "Barret", "Gunner", "Gun-arm", 30)
    }

    fn ids(roster: &Roster) -> Vec<i64> {
        roster.list().iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn create_appends_at_the_end() {
        let mut roster = seeded();
        let stored = roster.create(barret()).unwrap().clone();

        assert_eq!(stored, barret());
        assert_eq!(ids(&roster), vec![1, 2, 3, 4]);
        assert_eq!(roster.list().last(), Some(&barret()));
    }

    #[test]
    fn create_rejects_level_bounds_before_uniqueness() {
        let mut roster = seeded();
        for level in [0, 100] {
            // Duplicate id and name too: level must still win.
            let candidate = Character::new(1, "Cloud Strife", "Soldier", "Sword", level);
            let err = roster.create(candidate).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "level {level}");
        }
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn create_accepts_level_bounds() {
        let mut roster = Roster::new();
        roster
            .create(Character::new(1, "Low", "Job", "Weapon", 1))
            .unwrap();
        roster
            .create(Character::new(2, "High", "Job", "Weapon", 99))
            .unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn create_rejects_duplicate_id_before_duplicate_name() {
        let mut roster = seeded();
        let err = roster
            .create(Character::new(1, "Tifa Lockhart", "Fighter", "Gloves", 10))
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(CharacterId::new(1)));

        let err = roster
            .create(Character::new(1, "Yuffie", "Ninja", "Shuriken", 16))
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(CharacterId::new(1)));
    }

    #[test]
    fn create_rejects_duplicate_name() {
        let mut roster = seeded();
        let err = roster
            .create(Character::new(9, "Tifa Lockhart", "Fighter", "Gloves", 10))
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("Tifa Lockhart".to_string()));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut roster = seeded();
        roster
            .create(Character::new(9, "cloud strife", "Soldier", "Sword", 1))
            .unwrap();
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn get_finds_by_id() {
        let roster = seeded();
        assert_eq!(roster.get(CharacterId::new(2)).unwrap().name, "Tifa Lockhart");
        assert!(roster.get(CharacterId::new(42)).unwrap_err().is_not_found());
    }

    #[test]
    fn update_missing_id_is_not_found_and_changes_nothing() {
        let mut roster = seeded();
        let before = roster.clone();
        // Invalid level too: existence is checked first.
        let err = roster
            .update(CharacterId::new(42), barret().with_level(0))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(roster, before);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut roster = seeded();
        let replacement = Character::new(2, "Tifa Lockhart", "Monk", "Premium Heart", 40);
        roster.update(CharacterId::new(2), replacement.clone()).unwrap();

        assert_eq!(ids(&roster), vec![1, 2, 3]);
        assert_eq!(roster.get(CharacterId::new(2)).unwrap(), &replacement);
    }

    #[test]
    fn update_may_change_the_id() {
        let mut roster = seeded();
        roster
            .update(CharacterId::new(2), Character::new(20, "Tifa", "Fighter", "Gloves", 22))
            .unwrap();
        assert_eq!(ids(&roster), vec![1, 20, 3]);
        assert!(!roster.contains(CharacterId::new(2)));
    }

    #[test]
    fn update_rejects_id_taken_by_another_record() {
        let mut roster = seeded();
        let err = roster
            .update(CharacterId::new(2), Character::new(3, "Tifa", "Fighter", "Gloves", 22))
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(CharacterId::new(3)));
    }

    #[test]
    fn update_rejects_out_of_range_level() {
        let mut roster = seeded();
        let before = roster.clone();
        let err = roster
            .update(CharacterId::new(2), Character::new(2, "Tifa", "Fighter", "Gloves", 150))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(roster, before);
    }

    #[test]
    fn update_name_conflicts_only_with_other_records() {
        let mut roster = seeded();

        let err = roster
            .update(
                CharacterId::new(2),
                Character::new(2, "Cloud Strife", "Fighter", "Gloves", 22),
            )
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("Cloud Strife".to_string()));

        // Keeping its own name is fine.
        roster
            .update(
                CharacterId::new(2),
                Character::new(2, "Tifa Lockhart", "Fighter", "Gloves", 23),
            )
            .unwrap();
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut roster = seeded();
        let removed = roster.delete(CharacterId::new(2)).unwrap();

        assert_eq!(removed.name, "Tifa Lockhart");
        assert_eq!(ids(&roster), vec![1, 3]);
        assert!(roster.get(CharacterId::new(2)).unwrap_err().is_not_found());
        assert!(roster.delete(CharacterId::new(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn from_characters_rejects_invalid_seed() {
        let err = Roster::from_characters(vec![
            Character::new(1, "A", "Job", "Weapon", 1),
            Character::new(1, "B", "Job", "Weapon", 1),
        ])
        .unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(CharacterId::new(1)));
    }

    #[test]
    fn party_scenario() {
        let mut roster = Roster::from_characters(vec![
            Character::new(1, "Cloud", "Soldier", "Buster sword", 25),
            Character::new(2, "Tifa", "Fighter", "Leather gloves", 22),
            Character::new(3, "Aerith", "Mage", "Magic staff", 20),
        ])
        .unwrap();

        roster.create(barret()).unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.list().last().map(|c| c.name.as_str()), Some("Barret"));

        let err = roster
            .create(Character::new(1, "Yuffie", "Ninja", "Shuriken", 16))
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateId(_)));

        let tifa = roster.get(CharacterId::new(2)).unwrap().clone();
        let err = roster
            .update(CharacterId::new(2), Character::new(2, "Tifa", "Fighter", "Gloves", 150))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(roster.get(CharacterId::new(2)).unwrap(), &tifa);

        roster.delete(CharacterId::new(3)).unwrap();
        assert!(roster.get(CharacterId::new(3)).unwrap_err().is_not_found());
        assert_eq!(roster.len(), 3);
    }
}
