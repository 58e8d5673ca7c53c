//! Starting records loaded into every fresh roster.

use crate::entities::Character;

/// The three characters every new process starts with, in listing order.
pub fn starter_party() -> Vec<Character> {
    vec![
        Character::new(1, "Cloud Strife", "Soldier", "Buster sword", 25),
        Character::new(2, "Tifa Lockhart", "Fighter", "Leather gloves", 22),
        Character::new(3, "Aerith Gainsborough", "Mage", "Magic staff", 20),
    ]
}
