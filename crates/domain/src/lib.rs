//! Roster domain: character records and the rules that keep a roster valid.
//!
//! Nothing in this crate performs I/O or locking. The engine wraps
//! [`Roster`] in whatever synchronization its transport needs.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod seed;
pub mod value_objects;

pub use aggregates::Roster;
pub use entities::Character;
pub use error::DomainError;
pub use ids::CharacterId;
pub use seed::starter_party;
pub use value_objects::{Level, MAX_LEVEL, MIN_LEVEL};
