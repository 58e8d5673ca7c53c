//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is a
//! concrete type. The character store sits behind a port so use cases can be
//! tested against mocks and the in-memory adapter can be swapped for a
//! durable one.

mod repos;

pub use repos::CharacterRepo;

#[cfg(test)]
pub use repos::MockCharacterRepo;
