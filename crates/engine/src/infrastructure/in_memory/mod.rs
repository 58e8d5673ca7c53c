//! In-memory adapters for the port traits.
//!
//! State lives for the life of the process and resets on restart.

mod character_repo;

pub use character_repo::InMemoryCharacterRepo;
