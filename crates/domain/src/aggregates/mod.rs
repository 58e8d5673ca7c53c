//! Aggregate roots - domain objects that own their related data
//!
//! An aggregate owns its records outright and is the only place their
//! invariants are checked. Callers mutate through its methods, never by
//! reaching into the collection.

pub mod roster;

pub use roster::Roster;
