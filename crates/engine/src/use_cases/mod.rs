//! Use cases - User story orchestration.
//!
//! Use cases keep HTTP handlers thin: handlers translate transport details,
//! use cases decide what happens to the roster.

pub mod management;

pub use management::ManagementUseCases;
