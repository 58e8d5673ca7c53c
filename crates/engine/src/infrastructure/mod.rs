//! Infrastructure implementations.
//!
//! Contains port trait definitions and their adapters.

pub mod in_memory;
pub mod ports;
