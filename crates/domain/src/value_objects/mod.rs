//! Value objects - validated, identity-free domain values

mod level;

pub use level::{Level, MAX_LEVEL, MIN_LEVEL};
