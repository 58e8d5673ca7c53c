//! API layer - HTTP entry points.
//!
//! - `http` - JSON character API and route table
//! - `views` - server-rendered HTML pages and the new-character form

mod error;
mod extract;
pub mod http;
pub mod pages;
pub mod views;

pub use error::ApiError;
pub use extract::CharacterBody;
