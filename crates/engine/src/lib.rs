//! Roster Engine library.
//!
//! Server-side code for the character roster service.
//!
//! ## Structure
//!
//! - `use_cases/` - Character management orchestration
//! - `infrastructure/` - Port traits and their in-memory adapters
//! - `api/` - JSON API, HTML views, and the route table
//! - `app` - Application composition
//! - `config` / `server` - Environment configuration and server lifecycle

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod server;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;
