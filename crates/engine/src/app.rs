//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::management::{CharacterCrud, ManagementUseCases};

/// Main application state.
///
/// Holds the use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(character_repo: Arc<dyn CharacterRepo>) -> Self {
        let management = ManagementUseCases::new(CharacterCrud::new(character_repo));

        Self {
            use_cases: UseCases { management },
        }
    }
}
