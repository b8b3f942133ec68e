//! Application state for Axum web framework.
//!
//! Contains shared services that are accessible across all request handlers.

use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services.
///
/// This struct is designed to be used with Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    /// Creates a new AppState, wiring services onto the given repositories.
    ///
    /// # Example
    /// ```ignore
    /// let repos = Repositories::for_config(&settings.database).await?;
    /// let state = AppState::new(repos);
    /// ```
    pub fn new(repos: Repositories) -> Self {
        Self {
            services: Services::new(repos),
        }
    }
}
