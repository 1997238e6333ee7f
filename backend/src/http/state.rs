//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerSettings;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The scheduling store
    pub repository: Arc<dyn FullRepository>,
    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            body_limit_bytes: ServerSettings::default().body_limit_bytes,
        }
    }

    /// Override the request body limit.
    pub fn with_body_limit(mut self, body_limit_bytes: usize) -> Self {
        self.body_limit_bytes = body_limit_bytes;
        self
    }
}
