//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::reading::ReadingService;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Reading pipeline, shared by every handler
    pub service: Arc<ReadingService>,
}

impl AppState {
    pub fn new(service: Arc<ReadingService>) -> Self {
        Self { service }
    }

    pub fn catalog(&self) -> &Catalog {
        self.service.catalog()
    }
}
