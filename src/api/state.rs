//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::roster::RosterService;

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub roster_service: Arc<RosterService>,
}

impl AppState {
    pub fn new(roster_service: Arc<RosterService>) -> Self {
        Self { roster_service }
    }
}
