use std::sync::Arc;

use contracts::system::config::ClientConfig;

use crate::shared::roster::RosterSource;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterSource>,
    pub client_config: ClientConfig,
}

impl AppState {
    pub fn new(roster: Arc<dyn RosterSource>, client_config: ClientConfig) -> Self {
        Self {
            roster,
            client_config,
        }
    }
}
