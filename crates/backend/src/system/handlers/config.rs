use axum::extract::{Json, State};
use contracts::system::config::ClientConfig;

use crate::system::state::AppState;

/// Remote addresses for the dashboard.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config.clone())
}
