use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use contracts::domain::a001_operator::Operator;

use crate::system::state::AppState;

/// Operator roster without passwords, sorted by name for pickers.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Operator>>, StatusCode> {
    let records = state.roster.fetch_roster().await.map_err(|e| {
        tracing::error!("Failed to fetch operator roster: {}", e);
        StatusCode::BAD_GATEWAY
    })?;

    let mut operators: Vec<Operator> = records.iter().map(|r| r.to_public()).collect();
    operators.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    Ok(Json(operators))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::roster::testing::{record, StaticRoster};
    use contracts::system::config::ClientConfig;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_is_sorted_and_password_free() {
        let state = AppState::new(
            Arc::new(StaticRoster(vec![
                record(2, "rosa", "E2", Some("x")),
                record(1, "Ana", "E1", Some("y")),
            ])),
            ClientConfig::default(),
        );
        let Json(ops) = list(State(state)).await.unwrap();
        let names: Vec<&str> = ops.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "rosa"]);

        let body = serde_json::to_string(&ops).unwrap();
        assert!(!body.contains("claveOperador"));
    }
}
