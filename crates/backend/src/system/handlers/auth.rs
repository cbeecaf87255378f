use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{credentials, jwt};
use crate::system::state::AppState;

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let roster = state.roster.fetch_roster().await.map_err(|e| {
        tracing::error!("Cannot verify credentials, roster unavailable: {}", e);
        StatusCode::BAD_GATEWAY
    })?;

    let record = credentials::verify_credentials(&roster, &request.username, &request.password)
        .ok_or_else(|| {
            tracing::info!("Rejected sign-in for '{}'", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    let user = credentials::user_info(record);
    let access_token = jwt::generate_access_token(&user).map_err(|e| {
        tracing::error!("Token signing failed: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!("Operator '{}' signed in", user.name);

    Ok(Json(LoginResponse { access_token, user }))
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<UserInfo> {
    Json(UserInfo::from(&claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::roster::testing::{record, FailingRoster, StaticRoster};
    use contracts::system::config::ClientConfig;
    use std::sync::Arc;

    fn state_with(records: Vec<crate::shared::roster::OperatorRecord>) -> AppState {
        AppState::new(Arc::new(StaticRoster(records)), ClientConfig::default())
    }

    fn request(username: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let state = state_with(vec![record(8, "Rosa", "E200", Some("abcd"))]);
        let Json(response) = login(State(state), request("Rosa", "abcd")).await.unwrap();
        assert_eq!(response.user.name, "Rosa");
        assert_eq!(response.user.rfid, "E200");

        let claims = jwt::validate_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, "8");
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let state = state_with(vec![record(8, "Rosa", "E200", Some("abcd"))]);
        let err = login(State(state), request("Rosa", "nope")).await.unwrap_err();
        assert_eq!(err, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_reports_unreachable_roster() {
        let state = AppState::new(Arc::new(FailingRoster), ClientConfig::default());
        let err = login(State(state), request("Rosa", "abcd")).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_GATEWAY);
    }
}
