use contracts::domain::a001_operator::Operator;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Operator roster, without passwords, as served by the companion server.
pub async fn fetch_operators() -> Result<Vec<Operator>, String> {
    let response = Request::get(&api_url("/api/operators"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Operators request failed: {}", response.status()));
    }

    response
        .json::<Vec<Operator>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
