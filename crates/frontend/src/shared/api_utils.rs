//! URL helpers for the companion server and for the remote warehouse services.

use contracts::system::config::ClientConfig;
use gloo_net::http::Request;
use once_cell::sync::OnceCell;

static REMOTE: OnceCell<ClientConfig> = OnceCell::new();

/// Base URL of the companion server.
///
/// Same host as the page, port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Stores the remote addresses for the rest of the session. First call wins.
pub fn set_remote_config(config: ClientConfig) {
    let _ = REMOTE.set(config);
}

/// Remote addresses, or the built-in defaults before the config arrived.
pub fn remote() -> ClientConfig {
    REMOTE.get().cloned().unwrap_or_default()
}

/// Fetches `ClientConfig` from the companion server.
pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    let response = Request::get(&api_url("/api/system/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Config request failed: {}", response.status()));
    }

    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Loads the remote config once per page load; failures fall back to defaults.
pub async fn load_remote_config() {
    match fetch_client_config().await {
        Ok(config) => set_remote_config(config),
        Err(e) => {
            log::warn!("Using default remote addresses: {}", e);
            set_remote_config(ClientConfig::default());
        }
    }
}
