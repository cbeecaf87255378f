use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://172.16.10.31";
pub const DEFAULT_READER_BASE: &str = "http://172.16.10.31:81";
pub const DEFAULT_HUB_URL: &str = "ws://172.16.10.31:81/productHub";
pub const DEFAULT_HUB_METHOD: &str = "ReceiveProduct";

/// Remote addresses the dashboard talks to, served by the companion server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Warehouse ERP API
    pub api_base: String,
    /// Antenna reader service
    pub reader_base: String,
    /// SignalR hub (WebSocket URL)
    pub hub_url: String,
    /// Hub method that carries newly read pallets
    pub hub_method: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            reader_base: DEFAULT_READER_BASE.to_string(),
            hub_url: DEFAULT_HUB_URL.to_string(),
            hub_method: DEFAULT_HUB_METHOD.to_string(),
        }
    }
}

impl ClientConfig {
    /// Joins `path` onto the ERP API base without doubling slashes.
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    pub fn reader_url(&self, path: &str) -> String {
        join_url(&self.reader_base, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        let cfg = ClientConfig {
            api_base: "http://erp.local/".into(),
            ..Default::default()
        };
        assert_eq!(
            cfg.api_url("/api/OperadoresRFID"),
            "http://erp.local/api/OperadoresRFID"
        );
        assert_eq!(
            ClientConfig::default().reader_url("api/Reader/manage"),
            "http://172.16.10.31:81/api/Reader/manage"
        );
    }
}
