use contracts::system::config::{
    ClientConfig, DEFAULT_API_BASE, DEFAULT_HUB_METHOD, DEFAULT_HUB_URL, DEFAULT_READER_BASE,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Built frontend (trunk output)
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RemoteConfig {
    pub api_base: String,
    pub reader_base: String,
    pub hub_url: String,
    pub hub_method: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            reader_base: DEFAULT_READER_BASE.to_string(),
            hub_url: DEFAULT_HUB_URL.to_string(),
            hub_method: DEFAULT_HUB_METHOD.to_string(),
            timeout_secs: 10,
        }
    }
}

impl RemoteConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
            reader_base: self.reader_base.clone(),
            hub_url: self.hub_url.clone(),
            hub_method: self.hub_method.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    /// Random per process when absent; sessions then end on restart.
    pub jwt_secret: Option<String>,
    pub token_lifetime_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_lifetime_hours: 12,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[remote]
api_base = "http://172.16.10.31"
reader_base = "http://172.16.10.31:81"
hub_url = "ws://172.16.10.31:81/productHub"
hub_method = "ReceiveProduct"
timeout_secs = 10

[auth]
token_lifetime_hours = 12
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.token_lifetime_hours <= 0 {
        anyhow::bail!("auth.token_lifetime_hours must be positive");
    }
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

/// Resolves the static directory relative to the executable unless absolute.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }
    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.remote.api_base, "http://172.16.10.31");
        assert_eq!(config.remote.hub_method, "ReceiveProduct");
        assert!(config.auth.jwt_secret.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [remote]
            api_base = "http://10.0.0.5"
            "#,
        )
        .unwrap();
        assert_eq!(config.remote.api_base, "http://10.0.0.5");
        assert_eq!(config.remote.reader_base, DEFAULT_READER_BASE);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.auth.token_lifetime_hours, 12);
    }

    #[test]
    fn test_rejects_non_positive_lifetime() {
        assert!(parse_config("[auth]\ntoken_lifetime_hours = 0\n").is_err());
    }
}
