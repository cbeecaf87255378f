//! Operator roster (`/api/OperadoresRFID`) of the remote warehouse API.
//!
//! The remote record includes the operator's password in clear text. It is
//! read here for the credential check and never forwarded to the browser.

pub mod client;

use async_trait::async_trait;
use contracts::domain::a001_operator::Operator;
use serde::Deserialize;

pub use client::HttpRoster;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("roster request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("roster endpoint answered {0}")]
    Status(u16),
}

/// Raw roster row as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorRecord {
    pub id: i64,
    #[serde(rename = "rfiD_Operador", default)]
    pub rfid: String,
    #[serde(rename = "nombreOperador", default)]
    pub name: String,
    #[serde(rename = "claveOperador", default)]
    pub password: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

impl OperatorRecord {
    /// Browser-safe projection.
    pub fn to_public(&self) -> Operator {
        Operator {
            id: self.id,
            rfid: self.rfid.clone(),
            name: self.name.clone(),
            area: self.area.clone(),
        }
    }
}

#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch_roster(&self) -> Result<Vec<OperatorRecord>, RosterError>;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory roster for handler tests.
    pub struct StaticRoster(pub Vec<OperatorRecord>);

    #[async_trait]
    impl RosterSource for StaticRoster {
        async fn fetch_roster(&self) -> Result<Vec<OperatorRecord>, RosterError> {
            Ok(self.0.clone())
        }
    }

    /// Roster whose endpoint is down.
    pub struct FailingRoster;

    #[async_trait]
    impl RosterSource for FailingRoster {
        async fn fetch_roster(&self) -> Result<Vec<OperatorRecord>, RosterError> {
            Err(RosterError::Status(503))
        }
    }

    pub fn record(id: i64, name: &str, rfid: &str, password: Option<&str>) -> OperatorRecord {
        OperatorRecord {
            id,
            rfid: rfid.to_string(),
            name: name.to_string(),
            password: password.map(str::to_string),
            area: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_projection_drops_password() {
        let json = r#"{"id":3,"rfiD_Operador":"E2001","nombreOperador":"Rosa","claveOperador":"1234"}"#;
        let record: OperatorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.password.as_deref(), Some("1234"));

        let public = serde_json::to_string(&record.to_public()).unwrap();
        assert!(!public.contains("1234"));
        assert!(public.contains("\"nombreOperador\":\"Rosa\""));
    }
}
