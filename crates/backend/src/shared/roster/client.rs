use std::time::Duration;

use async_trait::async_trait;

use super::{OperatorRecord, RosterError, RosterSource};

const ROSTER_PATH: &str = "/api/OperadoresRFID";

/// Roster fetched over HTTP on every call; the remote list is small and
/// changes whenever HR edits it, so nothing is cached.
pub struct HttpRoster {
    client: reqwest::Client,
    url: String,
}

impl HttpRoster {
    pub fn new(api_base: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}{}", api_base.trim_end_matches('/'), ROSTER_PATH),
        })
    }
}

#[async_trait]
impl RosterSource for HttpRoster {
    async fn fetch_roster(&self) -> Result<Vec<OperatorRecord>, RosterError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Roster request to {} failed with {}", self.url, status);
            return Err(RosterError::Status(status.as_u16()));
        }
        let records = response.json::<Vec<OperatorRecord>>().await?;
        tracing::debug!("Roster fetched: {} operators", records.len());
        Ok(records)
    }
}
