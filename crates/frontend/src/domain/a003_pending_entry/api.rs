use contracts::domain::a003_pending_entry::{
    DateRangeQuery, EntryReview, PendingEntry, StatusUpdateRequest,
};
use contracts::enums::PalletStatus;
use contracts::system::config::ClientConfig;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::remote;

pub fn reviews_url(cfg: &ClientConfig) -> String {
    cfg.api_url("/api/ProductOutputReview/ByStatus")
}

pub fn by_status_url(cfg: &ClientConfig, status: PalletStatus) -> String {
    format!(
        "{}?status={}",
        cfg.api_url("/api/ProdEtiquetasRFID/ByStatus"),
        status.code()
    )
}

pub fn by_date_range_url(cfg: &ClientConfig, range: &DateRangeQuery) -> Result<String, String> {
    let query = serde_qs::to_string(range).map_err(|e| format!("Invalid date range: {}", e))?;
    Ok(format!(
        "{}?{}",
        cfg.api_url("/api/ProdEtiquetasRFID/ByDateRange"),
        query
    ))
}

pub fn update_status_url(cfg: &ClientConfig, rfid: &str) -> String {
    cfg.api_url(&format!(
        "/api/ProdEtiquetasRFID/UpdateStatus/{}",
        urlencoding::encode(rfid)
    ))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Operator batches waiting for review.
pub async fn fetch_reviews() -> Result<Vec<EntryReview>, String> {
    get_json(&reviews_url(&remote())).await
}

pub async fn fetch_by_status(status: PalletStatus) -> Result<Vec<PendingEntry>, String> {
    get_json(&by_status_url(&remote(), status)).await
}

pub async fn fetch_by_date_range(range: &DateRangeQuery) -> Result<Vec<PendingEntry>, String> {
    get_json(&by_date_range_url(&remote(), range)?).await
}

/// Moves the pallet identified by `rfid` to `status`.
pub async fn update_status(rfid: &str, status: PalletStatus) -> Result<(), String> {
    let response = Request::put(&update_status_url(&remote(), rfid))
        .json(&StatusUpdateRequest { status })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Status update failed: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_urls() {
        let cfg = ClientConfig::default();
        assert_eq!(
            by_status_url(&cfg, PalletStatus::Reprocessing),
            "http://172.16.10.31/api/ProdEtiquetasRFID/ByStatus?status=4"
        );
        assert_eq!(
            by_status_url(&cfg, PalletStatus::Unknown(9)),
            "http://172.16.10.31/api/ProdEtiquetasRFID/ByStatus?status=9"
        );
        assert_eq!(
            update_status_url(&cfg, "0004512"),
            "http://172.16.10.31/api/ProdEtiquetasRFID/UpdateStatus/0004512"
        );
        assert_eq!(
            reviews_url(&cfg),
            "http://172.16.10.31/api/ProductOutputReview/ByStatus"
        );
    }

    #[test]
    fn test_date_range_url() {
        let cfg = ClientConfig::default();
        let range = DateRangeQuery::parse("2024-03-31", "2024-03-01").unwrap();
        assert_eq!(
            by_date_range_url(&cfg, &range).unwrap(),
            "http://172.16.10.31/api/ProdEtiquetasRFID/ByDateRange?fechaInicio=2024-03-01&fechaFin=2024-03-31"
        );
    }
}
