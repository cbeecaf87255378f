use contracts::domain::a002_pallet_product::{ProductData, UNASSIGNED_OPERATOR};
use contracts::domain::a004_association::ReaderCommandResponse;
use contracts::system::config::ClientConfig;
use gloo_net::http::Request;

use crate::shared::api_utils::remote;

pub fn latest_entry_url(cfg: &ClientConfig) -> String {
    cfg.api_url("/api/ProdRegistroAntenas/Latest")
}

pub fn association_by_rfid_url(cfg: &ClientConfig, epc: &str) -> String {
    format!(
        "{}?epc={}",
        cfg.api_url("/api/ProdRegistroAntenas/ByRFID"),
        urlencoding::encode(epc)
    )
}

pub fn register_antenna_url(cfg: &ClientConfig, epc: &str, operator_rfid: &str) -> String {
    format!(
        "{}?epcOperador={}&epc={}",
        cfg.api_url("/api/ProdRegistroAntenas"),
        urlencoding::encode(operator_rfid),
        urlencoding::encode(epc)
    )
}

pub fn reader_manage_url(cfg: &ClientConfig) -> String {
    cfg.reader_url("/api/Reader/manage")
}

/// Most recent antenna record; `None` when the API has none yet.
pub async fn fetch_latest_entry() -> Result<Option<ProductData>, String> {
    let response = Request::get(&latest_entry_url(&remote()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        204 | 404 => return Ok(None),
        _ if !response.ok() => {
            return Err(format!("Latest entry request failed: {}", response.status()))
        }
        _ => {}
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    if text.trim().is_empty() || text.trim() == "null" {
        return Ok(None);
    }
    serde_json::from_str::<ProductData>(&text)
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Operator currently associated with a pallet tag, if any.
pub async fn fetch_operator_by_rfid(epc: &str) -> Result<Option<String>, String> {
    let response = Request::get(&association_by_rfid_url(&remote(), epc))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Association request failed: {}", response.status()));
    }

    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(operator_name_from(&value))
}

/// Pulls the operator name out of a `ByRFID` record.
///
/// The record may be the envelope (`operatorInfo.nombreOperador`), a flat
/// association row (`nombreOperador` / `operador`) or the product itself.
pub fn operator_name_from(value: &serde_json::Value) -> Option<String> {
    let candidates = [
        value.pointer("/operatorInfo/nombreOperador"),
        value.get("nombreOperador"),
        value.get("operador"),
        value.pointer("/product/operator"),
        value.get("operator"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|name| !name.is_empty() && *name != UNASSIGNED_OPERATOR)
        .map(str::to_string)
}

/// Records that `operator_rfid` handled pallet `epc`.
pub async fn register_antenna_record(epc: &str, operator_rfid: &str) -> Result<(), String> {
    let response = Request::post(&register_antenna_url(&remote(), epc, operator_rfid))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Error en el registro: {}", response.status()));
    }
    Ok(())
}

/// Asks the reader service to restart the antenna reader.
///
/// The service answers `{message}` on success and `{error}` otherwise; both
/// become the returned text.
pub async fn restart_reader() -> Result<String, String> {
    const FALLBACK: &str = "Ocurrió un error inesperado. Por favor, contacte a soporte.";

    let response = Request::post(&reader_manage_url(&remote()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let ok = response.ok();
    let body = response
        .json::<ReaderCommandResponse>()
        .await
        .unwrap_or_default();

    match (ok, body.message, body.error) {
        (true, Some(message), _) => Ok(message),
        (true, None, _) => Err("Respuesta inesperada del servidor".to_string()),
        (false, _, Some(error)) => Err(error),
        (false, _, None) => Err(FALLBACK.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urls() {
        let cfg = ClientConfig::default();
        assert_eq!(
            latest_entry_url(&cfg),
            "http://172.16.10.31/api/ProdRegistroAntenas/Latest"
        );
        assert_eq!(
            association_by_rfid_url(&cfg, "E2 01"),
            "http://172.16.10.31/api/ProdRegistroAntenas/ByRFID?epc=E2%2001"
        );
        assert_eq!(
            register_antenna_url(&cfg, "E280", "OP17"),
            "http://172.16.10.31/api/ProdRegistroAntenas?epcOperador=OP17&epc=E280"
        );
        assert_eq!(
            reader_manage_url(&cfg),
            "http://172.16.10.31:81/api/Reader/manage"
        );
    }

    #[test]
    fn test_operator_name_from_shapes() {
        assert_eq!(
            operator_name_from(&json!({"operatorInfo": {"nombreOperador": "Ana"}})),
            Some("Ana".to_string())
        );
        assert_eq!(
            operator_name_from(&json!({"nombreOperador": " Luis "})),
            Some("Luis".to_string())
        );
        assert_eq!(
            operator_name_from(&json!({"product": {"operator": "Eva"}})),
            Some("Eva".to_string())
        );
    }

    #[test]
    fn test_operator_name_skips_sentinel() {
        assert_eq!(operator_name_from(&json!({"operador": "Indefinido"})), None);
        assert_eq!(operator_name_from(&json!({})), None);
        assert_eq!(operator_name_from(&json!(null)), None);
    }
}
