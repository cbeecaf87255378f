use contracts::domain::a004_association::PalletAssociationRequest;
use contracts::system::config::ClientConfig;
use gloo_net::http::Request;

use crate::shared::api_utils::remote;

pub fn association_url(cfg: &ClientConfig) -> String {
    cfg.reader_url("/api/Test/simulate-association")
}

/// Associates the pallet printed on `qr_text` with the operator tag.
pub async fn associate_pallet(qr_text: &str, operator_epc: &str) -> Result<(), String> {
    let request = PalletAssociationRequest::from_qr(qr_text, operator_epc);
    log::info!(
        "Asociando tarima {} con operador {}",
        request.pallet_epc,
        request.operator_epc
    );

    let response = Request::post(&association_url(&remote()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Association failed: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_association_url() {
        assert_eq!(
            association_url(&ClientConfig::default()),
            "http://172.16.10.31:81/api/Test/simulate-association"
        );
    }
}
