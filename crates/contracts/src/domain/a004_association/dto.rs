use serde::{Deserialize, Serialize};

/// QR labels carry the EPC without its three leading zeros.
pub const PALLET_EPC_PREFIX: &str = "000";

/// Body of the reader service's simulate-association call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletAssociationRequest {
    #[serde(rename = "PalletEpc")]
    pub pallet_epc: String,
    #[serde(rename = "OperatorEpc")]
    pub operator_epc: String,
}

impl PalletAssociationRequest {
    pub fn from_qr(qr_text: &str, operator_epc: &str) -> Self {
        Self {
            pallet_epc: format!("{}{}", PALLET_EPC_PREFIX, qr_text.trim()),
            operator_epc: operator_epc.to_string(),
        }
    }
}

/// Reader service reply: `{"message": ...}` on success, `{"error": ...}` otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReaderCommandResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Association shown in the "recent" side panel of the scanner page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentAssociation {
    pub qr: String,
    pub operator: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_qr_adds_prefix() {
        let req = PalletAssociationRequest::from_qr(" 4512 ", "E200");
        assert_eq!(req.pallet_epc, "0004512");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["PalletEpc"], "0004512");
        assert_eq!(json["OperatorEpc"], "E200");
    }
}
