use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::PalletStatus;
use crate::shared::serde_utils::null_as_default;

/// Product/tag data nested in a pending entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagProductInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub clave_producto: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_producto: String,
    #[serde(deserialize_with = "null_as_default")]
    pub peso_neto: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub piezas: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rfid: String,
}

/// Entrada pendiente: one tagged pallet on its way through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEntry {
    pub id: i64,
    #[serde(rename = "noTarima", default, deserialize_with = "null_as_default")]
    pub pallet_number: String,
    #[serde(rename = "trazabilidad", default, deserialize_with = "null_as_default")]
    pub traceability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PalletStatus,
    #[serde(rename = "operador", default)]
    pub operator: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "prodEtiquetaRFID", default)]
    pub product: Option<TagProductInfo>,
}

impl PendingEntry {
    /// Tag value used for status updates; falls back to the pallet number
    /// when the nested product is missing.
    pub fn rfid(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.rfid.as_str())
            .filter(|rfid| !rfid.is_empty())
            .unwrap_or(&self.pallet_number)
    }

    pub fn operator_label(&self) -> &str {
        match self.operator.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Sin asignar",
        }
    }
}

/// Review batch listed on the "Entradas pendientes" page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryReview {
    pub id: i64,
    #[serde(rename = "operador", default, deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(rename = "lista_Trazabilidades", default, deserialize_with = "null_as_default")]
    pub traceability_list: String,
    #[serde(rename = "estatus", default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "noEPCs", default, deserialize_with = "null_as_default")]
    pub epc_count: u32,
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl EntryReview {
    pub fn traceability_codes(&self) -> Vec<&str> {
        self.traceability_list
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: PalletStatus,
}

/// Query string of the by-date-range listing (`fechaInicio`/`fechaFin`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "fechaInicio")]
    pub from: NaiveDate,
    #[serde(rename = "fechaFin")]
    pub to: NaiveDate,
}

impl DateRangeQuery {
    /// Builds a range, swapping the bounds when they arrive reversed.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Parses two `yyyy-mm-dd` strings as typed into date inputs.
    pub fn parse(from: &str, to: &str) -> Result<Self, String> {
        let from = NaiveDate::parse_from_str(from.trim(), "%Y-%m-%d")
            .map_err(|e| format!("Fecha inicial inválida: {}", e))?;
        let to = NaiveDate::parse_from_str(to.trim(), "%Y-%m-%d")
            .map_err(|e| format!("Fecha final inválida: {}", e))?;
        Ok(Self::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_entry_from_api() {
        let json = r#"{
            "id": 301,
            "noTarima": "T-0042",
            "trazabilidad": "TR-88-2024",
            "status": 2,
            "operador": null,
            "createdAt": "2024-05-02T08:00:00",
            "prodEtiquetaRFID": {
                "claveProducto": "BF-3040",
                "nombreProducto": "BOLSA 30X40",
                "pesoNeto": 512.4,
                "piezas": 1200,
                "area": "Bolseo",
                "rfid": "000123"
            }
        }"#;
        let entry: PendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, PalletStatus::LocationAssigned);
        assert_eq!(entry.rfid(), "000123");
        assert_eq!(entry.operator_label(), "Sin asignar");
    }

    #[test]
    fn test_rfid_falls_back_to_pallet_number() {
        let json = r#"{"id": 1, "noTarima": "T-1", "status": 1}"#;
        let entry: PendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.rfid(), "T-1");
    }

    #[test]
    fn test_traceability_codes() {
        let review = EntryReview {
            id: 5,
            operator: "Ana".into(),
            traceability_list: "TR-1, TR-2,,TR-3 ".into(),
            status: "Pendiente".into(),
            epc_count: 3,
            created_at: String::new(),
        };
        assert_eq!(review.traceability_codes(), vec!["TR-1", "TR-2", "TR-3"]);
    }

    #[test]
    fn test_date_range_is_ordered() {
        let range = DateRangeQuery::parse("2024-05-10", "2024-05-01").unwrap();
        assert!(range.from < range.to);
        assert!(DateRangeQuery::parse("10/05/2024", "2024-05-01").is_err());
    }

    #[test]
    fn test_review_with_null_columns() {
        let json = r#"[
            {"id": 7, "operador": null, "lista_Trazabilidades": null, "estatus": "Pendiente", "noEPCs": null, "createdAt": null},
            {"id": 8, "operador": "Ana", "lista_Trazabilidades": "TR-1", "estatus": "Pendiente", "noEPCs": 1, "createdAt": "2024-05-02T08:00:00"}
        ]"#;
        let reviews: Vec<EntryReview> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].operator, "");
        assert_eq!(reviews[0].epc_count, 0);
        assert!(reviews[0].traceability_codes().is_empty());
        assert_eq!(reviews[1].traceability_codes(), vec!["TR-1"]);
    }

    #[test]
    fn test_pending_entry_with_null_product_columns() {
        let json = r#"{
            "id": 302,
            "noTarima": null,
            "status": null,
            "prodEtiquetaRFID": {"claveProducto": null, "pesoNeto": null, "rfid": "000555"}
        }"#;
        let entry: PendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.pallet_number, "");
        assert_eq!(entry.status, PalletStatus::Received);
        assert_eq!(entry.rfid(), "000555");
        assert_eq!(entry.product.unwrap().peso_neto, 0.0);
    }
}
