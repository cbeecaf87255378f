use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

/// Sentinel the remote API stores instead of a null operator.
pub const UNASSIGNED_OPERATOR: &str = "Indefinido";

/// Status written locally once an operator has been confirmed.
pub const ASSIGNED_STATUS: &str = "success";

/// Tarima (pallet) product as read by the antenna.
///
/// Every field is a string on the wire, numbers included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub epc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub net_weight: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pieces: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_of_measure: String,
    #[serde(deserialize_with = "null_as_default")]
    pub print_card: String,
    #[serde(deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tipo_etiqueta: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub clave_producto: String,
    #[serde(deserialize_with = "null_as_default")]
    pub peso_bruto: String,
    #[serde(deserialize_with = "null_as_default")]
    pub peso_tarima: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fecha_entrada: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hora_entrada: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rfid: String,
}

impl Product {
    /// `true` once the operator field carries a real name.
    pub fn is_assigned(&self) -> bool {
        let op = self.operator.trim();
        !op.is_empty() && op != UNASSIGNED_OPERATOR
    }

    /// Operator name for display, `"Sin asignar"` for the sentinel.
    pub fn operator_label(&self) -> &str {
        if self.is_assigned() {
            &self.operator
        } else {
            "Sin asignar"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub epc_operador: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_operador: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fecha_alta: String,
}

/// Envelope the reader pushes for each detected pallet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    pub product: Product,
    #[serde(default)]
    pub operator_info: Option<OperatorInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rssi: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antenna_port: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
}

impl ProductData {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn epc(&self) -> &str {
        &self.product.epc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_unassigned() {
        let mut p = Product {
            operator: UNASSIGNED_OPERATOR.into(),
            ..Default::default()
        };
        assert!(!p.is_assigned());
        assert_eq!(p.operator_label(), "Sin asignar");

        p.operator = "Ana".into();
        assert!(p.is_assigned());
        assert_eq!(p.operator_label(), "Ana");
    }

    #[test]
    fn test_parse_reader_payload() {
        let json = r#"{
            "success": true,
            "product": {
                "id": "15",
                "name": "BOLSA 30X40",
                "epc": "000123",
                "status": "pending",
                "netWeight": "512.4",
                "pieces": "1200",
                "unitOfMeasure": "PZA",
                "operator": "Indefinido",
                "claveProducto": "BF-3040"
            },
            "operatorInfo": null,
            "rssi": -52.5,
            "antennaPort": 2,
            "timestamp": "2024-05-02T10:11:12Z"
        }"#;
        let data: ProductData = serde_json::from_str(json).unwrap();
        assert_eq!(data.id(), "15");
        assert_eq!(data.product.net_weight, "512.4");
        assert_eq!(data.product.clave_producto, "BF-3040");
        assert_eq!(data.product.image_url, "");
        assert_eq!(data.antenna_port, 2);
        assert!(data.operator_info.is_none());
        assert!(!data.product.is_assigned());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{
            "success": true,
            "product": {"id": "16", "epc": "000124", "imageUrl": null, "operator": null, "pieces": null},
            "operatorInfo": {"epcOperador": "E-9", "nombreOperador": null},
            "rssi": null,
            "timestamp": null
        }"#;
        let data: ProductData = serde_json::from_str(json).unwrap();
        assert_eq!(data.epc(), "000124");
        assert_eq!(data.product.image_url, "");
        assert_eq!(data.product.operator_label(), "Sin asignar");
        assert_eq!(data.rssi, 0.0);
        assert_eq!(data.operator_info.unwrap().nombre_operador, "");
    }
}
