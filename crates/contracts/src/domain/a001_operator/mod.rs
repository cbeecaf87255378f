use serde::{Deserialize, Serialize};

/// Оператор (warehouse worker) as exposed to the browser.
///
/// The remote roster also carries the operator's password; that field is
/// stripped by the companion server and has no place in this DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: i64,
    #[serde(rename = "rfiD_Operador")]
    pub rfid: String,
    #[serde(rename = "nombreOperador")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Finds the operator whose display name matches `name`, ignoring case and
/// surrounding whitespace.
pub fn find_by_name<'a>(operators: &'a [Operator], name: &str) -> Option<&'a Operator> {
    let wanted = name.trim().to_lowercase();
    operators
        .iter()
        .find(|op| op.name.trim().to_lowercase() == wanted)
}

/// Finds the operator by RFID tag value.
pub fn find_by_rfid<'a>(operators: &'a [Operator], rfid: &str) -> Option<&'a Operator> {
    operators.iter().find(|op| op.rfid == rfid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Operator> {
        vec![
            Operator {
                id: 1,
                rfid: "E2000017".into(),
                name: "Juan Pérez".into(),
                area: None,
            },
            Operator {
                id: 2,
                rfid: "E2000018".into(),
                name: "María López".into(),
                area: Some("Extrusión".into()),
            },
        ]
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let ops = roster();
        let found = find_by_name(&ops, "  maría lópez ").map(|op| op.id);
        assert_eq!(found, Some(2));
        assert!(find_by_name(&ops, "Pedro").is_none());
    }

    #[test]
    fn test_wire_names() {
        let json = r#"{"id":7,"rfiD_Operador":"ABC","nombreOperador":"Luis"}"#;
        let op: Operator = serde_json::from_str(json).unwrap();
        assert_eq!(op.rfid, "ABC");
        assert_eq!(op.name, "Luis");
        assert_eq!(find_by_rfid(&[op], "ABC").map(|o| o.id), Some(7));
    }
}
