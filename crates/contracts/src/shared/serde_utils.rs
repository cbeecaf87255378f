use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default.
///
/// `#[serde(default)]` alone only covers a missing key; the remote API also
/// sends `null` for empty text and numeric columns.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        weight: f64,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let row: Row = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.weight, 0.0);

        let row: Row = serde_json::from_str(r#"{"name": "Ana", "weight": 12.5}"#).unwrap();
        assert_eq!(row.name, "Ana");
        assert_eq!(row.weight, 12.5);
    }
}
