//! SignalR JSON hub protocol, the subset the reader's hub uses.
//!
//! Frames are JSON objects terminated by the ASCII record separator
//! (0x1E); one WebSocket text message may carry several frames.

use contracts::domain::a002_pallet_product::ProductData;
use serde_json::Value;

pub const RECORD_SEPARATOR: char = '\u{1e}';

const TYPE_INVOCATION: i64 = 1;
const TYPE_PING: i64 = 6;
const TYPE_CLOSE: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub enum HubMessage {
    /// Reply to the handshake, the only frame without a `type`.
    Handshake { error: Option<String> },
    Invocation { target: String, arguments: Vec<Value> },
    Ping,
    Close { error: Option<String> },
    /// Stream items, completions and other frames the dashboard ignores.
    Other(i64),
}

pub fn handshake_request() -> String {
    format!(r#"{{"protocol":"json","version":1}}{}"#, RECORD_SEPARATOR)
}

pub fn ping_message() -> String {
    format!(r#"{{"type":{}}}{}"#, TYPE_PING, RECORD_SEPARATOR)
}

/// Splits a text message into frames and decodes each.
pub fn parse_frames(text: &str) -> Vec<Result<HubMessage, String>> {
    text.split(RECORD_SEPARATOR)
        .filter(|frame| !frame.trim().is_empty())
        .map(parse_frame)
        .collect()
}

fn parse_frame(frame: &str) -> Result<HubMessage, String> {
    let value: Value =
        serde_json::from_str(frame).map_err(|e| format!("Invalid hub frame: {}", e))?;
    let error = value
        .get("error")
        .and_then(|e| e.as_str())
        .map(str::to_string);

    let Some(kind) = value.get("type").and_then(|t| t.as_i64()) else {
        return Ok(HubMessage::Handshake { error });
    };

    Ok(match kind {
        TYPE_INVOCATION => HubMessage::Invocation {
            target: value
                .get("target")
                .and_then(|t| t.as_str())
                .unwrap_or_default()
                .to_string(),
            arguments: value
                .get("arguments")
                .and_then(|a| a.as_array())
                .cloned()
                .unwrap_or_default(),
        },
        TYPE_PING => HubMessage::Ping,
        TYPE_CLOSE => HubMessage::Close { error },
        other => HubMessage::Other(other),
    })
}

/// Pallets carried by an invocation of `method` (case-insensitive, as
/// SignalR matches handler names). Arguments that do not parse are skipped.
pub fn extract_products(message: &HubMessage, method: &str) -> Vec<ProductData> {
    match message {
        HubMessage::Invocation { target, arguments } if target.eq_ignore_ascii_case(method) => {
            arguments
                .iter()
                .filter_map(|arg| match serde_json::from_value::<ProductData>(arg.clone()) {
                    Ok(product) => Some(product),
                    Err(e) => {
                        log::warn!("Skipping hub argument for {}: {}", target, e);
                        None
                    }
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_request_is_terminated() {
        let msg = handshake_request();
        assert!(msg.ends_with(RECORD_SEPARATOR));
        let body: Value = serde_json::from_str(msg.trim_end_matches(RECORD_SEPARATOR)).unwrap();
        assert_eq!(body["protocol"], "json");
        assert_eq!(body["version"], 1);
    }

    #[test]
    fn test_parse_multiple_frames() {
        let text = format!(
            "{{}}{rs}{{\"type\":6}}{rs}{{\"type\":1,\"target\":\"ReceiveProduct\",\"arguments\":[]}}{rs}",
            rs = RECORD_SEPARATOR
        );
        let frames: Vec<HubMessage> = parse_frames(&text).into_iter().map(Result::unwrap).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], HubMessage::Handshake { error: None });
        assert_eq!(frames[1], HubMessage::Ping);
        assert!(matches!(&frames[2], HubMessage::Invocation { target, .. } if target == "ReceiveProduct"));
    }

    #[test]
    fn test_handshake_error_and_close() {
        let text = format!(
            "{{\"error\":\"bad protocol\"}}{rs}{{\"type\":7,\"error\":\"shutdown\"}}{rs}",
            rs = RECORD_SEPARATOR
        );
        let frames: Vec<HubMessage> = parse_frames(&text).into_iter().map(Result::unwrap).collect();
        assert_eq!(
            frames[0],
            HubMessage::Handshake {
                error: Some("bad protocol".into())
            }
        );
        assert_eq!(
            frames[1],
            HubMessage::Close {
                error: Some("shutdown".into())
            }
        );
    }

    #[test]
    fn test_garbage_frame_is_an_error() {
        let text = format!("not json{}", RECORD_SEPARATOR);
        let frames = parse_frames(&text);
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_err());
    }

    #[test]
    fn test_extract_products_matches_target() {
        let text = format!(
            r#"{{"type":1,"target":"receiveproduct","arguments":[{{"success":true,"product":{{"id":"7","epc":"0007","operator":"Indefinido"}}}},42]}}{}"#,
            RECORD_SEPARATOR
        );
        let message = parse_frames(&text).remove(0).unwrap();

        let products = extract_products(&message, "ReceiveProduct");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id(), "7");

        assert!(extract_products(&message, "OtherMethod").is_empty());
        assert!(extract_products(&HubMessage::Ping, "ReceiveProduct").is_empty());
    }
}
