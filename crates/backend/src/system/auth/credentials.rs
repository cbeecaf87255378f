use contracts::system::auth::UserInfo;
use sha2::{Digest, Sha256};

use crate::shared::roster::OperatorRecord;

/// Checks a sign-in attempt against the roster.
///
/// Unknown operators, wrong passwords and roster rows without a password
/// all yield `None`.
pub fn verify_credentials<'a>(
    roster: &'a [OperatorRecord],
    username: &str,
    password: &str,
) -> Option<&'a OperatorRecord> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return None;
    }
    let record = roster.iter().find(|op| op.name.trim() == username)?;
    let stored = record.password.as_deref().filter(|p| !p.is_empty())?;
    if digest_eq(stored, password) {
        Some(record)
    } else {
        None
    }
}

pub fn user_info(record: &OperatorRecord) -> UserInfo {
    UserInfo {
        id: record.id.to_string(),
        name: record.name.clone(),
        rfid: record.rfid.clone(),
    }
}

// Comparing fixed-size digests keeps the comparison time independent of
// where the inputs first differ.
fn digest_eq(a: &str, b: &str) -> bool {
    let da = Sha256::digest(a.as_bytes());
    let db = Sha256::digest(b.as_bytes());
    da.iter().zip(db.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::roster::testing::record;

    fn roster() -> Vec<OperatorRecord> {
        vec![
            record(1, "Juan Pérez", "E100", Some("4321")),
            record(2, "Rosa", "E200", Some("abcd")),
            record(3, "Temporal", "E300", None),
            record(4, "  Luis Gómez ", "E400", Some("9876")),
        ]
    }

    #[test]
    fn test_valid_credentials() {
        let roster = roster();
        let found = verify_credentials(&roster, "Rosa", "abcd").map(|r| r.id);
        assert_eq!(found, Some(2));
        let info = user_info(&roster[1]);
        assert_eq!(info.id, "2");
        assert_eq!(info.rfid, "E200");

        // roster names are compared trimmed, but otherwise exactly
        let padded = verify_credentials(&roster, " Luis Gómez", "9876").map(|r| r.id);
        assert_eq!(padded, Some(4));
        assert!(verify_credentials(&roster, "luis gómez", "9876").is_none());
    }

    #[test]
    fn test_wrong_password() {
        assert!(verify_credentials(&roster(), "Rosa", "abce").is_none());
        assert!(verify_credentials(&roster(), "Rosa", "").is_none());
    }

    #[test]
    fn test_unknown_operator() {
        assert!(verify_credentials(&roster(), "Pedro", "abcd").is_none());
    }

    #[test]
    fn test_operator_without_password_cannot_sign_in() {
        assert!(verify_credentials(&roster(), "Temporal", "anything").is_none());
    }
}
