use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::{TokenClaims, UserInfo};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 12; // one shift

struct JwtSettings {
    secret: String,
    lifetime_hours: i64,
}

static SETTINGS: OnceCell<JwtSettings> = OnceCell::new();

/// Installs the signing secret and token lifetime. Only the first call wins;
/// returns `false` when settings were already in place.
pub fn init(secret: Option<String>, lifetime_hours: i64) -> bool {
    let secret = match secret {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            tracing::warn!("No auth.jwt_secret configured, sessions will not survive a restart");
            generate_jwt_secret()
        }
    };
    SETTINGS
        .set(JwtSettings {
            secret,
            lifetime_hours,
        })
        .is_ok()
}

fn settings() -> &'static JwtSettings {
    SETTINGS.get_or_init(|| JwtSettings {
        secret: generate_jwt_secret(),
        lifetime_hours: DEFAULT_TOKEN_LIFETIME_HOURS,
    })
}

/// Generate JWT access token for a signed-in operator
pub fn generate_access_token(user: &UserInfo) -> Result<String> {
    let settings = settings();
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(settings.lifetime_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user.id.clone(),
        name: user.name.clone(),
        rfid: user.rfid.clone(),
        jti: uuid::Uuid::new_v4().to_string(),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(settings().secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a random 256-bit secret
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_validates() {
        let user = UserInfo {
            id: "12".into(),
            name: "Rosa".into(),
            rfid: "E2001".into(),
        };
        let token = generate_access_token(&user).unwrap();
        let claims = validate_token(&token).unwrap();
        assert_eq!(UserInfo::from(&claims), user);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let user = UserInfo {
            id: "1".into(),
            name: "Ana".into(),
            rfid: "E1".into(),
        };
        let mut token = generate_access_token(&user).unwrap();
        token.push('x');
        assert!(validate_token(&token).is_err());
        assert!(validate_token("not-a-token").is_err());
    }
}
