use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Operator display name as picked on the sign-in screen
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Signed-in operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub rfid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // operator id
    pub name: String,
    pub rfid: String,
    pub jti: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

impl From<&TokenClaims> for UserInfo {
    fn from(claims: &TokenClaims) -> Self {
        UserInfo {
            id: claims.sub.clone(),
            name: claims.name.clone(),
            rfid: claims.rfid.clone(),
        }
    }
}
