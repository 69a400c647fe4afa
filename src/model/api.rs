use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Bearer token response for `POST /token`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}

/// Credentials submitted to `POST /token` (OAuth2 password-flow form).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
