use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
///
/// `InvalidCredentials` deliberately covers both unknown usernames and wrong
/// passwords so responses don't reveal which half failed.
#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// Username unknown or password verification failed during login.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account's disabled flag is set.
    ///
    /// Checked at login and again on every protected operation, so disabling
    /// an account takes effect immediately despite stateless tokens.
    #[error("Account is disabled")]
    AccountDisabled,

    /// No `Authorization: Bearer` header was supplied on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature did not verify or the payload was malformed.
    #[error("Invalid token")]
    TokenInvalid,

    /// Current time exceeds the expiry embedded in the token.
    #[error("Token expired")]
    TokenExpired,

    /// The token verified but its subject no longer exists.
    #[error("Token subject no longer exists")]
    UserNotFound,

    /// Authenticated but lacking the privilege for this operation.
    ///
    /// # Fields
    /// - Message describing the privilege that was missing
    #[error("{0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes:
/// - `InvalidCredentials` / `MissingToken` / `TokenInvalid` / `TokenExpired` /
///   `UserNotFound` → 401 Unauthorized with a `WWW-Authenticate: Bearer`
///   challenge header
/// - `AccountDisabled` / `AccessDenied` → 403 Forbidden
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AccountDisabled | Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };

        let mut response = (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
