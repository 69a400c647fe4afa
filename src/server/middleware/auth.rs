use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::error::{auth::AuthError, AppError};
use crate::server::model::user::User;
use crate::server::service::auth::Authenticator;

pub enum Permission {
    Admin,
}

/// Resolves the bearer token on a request into an authenticated user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a Authenticator,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a Authenticator, headers: &'a HeaderMap) -> Self {
        Self { db, auth, headers }
    }

    /// Verifies the request's bearer token and checks the required
    /// permissions against the resolved user.
    ///
    /// The token subject is looked up fresh on every request, so a user
    /// disabled after their token was issued is rejected immediately.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid, account active, permissions satisfied
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::TokenExpired | TokenInvalid)` - Token rejected
    /// - `Err(AuthError::AccountDisabled)` - Subject's account is disabled
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;

        let user = self.auth.verify_token(self.db, token).await?;

        if user.disabled {
            return Err(AuthError::AccountDisabled.into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            "Admin privileges required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::TokenInvalid)?;

        header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::TokenInvalid)
    }
}
