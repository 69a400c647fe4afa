//! Credential verification and stateless bearer tokens.
//!
//! The `Authenticator` verifies username/password pairs against stored Argon2
//! hashes and issues HS256-signed tokens carrying the username and an expiry.
//! Tokens are stateless: there is no revocation list, and an issued token
//! stays valid until natural expiry. The auth guard compensates by re-checking
//! the account's disabled flag on every protected operation.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// JWT claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Username of the token subject.
    sub: String,
    /// Issued-at, seconds since the Unix epoch.
    iat: i64,
    /// Expiry, seconds since the Unix epoch.
    exp: i64,
}

/// Issues and verifies signed access tokens and checks login credentials.
///
/// Cheap to clone: the signing keys are small and the TTL is a plain value.
#[derive(Clone)]
pub struct Authenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl Authenticator {
    /// Creates an authenticator from the process-wide secret and token lifetime.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret for HS256 signing and verification
    /// - `token_ttl` - Lifetime applied to every issued token
    pub fn new(secret: &str, token_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl,
        }
    }

    /// Verifies a username/password pair against the identity store.
    ///
    /// Unknown usernames, accounts without a password hash (bot-registered),
    /// and wrong passwords all produce the same `InvalidCredentials` error so
    /// the response does not reveal which half failed.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `username` - Login name
    /// - `password` - Plaintext password to verify
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid, account active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Credentials valid but account disabled
    pub async fn authenticate(
        &self,
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.disabled {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(user)
    }

    /// Issues a signed token for the given user.
    ///
    /// The token encodes the username and expires `token_ttl` from now.
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWT
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verifies a token and resolves it to the referenced user.
    ///
    /// Expiry is checked with zero leeway.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `token` - Compact JWT from the Authorization header
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and subject still exists
    /// - `Err(AuthError::TokenExpired)` - Current time exceeds the embedded expiry
    /// - `Err(AuthError::TokenInvalid)` - Bad signature or malformed payload
    /// - `Err(AuthError::UserNotFound)` - Subject no longer exists
    pub async fn verify_token(
        &self,
        db: &DatabaseConnection,
        token: &str,
    ) -> Result<User, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            }
        })?;

        let user_repo = UserRepository::new(db);

        let Some(user) = user_repo.find_by_username(&data.claims.sub).await? else {
            return Err(AuthError::UserNotFound.into());
        };

        Ok(user)
    }
}

/// Hashes a plaintext password into an Argon2 PHC string.
///
/// # Returns
/// - `Ok(String)` - PHC-encoded hash including salt and parameters
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    use argon2::{
        password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
        Argon2,
    };

    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// An unparseable stored hash counts as a failed verification.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{
        password_hash::{PasswordHash, PasswordVerifier},
        Argon2,
    };

    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
