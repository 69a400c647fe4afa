//! User domain models and parameters.
//!
//! Provides the canonical user model with role and account state, plus
//! parameter types for registration and partial updates.

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::error::AppError};

/// Role assigned to a user account.
///
/// Admin is the only role that gates a mutation (driver assignment); the
/// passenger/driver distinction is descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Passenger,
    Driver,
    Admin,
}

impl Role {
    /// Parses a role from its stored or user-supplied string form.
    ///
    /// # Returns
    /// - `Some(Role)` - Recognized role name
    /// - `None` - Unknown role name
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "passenger" => Some(Self::Passenger),
            "driver" => Some(Self::Driver),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the canonical string form used in storage and DTOs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passenger => "passenger",
            Self::Driver => "driver",
            Self::Admin => "admin",
        }
    }
}

/// User account with credentials, role, and account state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key, immutable.
    pub id: i32,
    /// Unique login name; for bot-registered users this is the chat platform user id.
    pub username: String,
    /// Argon2 PHC hash; `None` for bot-registered users, who cannot log in over HTTP.
    pub password_hash: Option<String>,
    /// Optional display name.
    pub display_name: Option<String>,
    /// Account role.
    pub role: Role,
    /// Disabled accounts fail authentication and every protected operation.
    pub disabled: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash never leaves the domain layer.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            role: self.role.as_str().to_string(),
            disabled: self.disabled,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - Stored role string is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "User {} has unknown stored role '{}'",
                entity.id, entity.role
            ))
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            display_name: entity.display_name,
            role,
            disabled: entity.disabled,
            created_at: entity.created_at,
        })
    }

    /// Whether this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Parameters for creating a user record.
///
/// `password_hash` is `None` for bot registrations, which have no credentials.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub role: Role,
}

/// Parameters for a partial user update.
///
/// Every field is optional; `None` leaves the stored value untouched. The
/// service layer enforces which fields an actor may set.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub disabled: Option<bool>,
}
