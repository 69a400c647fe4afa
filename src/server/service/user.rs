//! Identity service for user management business logic.
//!
//! Owns the registration rules (unique username, hash-only storage) and the
//! authorization predicates for profile updates and deletion: a user may
//! modify or delete themselves, admins may modify anyone, and the username
//! and disabled flag are admin-only fields.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{trip::TripRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, Role, UpdateUserParam, User},
    service::auth::hash_password,
};

/// Maximum page size for user listings.
const MAX_PAGE_SIZE: u64 = 100;

/// Parameters for registering a user over HTTP.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Parameters for a profile update as submitted by a caller.
///
/// Carries the plaintext password; it is hashed before reaching the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub username: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub disabled: Option<bool>,
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with credentials.
    ///
    /// Only the Argon2 hash of the password is stored. HTTP registrations
    /// always start as passengers; roles are changed through other channels.
    ///
    /// # Arguments
    /// - `param` - Username, plaintext password, and optional display name
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - Empty username or password
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.username.trim().is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if param.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        user_repo
            .create(CreateUserParam {
                username: param.username,
                password_hash: Some(password_hash),
                display_name: param.display_name,
                role: Role::Passenger,
            })
            .await
    }

    /// Registers a user coming from the chat bot.
    ///
    /// The chat platform user id becomes the username and no password hash is
    /// stored, so these accounts can never log in over HTTP.
    ///
    /// # Arguments
    /// - `platform_id` - Chat platform user id
    /// - `role` - Role chosen in the register command
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::Conflict)` - This platform user is already registered
    pub async fn register_external(
        &self,
        platform_id: u64,
        role: Role,
        name: String,
    ) -> Result<User, AppError> {
        let username = platform_id.to_string();
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("Already registered".to_string()));
        }

        user_repo
            .create(CreateUserParam {
                username,
                password_hash: None,
                display_name: Some(name),
                role,
            })
            .await
    }

    /// Looks up the account belonging to a chat platform user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account registered through the bot (or sharing its id)
    /// - `Ok(None)` - Platform user never registered
    pub async fn find_by_platform_id(&self, platform_id: u64) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo.find_by_username(&platform_id.to_string()).await
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Lists users in insertion order.
    ///
    /// # Arguments
    /// - `skip` - Number of records to skip
    /// - `limit` - Maximum records to return, capped at 100
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users for the requested window
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo.get_paginated(skip, limit.min(MAX_PAGE_SIZE)).await
    }

    /// Applies a partial update to a user.
    ///
    /// Authorization: the actor must be the user themselves or an admin.
    /// Changing the username or the disabled flag additionally requires admin.
    /// A new password is re-hashed before storage.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `param` - Fields to change; `None` leaves the stored value untouched
    /// - `actor` - Authenticated user performing the update
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor lacks the required privilege
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - New username already taken
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
        actor: &User,
    ) -> Result<User, AppError> {
        if actor.id != user_id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only the user or an admin may update this profile".to_string(),
            )
            .into());
        }

        if (param.username.is_some() || param.disabled.is_some()) && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only an admin may change the username or disable an account".to_string(),
            )
            .into());
        }

        if let Some(ref username) = param.username {
            if username.trim().is_empty() {
                return Err(AppError::BadRequest("Username must not be empty".to_string()));
            }
        }

        let password_hash = match param.password {
            Some(ref password) if password.is_empty() => {
                return Err(AppError::BadRequest("Password must not be empty".to_string()));
            }
            Some(ref password) => Some(hash_password(password)?),
            None => None,
        };

        let user_repo = UserRepository::new(self.db);

        user_repo
            .update(
                user_id,
                UpdateUserParam {
                    username: param.username,
                    password_hash,
                    display_name: param.display_name,
                    disabled: param.disabled,
                },
            )
            .await
    }

    /// Deletes a user.
    ///
    /// Authorization: the actor must be the user themselves or an admin.
    ///
    /// Deletion is refused while the user is the bound driver of an assigned
    /// trip: the store would null `driver_id` on a row that is still
    /// assigned. The trip must be completed or reassigned first.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor lacks the required privilege
    /// - `Err(AppError::Conflict)` - User still drives an assigned trip
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, user_id: i32, actor: &User) -> Result<(), AppError> {
        if actor.id != user_id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only the user or an admin may delete this account".to_string(),
            )
            .into());
        }

        let trip_repo = TripRepository::new(self.db);

        if trip_repo.has_active_assignments(user_id).await? {
            return Err(AppError::Conflict(
                "User is the assigned driver of an active trip".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if !user_repo.delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
