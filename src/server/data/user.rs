//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and deletion with conversion between
//! entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user record.
    ///
    /// A unique-constraint violation on the username is mapped to `Conflict`
    /// so that races past the service-level pre-check still surface as a
    /// duplicate-username error rather than a 500.
    ///
    /// # Arguments
    /// - `param` - User fields including username, optional password hash, and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let result = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            display_name: ActiveValue::Set(param.display_name),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(model) => User::from_entity(model),
            Err(err) => {
                if matches!(
                    err.sql_err(),
                    Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                ) {
                    Err(AppError::Conflict("Username already taken".to_string()))
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or corrupt stored role
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by unique username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(AppError)` - Database error or corrupt stored role
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets a page of users in insertion order.
    ///
    /// # Arguments
    /// - `skip` - Number of records to skip
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users for the requested window
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(&self, skip: u64, limit: u64) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Applies a partial update to a user.
    ///
    /// Only fields present in the param are written; absent fields keep their
    /// stored values.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `param` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - New username already taken
    pub async fn update(&self, user_id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let user = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(username) = param.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = param.password_hash {
            active_model.password_hash = ActiveValue::Set(Some(password_hash));
        }
        if let Some(display_name) = param.display_name {
            active_model.display_name = ActiveValue::Set(Some(display_name));
        }
        if let Some(disabled) = param.disabled {
            active_model.disabled = ActiveValue::Set(disabled);
        }

        match active_model.update(self.db).await {
            Ok(model) => User::from_entity(model),
            Err(err) => {
                if matches!(
                    err.sql_err(),
                    Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                ) {
                    Err(AppError::Conflict("Username already taken".to_string()))
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Deletes a user by primary key.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
