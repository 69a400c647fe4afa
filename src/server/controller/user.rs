use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::user::{RegisterUserParam, UpdateProfileParam, UserService},
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

/// Register a new user account.
///
/// Open to unauthenticated callers. New accounts always start with the
/// passenger role; driver and admin accounts are provisioned separately.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Empty username or password
/// - `409 Conflict` - Username already taken
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .register(RegisterUserParam {
            username: payload.username,
            password: payload.password,
            display_name: payload.display_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List users in ascending id order.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - List of users
/// - `401 Unauthorized` - Missing or invalid token
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    let users = service.list(params.skip, params.limit).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a user by id.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user profile.
///
/// # Access Control
/// - The user themselves, or an admin; `username` and `disabled` changes
///   are admin-only
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Actor lacks the required privilege
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - New username already taken
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    let user = service
        .update(
            user_id,
            UpdateProfileParam {
                username: payload.username,
                password: payload.password,
                display_name: payload.display_name,
                disabled: payload.disabled,
            },
            &actor,
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// # Access Control
/// - The user themselves, or an admin
///
/// # Returns
/// - `204 No Content` - The user was deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Actor lacks the required privilege
/// - `404 Not Found` - No user with that id
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    service.delete(user_id, &actor).await?;

    Ok(StatusCode::NO_CONTENT)
}
