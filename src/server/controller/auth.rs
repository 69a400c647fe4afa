use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    model::api::{LoginDto, TokenDto},
    server::{error::AppError, state::AppState},
};

/// Exchange a username and password for a bearer token.
///
/// Accepts an OAuth2 password-flow form body. The issued token carries the
/// username as its subject and expires after the configured lifetime.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `403 Forbidden` - Credentials valid but the account is disabled
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .auth
        .authenticate(&state.db, &payload.username, &payload.password)
        .await?;

    let access_token = state.auth.issue_token(&user)?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}
