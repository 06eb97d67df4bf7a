//! User registration endpoint.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::api::dto::{AppUserResponse, CreateUserRequest};
use crate::error::AppResult;
use crate::state::AppState;

const DEFAULT_ROLE: &str = "member";

/// Creates user routes.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

/// POST /api/users - Register a user.
///
/// The password is Argon2id-hashed by the service; a taken username
/// yields 409.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<AppUserResponse>)> {
    payload.validate()?;
    let role = payload.role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
    let user = state
        .services
        .app_users
        .add_user(
            payload.username,
            payload.name,
            payload.surname,
            &payload.password,
            role,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(AppUserResponse::from(user))))
}
