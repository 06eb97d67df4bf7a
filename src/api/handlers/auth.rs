//! Authentication endpoints: sign-in and current-user lookup.

use axum::{
    Extension, Json, Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use validator::Validate;

use crate::api::dto::{AppUserDto, SignInRequest, TokenResponse};
use crate::api::middleware::{AuthUser, auth_middleware};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::jwt::generate_jwt;

/// Creates the authentication routes.
///
/// # Routes
/// - `POST /SignIn` - Check credentials and issue a token
/// - `GET /ActiveUser` - Resolve the caller from their token
pub fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/ActiveUser", get(active_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/SignIn", post(sign_in)).merge(protected)
}

/// POST /api/auth/SignIn
///
/// Returns a signed token for valid credentials. Any credential
/// failure is the same 400 with a generic message, so the response
/// never reveals which half was wrong.
async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> AppResult<Json<TokenResponse>> {
    payload.validate()?;

    let user = state
        .services
        .app_users
        .check_user(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| AppError::BadRequest {
            message: "Invalid username or password".to_string(),
        })?;

    let issued = generate_jwt(&user, &state.jwt_config)?;
    Ok(Json(TokenResponse::from(issued)))
}

/// GET /api/auth/ActiveUser
///
/// The middleware has already verified the token; this only resolves
/// the username claim to a user record.
async fn active_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<AppUserDto>> {
    let user = state
        .services
        .app_users
        .find_by_username(&auth_user.username)
        .await?;
    Ok(Json(AppUserDto::from(user)))
}
