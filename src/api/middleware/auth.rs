//! Bearer-token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_token};

/// Identity extracted from a verified token, stored in request
/// extensions for handlers to pick up with `Extension<AuthUser>`.
///
/// Handlers resolve the full user record from `username` when they
/// need it; the token itself carries no database id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            role: claims.role,
        }
    }
}

/// Validates the `Authorization: Bearer <token>` header and attaches
/// the authenticated identity to the request.
///
/// Returns 401 when the header is missing or malformed, or when the
/// token fails signature, issuer, audience, or lifetime checks.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    let claims = validate_token(token, &state.jwt_config)?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extractor form of the same check, for routers that mix public and
/// protected methods on one path. Reuses the identity placed by
/// `auth_middleware` when that already ran.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized {
                message: "Missing authorization header".to_string(),
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized {
                message: "Invalid authorization header format. Expected: Bearer <token>"
                    .to_string(),
            })?;

        let claims = validate_token(token, &state.jwt_config)?;
        Ok(AuthUser::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::models::AppUser;
    use crate::utils::jwt::generate_jwt;
    use chrono::Utc;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            issuer: "blog-api-test".to_string(),
            audience: "blog-clients-test".to_string(),
            secret: "test_secret_key_at_least_32_chars!!".to_string(),
            expiration_hours: 1,
        }
    }

    #[test]
    fn auth_user_carries_username_and_role() {
        let claims = Claims {
            sub: "mfc".to_string(),
            role: "admin".to_string(),
            iss: "blog-api-test".to_string(),
            aud: "blog-clients-test".to_string(),
            iat: 0,
            exp: 9_999_999_999,
        };
        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.username, "mfc");
        assert_eq!(auth_user.role, "admin");
    }

    #[test]
    fn issued_token_produces_matching_auth_user() {
        let config = test_jwt_config();
        let user = AppUser {
            id: 7,
            username: "writer".to_string(),
            name: "W".to_string(),
            surname: "R".to_string(),
            password: "$argon2id$irrelevant".to_string(),
            role: "member".to_string(),
            created_at: Utc::now(),
        };
        let issued = generate_jwt(&user, &config).unwrap();
        let claims = validate_token(&issued.token, &config).unwrap();
        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.username, "writer");
        assert_eq!(auth_user.role, "member");
    }
}
