//! Bearer token issuing and validation.
//!
//! Tokens are HS256-signed and carry the username as `sub` plus a role
//! claim. Validation requires the configured issuer and audience and
//! checks the lifetime with zero clock skew.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::models::AppUser;

/// Claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username of the authenticated user.
    pub sub: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
}

/// An issued token together with its expiration instant.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Issues a signed token for an authenticated user.
pub fn generate_jwt(user: &AppUser, config: &JwtConfig) -> AppResult<IssuedToken> {
    let now = Utc::now();
    let exp = now + Duration::hours(config.expiration_hours);
    let claims = Claims {
        sub: user.username.clone(),
        role: user.role.clone(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {e}"),
    })?;

    Ok(IssuedToken {
        token,
        expires_at: claims.exp,
    })
}

/// Validates a token and returns its claims.
///
/// Issuer and audience must match the configuration exactly and the
/// lifetime check runs with zero leeway.
pub fn validate_token(token: &str, config: &JwtConfig) -> AppResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        let message = match e.kind() {
            ErrorKind::ExpiredSignature => "Token has expired".to_string(),
            ErrorKind::InvalidSignature => "Invalid token signature".to_string(),
            ErrorKind::InvalidIssuer => "Invalid token issuer".to_string(),
            ErrorKind::InvalidAudience => "Invalid token audience".to_string(),
            ErrorKind::InvalidToken => "Invalid token".to_string(),
            _ => format!("Token validation failed: {e}"),
        };
        AppError::Unauthorized { message }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_config() -> JwtConfig {
        JwtConfig {
            issuer: "blog-api-test".to_string(),
            audience: "blog-clients-test".to_string(),
            secret: "test_secret_key_at_least_32_chars!!".to_string(),
            expiration_hours: 1,
        }
    }

    fn test_user() -> AppUser {
        AppUser {
            id: 1,
            username: "mfc".to_string(),
            name: "Fatih".to_string(),
            surname: "Ceylan".to_string(),
            password: "$argon2id$irrelevant".to_string(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_validates() {
        let config = test_config();
        let issued = generate_jwt(&test_user(), &config).unwrap();

        let claims = validate_token(&issued.token, &config).unwrap();
        assert_eq!(claims.sub, "mfc");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.iss, config.issuer);
        assert_eq!(claims.aud, config.audience);
        assert_eq!(claims.exp, issued.expires_at);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let config = test_config();
        let issued = generate_jwt(&test_user(), &config).unwrap();

        let other = JwtConfig {
            issuer: "someone-else".to_string(),
            ..config
        };
        let result = validate_token(&issued.token, &other);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let config = test_config();
        let issued = generate_jwt(&test_user(), &config).unwrap();

        let other = JwtConfig {
            audience: "other-clients".to_string(),
            ..config
        };
        let result = validate_token(&issued.token, &other);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn tampered_secret_is_rejected() {
        let config = test_config();
        let issued = generate_jwt(&test_user(), &config).unwrap();

        let other = JwtConfig {
            secret: "another_secret_key_at_least_32_ch!!".to_string(),
            ..config
        };
        let result = validate_token(&issued.token, &other);
        match result {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("signature"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn expired_token_is_rejected_with_zero_leeway() {
        let config = JwtConfig {
            expiration_hours: -1,
            ..test_config()
        };
        let issued = generate_jwt(&test_user(), &config).unwrap();

        let result = validate_token(&issued.token, &test_config());
        match result {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("expired"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = validate_token("not.a.token", &test_config());
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
