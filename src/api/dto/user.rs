//! User-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AppUser;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Surname must not be empty"))]
    pub surname: String,
    #[validate(length(min = 6, max = 64, message = "Password must be between 6 and 64 characters"))]
    pub password: String,
    /// Role claim carried in issued tokens. Defaults to "member".
    pub role: Option<String>,
}

/// Full user shape (sans credentials) returned on registration.
#[derive(Debug, Serialize)]
pub struct AppUserResponse {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<AppUser> for AppUserResponse {
    fn from(user: AppUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            surname: user.surname,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Minimal identity shape returned by `ActiveUser`.
#[derive(Debug, Serialize)]
pub struct AppUserDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
}

impl From<AppUser> for AppUserDto {
    fn from(user: AppUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
        }
    }
}
