//! Application user service: registration and credential checks.

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{AppUser, NewAppUser};
use crate::repositories::AppUserRepository;
use crate::utils::password::{hash_password, verify_password};

#[derive(Clone)]
pub struct AppUserService {
    repo: AppUserRepository,
}

impl AppUserService {
    pub fn new(repo: AppUserRepository) -> Self {
        Self { repo }
    }

    /// Registers a user, hashing the password before it ever reaches
    /// the repository. A taken username surfaces as `Duplicate`.
    pub async fn add_user(
        &self,
        username: String,
        name: String,
        surname: String,
        password: &str,
        role: String,
    ) -> AppResult<AppUser> {
        let new_user = NewAppUser {
            username,
            name,
            surname,
            password: hash_password(password)?,
            role,
            created_at: Utc::now(),
        };
        self.repo.create(new_user).await
    }

    /// Verifies credentials. Unknown username and wrong password both
    /// return `Ok(None)`; this call never errors on bad credentials so
    /// the caller cannot leak which half was wrong.
    pub async fn check_user(&self, username: &str, password: &str) -> AppResult<Option<AppUser>> {
        let Some(user) = self.repo.find_by_username(username).await? else {
            tracing::debug!(username, "Sign-in attempt for unknown username");
            return Ok(None);
        };
        if verify_password(password, &user.password)? {
            Ok(Some(user))
        } else {
            tracing::debug!(username, "Sign-in attempt with wrong password");
            Ok(None)
        }
    }

    /// Resolves a user from a username claim. The caller has already
    /// verified token integrity, so a miss here is a hard 404.
    pub async fn find_by_username(&self, username: &str) -> AppResult<AppUser> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "user".to_string(),
                field: "username".to_string(),
                value: username.to_string(),
            })
    }
}
