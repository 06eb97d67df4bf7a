//! Application user repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{AppUser, NewAppUser};
use crate::schema::app_users;

#[derive(Clone)]
pub struct AppUserRepository {
    pool: AsyncDbPool,
}

impl AppUserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_user: NewAppUser) -> Result<AppUser, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(app_users::table)
            .values(&new_user)
            .returning(AppUser::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<AppUser>, AppError> {
        let mut conn = self.pool.get().await?;

        app_users::table
            .filter(app_users::id.eq(user_id))
            .select(AppUser::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<AppUser>, AppError> {
        let mut conn = self.pool.get().await?;

        app_users::table
            .filter(app_users::username.eq(username))
            .select(AppUser::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
