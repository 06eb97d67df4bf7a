//! Category repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Category, NewCategory, UpdateCategory};
use crate::schema::categories;

#[derive(Clone)]
pub struct CategoryRepository {
    pool: AsyncDbPool,
}

impl CategoryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(categories::table)
            .values(&new_category)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, AppError> {
        let mut conn = self.pool.get().await?;

        categories::table
            .filter(categories::id.eq(category_id))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Category>, AppError> {
        let mut conn = self.pool.get().await?;

        categories::table
            .select(Category::as_select())
            .order(categories::name.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        category_id: i32,
        changes: UpdateCategory,
    ) -> Result<Category, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(&changes)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, category_id: i32) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::delete(categories::table.filter(categories::id.eq(category_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
