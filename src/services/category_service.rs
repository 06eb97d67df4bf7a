//! Category service for CRUD operations.

use crate::error::{AppError, AppResult};
use crate::models::{Category, NewCategory, UpdateCategory};
use crate::repositories::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService {
    repo: CategoryRepository,
}

impl CategoryService {
    pub fn new(repo: CategoryRepository) -> Self {
        Self { repo }
    }

    pub async fn add_category(&self, name: String) -> AppResult<Category> {
        self.repo.create(NewCategory { name }).await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: "category".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repo.list_all().await
    }

    pub async fn update_category(&self, id: i32, changes: UpdateCategory) -> AppResult<Category> {
        self.get_category(id).await?;
        self.repo.update(id, changes).await
    }

    pub async fn remove_category(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        Ok(affected > 0)
    }
}
