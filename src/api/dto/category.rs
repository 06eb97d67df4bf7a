//! Category-related DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Category, UpdateCategory};

/// A (blog, category) link. Used as JSON body for `AddToCategory` and
/// as query parameters for `RemoveFromCategory`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryBlogDto {
    pub blog_id: i32,
    pub category_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryAddRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryUpdateRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
}

impl CategoryUpdateRequest {
    pub fn into_update_category(self) -> UpdateCategory {
        UpdateCategory { name: self.name }
    }
}

/// Category shape exposed over the API; never embeds blogs, so the
/// serialized graph stays acyclic.
#[derive(Debug, Serialize)]
pub struct CategoryListDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryListDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
