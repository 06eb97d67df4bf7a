//! Blog-related DTOs, including the multipart form handling for
//! create/update with an optional image.

use axum::extract::Multipart;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult, ValidationFieldError};
use crate::models::{Blog, UpdateBlog};

// ============================================================================
// Request DTOs
// ============================================================================

/// An uploaded image part, kept in memory until the handler stores it.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// Raw multipart fields for blog create/update. Unknown parts are
/// ignored, matching lenient form binding.
#[derive(Debug, Default)]
pub struct BlogFormData {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImagePart>,
}

impl BlogFormData {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "title" => form.title = Some(field.text().await?),
                "short_description" => form.short_description = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "image" => {
                    let content_type = field.content_type().map(str::to_owned);
                    let data = field.bytes().await?.to_vec();
                    form.image = Some(ImagePart { data, content_type });
                }
                _ => {}
            }
        }
        Ok(form)
    }

    /// Converts to a create request, rejecting missing required fields
    /// with the usual field-error shape.
    pub fn into_add_request(self) -> AppResult<(BlogAddRequest, Option<ImagePart>)> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("title", &self.title),
            ("short_description", &self.short_description),
            ("description", &self.description),
        ] {
            if value.is_none() {
                missing.push(ValidationFieldError {
                    field: field.to_string(),
                    message: "field is required".to_string(),
                });
            }
        }
        if !missing.is_empty() {
            return Err(AppError::ValidationErrors { errors: missing });
        }

        let request = BlogAddRequest {
            title: self.title.unwrap_or_default(),
            short_description: self.short_description.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        Ok((request, self.image))
    }

    /// Converts to an update request; every text field is optional.
    pub fn into_update_request(self) -> (BlogUpdateRequest, Option<ImagePart>) {
        let request = BlogUpdateRequest {
            title: self.title,
            short_description: self.short_description,
            description: self.description,
        };
        (request, self.image)
    }
}

#[derive(Debug, Validate)]
pub struct BlogAddRequest {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Short description must not be empty"))]
    pub short_description: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
}

#[derive(Debug, Validate)]
pub struct BlogUpdateRequest {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Short description must not be empty"))]
    pub short_description: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
}

impl BlogUpdateRequest {
    pub fn into_update_blog(self, image_path: Option<String>) -> UpdateBlog {
        UpdateBlog {
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            image_path,
        }
    }
}

/// Query parameters for `Search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term, matched case-insensitively against title and
    /// descriptions.
    pub s: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Blog shape exposed over the API.
#[derive(Debug, Serialize)]
pub struct BlogListDto {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub image_path: Option<String>,
    pub posted_time: DateTime<Utc>,
    pub app_user_id: i32,
}

impl From<Blog> for BlogListDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            short_description: blog.short_description,
            description: blog.description,
            image_path: blog.image_path,
            posted_time: blog.posted_time,
            app_user_id: blog.app_user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_are_all_reported() {
        let form = BlogFormData {
            title: Some("A title".to_string()),
            ..BlogFormData::default()
        };
        match form.into_add_request() {
            Err(AppError::ValidationErrors { errors }) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["short_description", "description"]);
            }
            other => panic!("expected ValidationErrors, got {other:?}"),
        }
    }

    #[test]
    fn complete_form_converts() {
        let form = BlogFormData {
            title: Some("A title".to_string()),
            short_description: Some("short".to_string()),
            description: Some("long".to_string()),
            image: None,
        };
        let (request, image) = form.into_add_request().unwrap();
        assert!(request.validate().is_ok());
        assert!(image.is_none());
    }

    #[test]
    fn short_title_fails_validation() {
        let request = BlogAddRequest {
            title: "ab".to_string(),
            short_description: "short".to_string(),
            description: "long".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn update_request_keeps_unset_fields_none() {
        let form = BlogFormData {
            title: Some("New title".to_string()),
            ..BlogFormData::default()
        };
        let (request, _) = form.into_update_request();
        let changes = request.into_update_blog(None);
        assert_eq!(changes.title.as_deref(), Some("New title"));
        assert!(changes.short_description.is_none());
        assert!(changes.image_path.is_none());
    }
}
