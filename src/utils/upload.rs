//! Blog image storage.
//!
//! Uploaded images are stored under the configured uploads directory
//! with a generated name; the stored name becomes the blog's
//! `image_path`. Only JPEG uploads are accepted.

use std::path::Path;

use uuid::Uuid;

use crate::error::{AppError, AppResult};

const ALLOWED_CONTENT_TYPE: &str = "image/jpeg";

/// Writes an uploaded image to `dir` and returns the stored file name.
///
/// Rejects anything that does not declare `image/jpeg` with a 400-class
/// error; the client message names the offending content type.
pub async fn save_image(
    data: &[u8],
    content_type: Option<&str>,
    dir: &Path,
) -> AppResult<String> {
    match content_type {
        Some(ct) if ct.eq_ignore_ascii_case(ALLOWED_CONTENT_TYPE) => {}
        Some(ct) => {
            return Err(AppError::BadRequest {
                message: format!("Unsupported image content type '{ct}', expected image/jpeg"),
            });
        }
        None => {
            return Err(AppError::BadRequest {
                message: "Image upload is missing a content type".to_string(),
            });
        }
    }

    if data.is_empty() {
        return Err(AppError::BadRequest {
            message: "Image upload is empty".to_string(),
        });
    }

    tokio::fs::create_dir_all(dir).await.map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("failed to create uploads directory: {e}"),
    })?;

    let file_name = format!("{}.jpg", Uuid::new_v4());
    tokio::fs::write(dir.join(&file_name), data)
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("failed to store uploaded image: {e}"),
        })?;

    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_jpeg_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let name = save_image(b"\xff\xd8\xff\xe0fake", Some("image/jpeg"), dir.path())
            .await
            .unwrap();

        assert!(name.ends_with(".jpg"));
        let stored = tokio::fs::read(dir.path().join(&name)).await.unwrap();
        assert_eq!(stored, b"\xff\xd8\xff\xe0fake");
    }

    #[tokio::test]
    async fn rejects_non_jpeg_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_image(b"<svg/>", Some("image/svg+xml"), dir.path()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_image(b"data", None, dir.path()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn rejects_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_image(b"", Some("image/jpeg"), dir.path()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn generated_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = save_image(b"a", Some("image/jpeg"), dir.path()).await.unwrap();
        let b = save_image(b"b", Some("image/jpeg"), dir.path()).await.unwrap();
        assert_ne!(a, b);
    }
}
