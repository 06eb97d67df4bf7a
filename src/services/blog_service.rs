//! Blog service: listing, search, category association, and the
//! read-through listing cache.

use std::sync::Arc;

use chrono::Utc;

use crate::cache::{self, AppCache};
use crate::error::{AppError, AppResult};
use crate::models::{Blog, Category, CategoryBlog, NewBlog, UpdateBlog};
use crate::repositories::{BlogRepository, CategoryRepository};

/// Cache keys for the two cached listings.
const ALL_BLOGS_KEY: &str = "blogs:all";
const LAST_FIVE_KEY: &str = "blogs:last_five";

#[derive(Clone)]
pub struct BlogService {
    repo: BlogRepository,
    categories: CategoryRepository,
    cache: Arc<dyn AppCache>,
}

impl BlogService {
    pub fn new(
        repo: BlogRepository,
        categories: CategoryRepository,
        cache: Arc<dyn AppCache>,
    ) -> Self {
        Self {
            repo,
            categories,
            cache,
        }
    }

    /// Creates a blog. `posted_time` is stamped here and never changes
    /// afterwards.
    pub async fn add_blog(
        &self,
        title: String,
        short_description: String,
        description: String,
        image_path: Option<String>,
        app_user_id: i32,
    ) -> AppResult<Blog> {
        let new_blog = NewBlog {
            title,
            short_description,
            description,
            image_path,
            posted_time: Utc::now(),
            app_user_id,
        };
        let blog = self.repo.create(new_blog).await?;
        self.invalidate_listings().await;
        Ok(blog)
    }

    pub async fn get_blog(&self, id: i32) -> AppResult<Blog> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: "blog".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }

    /// All blogs, newest first, via the read-through cache.
    pub async fn get_all_sorted_by_posted_time(&self) -> AppResult<Vec<Blog>> {
        if let Some(cached) = cache::get_json::<Vec<Blog>>(self.cache.as_ref(), ALL_BLOGS_KEY).await
        {
            return Ok(cached);
        }
        let blogs = self.repo.list_sorted_by_posted_time().await?;
        cache::put_json(self.cache.as_ref(), ALL_BLOGS_KEY, &blogs).await;
        Ok(blogs)
    }

    /// The five newest blogs (or all of them when fewer exist), via the
    /// read-through cache.
    pub async fn get_last_five(&self) -> AppResult<Vec<Blog>> {
        if let Some(cached) = cache::get_json::<Vec<Blog>>(self.cache.as_ref(), LAST_FIVE_KEY).await
        {
            return Ok(cached);
        }
        let blogs = self.repo.last_five().await?;
        cache::put_json(self.cache.as_ref(), LAST_FIVE_KEY, &blogs).await;
        Ok(blogs)
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<Blog>> {
        self.repo.search(term).await
    }

    pub async fn update_blog(&self, id: i32, changes: UpdateBlog) -> AppResult<Blog> {
        // Verify existence first for a clean 404.
        self.get_blog(id).await?;
        let blog = self.repo.update(id, changes).await?;
        self.invalidate_listings().await;
        Ok(blog)
    }

    pub async fn remove_blog(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        if affected > 0 {
            self.invalidate_listings().await;
        }
        Ok(affected > 0)
    }

    /// Links a blog to a category. Both sides must exist; linking the
    /// same pair twice is an explicit conflict, not a no-op.
    pub async fn add_to_category(&self, blog_id: i32, category_id: i32) -> AppResult<()> {
        self.get_blog(blog_id).await?;
        self.require_category(category_id).await?;
        self.repo
            .add_to_category(CategoryBlog {
                blog_id,
                category_id,
            })
            .await?;
        self.invalidate_listings().await;
        Ok(())
    }

    pub async fn remove_from_category(&self, blog_id: i32, category_id: i32) -> AppResult<()> {
        let affected = self
            .repo
            .remove_from_category(CategoryBlog {
                blog_id,
                category_id,
            })
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound {
                entity: "category link".to_string(),
                field: "blog_id, category_id".to_string(),
                value: format!("{blog_id}, {category_id}"),
            });
        }
        self.invalidate_listings().await;
        Ok(())
    }

    /// Blogs in a category. The category must exist; an existing
    /// category with no links yields an empty list.
    pub async fn get_all_by_category_id(&self, category_id: i32) -> AppResult<Vec<Blog>> {
        self.require_category(category_id).await?;
        self.repo.list_by_category(category_id).await
    }

    /// Categories linked to a blog, without duplicates (the join table
    /// key admits each pair once).
    pub async fn get_categories(&self, blog_id: i32) -> AppResult<Vec<Category>> {
        self.get_blog(blog_id).await?;
        self.repo.categories_for_blog(blog_id).await
    }

    async fn require_category(&self, category_id: i32) -> AppResult<()> {
        self.categories
            .find_by_id(category_id)
            .await?
            .map(|_| ())
            .ok_or(AppError::NotFound {
                entity: "category".to_string(),
                field: "id".to_string(),
                value: category_id.to_string(),
            })
    }

    async fn invalidate_listings(&self) {
        tracing::debug!("Invalidating blog listing cache");
        cache::invalidate(self.cache.as_ref(), ALL_BLOGS_KEY).await;
        cache::invalidate(self.cache.as_ref(), LAST_FIVE_KEY).await;
    }
}
