//! Blog repository: async queries over `blogs` plus the
//! `category_blogs` join table.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Blog, Category, CategoryBlog, NewBlog, UpdateBlog};
use crate::schema::{blogs, categories, category_blogs};

/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is
/// cheap; no extra `Arc` wrapping needed.
#[derive(Clone)]
pub struct BlogRepository {
    pool: AsyncDbPool,
}

impl BlogRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(blogs::table)
            .values(&new_blog)
            .returning(Blog::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, blog_id: i32) -> Result<Option<Blog>, AppError> {
        let mut conn = self.pool.get().await?;

        blogs::table
            .filter(blogs::id.eq(blog_id))
            .select(Blog::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// All blogs, newest first.
    pub async fn list_sorted_by_posted_time(&self) -> Result<Vec<Blog>, AppError> {
        let mut conn = self.pool.get().await?;

        blogs::table
            .select(Blog::as_select())
            .order(blogs::posted_time.desc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// The five newest blogs; fewer rows simply yield fewer results.
    pub async fn last_five(&self) -> Result<Vec<Blog>, AppError> {
        let mut conn = self.pool.get().await?;

        blogs::table
            .select(Blog::as_select())
            .order(blogs::posted_time.desc())
            .limit(5)
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Case-insensitive substring search over title and descriptions,
    /// newest first.
    pub async fn search(&self, term: &str) -> Result<Vec<Blog>, AppError> {
        let mut conn = self.pool.get().await?;
        let pattern = format!("%{term}%");

        blogs::table
            .filter(
                blogs::title
                    .ilike(pattern.as_str())
                    .or(blogs::short_description.ilike(pattern.as_str()))
                    .or(blogs::description.ilike(pattern.as_str())),
            )
            .select(Blog::as_select())
            .order(blogs::posted_time.desc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(&self, blog_id: i32, changes: UpdateBlog) -> Result<Blog, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::update(blogs::table.filter(blogs::id.eq(blog_id)))
            .set(&changes)
            .returning(Blog::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, blog_id: i32) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::delete(blogs::table.filter(blogs::id.eq(blog_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Inserts a (blog, category) link. A duplicate link violates the
    /// composite primary key and surfaces as `AppError::Duplicate`.
    pub async fn add_to_category(&self, link: CategoryBlog) -> Result<(), AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(category_blogs::table)
            .values(&link)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    /// Removes a (blog, category) link, returning affected row count.
    pub async fn remove_from_category(&self, link: CategoryBlog) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::delete(
            category_blogs::table.filter(
                category_blogs::blog_id
                    .eq(link.blog_id)
                    .and(category_blogs::category_id.eq(link.category_id)),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Blogs linked to a category via the join table, newest first.
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Blog>, AppError> {
        let mut conn = self.pool.get().await?;

        category_blogs::table
            .inner_join(blogs::table)
            .filter(category_blogs::category_id.eq(category_id))
            .select(Blog::as_select())
            .order(blogs::posted_time.desc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Categories linked to a blog. Projects only the category columns
    /// so serialization never walks back into blogs.
    pub async fn categories_for_blog(&self, blog_id: i32) -> Result<Vec<Category>, AppError> {
        let mut conn = self.pool.get().await?;

        category_blogs::table
            .inner_join(categories::table)
            .filter(category_blogs::blog_id.eq(blog_id))
            .select(Category::as_select())
            .order(categories::name.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
