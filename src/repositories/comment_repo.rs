//! Comment repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Comment, NewComment};
use crate::schema::comments;

#[derive(Clone)]
pub struct CommentRepository {
    pool: AsyncDbPool,
}

impl CommentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(comments::table)
            .values(&new_comment)
            .returning(Comment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, AppError> {
        let mut conn = self.pool.get().await?;

        comments::table
            .filter(comments::id.eq(comment_id))
            .select(Comment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// All of a blog's comments in insertion (id) order. The thread
    /// builder relies on this ordering for sibling groups.
    pub async fn list_by_blog(&self, blog_id: i32) -> Result<Vec<Comment>, AppError> {
        let mut conn = self.pool.get().await?;

        comments::table
            .filter(comments::blog_id.eq(blog_id))
            .select(Comment::as_select())
            .order(comments::id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
