//! Comment-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::CommentThread;

#[derive(Debug, Deserialize, Validate)]
pub struct CommentAddDto {
    pub blog_id: i32,
    pub parent_comment_id: Option<i32>,
    #[validate(length(min = 1, max = 2000, message = "Content must be between 1 and 2000 characters"))]
    pub content: String,
}

/// Query parameters for `GetComments`.
#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    pub parent_comment_id: Option<i32>,
}

/// One comment with its nested replies.
#[derive(Debug, Serialize)]
pub struct CommentListDto {
    pub id: i32,
    pub blog_id: i32,
    pub parent_comment_id: Option<i32>,
    pub content: String,
    pub posted_time: DateTime<Utc>,
    pub sub_comments: Vec<CommentListDto>,
}

/// A freshly inserted comment has no replies yet.
impl From<crate::models::Comment> for CommentListDto {
    fn from(comment: crate::models::Comment) -> Self {
        Self {
            id: comment.id,
            blog_id: comment.blog_id,
            parent_comment_id: comment.parent_comment_id,
            content: comment.content,
            posted_time: comment.posted_time,
            sub_comments: Vec::new(),
        }
    }
}

impl From<CommentThread> for CommentListDto {
    fn from(thread: CommentThread) -> Self {
        Self {
            id: thread.comment.id,
            blog_id: thread.comment.blog_id,
            parent_comment_id: thread.comment.parent_comment_id,
            content: thread.comment.content,
            posted_time: thread.comment.posted_time,
            sub_comments: thread.sub_comments.into_iter().map(Self::from).collect(),
        }
    }
}
