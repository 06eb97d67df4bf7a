//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories and handlers.

mod app_user_service;
mod blog_service;
mod category_service;
mod comment_service;

pub use app_user_service::AppUserService;
pub use blog_service::BlogService;
pub use category_service::CategoryService;
pub use comment_service::{CommentService, CommentThread};

use std::sync::Arc;

use crate::cache::AppCache;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access from handlers.
/// Cloning is cheap; the underlying pool and cache are `Arc`-based.
#[derive(Clone)]
pub struct Services {
    pub blogs: BlogService,
    pub categories: CategoryService,
    pub comments: CommentService,
    pub app_users: AppUserService,
}

impl Services {
    pub fn new(repos: Repositories, cache: Arc<dyn AppCache>) -> Self {
        Self {
            blogs: BlogService::new(repos.blogs.clone(), repos.categories.clone(), cache),
            categories: CategoryService::new(repos.categories),
            comments: CommentService::new(repos.comments, repos.blogs),
            app_users: AppUserService::new(repos.app_users),
        }
    }
}
