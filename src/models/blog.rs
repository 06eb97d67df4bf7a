use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Blog model for reading from the database.
/// Serialize/Deserialize are needed for the listing cache.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, PartialEq)]
#[diesel(table_name = crate::schema::blogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub image_path: Option<String>,
    pub posted_time: DateTime<Utc>,
    pub app_user_id: i32,
}

/// Insert model. `posted_time` is stamped by the service and never
/// touched again afterwards.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::blogs)]
pub struct NewBlog {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub image_path: Option<String>,
    pub posted_time: DateTime<Utc>,
    pub app_user_id: i32,
}

/// Partial update model. Deliberately has no `posted_time` or
/// `app_user_id` fields; neither may change after creation.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::blogs)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}
