use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Comment model for reading from the database.
///
/// `parent_comment_id` forms a self-referential tree within one blog.
/// A parent id always references a row inserted earlier, so the
/// relation is acyclic by construction.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, PartialEq)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id: i32,
    pub blog_id: i32,
    pub parent_comment_id: Option<i32>,
    pub content: String,
    pub posted_time: DateTime<Utc>,
}

/// Insert model. `posted_time` is stamped by the service; comments are
/// never updated after creation.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub blog_id: i32,
    pub parent_comment_id: Option<i32>,
    pub content: String,
    pub posted_time: DateTime<Utc>,
}
