use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Category model for reading from the database.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

/// Join row linking a blog to a category. The pair is the primary key,
/// so a duplicate link surfaces as a unique violation.
#[derive(Debug, Queryable, Selectable, Insertable, Clone, Copy, PartialEq, Eq)]
#[diesel(table_name = crate::schema::category_blogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryBlog {
    pub blog_id: i32,
    pub category_id: i32,
}
