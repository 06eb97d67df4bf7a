use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Application user model for reading from the database.
/// `password` holds an Argon2id PHC string, never plain text.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::app_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppUser {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Insert model. The service hashes the password before building this.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::app_users)]
pub struct NewAppUser {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
