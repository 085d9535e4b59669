//! User repository
//!
//! - create: INSERT, UNIQUE violation becomes DbError::Duplicate
//! - list: insertion order
//! - get: lookup used as the existence check for exercises

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::models::Username;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicate {resource}: '{value}' already exists")]
    Duplicate {
        resource: &'static str,
        value: String,
    },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a user under a freshly generated id.
    ///
    /// Username uniqueness is left to the UNIQUE constraint.
    pub async fn create(&self, username: Username) -> Result<User, DbError> {
        let id = Uuid::new_v4().to_string();

        let result = sqlx::query("INSERT INTO users (id, username) VALUES (?, ?)")
            .bind(&id)
            .bind(username.as_str())
            .execute(self.pool)
            .await;

        match result {
            Ok(_) => Ok(User {
                id,
                username: username.into_string(),
            }),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(DbError::Duplicate {
                resource: "username",
                value: username.into_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// List every user in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY rowid")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: &str) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_owned(),
            })
    }
}
