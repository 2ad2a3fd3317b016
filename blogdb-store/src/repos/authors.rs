//! Author repository
//!
//! Authors are created once and looked up by id or name. The stored
//! password is write-only from this side: no query reads it back.

use blogdb_core::{AuthorId, AuthorName, AuthorPassword};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::is_unique_violation;
use crate::DbError;

/// Author record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    #[sqlx(rename = "authorid")]
    #[serde(rename = "authorid")]
    pub id: AuthorId,
    #[sqlx(rename = "author_name")]
    #[serde(rename = "author_name")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Author repository
pub struct AuthorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AuthorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an author and return the generated id.
    ///
    /// Author names are unique; a duplicate returns `DbError::Conflict`.
    pub async fn create(
        &self,
        name: &AuthorName,
        password: &AuthorPassword,
    ) -> Result<AuthorId, DbError> {
        let id: AuthorId = sqlx::query_scalar(
            r#"
            INSERT INTO authors (author_name, author_password)
            VALUES ($1, $2)
            RETURNING authorid
            "#,
        )
        .bind(name.as_str())
        .bind(password.expose())
        .fetch_one(self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                DbError::Conflict {
                    resource: "author",
                    detail: format!("name '{}' already exists", name),
                }
            } else {
                DbError::Sqlx(err)
            }
        })?;

        tracing::debug!(author_id = %id, "created author");
        Ok(id)
    }

    /// Get a single author by id.
    pub async fn get(&self, id: AuthorId) -> Result<Author, DbError> {
        sqlx::query_as::<_, Author>(
            r#"
            SELECT authorid, author_name, created_at
            FROM authors
            WHERE authorid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("author", id))
    }

    /// Look up an author by exact name.
    pub async fn find_by_name(&self, name: &AuthorName) -> Result<Option<Author>, DbError> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT authorid, author_name, created_at
            FROM authors
            WHERE author_name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p blogdb-store -- --ignored

    fn name(s: &str) -> AuthorName {
        AuthorName::new(s).unwrap()
    }

    fn password(s: &str) -> AuthorPassword {
        AuthorPassword::new(s).unwrap()
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn create_and_get(pool: PgPool) -> Result<(), DbError> {
        let repo = AuthorRepo::new(&pool);
        let id = repo.create(&name("user1"), &password("user123")).await?;

        let author = repo.get(id).await?;
        assert_eq!(author.id, id);
        assert_eq!(author.name, "user1");

        let stored: String =
            sqlx::query_scalar("SELECT author_password FROM authors WHERE authorid = $1")
                .bind(id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(stored, "user123");
        Ok(())
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn duplicate_name_conflicts(pool: PgPool) -> Result<(), DbError> {
        let repo = AuthorRepo::new(&pool);
        repo.create(&name("user1"), &password("a")).await?;

        let err = repo.create(&name("user1"), &password("b")).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { resource: "author", .. }));
        Ok(())
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn missing_author_is_not_found(pool: PgPool) -> Result<(), DbError> {
        let repo = AuthorRepo::new(&pool);
        let err = repo.get(AuthorId::new(999)?).await.unwrap_err();
        assert!(err.is_not_found());

        assert!(repo.find_by_name(&name("nobody")).await?.is_none());
        Ok(())
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    #[ignore = "requires database"]
    async fn name_with_quotes_is_bound_not_interpolated(pool: PgPool) -> Result<(), DbError> {
        let repo = AuthorRepo::new(&pool);
        let tricky = name("o'brien'); DROP TABLE authors; --");
        let id = repo.create(&tricky, &password("x")).await?;

        let found = repo.find_by_name(&tricky).await?.expect("author stored");
        assert_eq!(found.id, id);
        Ok(())
    }
}
