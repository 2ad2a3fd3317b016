//! Blog repository
//!
//! Handles blog CRUD with soft delete:
//! - create: author existence check + insert in one transaction
//! - reads: `is_deleted = FALSE` on every query
//! - delete: flips `is_deleted`, the row stays

use blogdb_core::{AuthorId, BlogContent, BlogId, BlogTitle, Paginated, Pagination};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::is_foreign_key_violation;
use crate::DbError;

/// Blog record from database
///
/// Serialized field names follow the column names.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Blog {
    #[sqlx(rename = "blogid")]
    #[serde(rename = "blogid")]
    pub id: BlogId,
    pub title: String,
    #[sqlx(rename = "authorid")]
    #[serde(rename = "authorid")]
    pub author_id: AuthorId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Blog plus the window count used for pagination
#[derive(FromRow)]
struct BlogPageRow {
    #[sqlx(flatten)]
    blog: Blog,
    total: i64,
}

/// Blog repository
pub struct BlogRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BlogRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a blog for an existing author and return the generated id.
    ///
    /// Uses a transaction so the author check and the insert see the same
    /// snapshot; a missing author returns `NotFound` instead of a raw
    /// foreign-key error.
    pub async fn create(
        &self,
        title: &BlogTitle,
        author: AuthorId,
        content: &BlogContent,
    ) -> Result<BlogId, DbError> {
        let mut tx = self.pool.begin().await?;

        let author_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM authors WHERE authorid = $1)")
                .bind(author)
                .fetch_one(&mut *tx)
                .await?;

        if !author_exists.0 {
            return Err(DbError::not_found("author", author));
        }

        let id: BlogId = sqlx::query_scalar(
            r#"
            INSERT INTO blog (title, authorid, content)
            VALUES ($1, $2, $3)
            RETURNING blogid
            "#,
        )
        .bind(title.as_str())
        .bind(author)
        .bind(content.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            // Author removed between the check and the insert
            if is_foreign_key_violation(&err) {
                DbError::not_found("author", author)
            } else {
                DbError::Sqlx(err)
            }
        })?;

        tx.commit().await?;

        tracing::debug!(blog_id = %id, author_id = %author, "created blog");
        Ok(id)
    }

    /// Get a single live blog by id.
    ///
    /// Soft-deleted blogs are reported as `NotFound`.
    pub async fn get(&self, id: BlogId) -> Result<Blog, DbError> {
        sqlx::query_as::<_, Blog>(
            r#"
            SELECT blogid, title, authorid, content, created_at, modified_at
            FROM blog
            WHERE blogid = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("blog", id))
    }

    /// All live blogs, oldest first.
    pub async fn list_all(&self) -> Result<Vec<Blog>, DbError> {
        let blogs = sqlx::query_as::<_, Blog>(
            r#"
            SELECT title, blogid, authorid, content, created_at, modified_at
            FROM blog
            WHERE is_deleted = FALSE
            ORDER BY blogid ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(blogs)
    }

    /// One page of live blogs, newest first.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<Blog>, DbError> {
        let rows = sqlx::query_as::<_, BlogPageRow>(
            r#"
            SELECT
                blogid, title, authorid, content, created_at, modified_at,
                COUNT(*) OVER() AS total
            FROM blog
            WHERE is_deleted = FALSE
            ORDER BY created_at DESC, blogid DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        self.finish_page(rows, page, None).await
    }

    /// One page of an author's live blogs, newest first.
    pub async fn list_by_author(
        &self,
        author: AuthorId,
        page: Pagination,
    ) -> Result<Paginated<Blog>, DbError> {
        let rows = sqlx::query_as::<_, BlogPageRow>(
            r#"
            SELECT
                blogid, title, authorid, content, created_at, modified_at,
                COUNT(*) OVER() AS total
            FROM blog
            WHERE authorid = $1 AND is_deleted = FALSE
            ORDER BY created_at DESC, blogid DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        self.finish_page(rows, page, Some(author)).await
    }

    /// Count live blogs, optionally for one author.
    pub async fn count(&self, author: Option<AuthorId>) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM blog
            WHERE is_deleted = FALSE
              AND ($1::INTEGER IS NULL OR authorid = $1)
            "#,
        )
        .bind(author)
        .fetch_one(self.pool)
        .await?;

        Ok(total)
    }

    /// The window count rides on each row, so a page past the end has no
    /// total of its own and needs a separate count.
    async fn finish_page(
        &self,
        rows: Vec<BlogPageRow>,
        page: Pagination,
        author: Option<AuthorId>,
    ) -> Result<Paginated<Blog>, DbError> {
        let total = match rows.first() {
            Some(row) => row.total,
            None if page.offset() > 0 => self.count(author).await?,
            None => 0,
        };

        Ok(Paginated {
            items: rows.into_iter().map(|r| r.blog).collect(),
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Replace title and content and bump `modified_at`.
    ///
    /// Deleted or unknown blogs return `NotFound`.
    pub async fn update(
        &self,
        id: BlogId,
        title: &BlogTitle,
        content: &BlogContent,
    ) -> Result<Blog, DbError> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blog
            SET title = $1, content = $2, modified_at = NOW()
            WHERE blogid = $3 AND is_deleted = FALSE
            RETURNING blogid, title, authorid, content, created_at, modified_at
            "#,
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("blog", id))?;

        tracing::debug!(blog_id = %id, "updated blog");
        Ok(blog)
    }

    /// Soft delete: set `is_deleted` and keep the row.
    ///
    /// Deleting an already-deleted blog succeeds; an unknown id is
    /// `NotFound`.
    pub async fn delete(&self, id: BlogId) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE blog SET is_deleted = TRUE WHERE blogid = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("blog", id));
        }

        tracing::debug!(blog_id = %id, "soft-deleted blog");
        Ok(())
    }
}
