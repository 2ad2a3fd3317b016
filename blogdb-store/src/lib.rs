//! blogdb-store: PostgreSQL persistence for authors and blogs
//!
//! One pool, two repositories, parameterized statements throughout.
//! Blogs are never removed; deletion sets `is_deleted` and every read
//! filters on it.

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{connect, create_pool, create_pool_with_options};
pub use repos::{Author, AuthorRepo, Blog, BlogRepo};

use sqlx::PgPool;

/// Embedded schema migrations (workspace `migrations/`).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");

/// Number of embedded migrations not yet recorded as applied.
pub async fn pending_migrations(pool: &PgPool) -> Result<usize, DbError> {
    let has_table: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await?;

    let applied: Vec<i64> = if has_table {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await?
    } else {
        Vec::new()
    };

    Ok(MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .filter(|m| !applied.contains(&m.version))
        .count())
}

/// Run any pending migrations.
///
/// Returns how many were pending; nothing is executed when the schema is
/// already current.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, DbError> {
    let pending = pending_migrations(pool).await?;
    if pending == 0 {
        tracing::debug!("blogdb schema is current");
        return Ok(0);
    }

    tracing::info!(pending, "Running blogdb migrations...");
    MIGRATOR.run(pool).await?;
    Ok(pending)
}
