//! Subcommand implementations
//!
//! Each module owns its clap args and a `run` entry point.

pub mod author;
pub mod blog;
pub mod demo;
pub mod migrate;

use anyhow::{Context, Result};
use blogdb_core::BlogDbConfig;
use serde::Serialize;
use sqlx::PgPool;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON, or the text produced by `text`.
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.json {
            let rendered =
                serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{}", rendered);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

/// Load configuration and open a verified pool, without touching the schema.
pub async fn open_pool() -> Result<PgPool> {
    let config = BlogDbConfig::load().context("Failed to load configuration")?;
    let pool = blogdb_store::connect(&config.database)
        .await
        .with_context(|| {
            format!(
                "unable to connect to the database at {}",
                config.database.redacted_url()
            )
        })?;
    Ok(pool)
}

/// Open a pool and bring the schema up to date.
pub async fn connect() -> Result<PgPool> {
    let pool = open_pool().await?;
    blogdb_store::run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;
    Ok(pool)
}
