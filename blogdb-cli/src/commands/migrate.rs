use anyhow::{Context, Result};
use tracing::info;

use super::open_pool;

pub async fn run() -> Result<()> {
    let pool = open_pool().await?;

    let applied = blogdb_store::run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;

    let known = blogdb_store::MIGRATOR.iter().count();
    info!(applied, migrations = known, "schema is up to date");
    println!("Schema up to date ({} migrations, {} applied now)", known, applied);

    pool.close().await;
    Ok(())
}
