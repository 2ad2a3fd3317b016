//! End-to-end walkthrough of every store operation
//!
//! Creates (or reuses) an author, writes a blog, reads it back, lists all
//! blogs, updates the new blog and finally soft-deletes it.

use anyhow::{Context, Result};
use blogdb_core::{AuthorId, AuthorName, AuthorPassword, BlogContent, BlogTitle};
use blogdb_store::{AuthorRepo, BlogRepo, DbError};
use clap::Args;
use serde_json::json;
use sqlx::PgPool;
use tracing::warn;

use super::blog::render_rows;
use super::{connect, Output};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Author name to create (reused if it already exists)
    #[arg(long, default_value = "user1")]
    pub author: String,

    /// Password for a newly created author
    #[arg(long, default_value = "user123")]
    pub password: String,

    /// Leave the demo blog in place instead of soft-deleting it
    #[arg(long)]
    pub keep: bool,
}

pub async fn run(args: DemoArgs, output: Output) -> Result<()> {
    let name = AuthorName::new(&args.author)?;
    let password = AuthorPassword::new(&args.password)?;
    let title = BlogTitle::new("Blog title")?;
    let content = BlogContent::new("its a demo blog content")?;
    let updated_title = BlogTitle::new("updated Title")?;
    let updated_content = BlogContent::new("this is updated content")?;

    let pool = connect().await?;

    let author_id = ensure_author(&pool, &name, &password).await?;
    if !output.json {
        println!("Using author with ID: {}", author_id);
    }

    let blogs = BlogRepo::new(&pool);

    let blog_id = blogs
        .create(&title, author_id, &content)
        .await
        .context("error while creating a new blog")?;
    if !output.json {
        println!("New blog created with ID: {}", blog_id);
    }

    let blog = blogs
        .get(blog_id)
        .await
        .context("error while getting a blog with id")?;
    if !output.json {
        println!(
            "Title:{}, Author ID:{}, Blog Content: {}",
            blog.title, blog.author_id, blog.content
        );
    }

    let all = blogs
        .list_all()
        .await
        .context("error while getting all blogs")?;
    if !output.json {
        println!("Blogs:\n{}", render_rows(&all));
    }

    let updated = blogs
        .update(blog_id, &updated_title, &updated_content)
        .await
        .context("error while updating a blog")?;
    if !output.json {
        println!("Blog {} updated: {}", updated.id, updated.title);
    }

    if !args.keep {
        blogs
            .delete(blog_id)
            .await
            .context("error while deleting a blog")?;
        if !output.json {
            println!("Blog {} deleted", blog_id);
        }
    }

    if output.json {
        output.emit(
            &json!({
                "authorid": author_id,
                "created": blog,
                "live_blogs": all.len(),
                "updated": updated,
                "deleted": !args.keep,
            }),
            String::new,
        )?;
    }

    pool.close().await;
    Ok(())
}

/// Create the author, or fall back to the existing one with that name.
async fn ensure_author(
    pool: &PgPool,
    name: &AuthorName,
    password: &AuthorPassword,
) -> Result<AuthorId> {
    let authors = AuthorRepo::new(pool);

    match authors.create(name, password).await {
        Ok(id) => Ok(id),
        Err(DbError::Conflict { .. }) => {
            warn!(author = %name, "author already exists, reusing it");
            let existing = authors
                .find_by_name(name)
                .await
                .context("error while looking up author")?
                .with_context(|| format!("author '{}' vanished after conflict", name))?;
            Ok(existing.id)
        }
        Err(err) => Err(err).context("error while creating author"),
    }
}
