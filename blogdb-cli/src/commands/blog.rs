use anyhow::{Context, Result};
use blogdb_core::models::pagination::DEFAULT_PER_PAGE;
use blogdb_core::{AuthorId, BlogContent, BlogId, BlogTitle, Pagination};
use blogdb_store::{Blog, BlogRepo};
use clap::{Args, Subcommand};
use serde_json::json;

use super::{connect, Output};

#[derive(Args, Debug)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub command: BlogCommands,
}

#[derive(Subcommand, Debug)]
pub enum BlogCommands {
    /// Create a blog for an existing author
    Create(CreateArgs),
    /// Read one blog by id
    Get(IdArgs),
    /// List live (not deleted) blogs
    List(ListArgs),
    /// Replace a blog's title and content
    Update(UpdateArgs),
    /// Soft-delete a blog (the row is kept, reads skip it)
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Blog title
    #[arg(long)]
    pub title: String,

    /// Author ID that owns the blog
    #[arg(long)]
    pub author: AuthorId,

    /// Blog body
    #[arg(long)]
    pub content: String,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Blog ID
    pub id: BlogId,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number (1-indexed); without paging flags every blog is listed
    #[arg(long)]
    pub page: Option<u32>,

    /// Blogs per page (max 100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Only blogs by this author ID
    #[arg(long)]
    pub author: Option<AuthorId>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Blog ID
    pub id: BlogId,

    /// New title
    #[arg(long)]
    pub title: String,

    /// New content
    #[arg(long)]
    pub content: String,
}

pub async fn run(args: BlogArgs, output: Output) -> Result<()> {
    match args.command {
        BlogCommands::Create(args) => run_create(args, output).await,
        BlogCommands::Get(args) => run_get(args, output).await,
        BlogCommands::List(args) => run_list(args, output).await,
        BlogCommands::Update(args) => run_update(args, output).await,
        BlogCommands::Delete(args) => run_delete(args, output).await,
    }
}

async fn run_create(args: CreateArgs, output: Output) -> Result<()> {
    let title = BlogTitle::new(&args.title)?;
    let content = BlogContent::new(&args.content)?;

    let pool = connect().await?;
    let id = BlogRepo::new(&pool)
        .create(&title, args.author, &content)
        .await
        .context("error while creating a new blog")?;

    output.emit(&json!({ "blogid": id }), || {
        format!("New blog created with ID: {}", id)
    })
}

async fn run_get(args: IdArgs, output: Output) -> Result<()> {
    let pool = connect().await?;
    let blog = BlogRepo::new(&pool)
        .get(args.id)
        .await
        .with_context(|| format!("error while getting a blog with id {}", args.id))?;

    output.emit(&blog, || {
        format!(
            "Title:{}, Author ID:{}, Blog Content: {}",
            blog.title, blog.author_id, blog.content
        )
    })
}

async fn run_list(args: ListArgs, output: Output) -> Result<()> {
    let pool = connect().await?;
    let repo = BlogRepo::new(&pool);

    let paged = args.page.is_some() || args.per_page.is_some() || args.author.is_some();
    if !paged {
        let blogs = repo
            .list_all()
            .await
            .context("error while getting all blogs")?;
        return output.emit(&blogs, || render_rows(&blogs));
    }

    let page = Pagination::new(
        args.page.unwrap_or(1),
        args.per_page.unwrap_or(DEFAULT_PER_PAGE),
    );
    let result = match args.author {
        Some(author) => repo.list_by_author(author, page).await,
        None => repo.list(page).await,
    }
    .context("error while listing blogs")?;

    output.emit(&result, || {
        format!(
            "{}\npage {}/{} ({} blogs)",
            render_rows(&result.items),
            result.page,
            result.total_pages(),
            result.total
        )
    })
}

async fn run_update(args: UpdateArgs, output: Output) -> Result<()> {
    let title = BlogTitle::new(&args.title)?;
    let content = BlogContent::new(&args.content)?;

    let pool = connect().await?;
    let blog = BlogRepo::new(&pool)
        .update(args.id, &title, &content)
        .await
        .with_context(|| format!("error while updating blog {}", args.id))?;

    output.emit(&blog, || format!("Blog {} updated", blog.id))
}

async fn run_delete(args: IdArgs, output: Output) -> Result<()> {
    let pool = connect().await?;
    BlogRepo::new(&pool)
        .delete(args.id)
        .await
        .with_context(|| format!("error while deleting blog {}", args.id))?;

    output.emit(&json!({ "blogid": args.id, "is_deleted": true }), || {
        format!("Blog {} deleted", args.id)
    })
}

/// One line per blog: id, title, author, last modification.
pub(crate) fn render_rows(blogs: &[Blog]) -> String {
    if blogs.is_empty() {
        return "No blogs".to_string();
    }

    blogs
        .iter()
        .map(|b| {
            format!(
                "{:>5}  {}  (author {}, modified {})",
                b.id,
                b.title,
                b.author_id,
                b.modified_at.format("%Y-%m-%d %H:%M:%S")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
