use anyhow::{Context, Result};
use blogdb_core::{AuthorId, AuthorName, AuthorPassword};
use blogdb_store::AuthorRepo;
use clap::{Args, Subcommand};
use serde_json::json;

use super::{connect, Output};

#[derive(Args, Debug)]
pub struct AuthorArgs {
    #[command(subcommand)]
    pub command: AuthorCommands,
}

#[derive(Subcommand, Debug)]
pub enum AuthorCommands {
    /// Create an author and print its id
    Create(CreateArgs),
    /// Show an author by id
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Author name (unique)
    #[arg(long)]
    pub name: String,

    /// Author password, stored as given
    #[arg(long, env = "BLOGDB_AUTHOR_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Author ID
    pub id: AuthorId,
}

pub async fn run(args: AuthorArgs, output: Output) -> Result<()> {
    match args.command {
        AuthorCommands::Create(args) => run_create(args, output).await,
        AuthorCommands::Show(args) => run_show(args, output).await,
    }
}

async fn run_create(args: CreateArgs, output: Output) -> Result<()> {
    // Validate before opening a connection
    let name = AuthorName::new(&args.name)?;
    let password = AuthorPassword::new(&args.password)?;

    let pool = connect().await?;
    let id = AuthorRepo::new(&pool)
        .create(&name, &password)
        .await
        .context("error while creating author")?;

    output.emit(&json!({ "authorid": id, "author_name": name.as_str() }), || {
        format!("New author created with ID: {}", id)
    })
}

async fn run_show(args: ShowArgs, output: Output) -> Result<()> {
    let pool = connect().await?;
    let author = AuthorRepo::new(&pool)
        .get(args.id)
        .await
        .with_context(|| format!("error while getting author {}", args.id))?;

    output.emit(&author, || {
        format!(
            "Author ID: {}, Name: {}, Created: {}",
            author.id, author.name, author.created_at
        )
    })
}
