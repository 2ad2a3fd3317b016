//! blogdb CLI - authors and blogs in PostgreSQL
//!
//! Entry point for the `blogdb` command-line tool:
//! - Schema migrations (`migrate`)
//! - Author creation (`author`)
//! - Blog create/read/list/update/soft-delete (`blog`)
//! - End-to-end walkthrough against a live database (`demo`)
//! - Configuration inspection (`config`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "blogdb",
    author,
    version,
    about = "Minimal blog persistence layer over PostgreSQL",
    long_about = "Create authors and blogs, read them back, update them and soft-delete them. \
                  Connection settings come from ~/.blogdb/config.toml, BLOGDB_DB_* variables \
                  or DATABASE_URL."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Author operations (create, show)
    Author(commands::author::AuthorArgs),
    /// Blog operations (create, get, list, update, delete)
    Blog(commands::blog::BlogArgs),
    /// Run the full create/read/update/delete walkthrough
    Demo(commands::demo::DemoArgs),
    /// Inspect or initialize configuration (path, show, init)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let output = commands::Output { json: cli.json };

    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Author(args) => commands::author::run(args, output).await,
        Commands::Blog(args) => commands::blog::run(args, output).await,
        Commands::Demo(args) => commands::demo::run(args, output).await,
        Commands::Config(args) => config::run_config(args),
    }
}
