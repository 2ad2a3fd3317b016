use anyhow::{Context, Result};
use blogdb_core::config::redact_url;
use blogdb_core::BlogDbConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration (file + environment), password masked
    Show,
    /// Write a config file with default connection settings
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init(args) => run_init(args),
    }
}

fn run_path() -> Result<()> {
    let path = BlogDbConfig::config_path().context("Could not determine home directory")?;
    println!("{}", path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let mut config = BlogDbConfig::load().context("Failed to load configuration")?;

    let url = config.database.redacted_url();
    config.database.password = "***".to_string();
    config.database.url = config.database.url.as_deref().map(redact_url);

    let toml_str = config
        .to_toml_string()
        .context("Failed to serialize config to TOML")?;

    println!("{}", toml_str);
    println!("# connection: {}", url);
    Ok(())
}

fn run_init(args: InitArgs) -> Result<()> {
    let path = BlogDbConfig::config_path().context("Could not determine home directory")?;

    BlogDbConfig::default()
        .save_to(&path, args.force)
        .with_context(|| format!("Failed to write config file {:?} (use --force to overwrite)", path))?;

    println!("Created config at: {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {}", path.display());
    println!("  2. Run: blogdb migrate");
    Ok(())
}
