//! PaperTrail CLI - Command-line interface for the PaperTrail logging service
//!
//! Provides commands for:
//! - Registering guilds for audit-log and message-log forwarding
//! - Storing, retrieving, editing and removing logged message content
//! - Inspecting and validating the local configuration

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;

use commands::{
    config::ConfigCommand,
    content::ContentCommand,
    registration::{RegistrationCommand, RegistrationKind},
};
use context::CommandContext;

#[derive(Debug, Parser)]
#[command(name = "papertrail", version, about = "Client for the PaperTrail logging service")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// PaperTrail service base URL
    #[arg(long, global = true, env = "PAPERTRAIL_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage audit-log registrations
    #[command(subcommand)]
    Audit(RegistrationCommand),
    /// Manage message-log registrations
    #[command(subcommand)]
    MessageLog(RegistrationCommand),
    /// Manage logged message content
    #[command(subcommand)]
    Content(ContentCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // `config` commands report a broken file themselves instead of failing here
    let ctx = if matches!(cli.command, Commands::Config(_)) {
        CommandContext::load_lenient(cli.config, cli.base_url, cli.json)
    } else {
        CommandContext::load(cli.config, cli.base_url, cli.json)?
    };

    // Setup tracing
    let filter = match cli.verbose {
        0 => ctx.config().logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let succeeded = match cli.command {
        Commands::Audit(cmd) => cmd.execute(RegistrationKind::Audit, &ctx).await?,
        Commands::MessageLog(cmd) => cmd.execute(RegistrationKind::MessageLog, &ctx).await?,
        Commands::Content(cmd) => cmd.execute(&ctx).await?,
        Commands::Config(cmd) => cmd.execute(&ctx)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
