//! Config command - View and validate PaperTrail configuration
//!
//! Provides the `papertrail config` CLI command which:
//! 1. Shows the effective configuration (YAML or JSON)
//! 2. Validates the configuration file and reports errors

use anyhow::{Context, Result};
use clap::Subcommand;
use papertrail_core::config::Config;
use tracing::info;

use crate::context::CommandContext;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,
    /// Validate configuration file
    Validate,
}

impl ConfigCommand {
    /// Execute the config command
    pub fn execute(&self, ctx: &CommandContext) -> Result<bool> {
        match self {
            ConfigCommand::Show => execute_show(ctx),
            ConfigCommand::Validate => execute_validate(ctx),
        }
    }
}

/// Show current configuration
fn execute_show(ctx: &CommandContext) -> Result<bool> {
    let config_path = ctx.config_path();
    let config = ctx.config();

    info!(config_path = %config_path.display(), "Showing configuration");

    let json =
        serde_json::to_value(config).context("Failed to serialize configuration to JSON")?;
    let yaml =
        serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

    let mut details = vec![String::new()];
    details.extend(yaml.lines().map(str::to_string));

    ctx.emit(&ctx.format().report(
        true,
        &format!("Configuration ({})", config_path.display()),
        &details,
        &json,
    ));
    Ok(true)
}

/// Validate configuration file
fn execute_validate(ctx: &CommandContext) -> Result<bool> {
    let config_path = ctx.config_path();
    let file_line = format!("File: {}", config_path.display());

    // Load explicitly so parse errors are reported instead of defaulted
    let config = match Config::load(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            let message = if config_path.exists() {
                format!("{e:#}")
            } else {
                "Configuration file not found".to_string()
            };

            ctx.emit(&ctx.format().report(
                false,
                &message,
                &[file_line],
                &serde_json::json!({
                    "valid": false,
                    "config_path": config_path.display().to_string(),
                    "errors": [message],
                }),
            ));
            return Ok(false);
        }
    };

    info!(config_path = %config_path.display(), "Validating configuration");

    let errors = config.validate();
    let headline = if errors.is_empty() {
        "Configuration is valid".to_string()
    } else {
        format!(
            "Configuration has {} error{}:",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        )
    };

    let mut details = vec![file_line];
    if !errors.is_empty() {
        details.push(String::new());
        details.extend(
            errors
                .iter()
                .map(|error| format!("  {} - {}", error.field, error.message)),
        );
    }

    let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    ctx.emit(&ctx.format().report(
        errors.is_empty(),
        &headline,
        &details,
        &serde_json::json!({
            "valid": errors.is_empty(),
            "config_path": config_path.display().to_string(),
            "errors": error_strings,
        }),
    ));

    Ok(errors.is_empty())
}
