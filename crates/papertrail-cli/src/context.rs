//! Shared command context
//!
//! Resolves the configuration file and the service base URL once per
//! invocation and builds the clients every command talks through.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use papertrail_client::{
    AuditLogRegistrationClient, HttpServiceEngine, MessageLogContentClient,
    MessageLogRegistrationClient, ReqwestTransport,
};
use papertrail_core::config::Config;
use tracing::debug;

use crate::output::OutputFormat;

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    config: Config,
    config_path: PathBuf,
    base_url_override: Option<String>,
    format: OutputFormat,
}

impl CommandContext {
    /// Loads the configuration for this invocation
    ///
    /// An explicit `--config` path must exist and parse; the default path
    /// silently falls back to built-in defaults.
    pub fn load(
        config_path: Option<PathBuf>,
        base_url_override: Option<String>,
        json: bool,
    ) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => (Config::load(&path)?, path),
            None => {
                let path = Config::default_path();
                (Config::load_or_default(&path), path)
            }
        };

        Ok(Self::new(config, config_path, base_url_override, json))
    }

    /// Like [`load`](Self::load), but never fails on a broken config file
    ///
    /// Used by the `config` commands, which report file problems themselves.
    pub fn load_lenient(
        config_path: Option<PathBuf>,
        base_url_override: Option<String>,
        json: bool,
    ) -> Self {
        let config_path = config_path.unwrap_or_else(Config::default_path);
        let config = Config::load_or_default(&config_path);
        Self::new(config, config_path, base_url_override, json)
    }

    fn new(
        config: Config,
        config_path: PathBuf,
        base_url_override: Option<String>,
        json: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            base_url_override,
            format: OutputFormat::from_json_flag(json),
        }
    }

    /// Context over default settings talking to `base_url`
    #[cfg(test)]
    pub fn for_base_url(base_url: &str, json: bool) -> Self {
        Self::new(
            Config::default(),
            PathBuf::from("config.yaml"),
            Some(base_url.to_string()),
            json,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes one rendered result to stdout
    pub fn emit(&self, rendered: &str) {
        println!("{rendered}");
    }

    /// Prints the success or failure line for a yes/no operation
    pub fn report(&self, ok: bool, success: &str, failure: &str) {
        let message = if ok { success } else { failure };
        self.emit(&self.format.outcome(ok, message));
    }

    /// Base URL from `--base-url` / `PAPERTRAIL_BASE_URL`, then the config file
    pub fn base_url(&self) -> Result<&str> {
        self.base_url_override
            .as_deref()
            .or(self.config.api.base_url.as_deref())
            .with_context(|| {
                format!(
                    "No PaperTrail base URL configured. Pass --base-url, set PAPERTRAIL_BASE_URL \
                     or add api.base_url to {}",
                    self.config_path.display()
                )
            })
    }

    fn engine(&self) -> Result<HttpServiceEngine> {
        let transport = ReqwestTransport::from_config(&self.config.api)
            .context("Failed to build HTTP transport")?;
        Ok(HttpServiceEngine::new(Arc::new(transport)))
    }

    pub fn audit_log_client(&self) -> Result<AuditLogRegistrationClient> {
        let base_url = self.base_url()?;
        debug!(base_url, "Creating audit log registration client");
        Ok(AuditLogRegistrationClient::with_engine(base_url, self.engine()?)?)
    }

    pub fn message_log_client(&self) -> Result<MessageLogRegistrationClient> {
        let base_url = self.base_url()?;
        debug!(base_url, "Creating message log registration client");
        Ok(MessageLogRegistrationClient::with_engine(base_url, self.engine()?)?)
    }

    pub fn content_client(&self) -> Result<MessageLogContentClient> {
        let base_url = self.base_url()?;
        debug!(base_url, "Creating message content client");
        Ok(MessageLogContentClient::with_engine(base_url, self.engine()?)?)
    }
}
