//! Configuration management for the discord-alerts binary
//!
//! This module defines the `Config` struct used by the command-line sender.
//! It uses the `figment` crate to layer defaults, a `discord-alerts.toml`
//! file, `DISCORD_ALERTS_` environment variables and command-line flags.
//! The destination itself is configured by its caller and never reads this.

use crate::cli::Cli;
use crate::core::{DestinationOptions, WebhookUrl};
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given. A missing file is ignored.
pub const DEFAULT_CONFIG_FILE: &str = "discord-alerts.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Base URL of the alerting UI, used for the links in each message.
    pub host: String,
    /// Configuration for the Discord destination.
    #[serde(default)]
    pub discord: DiscordConfig,
}

/// Configuration for the Discord destination.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DiscordConfig {
    /// The Discord incoming webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<WebhookUrl>,
}

impl Config {
    /// Loads the configuration by layering defaults, the TOML file,
    /// environment variables and command-line flags, in that order.
    ///
    /// Nested keys are separated by `__` in environment variables, e.g.
    /// `DISCORD_ALERTS_DISCORD__WEBHOOK_URL`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_file = cli
            .config
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("DISCORD_ALERTS_").split("__"))
            .merge(cli)
            .extract()?;
        Ok(config)
    }

    /// The destination options to send with, if a webhook URL is configured.
    pub fn destination_options(&self) -> Option<DestinationOptions> {
        self.discord
            .webhook_url
            .clone()
            .map(|url| DestinationOptions { url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            host: "http://localhost:5000".to_string(),
            discord: DiscordConfig::default(),
        }
    }
}
