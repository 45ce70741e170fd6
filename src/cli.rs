//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. Settings flags are merged over the `discord-alerts.toml` file and
//! environment variables; the remaining flags describe the alert transition to send.

use crate::core::{Alert, AlertOptions, AlertState, Query};
use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Sends an alert state change notification to a Discord webhook.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Discord webhook URL. Overrides `discord.webhook_url`.
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Base URL used for the query and alert links.
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Log level filter, e.g. "debug". `RUST_LOG` takes precedence.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Name of the alert.
    #[arg(long, value_name = "NAME", default_value = "Test Alert")]
    pub alert_name: String,

    /// Id of the alert.
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub alert_id: u64,

    /// Id of the query the alert watches.
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub query_id: u64,

    /// New state of the alert: ok, triggered or unknown.
    #[arg(long, value_name = "STATE", default_value = "triggered")]
    pub state: AlertState,

    /// Headline to use when the alert triggers.
    #[arg(long, value_name = "TEXT")]
    pub custom_subject: Option<String>,

    /// Text added to the message as a description.
    #[arg(long, value_name = "TEXT")]
    pub custom_body: Option<String>,

    /// Print the payload instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the destination's configuration schema and exit.
    #[arg(long)]
    pub schema: bool,
}

impl Cli {
    /// The alert described by the command-line flags.
    pub fn alert(&self) -> Alert {
        Alert {
            id: self.alert_id,
            name: self.alert_name.clone(),
            options: AlertOptions {
                custom_subject: self.custom_subject.clone(),
                custom_body: self.custom_body.clone(),
                ..Default::default()
            },
        }
    }

    pub fn query(&self) -> Query {
        Query { id: self.query_id }
    }
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        if let Some(host) = &self.host {
            dict.insert("host".into(), Value::from(host.clone()));
        }

        if let Some(url) = &self.webhook_url {
            let mut discord = Dict::new();
            discord.insert("webhook_url".into(), Value::from(url.clone()));
            dict.insert("discord".into(), Value::Dict(Tag::Default, discord));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
