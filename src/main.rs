//! discord-alerts - send an alert state change to a Discord webhook
//!
//! Builds one notification from the command-line flags and hands it to the
//! Discord destination, or prints the payload / configuration schema.

use anyhow::{Context, Result};
use clap::Parser;
use discord_alerts::{
    cli::Cli, config::Config, formatting::build_payload, Destination, DiscordDestination, User,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let destination = DiscordDestination::new();

    if cli.schema {
        let schema = serde_json::to_string_pretty(&destination.configuration_schema())?;
        println!("{schema}");
        return Ok(());
    }

    let alert = cli.alert();
    let query = cli.query();
    let new_state = cli.state;

    if cli.dry_run {
        let payload = build_payload(&alert, &query, new_state, &config.host);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let options = config.destination_options().context(
        "No Discord webhook URL configured. Use --webhook-url, discord.webhook_url \
         or DISCORD_ALERTS_DISCORD__WEBHOOK_URL",
    )?;

    info!(
        alert = %alert.name,
        state = %new_state,
        host = %config.host,
        "Sending notification"
    );
    destination.notify(&alert, &query, &User::default(), new_state, &config.host, &options);

    Ok(())
}
