//! Discord webhook destination.

use crate::core::{Alert, AlertState, Destination, DestinationOptions, Query, User};
use crate::destination::ConfigurationSchema;
use crate::formatting::{build_payload, DiscordPayload};
use crate::notification::{DeliveryError, DeliveryOutcome};
use reqwest::header::CONTENT_TYPE;
use std::thread;
use std::time::Duration;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task;
use tracing::{debug, instrument};

/// How long to wait for Discord before giving up on a notification.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts alert state changes to a Discord channel through an incoming
/// webhook.
///
/// Each call builds its own HTTP client, so the destination carries no
/// connection state between notifications and can be shared freely.
/// `notify` blocks for up to [`DEFAULT_TIMEOUT`]; async callers that must
/// not stall an executor thread should use [`crate::dispatch`].
#[derive(Debug, Clone)]
pub struct DiscordDestination {
    timeout: Duration,
}

impl DiscordDestination {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sends the payload and classifies the result.
    ///
    /// The blocking client must not be driven from an executor thread, so
    /// inside a tokio runtime the request leaves the async context first:
    /// `block_in_place` on a multi-threaded runtime, a scoped thread on a
    /// current-thread runtime.
    fn deliver(&self, url: &str, payload: &DiscordPayload) -> DeliveryOutcome {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                task::block_in_place(|| self.send_request(url, payload))
            }
            Ok(_) => thread::scope(|scope| {
                scope
                    .spawn(|| self.send_request(url, payload))
                    .join()
                    .unwrap_or_else(|_| DeliveryOutcome::Failed(DeliveryError::Panicked))
            }),
            Err(_) => self.send_request(url, payload),
        }
    }

    /// Sends the request in a blocking manner.
    fn send_request(&self, url: &str, payload: &DiscordPayload) -> DeliveryOutcome {
        let client = match reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => return DeliveryOutcome::Failed(DeliveryError::client(e)),
        };

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send();

        match response {
            Ok(res) => DeliveryOutcome::from_status(res.status()),
            Err(e) => DeliveryOutcome::Failed(e.into()),
        }
    }
}

impl Default for DiscordDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for DiscordDestination {
    fn name(&self) -> &'static str {
        "discord"
    }

    fn icon(&self) -> &'static str {
        "fa-discord"
    }

    fn configuration_schema(&self) -> ConfigurationSchema {
        ConfigurationSchema::object()
            .string("url", "Discord Webhook URL")
            .secret("url")
            .require("url")
    }

    #[instrument(
        skip_all,
        fields(alert_id = alert.id, query_id = query.id, state = %new_state)
    )]
    fn notify(
        &self,
        alert: &Alert,
        query: &Query,
        _user: &User,
        new_state: AlertState,
        host: &str,
        options: &DestinationOptions,
    ) {
        let payload = build_payload(alert, query, new_state, host);
        debug!(content = %payload.content, "Sending Discord notification");

        self.deliver(options.url.expose(), &payload).record(self.name());
    }
}
