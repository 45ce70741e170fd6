//! Delivery of notifications to destinations.
//!
//! Destinations classify every delivery attempt into a [`DeliveryOutcome`]
//! and record it (log line plus counter) before returning. Outcomes never
//! leave the destination.
pub mod discord;

use crate::core::{Destination, Notification};
use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::task;
use tracing::{debug, error};

/// Reasons a request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(reqwest::Error),

    #[error("delivery thread panicked")]
    Panicked,
}

impl DeliveryError {
    /// Wraps a client construction error.
    pub(crate) fn client(err: reqwest::Error) -> Self {
        Self::Client(err.without_url())
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Client(e) | Self::Transport(e) => e.is_timeout(),
            Self::Panicked => false,
        }
    }
}

// reqwest errors carry the request URL, which for webhooks contains the
// token. It is stripped before the error can reach a log line.
impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

/// The result of one delivery attempt.
#[derive(Debug)]
pub(crate) enum DeliveryOutcome {
    /// The destination accepted the message.
    Delivered,
    /// The destination answered with a status other than 200 or 204.
    Rejected { status: StatusCode },
    /// No response was received.
    Failed(DeliveryError),
}

impl DeliveryOutcome {
    /// Classifies a response status. Only 200 and 204 count as delivered.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::OK || status == StatusCode::NO_CONTENT {
            Self::Delivered
        } else {
            Self::Rejected { status }
        }
    }

    /// Logs the outcome and updates the delivery counters.
    pub(crate) fn record(&self, destination: &'static str) {
        match self {
            Self::Delivered => {
                debug!(destination, "Notification delivered");
                metrics::counter!("notifications_delivered_total", "destination" => destination)
                    .increment(1);
            }
            Self::Rejected { status } => {
                error!(
                    destination,
                    status_code = status.as_u16(),
                    "Notification rejected by destination, status_code => {}",
                    status.as_u16()
                );
                metrics::counter!("notifications_rejected_total", "destination" => destination)
                    .increment(1);
            }
            Self::Failed(err) => {
                error!(
                    destination,
                    timeout = err.is_timeout(),
                    error = ?err,
                    "Notification send failed: {}",
                    err
                );
                metrics::counter!("notifications_failed_total", "destination" => destination)
                    .increment(1);
            }
        }
    }
}

/// Runs `destination.notify` on the blocking thread pool.
///
/// For async callers: the destination's HTTP call is blocking and must not
/// run on an executor thread. Like `notify`, this never fails; a panicked
/// or cancelled task is only logged.
pub async fn dispatch(destination: Arc<dyn Destination>, notification: Notification) {
    let name = destination.name();
    let result = task::spawn_blocking(move || {
        let Notification {
            alert,
            query,
            user,
            new_state,
            host,
            options,
        } = notification;
        destination.notify(&alert, &query, &user, new_state, &host, &options);
    })
    .await;

    if let Err(e) = result {
        error!(destination = name, error = %e, "Notification task failed");
    }
}
