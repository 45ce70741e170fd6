//! Core domain types and the destination trait
//!
//! This module defines the data handed to a destination by the alerting
//! engine and the trait contract every destination adapter implements.

use crate::destination::ConfigurationSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The lifecycle state of an alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    /// The alert condition is not met.
    Ok,
    /// The alert condition is met and the alert is firing.
    #[default]
    Triggered,
    /// The alert could not be evaluated.
    Unknown,
}

impl AlertState {
    /// Returns the Discord embed color for this state.
    ///
    /// Discord expects embed colors as decimal integers; they are kept as
    /// strings because that is how they go out on the wire.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ok => "2600544",         // Green
            Self::Triggered => "12597547", // Red
            Self::Unknown => "16776960",   // Yellow
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Triggered => "triggered",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name an alert state.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown alert state '{0}', expected one of: ok, triggered, unknown")]
pub struct ParseAlertStateError(String);

impl FromStr for AlertState {
    type Err = ParseAlertStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "triggered" => Ok(Self::Triggered),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseAlertStateError(s.to_string())),
        }
    }
}

/// Caller-controlled settings attached to an alert.
///
/// Only the message overrides are interpreted here. Every other key the
/// alerting engine stores is preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertOptions {
    /// Replaces the headline text when the alert triggers.
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_subject: Option<String>,
    /// Added to the message as a "Description" field.
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_body: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AlertOptions {
    /// The custom subject, if set to a non-empty string.
    pub fn subject(&self) -> Option<&str> {
        non_empty(self.custom_subject.as_deref())
    }

    /// The custom body, if set to a non-empty string.
    pub fn body(&self) -> Option<&str> {
        non_empty(self.custom_body.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// The engine stores options untyped. A non-string override is ignored
// rather than making the whole alert unreadable.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// A named monitoring rule tracked by the alerting engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub options: AlertOptions,
}

/// The query an alert is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub id: u64,
}

/// The user on whose behalf the engine invokes a destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// A webhook URL. The URL embeds the webhook token, so it is treated as a
/// secret: it has no `Display` impl and its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookUrl(String);

impl WebhookUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the raw URL. Never log the result.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebhookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookUrl(<redacted>)")
    }
}

/// Destination settings resolved by the registry before invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationOptions {
    pub url: WebhookUrl,
}

/// Everything a single destination invocation needs, owned.
#[derive(Debug, Clone)]
pub struct Notification {
    pub alert: Alert,
    pub query: Query,
    pub user: User,
    pub new_state: AlertState,
    /// Base URL of the alerting UI, used to build links.
    pub host: String,
    pub options: DestinationOptions,
}

/// A notification destination.
///
/// `notify` cannot fail: a destination logs delivery problems itself so
/// that a broken endpoint never disturbs the caller's alert processing.
/// It blocks until delivery finishes and is safe to call from a tokio
/// runtime, but async callers should prefer [`crate::dispatch`] so the
/// wait happens on the blocking pool.
pub trait Destination: Send + Sync {
    /// Short machine name of the destination.
    fn name(&self) -> &'static str;

    /// Icon glyph shown next to the destination in the settings UI.
    fn icon(&self) -> &'static str;

    /// Settings form the registry renders and validates.
    fn configuration_schema(&self) -> ConfigurationSchema;

    /// Sends a notification for an alert state transition.
    fn notify(
        &self,
        alert: &Alert,
        query: &Query,
        user: &User,
        new_state: AlertState,
        host: &str,
        options: &DestinationOptions,
    );
}
