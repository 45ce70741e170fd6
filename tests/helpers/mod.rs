//! Common fixtures for integration tests.

#![allow(dead_code)]

pub mod recording_destination;

use discord_alerts::{
    Alert, AlertOptions, AlertState, DestinationOptions, Notification, Query, User, WebhookUrl,
};
use wiremock::MockServer;

pub const HOST: &str = "https://example.com";
pub const WEBHOOK_PATH: &str = "/api/webhooks/1234/webhook-token";

/// Builds an alert named "CPU High" with id 42.
pub fn cpu_alert(custom_subject: Option<&str>, custom_body: Option<&str>) -> Alert {
    Alert {
        id: 42,
        name: "CPU High".to_string(),
        options: AlertOptions {
            custom_subject: custom_subject.map(str::to_string),
            custom_body: custom_body.map(str::to_string),
            ..Default::default()
        },
    }
}

/// A notification for `alert` against query 7, posted to `url`.
pub fn notification(alert: Alert, new_state: AlertState, url: impl Into<String>) -> Notification {
    Notification {
        alert,
        query: Query { id: 7 },
        user: User {
            id: 1,
            name: "admin".to_string(),
        },
        new_state,
        host: HOST.to_string(),
        options: DestinationOptions {
            url: WebhookUrl::new(url),
        },
    }
}

pub fn webhook_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), WEBHOOK_PATH)
}
