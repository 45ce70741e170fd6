//! Builds Discord webhook payloads from alert state transitions.
//!
//! Reference: https://birdie0.github.io/discord-webhooks-guide/discord_webhook.html

use crate::core::{Alert, AlertState, Query};
use serde::Serialize;

/// The body POSTed to a Discord webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscordPayload {
    /// Plain-text headline shown above the embed.
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    /// Decimal color code, as a string.
    pub color: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Builds the payload announcing that `alert` moved to `new_state`.
///
/// Only `Triggered` gets its own headline and color. `Ok` and `Unknown`
/// both render as "went back to normal" in the OK color.
pub fn build_payload(
    alert: &Alert,
    query: &Query,
    new_state: AlertState,
    host: &str,
) -> DiscordPayload {
    let mut fields = vec![
        EmbedField::inline("Query", format!("{host}/queries/{}", query.id)),
        EmbedField::inline("Alert", format!("{host}/alerts/{}", alert.id)),
    ];
    if let Some(body) = alert.options.body() {
        fields.push(EmbedField::block("Description", body));
    }

    let (content, color) = if new_state == AlertState::Triggered {
        let content = match alert.options.subject() {
            Some(subject) => subject.to_string(),
            None => format!("{} just triggered", alert.name),
        };
        (content, AlertState::Triggered.color())
    } else {
        (
            format!("{} went back to normal", alert.name),
            AlertState::Ok.color(),
        )
    };

    DiscordPayload {
        content,
        embeds: vec![Embed {
            color: color.to_string(),
            fields,
        }],
    }
}
