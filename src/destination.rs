//! Declarative settings schema exposed to the destination registry.
//!
//! The registry renders a settings form from the schema, validates the
//! submitted values and stores the fields listed under `secret` in its
//! secret store. Destinations never re-validate their settings at runtime.

use serde::Serialize;
use std::collections::BTreeMap;

/// A JSON-schema style description of a destination's settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationSchema {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: BTreeMap<&'static str, SchemaProperty>,
    pub secret: Vec<&'static str>,
    pub required: Vec<&'static str>,
}

/// A single settings field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaProperty {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
}

impl ConfigurationSchema {
    pub fn object() -> Self {
        Self {
            kind: "object",
            properties: BTreeMap::new(),
            secret: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Adds a string field.
    pub fn string(mut self, name: &'static str, title: &'static str) -> Self {
        self.properties.insert(
            name,
            SchemaProperty {
                kind: "string",
                title,
            },
        );
        self
    }

    /// Marks a field as required.
    pub fn require(mut self, name: &'static str) -> Self {
        self.required.push(name);
        self
    }

    /// Marks a field for secret storage and redaction.
    pub fn secret(mut self, name: &'static str) -> Self {
        self.secret.push(name);
        self
    }

    pub fn is_secret(&self, name: &str) -> bool {
        self.secret.iter().any(|field| *field == name)
    }
}
