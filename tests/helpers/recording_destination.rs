//! A fake destination that records what it was asked to send.

use discord_alerts::{
    Alert, AlertState, ConfigurationSchema, Destination, DestinationOptions, Query, User,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub alert_id: u64,
    pub query_id: u64,
    pub user_name: String,
    pub new_state: AlertState,
    pub host: String,
    pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingDestination {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub panic_on_notify: bool,
}

impl RecordingDestination {
    pub fn panicking() -> Self {
        Self {
            panic_on_notify: true,
            ..Default::default()
        }
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Destination for RecordingDestination {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn icon(&self) -> &'static str {
        "fa-circle"
    }

    fn configuration_schema(&self) -> ConfigurationSchema {
        ConfigurationSchema::object()
    }

    fn notify(
        &self,
        alert: &Alert,
        query: &Query,
        user: &User,
        new_state: AlertState,
        host: &str,
        options: &DestinationOptions,
    ) {
        if self.panic_on_notify {
            panic!("destination blew up");
        }
        self.calls.lock().unwrap().push(RecordedCall {
            alert_id: alert.id,
            query_id: query.id,
            user_name: user.name.clone(),
            new_state,
            host: host.to_string(),
            url: options.url.expose().to_string(),
        });
    }
}
