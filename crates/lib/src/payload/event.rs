//! Inbound event record: one webhook notification (contact + message + metadata).
//!
//! Field names are the wire format and serialize exactly as declared.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::error::PayloadError;

/// Event tag for a received SMS.
pub const SMS_RECEIVED: &str = "sms_received";

/// Metadata key holding the marketing campaign name.
pub const CAMPAIGN_KEY: &str = "campaign";

/// Metadata key holding the upstream SMS provider (e.g. "Twilio").
pub const SOURCE_KEY: &str = "source";

/// One received notification. Built once and never mutated by the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboundEvent {
    /// Event kind tag (e.g. "sms_received").
    pub event: String,
    pub contact: Contact,
    pub message: Message,
    /// Open-ended string metadata (e.g. source, campaign).
    pub metadata: BTreeMap<String, String>,
}

/// Sender of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    /// ISO-8601 instant as received; see [`Message::received_at`].
    pub timestamp: String,
}

impl InboundEvent {
    pub fn is_sms_received(&self) -> bool {
        self.event == SMS_RECEIVED
    }

    /// Look up a metadata value by key.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

impl Contact {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Message {
    /// Parse `timestamp` as RFC 3339 and normalize to UTC.
    pub fn received_at(&self) -> Result<DateTime<Utc>, PayloadError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|source| PayloadError::InvalidTimestamp {
                value: self.timestamp.clone(),
                source,
            })
    }
}
