//! Build an [`InboundEvent`] from JSON, reporting absent fields by dotted path.
//!
//! JSON `null` counts as absent. Under [`MissingFieldPolicy::Empty`] absent strings
//! load as `""` and absent sections load as empty records.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use super::error::PayloadError;
use super::event::{Contact, InboundEvent, Message};
use super::policy::MissingFieldPolicy;

impl InboundEvent {
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        Self::from_value_with(value, MissingFieldPolicy::Error)
    }

    pub fn from_value_with(value: &Value, policy: MissingFieldPolicy) -> Result<Self, PayloadError> {
        let root = Fields::root(value, policy)?;
        let event = root.string("event")?;
        let contact = root.section("contact")?;
        let contact = Contact {
            id: contact.string("id")?,
            first_name: contact.string("first_name")?,
            last_name: contact.string("last_name")?,
            email: contact.string("email")?,
            phone: contact.string("phone")?,
        };
        let message = root.section("message")?;
        let message = Message {
            id: message.string("id")?,
            text: message.string("text")?,
            timestamp: message.string("timestamp")?,
        };
        let metadata = root.string_map("metadata")?;
        Ok(Self {
            event,
            contact,
            message,
            metadata,
        })
    }

    pub fn from_json(s: &str) -> Result<Self, PayloadError> {
        Self::from_json_with(s, MissingFieldPolicy::Error)
    }

    pub fn from_json_with(s: &str, policy: MissingFieldPolicy) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value_with(&value, policy)
    }
}

/// Parse an event from any reader (e.g. stdin).
pub fn read_event<R: Read>(reader: R, policy: MissingFieldPolicy) -> Result<InboundEvent, PayloadError> {
    let value: Value = serde_json::from_reader(reader)?;
    InboundEvent::from_value_with(&value, policy)
}

/// Read and parse an event from a JSON file.
pub fn load_event(path: &Path, policy: MissingFieldPolicy) -> Result<InboundEvent> {
    log::debug!("loading payload from {}", path.display());
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading payload from {}", path.display()))?;
    InboundEvent::from_json_with(&s, policy)
        .with_context(|| format!("parsing payload from {}", path.display()))
}

/// One JSON object (or an absent one, under the empty policy) plus its dotted path prefix.
struct Fields<'a> {
    object: Option<&'a Map<String, Value>>,
    prefix: String,
    policy: MissingFieldPolicy,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value, policy: MissingFieldPolicy) -> Result<Self, PayloadError> {
        let object = value
            .as_object()
            .ok_or_else(|| PayloadError::invalid("$", "object"))?;
        Ok(Self {
            object: Some(object),
            prefix: String::new(),
            policy,
        })
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object
            .and_then(|o| o.get(key))
            .filter(|v| !v.is_null())
    }

    fn object_at(&self, key: &str) -> Result<Option<&'a Map<String, Value>>, PayloadError> {
        let path = self.path(key);
        match self.get(key) {
            Some(v) => v
                .as_object()
                .map(Some)
                .ok_or_else(|| PayloadError::invalid(path, "object")),
            None => match self.policy {
                MissingFieldPolicy::Empty => Ok(None),
                MissingFieldPolicy::Error => Err(PayloadError::MissingField(path)),
            },
        }
    }

    fn section(&self, key: &str) -> Result<Fields<'a>, PayloadError> {
        Ok(Fields {
            object: self.object_at(key)?,
            prefix: self.path(key),
            policy: self.policy,
        })
    }

    fn string(&self, key: &str) -> Result<String, PayloadError> {
        let path = self.path(key);
        let value = match self.get(key) {
            Some(v) => Some(v.as_str().ok_or_else(|| PayloadError::invalid(&path, "string"))?),
            None => None,
        };
        self.policy.apply(value, &path).map(str::to_string)
    }

    fn string_map(&self, key: &str) -> Result<BTreeMap<String, String>, PayloadError> {
        let Some(object) = self.object_at(key)? else {
            return Ok(BTreeMap::new());
        };
        let path = self.path(key);
        object
            .iter()
            .map(|(k, v)| {
                v.as_str()
                    .map(|s| (k.clone(), s.to_string()))
                    .ok_or_else(|| PayloadError::invalid(format!("{}.{}", path, k), "string"))
            })
            .collect()
    }
}
