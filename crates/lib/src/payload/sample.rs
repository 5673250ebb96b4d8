//! The example `sms_received` payload, as a record and as JSON text.

use std::collections::BTreeMap;

use super::event::{Contact, InboundEvent, Message, CAMPAIGN_KEY, SMS_RECEIVED, SOURCE_KEY};

/// JSON text of the example payload (written to disk by `init`).
pub const SAMPLE_JSON: &str = include_str!("../../data/sms_received.json");

/// The example payload: Alex Taylor asking about a wax appointment.
pub fn sample_event() -> InboundEvent {
    InboundEvent {
        event: SMS_RECEIVED.to_string(),
        contact: Contact {
            id: "abc123".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Taylor".to_string(),
            email: "alex@example.com".to_string(),
            phone: "+15125551234".to_string(),
        },
        message: Message {
            id: "msg789".to_string(),
            text: "Hey, I need info on scheduling a wax appointment.".to_string(),
            timestamp: "2025-06-10T15:23:45Z".to_string(),
        },
        metadata: BTreeMap::from([
            (SOURCE_KEY.to_string(), "Twilio".to_string()),
            (CAMPAIGN_KEY.to_string(), "summer-promo".to_string()),
        ]),
    }
}
