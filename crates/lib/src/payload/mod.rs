//! Inbound SMS webhook payload: the event record, JSON loading, and display accessors.
//!
//! The accessors are pure functions over an immutable [`InboundEvent`]; loading is the
//! only place absent fields are detected, except for metadata keys which are open-ended.

mod accessor;
mod error;
mod event;
mod loader;
mod policy;
mod sample;

pub use accessor::{format_customer_summary, format_customer_summary_with, get_message_text};
pub use error::PayloadError;
pub use event::{Contact, InboundEvent, Message, CAMPAIGN_KEY, SMS_RECEIVED, SOURCE_KEY};
pub use loader::{load_event, read_event};
pub use policy::MissingFieldPolicy;
pub use sample::{sample_event, SAMPLE_JSON};
