//! Display strings derived from an inbound event. Pure: no I/O, no mutation.

use super::error::PayloadError;
use super::event::{InboundEvent, CAMPAIGN_KEY};
use super::policy::MissingFieldPolicy;

/// Customer info as four labelled lines: name, phone, email, campaign.
/// Fails with `MissingField("metadata.campaign")` when the campaign is absent.
pub fn format_customer_summary(event: &InboundEvent) -> Result<String, PayloadError> {
    format_customer_summary_with(event, MissingFieldPolicy::Error)
}

/// Like [`format_customer_summary`] with an explicit policy for an absent campaign.
pub fn format_customer_summary_with(
    event: &InboundEvent,
    policy: MissingFieldPolicy,
) -> Result<String, PayloadError> {
    let campaign = policy.apply(
        event.metadata_value(CAMPAIGN_KEY),
        &format!("metadata.{}", CAMPAIGN_KEY),
    )?;
    let contact = &event.contact;
    Ok(format!(
        "Name: {}\nPhone: {}\nEmail: {}\nCampaign: {}",
        contact.full_name(),
        contact.phone,
        contact.email,
        campaign
    ))
}

/// The message body exactly as received.
pub fn get_message_text(event: &InboundEvent) -> &str {
    &event.message.text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::sample_event;

    #[test]
    fn sample_summary_lines() {
        let summary = format_customer_summary(&sample_event()).unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name: Alex Taylor",
                "Phone: +15125551234",
                "Email: alex@example.com",
                "Campaign: summer-promo",
            ]
        );
        assert!(!summary.starts_with('\n'));
        assert!(!summary.ends_with('\n'));
    }

    #[test]
    fn each_label_appears_once() {
        let mut event = sample_event();
        event.contact.first_name = "Pat".to_string();
        event.contact.last_name = "O'Neil".to_string();
        event.contact.email = "pat@example.org".to_string();
        let summary = format_customer_summary(&event).unwrap();
        for label in ["Name:", "Phone:", "Email:", "Campaign:"] {
            assert_eq!(summary.matches(label).count(), 1, "label {}", label);
        }
        assert!(summary.contains("Name: Pat O'Neil"));
        assert!(summary.contains("Email: pat@example.org"));
    }

    #[test]
    fn message_text_is_verbatim() {
        let mut event = sample_event();
        assert_eq!(
            get_message_text(&event),
            "Hey, I need info on scheduling a wax appointment."
        );
        event.message.text = "  spaced <b>&amp;</b>\n".to_string();
        assert_eq!(get_message_text(&event), "  spaced <b>&amp;</b>\n");
    }

    #[test]
    fn accessors_are_idempotent() {
        let event = sample_event();
        assert_eq!(
            format_customer_summary(&event).unwrap(),
            format_customer_summary(&event).unwrap()
        );
        assert_eq!(get_message_text(&event), get_message_text(&event));
    }

    #[test]
    fn missing_campaign_errors_every_time() {
        let mut event = sample_event();
        event.metadata.remove(CAMPAIGN_KEY);
        for _ in 0..3 {
            match format_customer_summary(&event) {
                Err(PayloadError::MissingField(path)) => assert_eq!(path, "metadata.campaign"),
                other => panic!("expected MissingField, got {:?}", other),
            }
        }
    }

    #[test]
    fn missing_campaign_empty_policy_every_time() {
        let mut event = sample_event();
        event.metadata.remove(CAMPAIGN_KEY);
        for _ in 0..3 {
            let summary = format_customer_summary_with(&event, MissingFieldPolicy::Empty).unwrap();
            assert_eq!(summary.lines().last(), Some("Campaign: "));
        }
    }

    #[test]
    fn accessors_share_across_threads() {
        let event = std::sync::Arc::new(sample_event());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let event = event.clone();
                std::thread::spawn(move || format_customer_summary(&event).unwrap())
            })
            .collect();
        let expected = format_customer_summary(&event).unwrap();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
