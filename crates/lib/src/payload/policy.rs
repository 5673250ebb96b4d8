//! What to do when a referenced field is absent from a payload.

use serde::{Deserialize, Serialize};

use super::error::PayloadError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Fail with `PayloadError::MissingField`.
    #[default]
    Error,

    /// Substitute the empty string (or an empty section).
    Empty,
}

impl MissingFieldPolicy {
    /// Parse "error" or "empty" (case-insensitive, surrounding whitespace ignored).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Resolve a possibly absent string field. `path` names the field in the error.
    pub fn apply<'a>(self, value: Option<&'a str>, path: &str) -> Result<&'a str, PayloadError> {
        match (value, self) {
            (Some(v), _) => Ok(v),
            (None, Self::Empty) => Ok(""),
            (None, Self::Error) => Err(PayloadError::MissingField(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_mixed_case_and_whitespace() {
        assert_eq!(MissingFieldPolicy::parse(" Empty\n"), Some(MissingFieldPolicy::Empty));
        assert_eq!(MissingFieldPolicy::parse("ERROR"), Some(MissingFieldPolicy::Error));
        assert_eq!(MissingFieldPolicy::parse("skip"), None);
    }

    #[test]
    fn apply_keeps_present_values() {
        for policy in [MissingFieldPolicy::Error, MissingFieldPolicy::Empty] {
            assert_eq!(policy.apply(Some("x"), "a.b").unwrap(), "x");
        }
    }

    #[test]
    fn apply_absent_value() {
        assert_eq!(MissingFieldPolicy::Empty.apply(None, "a.b").unwrap(), "");
        match MissingFieldPolicy::Error.apply(None, "a.b") {
            Err(PayloadError::MissingField(path)) => assert_eq!(path, "a.b"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn deserializes_lowercase_names() {
        let p: MissingFieldPolicy = serde_json::from_str("\"empty\"").unwrap();
        assert_eq!(p, MissingFieldPolicy::Empty);
    }
}
