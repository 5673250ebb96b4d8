use thiserror::Error;

/// Errors raised while loading an inbound event or deriving text from it.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// A referenced field is absent. Holds the dotted path (e.g. `metadata.campaign`).
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid field {path}: expected {expected}")]
    InvalidField {
        path: String,
        expected: &'static str,
    },

    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PayloadError {
    pub(crate) fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            path: path.into(),
            expected,
        }
    }
}
