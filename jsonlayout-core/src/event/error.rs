use thiserror::Error;

pub type Extracted<T> = Result<T, ExtractionError>;

/// An attribute could not be read from an event.
///
/// The layouts treat the affected field as absent and keep projecting the rest.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("malformed {attribute}: {reason}")]
    Malformed {
        attribute: &'static str,
        reason: String,
    },

    #[error("{attribute} is unavailable")]
    Unavailable { attribute: &'static str },

    #[error("value is not representable as JSON: {0}")]
    NotRepresentable(#[source] serde_json::Error),
}

impl ExtractionError {
    pub fn malformed(attribute: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            attribute,
            reason: reason.into(),
        }
    }
}
