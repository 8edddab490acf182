//! Error types for generator operations.
//!
//! Validation is eager: a constructor or combinator that can reject its
//! arguments does so at call time, before any value is produced. The
//! remaining runtime failures all come from the persistence side-channel.

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// An argument failed validation at combinator/constructor call time.
    #[error("invalid argument '{param}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        param: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The persistence destination could not be opened or written.
    #[error("failed to write generated value: {0}")]
    Io(#[from] std::io::Error),

    /// The generated value could not be serialized.
    #[error("failed to serialize generated value: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MockError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        MockError::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }
}
