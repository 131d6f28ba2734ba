//! Error types for the `recall-models` crate.
//!
//! All fallible constructors and `TryFrom` implementations in this crate
//! return variants of [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A person name was empty or otherwise unusable as an identifier.
    #[error("invalid person name \"{value}\": {reason}")]
    InvalidPersonName {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_person_name() {
        let err = ModelError::InvalidPersonName {
            value: "".into(),
            reason: "must not be empty".into(),
        };
        assert_eq!(err.to_string(), "invalid person name \"\": must not be empty");
    }
}
