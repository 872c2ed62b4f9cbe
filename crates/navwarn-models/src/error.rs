//! Error types for the `navwarn-models` crate.
//!
//! All fallible constructors in this crate return variants of [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A language code was not a two-letter lowercase ISO 639-1 code.
    #[error("invalid language code \"{value}\": {reason}")]
    InvalidLanguage {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// Two message parts share the same index.
    #[error("duplicate message part index {index}")]
    DuplicatePartIndex {
        /// The index that occurs more than once.
        index: u32,
    },

    /// Two descriptions of the same entity share a language.
    #[error("duplicate {entity} description for language \"{lang}\"")]
    DuplicateDescription {
        /// The kind of entity carrying the descriptions.
        entity: String,
        /// The repeated language code.
        lang: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_language() {
        let err = ModelError::InvalidLanguage {
            value: "eng".into(),
            reason: "must be exactly 2 lowercase ASCII letters".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid language code \"eng\": must be exactly 2 lowercase ASCII letters"
        );
    }

    #[test]
    fn error_display_duplicate_part() {
        let err = ModelError::DuplicatePartIndex { index: 2 };
        assert_eq!(err.to_string(), "duplicate message part index 2");
    }

    #[test]
    fn error_display_duplicate_description() {
        let err = ModelError::DuplicateDescription {
            entity: "message".into(),
            lang: "da".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate message description for language \"da\""
        );
    }
}
