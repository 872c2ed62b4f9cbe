//! Error types for the S-124 mapping pipeline.
//!
//! [`MappingError`] covers the mapper and marshaller. Missing optional data
//! (no dates, no geometry, no descriptions, …) is never an error; it only
//! produces a smaller dataset.

use navwarn_models::MainType;

/// Errors raised while mapping a message or marshalling a dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// No dataset information was supplied.
    #[error("dataset info must be specified")]
    MissingDatasetInfo,

    /// No message was supplied.
    #[error("message must be specified")]
    MissingMessage,

    /// The message is not a navigational warning.
    #[error("message {message_id} has main type {main_type}, only navigational warnings can be mapped")]
    UnsupportedMainType {
        /// Numeric id of the rejected message.
        message_id: i64,
        /// Its main type.
        main_type: MainType,
    },

    /// A part geometry holds a shape outside the supported set.
    #[error("unsupported geometry type {kind} in part {part_id}")]
    UnsupportedGeometry {
        /// Id of the part being converted.
        part_id: String,
        /// Name of the offending geometry type.
        kind: String,
    },

    /// Writing the XML document failed.
    #[error("XML write error: {0}")]
    Xml(String),

    /// The rendered document is not valid UTF-8.
    #[error("rendered document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl MappingError {
    /// Whether the error stems from invalid caller input rather than data
    /// or output problems.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingDatasetInfo | Self::MissingMessage | Self::UnsupportedMainType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_main_type() {
        let err = MappingError::UnsupportedMainType {
            message_id: 12,
            main_type: MainType::Nm,
        };
        assert_eq!(
            err.to_string(),
            "message 12 has main type nm, only navigational warnings can be mapped"
        );
    }

    #[test]
    fn error_display_geometry() {
        let err = MappingError::UnsupportedGeometry {
            part_id: "urn:mrn:iho:nw:dk:1.1".into(),
            kind: "Triangle".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported geometry type Triangle in part urn:mrn:iho:nw:dk:1.1"
        );
    }

    #[test]
    fn validation_kinds() {
        assert!(MappingError::MissingDatasetInfo.is_validation());
        assert!(MappingError::MissingMessage.is_validation());
        assert!(!MappingError::Xml("eof".into()).is_validation());
        assert!(!MappingError::UnsupportedGeometry {
            part_id: "p".into(),
            kind: "Rect".into()
        }
        .is_validation());
    }
}
