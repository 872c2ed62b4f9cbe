//! Service-level export of messages as S-124 GML.
//!
//! [`S124Service`] resolves a message through a [`MessageRepository`],
//! applies the export rules (navigational warnings only, numbered
//! messages only), then maps and marshals it. It also serves the schema
//! documents the generated datasets refer to.

use std::io::ErrorKind;

use navwarn_models::{MainType, Message};
use tracing::{info, warn};

use crate::config::S124Config;
use crate::dataset::{Dataset, DatasetInfo};
use crate::error::MappingError;
use crate::mapper::{dataset_title, map_message};
use crate::marshaller::Marshaller;

/// Content type of generated datasets.
pub const GML_CONTENT_TYPE: &str = "application/gml+xml; charset=UTF-8";
/// Content type of schema documents.
pub const XSD_CONTENT_TYPE: &str = "application/xml; charset=UTF-8";

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Source of fully loaded message graphs.
pub trait MessageRepository: Send + Sync {
    /// Find a message by numeric id or short id.
    fn find(&self, id: &str) -> Option<Message>;
}

/// A repository over an in-memory list of messages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    messages: Vec<Message>,
}

impl InMemoryRepository {
    /// Repository holding `messages`.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Repository from a JSON array of messages.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error when the document is not a valid
    /// message list.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Number of messages held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageRepository for InMemoryRepository {
    fn find(&self, id: &str) -> Option<Message> {
        let numeric = id.parse::<i64>().ok();
        self.messages
            .iter()
            .find(|m| Some(m.id) == numeric || m.non_blank_short_id() == Some(id))
            .cloned()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by [`S124Service`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No message matches the requested id.
    #[error("no message with id {0}")]
    MessageNotFound(String),

    /// The message is a notice to mariners.
    #[error("message {0} is a notice to mariners, only navigational warnings can be exported")]
    NoticeToMariners(String),

    /// The message has not been assigned a number.
    #[error("message {0} has no number assigned")]
    MissingNumber(String),

    /// The schema name is not a plain `.xsd` file name.
    #[error("invalid schema name: {0}")]
    InvalidSchemaName(String),

    /// No schema document with that name exists.
    #[error("no schema named {0}")]
    SchemaNotFound(String),

    /// Reading a schema document failed.
    #[error("failed to read schema {name}: {source}")]
    SchemaRead {
        /// Requested schema name.
        name: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Mapping or marshalling failed.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl ServiceError {
    /// HTTP status code describing the error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MessageNotFound(_) | Self::SchemaNotFound(_) => 404,
            Self::NoticeToMariners(_) | Self::MissingNumber(_) | Self::InvalidSchemaName(_) => 400,
            Self::Mapping(err) if err.is_validation() => 400,
            Self::Mapping(_) | Self::SchemaRead { .. } => 500,
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Exports messages from a repository as S-124 datasets.
#[derive(Debug)]
pub struct S124Service<R> {
    config: S124Config,
    repository: R,
}

/// Whether `name` is a plain schema file name such as `S124.xsd`.
fn is_schema_name(name: &str) -> bool {
    name.len() > ".xsd".len()
        && name.ends_with(".xsd")
        && !name.starts_with('.')
        && !name.contains("..")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

impl<R: MessageRepository> S124Service<R> {
    /// Service over `repository`.
    pub fn new(config: S124Config, repository: R) -> Self {
        Self { config, repository }
    }

    /// The deployment configuration.
    pub fn config(&self) -> &S124Config {
        &self.config
    }

    /// Resolve and validate a message for export.
    fn exportable(&self, message_id: &str) -> Result<Message, ServiceError> {
        let message = self
            .repository
            .find(message_id)
            .ok_or_else(|| ServiceError::MessageNotFound(message_id.to_string()))?;

        if message.main_type == MainType::Nm {
            return Err(ServiceError::NoticeToMariners(message_id.to_string()));
        }
        if message.number.is_none() {
            return Err(ServiceError::MissingNumber(message_id.to_string()));
        }
        Ok(message)
    }

    /// Map a message into a dataset. `language` defaults to the configured
    /// language.
    ///
    /// # Errors
    ///
    /// See [`ServiceError`].
    pub fn dataset(
        &self,
        message_id: &str,
        language: Option<&str>,
    ) -> Result<Dataset, ServiceError> {
        let language = language
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(self.config.default_language.as_str());
        let message = self.exportable(message_id)?;

        info!(message_id, language, "generating S-124 dataset");
        let info = DatasetInfo::new(dataset_title(&self.config, &message, language));
        Ok(map_message(&self.config, &info, &message, language)?)
    }

    /// Map and marshal a message as GML.
    ///
    /// # Errors
    ///
    /// See [`ServiceError`].
    pub fn generate(
        &self,
        message_id: &str,
        language: Option<&str>,
    ) -> Result<String, ServiceError> {
        let dataset = self.dataset(message_id, language)?;
        Ok(Marshaller::from_config(&self.config).to_string(&dataset)?)
    }

    /// Read a schema document from the schema directory.
    ///
    /// # Errors
    ///
    /// [`ServiceError::InvalidSchemaName`] unless `name` is a plain `.xsd`
    /// file name, [`ServiceError::SchemaNotFound`] when it does not exist.
    pub fn schema(&self, name: &str) -> Result<String, ServiceError> {
        if !is_schema_name(name) {
            warn!(name, "rejected schema name");
            return Err(ServiceError::InvalidSchemaName(name.to_string()));
        }
        let path = self.config.schema_dir.join(name);
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ServiceError::SchemaNotFound(name.to_string()),
            _ => ServiceError::SchemaRead {
                name: name.to_string(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LocalizedText;
    use navwarn_models::{Area, MessageBuilder, PartBuilder};

    fn repository() -> InMemoryRepository {
        InMemoryRepository::new(vec![
            MessageBuilder::navigational_warning(1)
                .short_id("DK-001-24")
                .number(1)
                .title("en", "Buoy adrift")
                .title("da", "Drivende bøje")
                .area(Area::named(10, "en", "Skagerrak"))
                .part(PartBuilder::new(1).subject("en", "Buoy adrift"))
                .build()
                .unwrap(),
            MessageBuilder::navigational_warning(2)
                .short_id("DK-002-24")
                .build()
                .unwrap(),
            MessageBuilder::new(3, MainType::Nm).number(3).build().unwrap(),
        ])
    }

    fn service() -> S124Service<InMemoryRepository> {
        S124Service::new(S124Config::default(), repository())
    }

    #[test]
    fn repository_finds_by_id_or_short_id() {
        let repo = repository();
        assert_eq!(repo.find("1").map(|m| m.id), Some(1));
        assert_eq!(repo.find("DK-002-24").map(|m| m.id), Some(2));
        assert!(repo.find("DK-999-24").is_none());
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn repository_from_json() {
        let repo = InMemoryRepository::from_json(
            r#"[{"id": 4, "shortId": "DK-004-24", "mainType": "NW", "number": 4}]"#,
        )
        .unwrap();
        assert_eq!(repo.find("DK-004-24").and_then(|m| m.number), Some(4));
        assert!(InMemoryRepository::from_json("{").is_err());
    }

    #[test]
    fn generate_uses_requested_language_title() {
        let svc = service();
        let ds = svc.dataset("DK-001-24", Some("da")).unwrap();
        assert_eq!(ds.identification.title, "Drivende bøje");

        let xml = svc.generate("1", None).unwrap();
        assert!(xml.contains("<S100:datasetTitle>Buoy adrift</S100:datasetTitle>"));
    }

    #[test]
    fn blank_language_uses_configured_default() {
        let svc = service();
        for lang in ["", "  "] {
            let ds = svc.dataset("DK-001-24", Some(lang)).unwrap();
            assert_eq!(
                ds.preamble().unwrap().general_areas,
                vec![LocalizedText::new("en", "Skagerrak")]
            );
            assert_eq!(ds.identification.title, "Buoy adrift");
        }
    }

    #[test]
    fn validation_errors() {
        let svc = service();
        match svc.generate("42", None) {
            Err(err @ ServiceError::MessageNotFound(_)) => assert_eq!(err.status_code(), 404),
            other => panic!("Expected MessageNotFound, got {:?}", other),
        }
        match svc.generate("3", None) {
            Err(err @ ServiceError::NoticeToMariners(_)) => assert_eq!(err.status_code(), 400),
            other => panic!("Expected NoticeToMariners, got {:?}", other),
        }
        match svc.generate("DK-002-24", None) {
            Err(err @ ServiceError::MissingNumber(_)) => {
                assert_eq!(err.status_code(), 400);
                assert_eq!(err.to_string(), "message DK-002-24 has no number assigned");
            }
            other => panic!("Expected MissingNumber, got {:?}", other),
        }
    }

    #[test]
    fn mapping_error_status() {
        assert_eq!(ServiceError::from(MappingError::MissingMessage).status_code(), 400);
        assert_eq!(ServiceError::from(MappingError::Xml("eof".into())).status_code(), 500);
    }

    #[test]
    fn schema_names_are_plain_files() {
        assert!(is_schema_name("S124.xsd"));
        assert!(is_schema_name("s100gmlbase_5.0.xsd"));
        assert!(!is_schema_name("../secret.xsd"));
        assert!(!is_schema_name("dir/S124.xsd"));
        assert!(!is_schema_name(".xsd"));
        assert!(!is_schema_name("S124.xml"));
    }

    #[test]
    fn schema_is_read_from_directory() {
        let dir = std::env::temp_dir().join(format!("navwarn-schemas-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("S124.xsd"), "<xs:schema/>").unwrap();

        let config = S124Config {
            schema_dir: dir.clone(),
            ..S124Config::default()
        };
        let svc = S124Service::new(config, InMemoryRepository::default());
        assert_eq!(svc.schema("S124.xsd").unwrap(), "<xs:schema/>");
        match svc.schema("missing.xsd") {
            Err(err @ ServiceError::SchemaNotFound(_)) => assert_eq!(err.status_code(), 404),
            other => panic!("Expected SchemaNotFound, got {:?}", other),
        }
        match svc.schema("../S124.xsd") {
            Err(err @ ServiceError::InvalidSchemaName(_)) => assert_eq!(err.status_code(), 400),
            other => panic!("Expected InvalidSchemaName, got {:?}", other),
        }

        std::fs::remove_dir_all(dir).unwrap();
    }
}
