//! References between messages.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// How a message relates to the message it references.
///
/// Displays in lowercase (`"cancellation"`), the form used as link role.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase")]
pub enum ReferenceType {
    /// Plain reference.
    Reference,
    /// The referenced message is repeated.
    Repetition,
    /// The referenced message is cancelled.
    Cancellation,
    /// The referenced message is updated.
    Update,
}

/// A reference to another message.
///
/// The target is resolved by the persistence layer; a dangling reference
/// carries `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The referenced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    /// Kind of relation.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReferenceType>,
    /// Free-text description of the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Reference {
    /// Reference `message` with the given kind.
    pub fn new(message: Message, kind: Option<ReferenceType>) -> Self {
        Self {
            message: Some(Box::new(message)),
            kind,
            description: None,
        }
    }

    /// The link role name: the kind in lowercase, or `"reference"`.
    pub fn role(&self) -> String {
        self.kind.unwrap_or(ReferenceType::Reference).to_string()
    }

    /// The target message, when it is a navigational warning.
    pub fn navigational_warning_target(&self) -> Option<&Message> {
        self.message
            .as_deref()
            .filter(|m| m.is_navigational_warning())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MainType;

    #[test]
    fn role_defaults_to_reference() {
        let r = Reference::new(Message::new(1, MainType::Nw), None);
        assert_eq!(r.role(), "reference");
        let r = Reference::new(Message::new(1, MainType::Nw), Some(ReferenceType::Cancellation));
        assert_eq!(r.role(), "cancellation");
    }

    #[test]
    fn navigational_warning_target_filters() {
        let nm = Reference::new(Message::new(1, MainType::Nm), None);
        assert!(nm.navigational_warning_target().is_none());
        let dangling = Reference {
            message: None,
            kind: Some(ReferenceType::Update),
            description: None,
        };
        assert!(dangling.navigational_warning_target().is_none());
        let nw = Reference::new(Message::new(2, MainType::Nw), None);
        assert_eq!(nw.navigational_warning_target().map(|m| m.id), Some(2));
    }

    #[test]
    fn reference_type_serde() {
        let json = serde_json::to_string(&ReferenceType::Repetition).unwrap();
        assert_eq!(json, "\"REPETITION\"");
        assert_eq!(ReferenceType::Update.to_string(), "update");
    }
}
