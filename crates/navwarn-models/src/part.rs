//! Message parts.
//!
//! A message is split into ordered [`MessagePart`]s, each with its own
//! text, event dates and geometry.

use chrono::{DateTime, Utc};
use geo::GeometryCollection;
use serde::{Deserialize, Serialize};

use crate::localized::{Localized, LocalizedDesc};

/// Localized subject and details of a message part.
///
/// `details` may contain HTML markup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessagePartDesc {
    /// ISO 639-1 language code.
    pub lang: String,
    /// Short subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Rich-text details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LocalizedDesc for MessagePartDesc {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn has_content(&self) -> bool {
        self.subject.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.details.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// A period during which the part applies. Either end may be open.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateInterval {
    /// Start of the interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    /// End of the interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
    /// Whether the interval covers whole days.
    #[serde(default)]
    pub all_day: bool,
}

impl DateInterval {
    /// Create an interval with the given (optional) bounds.
    pub fn new(from_date: Option<DateTime<Utc>>, to_date: Option<DateTime<Utc>>) -> Self {
        Self {
            from_date,
            to_date,
            all_day: false,
        }
    }
}

/// One ordered sub-section of a message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessagePart {
    /// Position of the part within its message; also used as id suffix.
    pub index: u32,
    /// Localized subject and details.
    #[serde(default)]
    pub descs: Vec<MessagePartDesc>,
    /// Event dates.
    #[serde(default)]
    pub event_dates: Vec<DateInterval>,
    /// Features affected by this part, in (longitude, latitude) order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryCollection<f64>>,
}

impl MessagePart {
    /// Create an empty part.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            descs: Vec::new(),
            event_dates: Vec::new(),
            geometry: None,
        }
    }
}

impl Localized for MessagePart {
    type Desc = MessagePartDesc;

    fn descs(&self) -> &[MessagePartDesc] {
        &self.descs
    }
}
