//! Top-level navigational-warning message.
//!
//! A [`Message`] is the unit published by a maritime authority. It owns an
//! ordered list of [`MessagePart`]s, localized [`MessageDesc`]s, geographic
//! and chart metadata, and [`Reference`]s to other messages.

use chrono::{DateTime, Utc};
use geo::GeometryCollection;
use serde::{Deserialize, Serialize};

use crate::catalog::{Area, Category, Chart, MessageTag};
use crate::localized::{Localized, LocalizedDesc};
use crate::part::MessagePart;
use crate::reference::Reference;

// ---------------------------------------------------------------------------
// MainType
// ---------------------------------------------------------------------------

/// The two main message categories.
///
/// Serialises as `"NW"` / `"NM"`; displays in lowercase (`"nw"`), which is
/// the form used inside maritime resource names.
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
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MainType {
    /// Navigational warning.
    Nw,
    /// Notice to mariners.
    Nm,
}

// ---------------------------------------------------------------------------
// WarningType
// ---------------------------------------------------------------------------

/// The sub-type of a message.
///
/// The first four variants apply to navigational warnings; the remaining
/// ones are notice-to-mariners types and have no S-124 counterpart.
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
#[strum(serialize_all = "snake_case")]
pub enum WarningType {
    /// Local warning, not broadcast internationally.
    LocalWarning,
    /// Coastal warning.
    CoastalWarning,
    /// Sub-area warning.
    SubareaWarning,
    /// NAVAREA warning.
    NavareaWarning,
    /// Temporary notice to mariners.
    TemporaryNotice,
    /// Preliminary notice to mariners.
    PreliminaryNotice,
    /// Permanent notice to mariners.
    PermanentNotice,
    /// Miscellaneous notice to mariners.
    MiscellaneousNotice,
}

impl WarningType {
    /// The main type this sub-type belongs to.
    pub fn main_type(self) -> MainType {
        match self {
            WarningType::LocalWarning
            | WarningType::CoastalWarning
            | WarningType::SubareaWarning
            | WarningType::NavareaWarning => MainType::Nw,
            WarningType::TemporaryNotice
            | WarningType::PreliminaryNotice
            | WarningType::PermanentNotice
            | WarningType::MiscellaneousNotice => MainType::Nm,
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Life-cycle status of a message.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// Being drafted.
    #[default]
    Draft,
    /// Drafted and verified, awaiting publication.
    Verified,
    /// In force.
    Published,
    /// Cancelled before its scheduled end.
    Cancelled,
    /// Past its publish-to date.
    Expired,
    /// Deleted draft.
    Deleted,
    /// Imported from an external source.
    Imported,
}

// ---------------------------------------------------------------------------
// MessageSeries
// ---------------------------------------------------------------------------

/// The series a message is numbered within (e.g. `"dma-nw"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct MessageSeries {
    /// Series identifier.
    pub series_id: String,
    /// Main type of every message in the series.
    pub main_type: MainType,
}

// ---------------------------------------------------------------------------
// MessageDesc
// ---------------------------------------------------------------------------

/// Localized message-level text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageDesc {
    /// ISO 639-1 language code.
    pub lang: String,
    /// Message title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text vicinity, e.g. `"Off Skagen"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
}

impl LocalizedDesc for MessageDesc {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn has_content(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.vicinity.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A navigational warning or notice to mariners.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Numeric database identifier.
    pub id: i64,
    /// Human-readable identifier, e.g. `"DK-001-24"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    /// NW or NM.
    pub main_type: MainType,
    /// Sub-type (local, coastal, …).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub warning_type: Option<WarningType>,
    /// Life-cycle status.
    #[serde(default)]
    pub status: Status,
    /// Sequence number within the series and year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    /// Start of the publication period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date_from: Option<DateTime<Utc>>,
    /// End of the publication period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date_to: Option<DateTime<Utc>>,
    /// Series the message is numbered in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_series: Option<MessageSeries>,
    /// Localized titles and vicinities.
    #[serde(default)]
    pub descs: Vec<MessageDesc>,
    /// Ordered message parts.
    #[serde(default)]
    pub parts: Vec<MessagePart>,
    /// Overall extent of the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryCollection<f64>>,
    /// Geographic areas.
    #[serde(default)]
    pub areas: Vec<Area>,
    /// Affected charts.
    #[serde(default)]
    pub charts: Vec<Chart>,
    /// Subject categories, most significant first.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Tags the message is filed under.
    #[serde(default)]
    pub tags: Vec<MessageTag>,
    /// References to other messages.
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Message {
    /// Create an empty message with the given id and main type.
    pub fn new(id: i64, main_type: MainType) -> Self {
        Self {
            id,
            short_id: None,
            main_type,
            warning_type: None,
            status: Status::default(),
            number: None,
            publish_date_from: None,
            publish_date_to: None,
            message_series: None,
            descs: Vec::new(),
            parts: Vec::new(),
            geometry: None,
            areas: Vec::new(),
            charts: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            references: Vec::new(),
        }
    }

    /// The short id when present and not blank.
    pub fn non_blank_short_id(&self) -> Option<&str> {
        self.short_id.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Whether this is a navigational warning.
    pub fn is_navigational_warning(&self) -> bool {
        self.main_type == MainType::Nw
    }
}

impl Localized for Message {
    type Desc = MessageDesc;

    fn descs(&self) -> &[MessageDesc] {
        &self.descs
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
