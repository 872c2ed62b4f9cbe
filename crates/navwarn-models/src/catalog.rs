//! Reference data attached to messages: areas, charts, categories and tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::localized::{Localized, LocalizedDesc};

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// Localized area name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AreaDesc {
    /// ISO 639-1 language code.
    pub lang: String,
    /// Area name.
    pub name: String,
}

impl LocalizedDesc for AreaDesc {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn has_content(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A geographic area, e.g. `"Kattegat"`.
///
/// Displays as its MRN when it has one, else as `Area <id>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    /// Numeric identifier.
    pub id: i64,
    /// Maritime resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrn: Option<String>,
    /// Localized names.
    #[serde(default)]
    pub descs: Vec<AreaDesc>,
}

impl Area {
    /// Create an area with a single localized name.
    pub fn named(id: i64, lang: &str, name: &str) -> Self {
        Self {
            id,
            mrn: None,
            descs: vec![AreaDesc {
                lang: lang.to_string(),
                name: name.to_string(),
            }],
        }
    }
}

impl Localized for Area {
    type Desc = AreaDesc;

    fn descs(&self) -> &[AreaDesc] {
        &self.descs
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mrn {
            Some(mrn) => f.write_str(mrn),
            None => write!(f, "Area {}", self.id),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// A nautical chart affected by a message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// National chart number, the natural key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_number: Option<String>,
    /// International chart number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_number: Option<i32>,
    /// Chart name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Chart {
    /// Create a chart with the given number.
    pub fn new(chart_number: &str) -> Self {
        Self {
            chart_number: Some(chart_number.to_string()),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Localized category name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDesc {
    /// ISO 639-1 language code.
    pub lang: String,
    /// Category name.
    pub name: String,
}

impl LocalizedDesc for CategoryDesc {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn has_content(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A subject category such as `"Lights"` or `"Firing exercises"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Numeric identifier.
    pub id: i64,
    /// Key carried over from the legacy system, e.g. `"firing_exercises"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    /// Localized names.
    #[serde(default)]
    pub descs: Vec<CategoryDesc>,
}

impl Category {
    /// Create a category with a single localized name.
    pub fn named(id: i64, lang: &str, name: &str) -> Self {
        Self {
            id,
            legacy_id: None,
            descs: vec![CategoryDesc {
                lang: lang.to_string(),
                name: name.to_string(),
            }],
        }
    }
}

impl Localized for Category {
    type Desc = CategoryDesc;

    fn descs(&self) -> &[CategoryDesc] {
        &self.descs
    }
}

// ---------------------------------------------------------------------------
// MessageTag
// ---------------------------------------------------------------------------

/// A named tag, e.g. `"RESTRICTED"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct MessageTag {
    /// Tag name.
    pub name: String,
}

impl MessageTag {
    /// Create a tag.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl From<&str> for MessageTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
