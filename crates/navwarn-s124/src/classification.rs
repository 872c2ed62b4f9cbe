//! Classification of internal vocabulary into S-124 code lists.
//!
//! Three static tables translate the message model into the external
//! controlled vocabulary:
//!
//! - [`WarningTypeCode`] from the message [`WarningType`].
//! - [`GeneralCategory`] from the first message [`Category`], via
//!   [`CATEGORY_KEYWORDS`].
//! - [`Restriction`] from the message tags.
//!
//! A value that cannot be classified stays absent; nothing is defaulted.

use std::fmt;

use navwarn_models::{Category, Localized, Message, MessageTag, WarningType};
use tracing::{debug, warn};

use crate::language::LanguageResolver;

// ---------------------------------------------------------------------------
// WarningTypeCode
// ---------------------------------------------------------------------------

/// S-124 type of navigational warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum WarningTypeCode {
    /// Local navigational warning.
    Local = 1,
    /// Coastal navigational warning.
    Coastal = 2,
    /// Sub-area navigational warning.
    Subarea = 3,
    /// NAVAREA navigational warning.
    Navarea = 4,
}

impl WarningTypeCode {
    /// Numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Code-list label.
    pub fn label(self) -> &'static str {
        match self {
            WarningTypeCode::Local => "local navigational warning",
            WarningTypeCode::Coastal => "coastal navigational warning",
            WarningTypeCode::Subarea => "sub-area navigational warning",
            WarningTypeCode::Navarea => "NAVAREA navigational warning",
        }
    }

    /// Classify a message warning type. Notice-to-mariners types are logged
    /// and left unmapped.
    pub fn from_warning_type(warning_type: WarningType) -> Option<Self> {
        match warning_type {
            WarningType::LocalWarning => Some(WarningTypeCode::Local),
            WarningType::CoastalWarning => Some(WarningTypeCode::Coastal),
            WarningType::SubareaWarning => Some(WarningTypeCode::Subarea),
            WarningType::NavareaWarning => Some(WarningTypeCode::Navarea),
            other => {
                warn!(warning_type = %other, "no S-124 warning type for message type");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GeneralCategory
// ---------------------------------------------------------------------------

/// S-124 general category of a navigational warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum GeneralCategory {
    /// Changes to lights, buoys, beacons and other aids.
    AidsToNavigationChanges = 1,
    /// Dangerous natural phenomena.
    DangerousNaturalPhenomena = 2,
    /// Newly discovered dangers such as uncharted obstructions.
    NewlyDiscoveredDangers = 3,
    /// Drifting objects.
    DriftingHazards = 4,
    /// Firing exercises, cable operations and other special operations.
    SpecialOperations = 5,
    /// Changes to radio navigation or communication services.
    CommunicationServiceChange = 6,
    /// Anything not covered above.
    OtherHazards = 7,
}

impl GeneralCategory {
    /// Numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Code-list label.
    pub fn label(self) -> &'static str {
        match self {
            GeneralCategory::AidsToNavigationChanges => "aids to navigation changes",
            GeneralCategory::DangerousNaturalPhenomena => "dangerous natural phenomena",
            GeneralCategory::NewlyDiscoveredDangers => "newly discovered dangers",
            GeneralCategory::DriftingHazards => "drifting hazards",
            GeneralCategory::SpecialOperations => "special operations",
            GeneralCategory::CommunicationServiceChange => "communication service change",
            GeneralCategory::OtherHazards => "other hazards",
        }
    }
}

/// How a matched category keyword is turned into a [`GeneralCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    /// The keyword maps directly.
    Direct(GeneralCategory),
    /// The category is refined by scanning the first part's English subject.
    Obstruction,
}

/// Category keywords, matched as lowercase substrings in table order.
///
/// Names without a match classify as [`GeneralCategory::OtherHazards`].
pub static CATEGORY_KEYWORDS: &[(&str, CategoryRule)] = &[
    (
        "drifting object",
        CategoryRule::Direct(GeneralCategory::DriftingHazards),
    ),
    (
        "drifting",
        CategoryRule::Direct(GeneralCategory::DriftingHazards),
    ),
    (
        "radio navigation",
        CategoryRule::Direct(GeneralCategory::CommunicationServiceChange),
    ),
    (
        "radio",
        CategoryRule::Direct(GeneralCategory::CommunicationServiceChange),
    ),
    (
        "gnss",
        CategoryRule::Direct(GeneralCategory::CommunicationServiceChange),
    ),
    (
        "firing exercise",
        CategoryRule::Direct(GeneralCategory::SpecialOperations),
    ),
    (
        "firing",
        CategoryRule::Direct(GeneralCategory::SpecialOperations),
    ),
    (
        "military",
        CategoryRule::Direct(GeneralCategory::SpecialOperations),
    ),
    ("obstruction", CategoryRule::Obstruction),
    (
        "light",
        CategoryRule::Direct(GeneralCategory::AidsToNavigationChanges),
    ),
    (
        "buoy",
        CategoryRule::Direct(GeneralCategory::AidsToNavigationChanges),
    ),
    (
        "beacon",
        CategoryRule::Direct(GeneralCategory::AidsToNavigationChanges),
    ),
    (
        "aids to navigation",
        CategoryRule::Direct(GeneralCategory::AidsToNavigationChanges),
    ),
];

/// Keywords in an English obstruction subject, checked in order.
static OBSTRUCTION_KEYWORDS: &[(&[&str], GeneralCategory)] = &[
    (&["wreck"], GeneralCategory::DangerousNaturalPhenomena),
    (&["uncharted", "obstruction"], GeneralCategory::NewlyDiscoveredDangers),
    (&["depth", "reduced"], GeneralCategory::NewlyDiscoveredDangers),
];

/// Look up the rule for a category name (case-insensitive).
pub fn find_category_rule(name: &str) -> Option<CategoryRule> {
    let name = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, rule)| *rule)
}

/// Classify an obstruction by the English subject of the message's first
/// part by index. Non-English-only messages fall through to special
/// operations.
fn classify_obstruction(message: &Message) -> GeneralCategory {
    let subject = message
        .parts
        .iter()
        .min_by_key(|p| p.index)
        .and_then(|p| p.desc("en"))
        .and_then(|d| d.subject.as_deref())
        .map(str::to_lowercase);

    let Some(subject) = subject else {
        debug!(
            message_id = message.id,
            "no English subject to refine obstruction category"
        );
        return GeneralCategory::SpecialOperations;
    };

    OBSTRUCTION_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| subject.contains(k)))
        .map_or(GeneralCategory::SpecialOperations, |(_, category)| *category)
}

/// The display name of a category in the resolver's language chain, falling
/// back to the legacy key.
fn category_name<'a>(category: &'a Category, resolver: &LanguageResolver) -> Option<&'a str> {
    resolver
        .resolve(category)
        .map(|d| d.name.as_str())
        .or(category.legacy_id.as_deref())
}

impl GeneralCategory {
    /// Classify a message by its first category. Returns `None` when the
    /// message has no category.
    pub fn classify(message: &Message, resolver: &LanguageResolver) -> Option<Self> {
        let category = message.categories.first()?;
        let Some(name) = category_name(category, resolver) else {
            return Some(GeneralCategory::OtherHazards);
        };

        let general = match find_category_rule(name) {
            Some(CategoryRule::Direct(general)) => general,
            Some(CategoryRule::Obstruction) => classify_obstruction(message),
            None => GeneralCategory::OtherHazards,
        };
        debug!(category = name, general = %general, "classified general category");
        Some(general)
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Restriction
// ---------------------------------------------------------------------------

/// Tag name marking an area where entry is prohibited.
pub const RESTRICTED_TAG: &str = "RESTRICTED";
/// Tag name marking an area where entry is restricted.
pub const CAUTION_TAG: &str = "CAUTION";

/// S-124 restriction on a warning part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Restriction {
    /// Entry prohibited.
    EntryProhibited = 1,
    /// Entry restricted.
    EntryRestricted = 2,
}

impl Restriction {
    /// Numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Code-list label.
    pub fn label(self) -> &'static str {
        match self {
            Restriction::EntryProhibited => "entry prohibited",
            Restriction::EntryRestricted => "entry restricted",
        }
    }

    /// The restriction of the first tag named `RESTRICTED` or `CAUTION`, in
    /// tag order.
    pub fn from_tags(tags: &[MessageTag]) -> Option<Self> {
        tags.iter().find_map(|tag| match tag.name.as_str() {
            RESTRICTED_TAG => Some(Restriction::EntryProhibited),
            CAUTION_TAG => Some(Restriction::EntryRestricted),
            _ => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
