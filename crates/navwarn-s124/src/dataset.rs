//! In-memory S-124 dataset tree.
//!
//! The [`DatasetMapper`](crate::DatasetMapper) builds a [`Dataset`]; the
//! [`Marshaller`](crate::Marshaller) renders it as GML. Every object is
//! created fresh per mapping call.
//!
//! ```text
//! Dataset
//! ├── DatasetIdentification
//! ├── Envelope?                 (boundedBy)
//! └── Member*
//!     ├── Preamble              (exactly one, first)
//!     ├── Part*                 (one per message part, in order)
//!     └── ReferenceRecord*
//! ```
//!
//! All positions are stored in (latitude, longitude) order.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use geo::Coord;
use navwarn_models::ReferenceType;
use uuid::Uuid;

use crate::classification::{GeneralCategory, Restriction, WarningTypeCode};

// ---------------------------------------------------------------------------
// DatasetInfo
// ---------------------------------------------------------------------------

/// Caller-supplied identification of the dataset being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Encoding specification name.
    pub encoding_specification: String,
    /// Encoding specification edition.
    pub encoding_specification_edition: String,
    /// Product identifier.
    pub product_identifier: String,
    /// Product edition.
    pub product_edition: String,
    /// File identifier.
    pub file_identifier: String,
    /// Dataset title.
    pub title: String,
    /// Dataset language (ISO 639-2).
    pub language: String,
    /// Optional abstract.
    pub abstract_text: Option<String>,
    /// Dataset purpose, e.g. `"base"`.
    pub purpose: String,
}

impl DatasetInfo {
    /// Identification with S-100/S-124 defaults and a fresh file identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            encoding_specification: "S-100 Part 10b".to_string(),
            encoding_specification_edition: "1.0".to_string(),
            product_identifier: "S-124".to_string(),
            product_edition: "1.0.0".to_string(),
            file_identifier: Uuid::new_v4().to_string(),
            title: title.into(),
            language: "eng".to_string(),
            abstract_text: None,
            purpose: "base".to_string(),
        }
    }

    /// Replace the file identifier.
    pub fn with_file_identifier(mut self, file_identifier: impl Into<String>) -> Self {
        self.file_identifier = file_identifier.into();
        self
    }

    /// Set the abstract.
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Identification block of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetIdentification {
    /// Encoding specification name.
    pub encoding_specification: String,
    /// Encoding specification edition.
    pub encoding_specification_edition: String,
    /// Product identifier.
    pub product_identifier: String,
    /// Product edition.
    pub product_edition: String,
    /// File identifier.
    pub file_identifier: String,
    /// Dataset title.
    pub title: String,
    /// Generation date.
    pub reference_date: NaiveDate,
    /// Dataset language.
    pub language: String,
    /// Optional abstract.
    pub abstract_text: Option<String>,
    /// Dataset purpose.
    pub purpose: String,
}

impl DatasetIdentification {
    /// Identification from `info`, dated `reference_date`.
    pub fn from_info(info: &DatasetInfo, reference_date: NaiveDate) -> Self {
        Self {
            encoding_specification: info.encoding_specification.clone(),
            encoding_specification_edition: info.encoding_specification_edition.clone(),
            product_identifier: info.product_identifier.clone(),
            product_edition: info.product_edition.clone(),
            file_identifier: info.file_identifier.clone(),
            title: info.title.clone(),
            reference_date,
            language: info.language.clone(),
            abstract_text: info.abstract_text.clone(),
            purpose: info.purpose.clone(),
        }
    }
}

/// One member of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// The warning header.
    Preamble(Preamble),
    /// A warning part.
    Part(Part),
    /// A reference to another warning.
    Reference(ReferenceRecord),
}

/// A generated S-124 dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// GML id of the dataset element.
    pub id: String,
    /// Identification block.
    pub identification: DatasetIdentification,
    /// Bounding envelope; `None` when the message has no geometry.
    pub bounded_by: Option<Envelope>,
    /// Preamble, parts and reference records, in that order.
    pub members: Vec<Member>,
}

impl Dataset {
    /// The preamble, if present.
    pub fn preamble(&self) -> Option<&Preamble> {
        self.members.iter().find_map(|m| match m {
            Member::Preamble(p) => Some(p),
            _ => None,
        })
    }

    /// All parts, in order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.members.iter().filter_map(|m| match m {
            Member::Part(p) => Some(p),
            _ => None,
        })
    }

    /// All reference records, in order.
    pub fn references(&self) -> impl Iterator<Item = &ReferenceRecord> {
        self.members.iter().filter_map(|m| match m {
            Member::Reference(r) => Some(r),
            _ => None,
        })
    }

    /// Ids of every geometry, in document order.
    pub fn geometry_ids(&self) -> Vec<&str> {
        self.parts()
            .flat_map(|p| p.geometries.iter().map(S100Geometry::id))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Shared value types
// ---------------------------------------------------------------------------

/// A position in (latitude, longitude) order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Position {
    /// Build a position from a (longitude, latitude) model coordinate.
    ///
    /// This is the only place where the coordinate order is inverted.
    pub fn from_coord(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lon: coord.x,
        }
    }
}

/// Bounding envelope with (latitude, longitude) corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// South-west corner.
    pub lower: Position,
    /// North-east corner.
    pub upper: Position,
}

/// Text in a given language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    /// ISO 639-1 language code.
    pub language: String,
    /// The text.
    pub text: String,
}

impl LocalizedText {
    /// Create a localized text.
    pub fn new(language: &str, text: &str) -> Self {
        Self {
            language: language.to_string(),
            text: text.to_string(),
        }
    }
}

/// An xlink reference to another element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Id of the referenced element, without `#`.
    pub href: String,
    /// Link role.
    pub role: String,
}

impl Link {
    /// Create a link.
    pub fn new(href: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            role: role.into(),
        }
    }
}

/// Series metadata identifying a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSeriesIdentifier {
    /// Series name.
    pub name_of_series: Option<String>,
    /// Type of warning.
    pub warning_type: Option<WarningTypeCode>,
    /// Warning number within the series.
    pub warning_number: Option<i32>,
    /// Year of publication.
    pub year: Option<i32>,
    /// Producing agency.
    pub production_agency: LocalizedText,
    /// Country name.
    pub country: String,
    /// MRN of the warning.
    pub interoperability_identifier: String,
}

// ---------------------------------------------------------------------------
// Preamble
// ---------------------------------------------------------------------------

/// A chart affected by the warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPublication {
    /// Chart number.
    pub chart_number: String,
    /// Edition date of the chart.
    pub edition_date: Option<NaiveDate>,
}

/// The single header record of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Preamble {
    /// GML id (the message id).
    pub id: String,
    /// Series metadata.
    pub message_series: MessageSeriesIdentifier,
    /// Affected charts.
    pub affected_charts: Vec<ChartPublication>,
    /// General areas.
    pub general_areas: Vec<LocalizedText>,
    /// Localities (at most one).
    pub localities: Vec<LocalizedText>,
    /// Titles, one per message language.
    pub titles: Vec<LocalizedText>,
    /// When the warning is cancelled.
    pub cancellation_date: Option<DateTime<FixedOffset>>,
    /// Whether the warning is broadcast internationally.
    pub int_service: bool,
    /// General category.
    pub general_category: Option<GeneralCategory>,
    /// When the warning was published.
    pub publication_time: Option<DateTime<Utc>>,
    /// Links to the reference records of the dataset.
    pub references: Vec<Link>,
}

// ---------------------------------------------------------------------------
// Part
// ---------------------------------------------------------------------------

/// Date range during which a part applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateRange {
    /// First day.
    pub date_start: Option<NaiveDate>,
    /// Last day.
    pub date_end: Option<NaiveDate>,
}

/// Localized information of a part.
///
/// All fields are empty when no text exists in the requested or fallback
/// language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Information {
    /// Language of the text.
    pub language: Option<String>,
    /// Short headline (the part subject).
    pub headline: Option<String>,
    /// Plain-text details.
    pub text: Option<String>,
}

/// A point geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGeometry {
    /// Synthetic GML id.
    pub id: String,
    /// Location.
    pub position: Position,
}

/// A curve geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGeometry {
    /// Synthetic GML id.
    pub id: String,
    /// Vertices in order.
    pub positions: Vec<Position>,
}

/// A surface geometry with optional holes.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGeometry {
    /// Synthetic GML id.
    pub id: String,
    /// Closed outer ring.
    pub exterior: Vec<Position>,
    /// Closed inner rings.
    pub interiors: Vec<Vec<Position>>,
}

/// Geometry holder of a part.
#[derive(Debug, Clone, PartialEq)]
pub enum S100Geometry {
    /// Point property.
    Point(PointGeometry),
    /// Curve property.
    Curve(CurveGeometry),
    /// Surface property.
    Surface(SurfaceGeometry),
}

impl S100Geometry {
    /// The synthetic id of the wrapped geometry.
    pub fn id(&self) -> &str {
        match self {
            S100Geometry::Point(p) => &p.id,
            S100Geometry::Curve(c) => &c.id,
            S100Geometry::Surface(s) => &s.id,
        }
    }

    /// Every position of the geometry.
    pub fn positions(&self) -> Vec<Position> {
        match self {
            S100Geometry::Point(p) => vec![p.position],
            S100Geometry::Curve(c) => c.positions.clone(),
            S100Geometry::Surface(s) => s
                .exterior
                .iter()
                .chain(s.interiors.iter().flatten())
                .copied()
                .collect(),
        }
    }
}

/// One ordered sub-section of the warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// GML id, `<mrn>.<index>`.
    pub id: String,
    /// Envelope of the part geometry.
    pub bounded_by: Option<Envelope>,
    /// Localized information.
    pub information: Information,
    /// Date ranges.
    pub fixed_date_ranges: Vec<FixedDateRange>,
    /// Geometries, in input order.
    pub geometries: Vec<S100Geometry>,
    /// Restriction derived from the message tags.
    pub restriction: Option<Restriction>,
    /// Link to the preamble.
    pub header: Option<Link>,
    /// Links to the warnings this part affects.
    pub affects: Vec<Link>,
}

// ---------------------------------------------------------------------------
// ReferenceRecord
// ---------------------------------------------------------------------------

/// A relationship to another warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// GML id, the message id of the target.
    pub id: String,
    /// Kind of relationship.
    pub reference_type: Option<ReferenceType>,
    /// Set when the target is cancelled.
    pub no_message_on_hand: bool,
    /// Series metadata of the target.
    pub message_series: MessageSeriesIdentifier,
}
