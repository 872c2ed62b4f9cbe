#![deny(missing_docs)]

//! # S-124 Dataset Mapping
//!
//! Converts navigational warnings ([`navwarn_models::Message`]) into IHO
//! S-124 datasets and renders them as S-100 GML.
//!
//! ```text
//! Message ──► DatasetMapper::map ──► Dataset ──► Marshaller ──► GML text
//!                 │
//!                 ├── IdentifierGenerator   (message id, MRN, series)
//!                 ├── LanguageResolver      (requested language, then "en")
//!                 ├── classification        (warning type, category, restriction)
//!                 ├── bbox                  (envelopes, lat/lon order)
//!                 └── GeometryConverter     (point / curve / surface)
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`mapper`] | `DatasetMapper` and the preamble, part and reference record builders |
//! | [`dataset`] | The in-memory output tree |
//! | [`marshaller`] | GML rendering with explicit `CoordinateFormat` |
//! | [`geometry`] | Model geometry to S-100 geometry |
//! | [`bbox`] | Bounding envelopes of geometries and message sets |
//! | [`ids`] | Identifier generation and the per-call geometry id sequence |
//! | [`language`] | Language fallback |
//! | [`classification`] | Code-list lookup tables |
//! | [`text`] | HTML to plain-text reduction |
//! | [`service`] | Repository-backed export with request validation |
//! | [`config`] | Deployment configuration |
//! | [`error`] | `MappingError` |

pub mod bbox;
pub mod classification;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod language;
pub mod mapper;
pub mod marshaller;
pub mod service;
pub mod text;

pub use bbox::{bounding_box, bounding_box_for_messages};
pub use classification::{GeneralCategory, Restriction, WarningTypeCode};
pub use config::S124Config;
pub use dataset::*;
pub use error::MappingError;
pub use geometry::GeometryConverter;
pub use ids::{GeometryIdSequence, IdentifierGenerator};
pub use language::{LanguageResolver, FALLBACK_LANGUAGE};
pub use mapper::{dataset_title, map_message, DatasetMapper, DEFAULT_LANGUAGE};
pub use marshaller::{CoordinateFormat, Marshaller};
pub use service::{
    InMemoryRepository, MessageRepository, S124Service, ServiceError, GML_CONTENT_TYPE,
    XSD_CONTENT_TYPE,
};
pub use text::html_to_text;
