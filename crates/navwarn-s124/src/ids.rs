//! Identifier and name generation.
//!
//! Three kinds of identifiers appear in a dataset:
//!
//! - the message id, `<country>.<short id or numeric id>`, used for the
//!   preamble and for reference records;
//! - the interoperability identifier (MRN),
//!   `urn:mrn:iho:<main type>:<country>:<short id or numeric id>`, lowercase;
//! - per-geometry synthetic ids, `G.<part id>.<n>`, numbered by a
//!   [`GeometryIdSequence`] owned by a single mapping call.

use chrono::Datelike;
use navwarn_models::Message;

use crate::classification::WarningTypeCode;
use crate::config::S124Config;
use crate::dataset::{LocalizedText, MessageSeriesIdentifier};

/// Builds message ids, MRNs and message-series identifiers for one
/// deployment.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierGenerator<'a> {
    config: &'a S124Config,
}

/// The short id when not blank, else the numeric id.
fn local_id(message: &Message) -> String {
    message
        .non_blank_short_id()
        .map_or_else(|| message.id.to_string(), str::to_string)
}

impl<'a> IdentifierGenerator<'a> {
    /// Generator bound to a deployment configuration.
    pub fn new(config: &'a S124Config) -> Self {
        Self { config }
    }

    /// Message id, e.g. `"DK.DK-001-24"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navwarn_models::MessageBuilder;
    /// use navwarn_s124::{IdentifierGenerator, S124Config};
    ///
    /// let config = S124Config::default();
    /// let ids = IdentifierGenerator::new(&config);
    /// let msg = MessageBuilder::navigational_warning(17).short_id("DK-001-24").build().unwrap();
    /// assert_eq!(ids.message_id(&msg), "DK.DK-001-24");
    /// assert_eq!(ids.mrn(&msg), "urn:mrn:iho:nw:dk:dk-001-24");
    /// ```
    pub fn message_id(&self, message: &Message) -> String {
        format!("{}.{}", self.config.country, local_id(message))
    }

    /// Maritime resource name of a message.
    pub fn mrn(&self, message: &Message) -> String {
        format!(
            "urn:mrn:iho:{}:{}:{}",
            message.main_type.to_string().to_lowercase(),
            self.config.country.to_lowercase(),
            local_id(message).to_lowercase()
        )
    }

    /// Id of a message part: `<mrn>.<index>`.
    pub fn part_id(&self, message: &Message, index: u32) -> String {
        format!("{}.{}", self.mrn(message), index)
    }

    /// Message-series identifier describing `message`.
    pub fn message_series(&self, message: &Message) -> MessageSeriesIdentifier {
        MessageSeriesIdentifier {
            name_of_series: message.message_series.as_ref().map(|s| s.series_id.clone()),
            warning_type: message
                .warning_type
                .and_then(WarningTypeCode::from_warning_type),
            warning_number: message.number,
            year: message.publish_date_from.map(|d| d.year()),
            production_agency: LocalizedText::new(
                &self.config.production_agency_language,
                &self.config.production_agency,
            ),
            country: self.config.country_name.clone(),
            interoperability_identifier: self.mrn(message),
        }
    }
}

/// Per-call counter for synthetic geometry ids.
///
/// Numbering starts at 1 and increases across every part of one dataset.
/// A sequence is created by, and lives no longer than, one mapping call.
#[derive(Debug, Default)]
pub struct GeometryIdSequence {
    last: u32,
}

impl GeometryIdSequence {
    /// A fresh sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a geometry of `part_id`.
    pub fn next_id(&mut self, part_id: &str) -> String {
        self.last += 1;
        format!("G.{part_id}.{}", self.last)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.last
    }
}
