//! Message to S-124 dataset mapping.
//!
//! A [`DatasetMapper`] turns one navigational warning into one [`Dataset`]:
//! a preamble, one part per message part and one reference record per
//! distinct referenced warning. The mapper is consumed by [`DatasetMapper::map`],
//! so the geometry id sequence it owns never outlives a single call.

use std::collections::HashSet;

use chrono::Utc;
use navwarn_models::{Localized, Message, MessagePart, ReferenceType, WarningType};
use tracing::{debug, warn};

use crate::bbox::bounding_box_opt;
use crate::classification::{GeneralCategory, Restriction};
use crate::config::S124Config;
use crate::dataset::{
    ChartPublication, Dataset, DatasetIdentification, DatasetInfo, FixedDateRange, Information,
    Link, LocalizedText, Member, Part, Preamble, ReferenceRecord,
};
use crate::error::MappingError;
use crate::geometry::GeometryConverter;
use crate::ids::{GeometryIdSequence, IdentifierGenerator};
use crate::language::LanguageResolver;
use crate::text::html_to_text;

/// Output language used when none is requested.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Link role from a part to its preamble.
pub const HEADER_ROLE: &str = "header";
/// Link role from the preamble to a reference record.
pub const REFERENCE_ROLE: &str = "reference";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builds one [`Dataset`] from one message.
#[derive(Debug)]
pub struct DatasetMapper<'a> {
    ids: IdentifierGenerator<'a>,
    geometry_ids: GeometryIdSequence,
}

impl<'a> DatasetMapper<'a> {
    /// A fresh mapper for one mapping call.
    pub fn new(config: &'a S124Config) -> Self {
        Self {
            ids: IdentifierGenerator::new(config),
            geometry_ids: GeometryIdSequence::new(),
        }
    }

    /// Map `message` into a dataset in `language`.
    ///
    /// # Errors
    ///
    /// - [`MappingError::MissingDatasetInfo`] / [`MappingError::MissingMessage`]
    ///   when an input is absent.
    /// - [`MappingError::UnsupportedMainType`] for anything but a
    ///   navigational warning.
    /// - [`MappingError::UnsupportedGeometry`] when a part holds a shape
    ///   with no S-100 counterpart.
    ///
    /// The three validation errors are raised before any output is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use navwarn_models::{MessageBuilder, PartBuilder};
    /// use navwarn_s124::{DatasetInfo, DatasetMapper, S124Config};
    ///
    /// let config = S124Config::default();
    /// let message = MessageBuilder::navigational_warning(7)
    ///     .short_id("DK-007-24")
    ///     .part(PartBuilder::new(1).subject("en", "Buoy missing"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let info = DatasetInfo::new("DK-007-24");
    /// let dataset = DatasetMapper::new(&config)
    ///     .map(Some(&info), Some(&message), "en")
    ///     .unwrap();
    ///
    /// assert_eq!(dataset.preamble().unwrap().id, "DK.DK-007-24");
    /// assert_eq!(dataset.parts().count(), 1);
    /// ```
    pub fn map(
        mut self,
        info: Option<&DatasetInfo>,
        message: Option<&Message>,
        language: &str,
    ) -> Result<Dataset, MappingError> {
        let info = info.ok_or(MappingError::MissingDatasetInfo)?;
        let message = message.ok_or(MappingError::MissingMessage)?;
        if !message.is_navigational_warning() {
            return Err(MappingError::UnsupportedMainType {
                message_id: message.id,
                main_type: message.main_type,
            });
        }

        let resolver = LanguageResolver::new(language);
        debug!(message_id = message.id, language, "mapping message");

        let identification = DatasetIdentification::from_info(info, Utc::now().date_naive());
        let bounded_by = bounding_box_opt(message.geometry.as_ref());

        let mut preamble = self.build_preamble(message, &resolver);
        let affects = self.affects_links(message);

        let mut ordered: Vec<&MessagePart> = message.parts.iter().collect();
        ordered.sort_by_key(|p| p.index);

        let mut parts = Vec::with_capacity(ordered.len());
        for part in ordered {
            parts.push(self.build_part(message, part, &resolver, &affects, &preamble.id)?);
        }

        let references = self.build_references(message, &preamble.id);
        preamble.references = references
            .iter()
            .map(|r| Link::new(r.id.clone(), REFERENCE_ROLE))
            .collect();

        debug!(
            message_id = message.id,
            parts = parts.len(),
            references = references.len(),
            geometries = self.geometry_ids.issued(),
            "mapped message"
        );

        let mut members = Vec::with_capacity(1 + parts.len() + references.len());
        members.push(Member::Preamble(preamble));
        members.extend(parts.into_iter().map(Member::Part));
        members.extend(references.into_iter().map(Member::Reference));

        Ok(Dataset {
            id: format!("DS.{}", info.file_identifier),
            identification,
            bounded_by,
            members,
        })
    }

    // ─── Preamble ───────────────────────────────────────────────────

    fn build_preamble(&self, message: &Message, resolver: &LanguageResolver) -> Preamble {
        let affected_charts = message
            .charts
            .iter()
            .filter_map(|chart| non_blank(chart.chart_number.as_deref()))
            .map(|number| ChartPublication {
                chart_number: number.to_string(),
                edition_date: None,
            })
            .collect();

        let general_areas = message
            .areas
            .iter()
            .map(|area| match resolver.exact(area) {
                Some(desc) => LocalizedText::new(&desc.lang, &desc.name),
                None => LocalizedText::new(resolver.language(), &area.to_string()),
            })
            .collect();

        let localities = message
            .desc(resolver.language())
            .and_then(|d| non_blank(d.vicinity.as_deref()))
            .map(|vicinity| LocalizedText::new(resolver.language(), vicinity))
            .into_iter()
            .collect();

        let titles = message
            .descs
            .iter()
            .filter_map(|d| non_blank(d.title.as_deref()).map(|t| LocalizedText::new(&d.lang, t)))
            .collect();

        Preamble {
            id: self.ids.message_id(message),
            message_series: self.ids.message_series(message),
            affected_charts,
            general_areas,
            localities,
            titles,
            cancellation_date: message.publish_date_to.map(|d| d.fixed_offset()),
            int_service: message.warning_type != Some(WarningType::LocalWarning),
            general_category: GeneralCategory::classify(message, resolver),
            publication_time: message.publish_date_from,
            references: Vec::new(),
        }
    }

    // ─── Parts ──────────────────────────────────────────────────────

    /// Links from every part to the warnings the message references.
    fn affects_links(&self, message: &Message) -> Vec<Link> {
        message
            .references
            .iter()
            .filter_map(|reference| {
                reference
                    .navigational_warning_target()
                    .map(|target| Link::new(self.ids.message_id(target), reference.role()))
            })
            .collect()
    }

    fn build_part(
        &mut self,
        message: &Message,
        part: &MessagePart,
        resolver: &LanguageResolver,
        affects: &[Link],
        preamble_id: &str,
    ) -> Result<Part, MappingError> {
        let id = self.ids.part_id(message, part.index);

        let geometries = match &part.geometry {
            Some(collection) => {
                GeometryConverter::new(&id, &mut self.geometry_ids).convert(collection)?
            }
            None => Vec::new(),
        };

        let fixed_date_ranges = part
            .event_dates
            .iter()
            .map(|interval| FixedDateRange {
                date_start: interval.from_date.map(|d| d.date_naive()),
                date_end: interval.to_date.map(|d| d.date_naive()),
            })
            .collect();

        debug!(part_id = %id, geometries = geometries.len(), "built part");

        Ok(Part {
            bounded_by: bounding_box_opt(part.geometry.as_ref()),
            information: information(part, resolver),
            fixed_date_ranges,
            geometries,
            restriction: Restriction::from_tags(&message.tags),
            header: Some(Link::new(preamble_id, HEADER_ROLE)),
            affects: affects.to_vec(),
            id,
        })
    }

    // ─── Reference records ──────────────────────────────────────────

    fn build_references(&self, message: &Message, preamble_id: &str) -> Vec<ReferenceRecord> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for reference in &message.references {
            let Some(target) = reference.navigational_warning_target() else {
                debug!(
                    message_id = message.id,
                    "dropping reference without navigational warning target"
                );
                continue;
            };

            let id = self.ids.message_id(target);
            if id == preamble_id {
                warn!(message_id = message.id, "dropping reference to the message itself");
                continue;
            }
            if !seen.insert(id.clone()) {
                debug!(reference_id = %id, "dropping duplicate reference");
                continue;
            }

            debug!(reference_id = %id, kind = ?reference.kind, "built reference record");
            records.push(ReferenceRecord {
                id,
                reference_type: reference.kind,
                no_message_on_hand: reference.kind == Some(ReferenceType::Cancellation),
                message_series: self.ids.message_series(target),
            });
        }
        records
    }
}

/// Information block of a part; empty when no text exists along the
/// language chain.
fn information(part: &MessagePart, resolver: &LanguageResolver) -> Information {
    let Some(desc) = resolver.resolve(part) else {
        return Information::default();
    };
    Information {
        language: Some(desc.lang.clone()),
        headline: non_blank(desc.subject.as_deref()).map(str::to_string),
        text: desc
            .details
            .as_deref()
            .map(html_to_text)
            .filter(|t| !t.is_empty()),
    }
}

/// Map `message` with a fresh [`DatasetMapper`].
///
/// # Errors
///
/// See [`DatasetMapper::map`].
pub fn map_message(
    config: &S124Config,
    info: &DatasetInfo,
    message: &Message,
    language: &str,
) -> Result<Dataset, MappingError> {
    DatasetMapper::new(config).map(Some(info), Some(message), language)
}

/// Default dataset title: the message title in `language` (falling back to
/// English), else the message id.
pub fn dataset_title(config: &S124Config, message: &Message, language: &str) -> String {
    let resolver = LanguageResolver::new(language);
    resolver
        .chain()
        .iter()
        .find_map(|lang| message.desc(lang).and_then(|d| non_blank(d.title.as_deref())))
        .map_or_else(
            || IdentifierGenerator::new(config).message_id(message),
            str::to_string,
        )
}
