//! # Message Builder
//!
//! Fluent builder API for constructing [`Message`] graphs without filling in
//! every field of the nested model by hand.
//!
//! ## Quick example
//!
//! ```rust
//! use geo::{point, Geometry, GeometryCollection};
//! use navwarn_models::{MessageBuilder, PartBuilder, WarningType};
//!
//! let message = MessageBuilder::navigational_warning(1)
//!     .short_id("DK-001-24")
//!     .warning_type(WarningType::CoastalWarning)
//!     .title("en", "Light unlit")
//!     .part(
//!         PartBuilder::new(1)
//!             .text("en", "Light unlit", "<p>The light is <b>unlit</b>.</p>")
//!             .geometry(GeometryCollection::new_from(vec![Geometry::Point(
//!                 point!(x: 10.6, y: 57.7),
//!             )])),
//!     )
//!     .tag("CAUTION")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(message.parts.len(), 1);
//! assert_eq!(message.descs[0].title.as_deref(), Some("Light unlit"));
//! ```

use chrono::{DateTime, Utc};
use geo::GeometryCollection;

use crate::catalog::{Area, Category, Chart, MessageTag};
use crate::error::ModelError;
use crate::localized::{check_unique_langs, Localized};
use crate::message::{MainType, Message, MessageDesc, MessageSeries, Status, WarningType};
use crate::part::{DateInterval, MessagePart, MessagePartDesc};
use crate::reference::{Reference, ReferenceType};

// ─── Part Builder ────────────────────────────────────────────────────

/// Builder for a single [`MessagePart`].
pub struct PartBuilder {
    part: MessagePart,
}

impl PartBuilder {
    /// Start a part with the given index.
    pub fn new(index: u32) -> Self {
        Self {
            part: MessagePart::new(index),
        }
    }

    /// Add a subject and rich-text details in `lang`.
    pub fn text(
        mut self,
        lang: impl Into<String>,
        subject: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        self.part.descs.push(MessagePartDesc {
            lang: lang.into(),
            subject: Some(subject.into()),
            details: Some(details.into()),
        });
        self
    }

    /// Add a subject-only description in `lang`.
    pub fn subject(mut self, lang: impl Into<String>, subject: impl Into<String>) -> Self {
        self.part.descs.push(MessagePartDesc {
            lang: lang.into(),
            subject: Some(subject.into()),
            details: None,
        });
        self
    }

    /// Add an event-date interval; either end may be open.
    pub fn dates(mut self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        self.part.event_dates.push(DateInterval::new(from, to));
        self
    }

    /// Set the part geometry, in (longitude, latitude) order.
    pub fn geometry(mut self, geometry: GeometryCollection<f64>) -> Self {
        self.part.geometry = Some(geometry);
        self
    }

    /// Finish the part.
    pub fn build(self) -> MessagePart {
        self.part
    }
}

impl From<PartBuilder> for MessagePart {
    fn from(builder: PartBuilder) -> Self {
        builder.build()
    }
}

// ─── Message Builder ─────────────────────────────────────────────────

/// Builder for a [`Message`].
///
/// Created via [`MessageBuilder::new`] or
/// [`MessageBuilder::navigational_warning`].
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    /// Start a message with the given id and main type.
    pub fn new(id: i64, main_type: MainType) -> Self {
        Self {
            message: Message::new(id, main_type),
        }
    }

    /// Start a navigational warning.
    pub fn navigational_warning(id: i64) -> Self {
        Self::new(id, MainType::Nw)
    }

    /// Set the short id (e.g. `"DK-001-24"`).
    pub fn short_id(mut self, short_id: impl Into<String>) -> Self {
        self.message.short_id = Some(short_id.into());
        self
    }

    /// Set the warning sub-type.
    pub fn warning_type(mut self, warning_type: WarningType) -> Self {
        self.message.warning_type = Some(warning_type);
        self
    }

    /// Set the life-cycle status.
    pub fn status(mut self, status: Status) -> Self {
        self.message.status = status;
        self
    }

    /// Set the sequence number.
    pub fn number(mut self, number: i32) -> Self {
        self.message.number = Some(number);
        self
    }

    /// Set the start of the publication period.
    pub fn publish_from(mut self, date: DateTime<Utc>) -> Self {
        self.message.publish_date_from = Some(date);
        self
    }

    /// Set the end of the publication period.
    pub fn publish_to(mut self, date: DateTime<Utc>) -> Self {
        self.message.publish_date_to = Some(date);
        self
    }

    /// Set the message series; its main type follows the message.
    pub fn series(mut self, series_id: impl Into<String>) -> Self {
        self.message.message_series = Some(MessageSeries {
            series_id: series_id.into(),
            main_type: self.message.main_type,
        });
        self
    }

    /// Set the title in `lang`, creating the description when missing.
    pub fn title(mut self, lang: &str, title: impl Into<String>) -> Self {
        self.desc_mut(lang).title = Some(title.into());
        self
    }

    /// Set the vicinity in `lang`, creating the description when missing.
    pub fn vicinity(mut self, lang: &str, vicinity: impl Into<String>) -> Self {
        self.desc_mut(lang).vicinity = Some(vicinity.into());
        self
    }

    /// Append a part.
    pub fn part(mut self, part: impl Into<MessagePart>) -> Self {
        self.message.parts.push(part.into());
        self
    }

    /// Set the overall message geometry.
    pub fn geometry(mut self, geometry: GeometryCollection<f64>) -> Self {
        self.message.geometry = Some(geometry);
        self
    }

    /// Append an area.
    pub fn area(mut self, area: Area) -> Self {
        self.message.areas.push(area);
        self
    }

    /// Append a chart.
    pub fn chart(mut self, chart: Chart) -> Self {
        self.message.charts.push(chart);
        self
    }

    /// Append a category.
    pub fn category(mut self, category: Category) -> Self {
        self.message.categories.push(category);
        self
    }

    /// Append a tag.
    pub fn tag(mut self, name: &str) -> Self {
        self.message.tags.push(MessageTag::new(name));
        self
    }

    /// Append a reference to `target`.
    pub fn reference(mut self, target: Message, kind: Option<ReferenceType>) -> Self {
        self.message.references.push(Reference::new(target, kind));
        self
    }

    /// Append a reference whose target could not be resolved.
    pub fn dangling_reference(mut self, kind: Option<ReferenceType>) -> Self {
        self.message.references.push(Reference {
            message: None,
            kind,
            description: None,
        });
        self
    }

    fn desc_mut(&mut self, lang: &str) -> &mut MessageDesc {
        let pos = match self.message.descs.iter().position(|d| d.lang == lang) {
            Some(pos) => pos,
            None => {
                self.message.descs.push(MessageDesc {
                    lang: lang.to_string(),
                    ..Default::default()
                });
                self.message.descs.len() - 1
            }
        };
        &mut self.message.descs[pos]
    }

    /// Validate and return the message, with parts sorted by index.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when a language code is malformed, a language
    /// is repeated within one entity, or two parts share an index.
    pub fn build(mut self) -> Result<Message, ModelError> {
        check_unique_langs("message", self.message.descs())?;
        for part in &self.message.parts {
            check_unique_langs("message part", part.descs())?;
        }
        for area in &self.message.areas {
            check_unique_langs("area", area.descs())?;
        }
        for category in &self.message.categories {
            check_unique_langs("category", category.descs())?;
        }

        self.message.parts.sort_by_key(|p| p.index);
        if let Some(dup) = self
            .message
            .parts
            .windows(2)
            .find(|w| w[0].index == w[1].index)
        {
            return Err(ModelError::DuplicatePartIndex { index: dup[0].index });
        }
        Ok(self.message)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
