//! GML rendering of an S-124 [`Dataset`].
//!
//! Coordinates are formatted through an explicit [`CoordinateFormat`];
//! Rust float formatting never consults the process locale, so marshalling
//! needs no global state and concurrent calls cannot interfere.

use std::io::Write;

use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::S124Config;
use crate::dataset::{
    Dataset, DatasetIdentification, Envelope, FixedDateRange, Information, Link, LocalizedText,
    Member, MessageSeriesIdentifier, Part, Position, Preamble, ReferenceRecord, S100Geometry,
};
use crate::error::MappingError;

// ─── Namespaces ─────────────────────────────────────────────────────

/// S-124 product namespace.
pub const S124_NS: &str = "http://www.iho.int/S124/1.0";
/// S-100 GML profile namespace.
pub const S100_NS: &str = "http://www.iho.int/s100gml/5.0";
/// GML 3.2 namespace.
pub const GML_NS: &str = "http://www.opengis.net/gml/3.2";
/// XLink namespace.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Schema document referenced from the root element.
pub const SCHEMA_LOCATION: &str = "S124.xsd";
/// Coordinate reference system of every position.
pub const SRS_NAME: &str = "EPSG:4326";

// ─── CoordinateFormat ───────────────────────────────────────────────

/// Locale-independent number formatting for coordinates.
///
/// # Examples
///
/// ```
/// use navwarn_s124::CoordinateFormat;
///
/// assert_eq!(CoordinateFormat::default().format(57.125), "57.125");
/// assert_eq!(CoordinateFormat::fixed(2).format(57.1256), "57.13");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinateFormat {
    /// Fixed number of decimals; `None` writes the shortest exact form.
    pub precision: Option<usize>,
}

impl CoordinateFormat {
    /// Format with exactly `precision` decimals.
    pub fn fixed(precision: usize) -> Self {
        Self {
            precision: Some(precision),
        }
    }

    /// Format one value with a `.` decimal separator.
    pub fn format(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => format!("{value}"),
        }
    }

    /// `"<lat> <lon>"`.
    pub fn position(&self, position: Position) -> String {
        format!("{} {}", self.format(position.lat), self.format(position.lon))
    }

    /// Space-separated `lat lon` pairs.
    pub fn pos_list(&self, positions: &[Position]) -> String {
        positions
            .iter()
            .map(|p| self.position(*p))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ─── Marshaller ─────────────────────────────────────────────────────

/// Renders datasets as indented GML.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marshaller {
    format: CoordinateFormat,
}

impl Marshaller {
    /// Marshaller using `format` for coordinates.
    pub fn new(format: CoordinateFormat) -> Self {
        Self { format }
    }

    /// Marshaller using the configured coordinate precision.
    pub fn from_config(config: &S124Config) -> Self {
        Self::new(CoordinateFormat {
            precision: config.coordinate_precision,
        })
    }

    /// Render `dataset` to a string.
    ///
    /// # Errors
    ///
    /// [`MappingError::Xml`] when writing fails.
    pub fn to_string(&self, dataset: &Dataset) -> Result<String, MappingError> {
        let mut buf = Vec::new();
        self.write(dataset, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Render `dataset` to `out`.
    ///
    /// # Errors
    ///
    /// [`MappingError::Xml`] when writing fails.
    pub fn write<W: Write>(&self, dataset: &Dataset, out: W) -> Result<(), MappingError> {
        let mut gml = GmlWriter {
            writer: Writer::new_with_indent(out, b' ', 2),
            format: self.format,
        };
        gml.dataset(dataset)
    }
}

fn xml_err(err: impl std::fmt::Display) -> MappingError {
    MappingError::Xml(err.to_string())
}

fn href(link: &Link) -> String {
    format!("#{}", link.href)
}

struct GmlWriter<W: Write> {
    writer: Writer<W>,
    format: CoordinateFormat,
}

impl<W: Write> GmlWriter<W> {
    // ─── Primitives ─────────────────────────────────────────────────

    fn event(&mut self, event: Event<'_>) -> Result<(), MappingError> {
        self.writer.write_event(event).map_err(xml_err)
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), MappingError> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.event(Event::Start(elem))
    }

    fn end(&mut self, name: &str) -> Result<(), MappingError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), MappingError> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.event(Event::Empty(elem))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), MappingError> {
        self.start(name, &[])?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn opt_text_element(&mut self, name: &str, text: Option<&str>) -> Result<(), MappingError> {
        match text {
            Some(text) => self.text_element(name, text),
            None => Ok(()),
        }
    }

    /// `<name code="N">label</name>`.
    fn code_element(&mut self, name: &str, code: u8, label: &str) -> Result<(), MappingError> {
        self.start(name, &[("code", code.to_string().as_str())])?;
        self.event(Event::Text(BytesText::new(label)))?;
        self.end(name)
    }

    fn link(&mut self, name: &str, link: &Link) -> Result<(), MappingError> {
        self.empty(
            name,
            &[("xlink:href", href(link).as_str()), ("xlink:role", link.role.as_str())],
        )
    }

    fn localized(&mut self, name: &str, text: &LocalizedText) -> Result<(), MappingError> {
        self.start(name, &[])?;
        self.text_element("language", &text.language)?;
        self.text_element("text", &text.text)?;
        self.end(name)
    }

    // ─── Dataset ────────────────────────────────────────────────────

    fn dataset(&mut self, dataset: &Dataset) -> Result<(), MappingError> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let schema_location = format!("{S124_NS} {SCHEMA_LOCATION}");
        self.start(
            "S124:Dataset",
            &[
                ("xmlns:S124", S124_NS),
                ("xmlns:S100", S100_NS),
                ("xmlns:gml", GML_NS),
                ("xmlns:xlink", XLINK_NS),
                ("xmlns:xsi", XSI_NS),
                ("xsi:schemaLocation", schema_location.as_str()),
                ("gml:id", dataset.id.as_str()),
            ],
        )?;

        self.bounded_by(dataset.bounded_by.as_ref())?;
        self.identification(&dataset.identification)?;

        for member in &dataset.members {
            match member {
                Member::Preamble(preamble) => {
                    self.start("imember", &[])?;
                    self.preamble(preamble)?;
                    self.end("imember")?;
                }
                Member::Part(part) => {
                    self.start("member", &[])?;
                    self.part(part)?;
                    self.end("member")?;
                }
                Member::Reference(record) => {
                    self.start("imember", &[])?;
                    self.reference(record)?;
                    self.end("imember")?;
                }
            }
        }

        self.end("S124:Dataset")
    }

    fn bounded_by(&mut self, envelope: Option<&Envelope>) -> Result<(), MappingError> {
        self.start("gml:boundedBy", &[])?;
        match envelope {
            Some(envelope) => {
                self.start("gml:Envelope", &[("srsName", SRS_NAME)])?;
                let lower = self.format.position(envelope.lower);
                let upper = self.format.position(envelope.upper);
                self.text_element("gml:lowerCorner", &lower)?;
                self.text_element("gml:upperCorner", &upper)?;
                self.end("gml:Envelope")?;
            }
            None => self.text_element("gml:Null", "missing")?,
        }
        self.end("gml:boundedBy")
    }

    fn identification(&mut self, id: &DatasetIdentification) -> Result<(), MappingError> {
        self.start("DatasetIdentificationInformation", &[])?;
        self.text_element("S100:encodingSpecification", &id.encoding_specification)?;
        self.text_element(
            "S100:encodingSpecificationEdition",
            &id.encoding_specification_edition,
        )?;
        self.text_element("S100:productIdentifier", &id.product_identifier)?;
        self.text_element("S100:productEdition", &id.product_edition)?;
        self.text_element("S100:datasetFileIdentifier", &id.file_identifier)?;
        self.text_element("S100:datasetTitle", &id.title)?;
        self.text_element(
            "S100:datasetReferenceDate",
            &id.reference_date.format("%Y-%m-%d").to_string(),
        )?;
        self.text_element("S100:datasetLanguage", &id.language)?;
        self.opt_text_element("S100:datasetAbstract", id.abstract_text.as_deref())?;
        self.text_element("S100:datasetPurpose", &id.purpose)?;
        self.end("DatasetIdentificationInformation")
    }

    fn message_series(&mut self, series: &MessageSeriesIdentifier) -> Result<(), MappingError> {
        self.start("messageSeriesIdentifier", &[])?;
        self.opt_text_element("nameOfSeries", series.name_of_series.as_deref())?;
        if let Some(code) = series.warning_type {
            self.code_element("typeOfWarning", code.code(), code.label())?;
        }
        if let Some(number) = series.warning_number {
            self.text_element("warningNumber", &number.to_string())?;
        }
        if let Some(year) = series.year {
            self.text_element("year", &year.to_string())?;
        }
        self.localized("productionAgency", &series.production_agency)?;
        self.text_element("country", &series.country)?;
        self.text_element(
            "interoperabilityIdentifier",
            &series.interoperability_identifier,
        )?;
        self.end("messageSeriesIdentifier")
    }

    // ─── Preamble ───────────────────────────────────────────────────

    fn preamble(&mut self, preamble: &Preamble) -> Result<(), MappingError> {
        self.start("S124:NAVWARNPreamble", &[("gml:id", preamble.id.as_str())])?;
        self.message_series(&preamble.message_series)?;

        for chart in &preamble.affected_charts {
            self.start("affectedChartPublications", &[])?;
            self.text_element("chartAffected", &chart.chart_number)?;
            if let Some(date) = chart.edition_date {
                self.text_element("chartEditionDate", &date.format("%Y-%m-%d").to_string())?;
            }
            self.end("affectedChartPublications")?;
        }
        for area in &preamble.general_areas {
            self.start("generalArea", &[])?;
            self.localized("locationName", area)?;
            self.end("generalArea")?;
        }
        for locality in &preamble.localities {
            self.start("locality", &[])?;
            self.localized("locationName", locality)?;
            self.end("locality")?;
        }
        for title in &preamble.titles {
            self.localized("title", title)?;
        }
        if let Some(date) = preamble.cancellation_date {
            self.text_element(
                "cancellationDate",
                &date.to_rfc3339_opts(SecondsFormat::Secs, false),
            )?;
        }
        self.text_element("intService", if preamble.int_service { "true" } else { "false" })?;
        if let Some(category) = preamble.general_category {
            self.code_element("navwarnTypeGeneral", category.code(), category.label())?;
        }
        if let Some(time) = preamble.publication_time {
            self.text_element("publicationTime", &time.to_rfc3339_opts(SecondsFormat::Secs, true))?;
        }
        for link in &preamble.references {
            self.link("theReferences", link)?;
        }

        self.end("S124:NAVWARNPreamble")
    }

    // ─── Part ───────────────────────────────────────────────────────

    fn part(&mut self, part: &Part) -> Result<(), MappingError> {
        self.start("S124:NAVWARNPart", &[("gml:id", part.id.as_str())])?;
        if part.bounded_by.is_some() {
            self.bounded_by(part.bounded_by.as_ref())?;
        }
        for range in &part.fixed_date_ranges {
            self.date_range(range)?;
        }
        self.information(&part.information)?;
        for geometry in &part.geometries {
            self.start("geometry", &[])?;
            self.geometry(geometry)?;
            self.end("geometry")?;
        }
        if let Some(restriction) = part.restriction {
            self.code_element("restriction", restriction.code(), restriction.label())?;
        }
        if let Some(header) = &part.header {
            self.link("header", header)?;
        }
        for link in &part.affects {
            self.link("affects", link)?;
        }
        self.end("S124:NAVWARNPart")
    }

    fn date_range(&mut self, range: &FixedDateRange) -> Result<(), MappingError> {
        self.start("fixedDateRange", &[])?;
        if let Some(start) = range.date_start {
            self.start("dateStart", &[])?;
            self.text_element("date", &start.format("%Y-%m-%d").to_string())?;
            self.end("dateStart")?;
        }
        if let Some(end) = range.date_end {
            self.start("dateEnd", &[])?;
            self.text_element("date", &end.format("%Y-%m-%d").to_string())?;
            self.end("dateEnd")?;
        }
        self.end("fixedDateRange")
    }

    fn information(&mut self, info: &Information) -> Result<(), MappingError> {
        if *info == Information::default() {
            return self.empty("information", &[]);
        }
        self.start("information", &[])?;
        self.opt_text_element("language", info.language.as_deref())?;
        self.opt_text_element("headline", info.headline.as_deref())?;
        self.opt_text_element("text", info.text.as_deref())?;
        self.end("information")
    }

    fn geometry(&mut self, geometry: &S100Geometry) -> Result<(), MappingError> {
        match geometry {
            S100Geometry::Point(point) => {
                self.start("S100:pointProperty", &[])?;
                self.start("S100:Point", &[("gml:id", point.id.as_str()), ("srsName", SRS_NAME)])?;
                let pos = self.format.position(point.position);
                self.text_element("gml:pos", &pos)?;
                self.end("S100:Point")?;
                self.end("S100:pointProperty")
            }
            S100Geometry::Curve(curve) => {
                self.start("S100:curveProperty", &[])?;
                self.start("S100:Curve", &[("gml:id", curve.id.as_str()), ("srsName", SRS_NAME)])?;
                self.start("gml:segments", &[])?;
                self.start("gml:LineStringSegment", &[])?;
                let list = self.format.pos_list(&curve.positions);
                self.text_element("gml:posList", &list)?;
                self.end("gml:LineStringSegment")?;
                self.end("gml:segments")?;
                self.end("S100:Curve")?;
                self.end("S100:curveProperty")
            }
            S100Geometry::Surface(surface) => {
                self.start("S100:surfaceProperty", &[])?;
                self.start(
                    "S100:Surface",
                    &[("gml:id", surface.id.as_str()), ("srsName", SRS_NAME)],
                )?;
                self.start("gml:patches", &[])?;
                self.start("gml:PolygonPatch", &[])?;
                self.ring("gml:exterior", &surface.exterior)?;
                for interior in &surface.interiors {
                    self.ring("gml:interior", interior)?;
                }
                self.end("gml:PolygonPatch")?;
                self.end("gml:patches")?;
                self.end("S100:Surface")?;
                self.end("S100:surfaceProperty")
            }
        }
    }

    fn ring(&mut self, name: &str, positions: &[Position]) -> Result<(), MappingError> {
        self.start(name, &[])?;
        self.start("gml:LinearRing", &[])?;
        let list = self.format.pos_list(positions);
        self.text_element("gml:posList", &list)?;
        self.end("gml:LinearRing")?;
        self.end(name)
    }

    // ─── References ─────────────────────────────────────────────────

    fn reference(&mut self, record: &ReferenceRecord) -> Result<(), MappingError> {
        self.start("S124:References", &[("gml:id", record.id.as_str())])?;
        if let Some(kind) = record.reference_type {
            self.text_element("referenceType", &kind.to_string())?;
        }
        self.text_element(
            "noMessageOnHand",
            if record.no_message_on_hand { "true" } else { "false" },
        )?;
        self.message_series(&record.message_series)?;
        self.end("S124:References")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use navwarn_models::ReferenceType;

    use crate::classification::{GeneralCategory, Restriction, WarningTypeCode};
    use crate::dataset::{
        ChartPublication, CurveGeometry, DatasetInfo, PointGeometry, SurfaceGeometry,
    };

    fn pos(lat: f64, lon: f64) -> Position {
        Position { lat, lon }
    }

    fn series(mrn: &str) -> MessageSeriesIdentifier {
        MessageSeriesIdentifier {
            name_of_series: Some("dma-nw".into()),
            warning_type: Some(WarningTypeCode::Coastal),
            warning_number: Some(12),
            year: Some(2024),
            production_agency: LocalizedText::new("en", "Danish Maritime Authority"),
            country: "Denmark".into(),
            interoperability_identifier: mrn.into(),
        }
    }

    fn dataset() -> Dataset {
        let preamble = Preamble {
            id: "DK.DK-001-24".into(),
            message_series: series("urn:mrn:iho:nw:dk:dk-001-24"),
            affected_charts: vec![ChartPublication {
                chart_number: "101".into(),
                edition_date: None,
            }],
            general_areas: vec![LocalizedText::new("en", "Kattegat")],
            localities: vec![LocalizedText::new("en", "Off Skagen & Hirtshals")],
            titles: vec![LocalizedText::new("en", "Buoy adrift")],
            cancellation_date: Some(
                Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0)
                    .unwrap()
                    .fixed_offset(),
            ),
            int_service: true,
            general_category: Some(GeneralCategory::DriftingHazards),
            publication_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()),
            references: vec![Link::new("DK.DK-002-24", "reference")],
        };
        let part = Part {
            id: "urn:mrn:iho:nw:dk:dk-001-24.1".into(),
            bounded_by: Some(Envelope {
                lower: pos(55.5, 10.25),
                upper: pos(56.0, 11.0),
            }),
            information: Information {
                language: Some("en".into()),
                headline: Some("Buoy adrift".into()),
                text: Some("Yellow buoy".into()),
            },
            fixed_date_ranges: vec![FixedDateRange {
                date_start: NaiveDate::from_ymd_opt(2024, 3, 1),
                date_end: None,
            }],
            geometries: vec![
                S100Geometry::Point(PointGeometry {
                    id: "G.p.1".into(),
                    position: pos(55.5, 10.25),
                }),
                S100Geometry::Curve(CurveGeometry {
                    id: "G.p.2".into(),
                    positions: vec![pos(55.5, 10.25), pos(56.0, 11.0)],
                }),
                S100Geometry::Surface(SurfaceGeometry {
                    id: "G.p.3".into(),
                    exterior: vec![pos(0.0, 0.0), pos(0.0, 1.0), pos(1.0, 1.0), pos(0.0, 0.0)],
                    interiors: vec![vec![
                        pos(0.2, 0.2),
                        pos(0.2, 0.4),
                        pos(0.4, 0.4),
                        pos(0.2, 0.2),
                    ]],
                }),
            ],
            restriction: Some(Restriction::EntryRestricted),
            header: Some(Link::new("DK.DK-001-24", "header")),
            affects: vec![Link::new("DK.DK-002-24", "cancellation")],
        };
        let record = ReferenceRecord {
            id: "DK.DK-002-24".into(),
            reference_type: Some(ReferenceType::Cancellation),
            no_message_on_hand: true,
            message_series: series("urn:mrn:iho:nw:dk:dk-002-24"),
        };
        let info = DatasetInfo::new("Buoy adrift").with_file_identifier("f-1");
        Dataset {
            id: "DS.f-1".into(),
            identification: DatasetIdentification::from_info(
                &info,
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            ),
            bounded_by: Some(Envelope {
                lower: pos(55.5, 10.25),
                upper: pos(56.0, 11.0),
            }),
            members: vec![
                Member::Preamble(preamble),
                Member::Part(part),
                Member::Reference(record),
            ],
        }
    }

    fn render(dataset: &Dataset) -> String {
        Marshaller::default().to_string(dataset).unwrap()
    }

    #[test]
    fn coordinate_format_is_plain_decimal() {
        let full = CoordinateFormat::default();
        assert_eq!(full.format(10.0), "10");
        assert_eq!(full.format(-3.5), "-3.5");
        assert_eq!(full.position(pos(57.7, 10.6)), "57.7 10.6");

        let fixed = CoordinateFormat::fixed(3);
        assert_eq!(fixed.format(10.0), "10.000");
        assert_eq!(fixed.pos_list(&[pos(1.0, 2.0), pos(3.0, 4.0)]), "1.000 2.000 3.000 4.000");
    }

    #[test]
    fn document_root_and_identification() {
        let xml = render(&dataset());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<S124:Dataset xmlns:S124=\"http://www.iho.int/S124/1.0\""));
        assert!(xml.contains("gml:id=\"DS.f-1\""));
        assert!(xml.contains("<S100:productIdentifier>S-124</S100:productIdentifier>"));
        assert!(xml.contains("<S100:datasetReferenceDate>2024-03-02</S100:datasetReferenceDate>"));
        assert!(!xml.contains("S100:datasetAbstract"));
        assert!(xml.trim_end().ends_with("</S124:Dataset>"));
    }

    #[test]
    fn envelope_is_lat_lon() {
        let xml = render(&dataset());
        assert!(xml.contains("<gml:lowerCorner>55.5 10.25</gml:lowerCorner>"));
        assert!(xml.contains("<gml:upperCorner>56 11</gml:upperCorner>"));
    }

    #[test]
    fn missing_envelope_is_null() {
        let mut ds = dataset();
        ds.bounded_by = None;
        assert!(render(&ds).contains("<gml:Null>missing</gml:Null>"));
    }

    #[test]
    fn members_are_ordered() {
        let xml = render(&dataset());
        let preamble = xml.find("<S124:NAVWARNPreamble").unwrap();
        let part = xml.find("<S124:NAVWARNPart").unwrap();
        let record = xml.find("<S124:References").unwrap();
        assert!(preamble < part && part < record);
    }

    #[test]
    fn preamble_content() {
        let xml = render(&dataset());
        assert!(xml.contains(
            "<typeOfWarning code=\"2\">coastal navigational warning</typeOfWarning>"
        ));
        assert!(xml.contains(
            "<navwarnTypeGeneral code=\"4\">drifting hazards</navwarnTypeGeneral>"
        ));
        assert!(xml.contains("<chartAffected>101</chartAffected>"));
        assert!(xml.contains("<text>Off Skagen &amp; Hirtshals</text>"));
        assert!(xml.contains("<cancellationDate>2024-04-01T08:00:00+00:00</cancellationDate>"));
        assert!(xml.contains("<publicationTime>2024-03-01T08:00:00Z</publicationTime>"));
        assert!(xml.contains("<intService>true</intService>"));
        assert!(xml.contains(
            "<theReferences xlink:href=\"#DK.DK-002-24\" xlink:role=\"reference\"/>"
        ));
    }

    #[test]
    fn part_geometry_elements() {
        let xml = render(&dataset());
        assert!(xml.contains("<S100:Point gml:id=\"G.p.1\" srsName=\"EPSG:4326\">"));
        assert!(xml.contains("<gml:pos>55.5 10.25</gml:pos>"));
        assert!(xml.contains("<gml:posList>55.5 10.25 56 11</gml:posList>"));
        assert!(xml.contains("<gml:exterior>"));
        assert!(xml.contains("<gml:interior>"));
        assert!(xml.contains("<restriction code=\"2\">entry restricted</restriction>"));
        assert!(xml.contains("<header xlink:href=\"#DK.DK-001-24\" xlink:role=\"header\"/>"));
        assert!(xml.contains(
            "<affects xlink:href=\"#DK.DK-002-24\" xlink:role=\"cancellation\"/>"
        ));
        assert!(xml.contains("<dateStart>"));
        assert!(!xml.contains("<dateEnd>"));
    }

    #[test]
    fn empty_information_is_kept() {
        let mut ds = dataset();
        if let Member::Part(part) = &mut ds.members[1] {
            part.information = Information::default();
        }
        assert!(render(&ds).contains("<information/>"));
    }

    #[test]
    fn reference_record_content() {
        let xml = render(&dataset());
        assert!(xml.contains("<S124:References gml:id=\"DK.DK-002-24\">"));
        assert!(xml.contains("<referenceType>cancellation</referenceType>"));
        assert!(xml.contains("<noMessageOnHand>true</noMessageOnHand>"));
    }

    #[test]
    fn precision_from_config() {
        let cfg = S124Config {
            coordinate_precision: Some(3),
            ..S124Config::default()
        };
        let xml = Marshaller::from_config(&cfg).to_string(&dataset()).unwrap();
        assert!(xml.contains("<gml:pos>55.500 10.250</gml:pos>"));
    }

    #[test]
    fn concurrent_rendering_is_identical() {
        let ds = dataset();
        let expected = render(&ds);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| render(&ds))).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
