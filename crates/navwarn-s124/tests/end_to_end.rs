//! Map and marshal a complete multi-part warning.

use chrono::{TimeZone, Utc};
use geo::{point, polygon, Geometry, GeometryCollection};
use navwarn_models::{
    Area, Category, Chart, Message, MessageBuilder, PartBuilder, ReferenceType, WarningType,
};
use navwarn_s124::{
    bounding_box, map_message, CoordinateFormat, DatasetInfo, Marshaller, Member, S100Geometry,
    S124Config,
};

fn firing_exercise() -> Message {
    let area = GeometryCollection::new_from(vec![Geometry::Polygon(polygon![
        (x: 10.0, y: 57.0),
        (x: 10.5, y: 57.0),
        (x: 10.5, y: 57.5),
        (x: 10.0, y: 57.5),
        (x: 10.0, y: 57.0),
    ])]);
    let buoy = GeometryCollection::new_from(vec![
        Geometry::Point(point!(x: 10.25, y: 57.25)),
        Geometry::Point(point!(x: 10.3, y: 57.3)),
    ]);

    let cancelled = MessageBuilder::navigational_warning(40)
        .short_id("DK-040-24")
        .number(40)
        .warning_type(WarningType::CoastalWarning)
        .build()
        .unwrap();

    MessageBuilder::navigational_warning(41)
        .short_id("DK-041-24")
        .number(41)
        .series("dma-nw")
        .warning_type(WarningType::CoastalWarning)
        .publish_from(Utc.with_ymd_and_hms(2024, 9, 2, 6, 0, 0).unwrap())
        .title("en", "Firing exercises. Skagerrak")
        .title("da", "Skydeøvelser. Skagerrak")
        .vicinity("en", "North of Hirtshals")
        .area(Area::named(1, "en", "Skagerrak"))
        .chart(Chart::new("103"))
        .category(Category::named(1, "en", "Firing exercises"))
        .tag("RESTRICTED")
        .geometry(area.clone())
        .part(
            PartBuilder::new(1)
                .text("en", "Firing area", "<p>Firing takes place <b>daily</b>.</p>")
                .dates(
                    Some(Utc.with_ymd_and_hms(2024, 9, 3, 7, 0, 0).unwrap()),
                    Some(Utc.with_ymd_and_hms(2024, 9, 6, 15, 0, 0).unwrap()),
                )
                .geometry(area),
        )
        .part(
            PartBuilder::new(2)
                .text("en", "Target buoys", "Two yellow buoys.")
                .geometry(buoy),
        )
        .reference(cancelled, Some(ReferenceType::Cancellation))
        .build()
        .unwrap()
}

#[test]
fn dataset_structure() {
    let config = S124Config::default();
    let message = firing_exercise();
    let info = DatasetInfo::new("Firing exercises").with_file_identifier("e2e");
    let dataset = map_message(&config, &info, &message, "en").unwrap();

    // preamble, two parts, one reference record
    assert_eq!(dataset.members.len(), 4);
    assert!(matches!(dataset.members[0], Member::Preamble(_)));
    assert!(matches!(dataset.members[3], Member::Reference(_)));

    let preamble = dataset.preamble().unwrap();
    assert_eq!(preamble.id, "DK.DK-041-24");
    assert_eq!(preamble.titles.len(), 2);
    assert_eq!(preamble.references.len(), 1);
    assert_eq!(preamble.references[0].href, "DK.DK-040-24");

    for part in dataset.parts() {
        assert_eq!(part.header.as_ref().map(|l| l.href.as_str()), Some(preamble.id.as_str()));
        assert_eq!(part.affects.len(), 1);
    }

    let ids = dataset.geometry_ids();
    assert_eq!(
        ids,
        vec![
            "G.urn:mrn:iho:nw:dk:dk-041-24.1.1",
            "G.urn:mrn:iho:nw:dk:dk-041-24.2.2",
            "G.urn:mrn:iho:nw:dk:dk-041-24.2.3",
        ]
    );

    let record = dataset.references().next().unwrap();
    assert!(record.no_message_on_hand);

    assert_eq!(
        dataset.bounded_by,
        message.geometry.as_ref().and_then(bounding_box)
    );
}

#[test]
fn positions_are_lat_lon_in_range() {
    let config = S124Config::default();
    let message = firing_exercise();
    let dataset = map_message(&config, &DatasetInfo::new("t"), &message, "en").unwrap();

    for part in dataset.parts() {
        for geometry in &part.geometries {
            for p in geometry.positions() {
                assert!((-90.0..=90.0).contains(&p.lat));
                assert!((-180.0..=180.0).contains(&p.lon));
                assert!(p.lat > p.lon, "latitude first: {p:?}");
            }
        }
    }

    let buoys = dataset.parts().nth(1).unwrap();
    match &buoys.geometries[0] {
        S100Geometry::Point(p) => {
            assert_eq!(p.position.lat, 57.25);
            assert_eq!(p.position.lon, 10.25);
        }
        other => panic!("Expected Point, got {:?}", other),
    }
}

#[test]
fn gml_document() {
    let config = S124Config::default();
    let message = firing_exercise();
    let info = DatasetInfo::new("Firing exercises").with_file_identifier("e2e");
    let dataset = map_message(&config, &info, &message, "en").unwrap();
    let xml = Marshaller::new(CoordinateFormat::fixed(4))
        .to_string(&dataset)
        .unwrap();

    assert!(xml.contains("gml:id=\"DS.e2e\""));
    assert!(xml.contains("<gml:lowerCorner>57.0000 10.0000</gml:lowerCorner>"));
    assert!(xml.contains("<gml:upperCorner>57.5000 10.5000</gml:upperCorner>"));
    assert!(xml.contains("<gml:pos>57.2500 10.2500</gml:pos>"));
    assert!(xml.contains("<text>Firing takes place daily.</text>"));
    assert!(xml.contains("<navwarnTypeGeneral code=\"5\">special operations</navwarnTypeGeneral>"));
    assert!(xml.contains("<restriction code=\"1\">entry prohibited</restriction>"));
    assert!(xml.contains("<typeOfWarning code=\"2\">coastal navigational warning</typeOfWarning>"));
    assert_eq!(xml.matches("<S124:NAVWARNPart ").count(), 2);
    assert_eq!(xml.matches("<S124:References ").count(), 1);
}

#[test]
fn message_from_json_maps() {
    let json = serde_json::to_string(&firing_exercise()).unwrap();
    let message: Message = serde_json::from_str(&json).unwrap();
    let config = S124Config::default();
    let dataset = map_message(&config, &DatasetInfo::new("t"), &message, "da").unwrap();
    assert_eq!(dataset.parts().count(), 2);
    // Part text exists only in English.
    assert_eq!(
        dataset.parts().next().unwrap().information.language.as_deref(),
        Some("en")
    );
}
