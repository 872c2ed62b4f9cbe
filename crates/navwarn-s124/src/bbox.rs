//! Bounding-box computation.
//!
//! Envelopes are computed on model geometry in (longitude, latitude) order
//! with [`geo::BoundingRect`]; the corners are inverted to (latitude,
//! longitude) when the [`Envelope`] positions are built.

use geo::{BoundingRect, Coord, GeometryCollection, Rect};
use navwarn_models::Message;

use crate::dataset::{Envelope, Position};

/// Envelope of a rectangle in model order.
pub fn envelope_from_rect(rect: Rect<f64>) -> Envelope {
    Envelope {
        lower: Position::from_coord(rect.min()),
        upper: Position::from_coord(rect.max()),
    }
}

/// Smallest envelope enclosing `geometry`; `None` when it is empty.
pub fn bounding_box(geometry: &GeometryCollection<f64>) -> Option<Envelope> {
    geometry.bounding_rect().map(envelope_from_rect)
}

/// Envelope of an optional geometry.
pub fn bounding_box_opt(geometry: Option<&GeometryCollection<f64>>) -> Option<Envelope> {
    geometry.and_then(bounding_box)
}

fn union(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

/// Smallest envelope enclosing the own geometry of every message.
///
/// Messages without geometry are ignored; `None` when none has any.
pub fn bounding_box_for_messages(messages: &[Message]) -> Option<Envelope> {
    messages
        .iter()
        .filter_map(|m| m.geometry.as_ref())
        .filter_map(BoundingRect::bounding_rect)
        .reduce(union)
        .map(envelope_from_rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon, Geometry};
    use navwarn_models::MessageBuilder;

    fn collection(geoms: Vec<Geometry<f64>>) -> GeometryCollection<f64> {
        GeometryCollection::new_from(geoms)
    }

    #[test]
    fn envelope_corners_are_lat_lon() {
        let g = collection(vec![
            Geometry::Point(point!(x: 10.0, y: 55.0)),
            Geometry::Point(point!(x: 12.0, y: 57.5)),
        ]);
        let env = bounding_box(&g).unwrap();
        assert_eq!(env.lower, Position { lat: 55.0, lon: 10.0 });
        assert_eq!(env.upper, Position { lat: 57.5, lon: 12.0 });
    }

    #[test]
    fn envelope_covers_mixed_geometry() {
        let g = collection(vec![
            Geometry::LineString(line_string![(x: 9.0, y: 56.0), (x: 9.5, y: 56.5)]),
            Geometry::Polygon(polygon![
                (x: 11.0, y: 54.0),
                (x: 12.0, y: 54.0),
                (x: 12.0, y: 55.0),
                (x: 11.0, y: 54.0),
            ]),
        ]);
        let env = bounding_box(&g).unwrap();
        assert_eq!(env.lower, Position { lat: 54.0, lon: 9.0 });
        assert_eq!(env.upper, Position { lat: 56.5, lon: 12.0 });
    }

    #[test]
    fn empty_collection_has_no_envelope() {
        assert!(bounding_box(&collection(vec![])).is_none());
        assert!(bounding_box_opt(None).is_none());
    }

    #[test]
    fn messages_envelope_combines_own_geometry() {
        let a = MessageBuilder::navigational_warning(1)
            .geometry(collection(vec![Geometry::Point(point!(x: 10.0, y: 55.0))]))
            .build()
            .unwrap();
        let b = MessageBuilder::navigational_warning(2)
            .geometry(collection(vec![Geometry::Point(point!(x: -3.0, y: 60.0))]))
            .build()
            .unwrap();
        let c = MessageBuilder::navigational_warning(3).build().unwrap();

        let env = bounding_box_for_messages(&[a, b, c]).unwrap();
        assert_eq!(env.lower, Position { lat: 55.0, lon: -3.0 });
        assert_eq!(env.upper, Position { lat: 60.0, lon: 10.0 });
    }

    #[test]
    fn messages_without_geometry_have_no_envelope() {
        let m = MessageBuilder::navigational_warning(1).build().unwrap();
        assert!(bounding_box_for_messages(&[m]).is_none());
        assert!(bounding_box_for_messages(&[]).is_none());
    }
}
