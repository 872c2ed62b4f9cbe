//! Conversion of model geometry into S-100 point, curve and surface
//! elements.
//!
//! Multi-geometries and nested collections are flattened element by
//! element, preserving input order. Every produced element takes the next
//! id from the caller's [`GeometryIdSequence`]. `Line`, `Rect` and
//! `Triangle` have no S-100 counterpart and are rejected.

use geo::{Geometry, GeometryCollection, LineString, Point, Polygon};

use crate::dataset::{CurveGeometry, PointGeometry, Position, S100Geometry, SurfaceGeometry};
use crate::error::MappingError;
use crate::ids::GeometryIdSequence;

fn positions(line: &LineString<f64>) -> Vec<Position> {
    line.coords().copied().map(Position::from_coord).collect()
}

fn point(p: &Point<f64>, id: String) -> S100Geometry {
    S100Geometry::Point(PointGeometry {
        id,
        position: Position::from_coord(p.0),
    })
}

fn curve(line: &LineString<f64>, id: String) -> S100Geometry {
    S100Geometry::Curve(CurveGeometry {
        id,
        positions: positions(line),
    })
}

fn surface(polygon: &Polygon<f64>, id: String) -> S100Geometry {
    S100Geometry::Surface(SurfaceGeometry {
        id,
        exterior: positions(polygon.exterior()),
        interiors: polygon.interiors().iter().map(positions).collect(),
    })
}

fn unsupported(part_id: &str, kind: &str) -> MappingError {
    MappingError::UnsupportedGeometry {
        part_id: part_id.to_string(),
        kind: kind.to_string(),
    }
}

/// Converts the geometry of one part.
pub struct GeometryConverter<'a> {
    part_id: &'a str,
    ids: &'a mut GeometryIdSequence,
}

impl<'a> GeometryConverter<'a> {
    /// Converter for the part `part_id`, numbering from `ids`.
    pub fn new(part_id: &'a str, ids: &'a mut GeometryIdSequence) -> Self {
        Self { part_id, ids }
    }

    /// Convert every element of `collection`.
    ///
    /// # Errors
    ///
    /// [`MappingError::UnsupportedGeometry`] for `Line`, `Rect` or
    /// `Triangle` elements.
    pub fn convert(
        mut self,
        collection: &GeometryCollection<f64>,
    ) -> Result<Vec<S100Geometry>, MappingError> {
        let mut out = Vec::new();
        for geometry in &collection.0 {
            self.convert_into(geometry, &mut out)?;
        }
        Ok(out)
    }

    fn next_id(&mut self) -> String {
        self.ids.next_id(self.part_id)
    }

    fn convert_into(
        &mut self,
        geometry: &Geometry<f64>,
        out: &mut Vec<S100Geometry>,
    ) -> Result<(), MappingError> {
        match geometry {
            Geometry::Point(p) => out.push(point(p, self.next_id())),
            Geometry::LineString(line) => out.push(curve(line, self.next_id())),
            Geometry::Polygon(polygon) => out.push(surface(polygon, self.next_id())),
            Geometry::MultiPoint(points) => {
                for p in &points.0 {
                    out.push(point(p, self.next_id()));
                }
            }
            Geometry::MultiLineString(lines) => {
                for line in &lines.0 {
                    out.push(curve(line, self.next_id()));
                }
            }
            Geometry::MultiPolygon(polygons) => {
                for polygon in &polygons.0 {
                    out.push(surface(polygon, self.next_id()));
                }
            }
            Geometry::GeometryCollection(nested) => {
                for g in &nested.0 {
                    self.convert_into(g, out)?;
                }
            }
            Geometry::Line(_) => return Err(unsupported(self.part_id, "Line")),
            Geometry::Rect(_) => return Err(unsupported(self.part_id, "Rect")),
            Geometry::Triangle(_) => return Err(unsupported(self.part_id, "Triangle")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon, Coord, MultiPoint, Rect};

    fn convert(
        geoms: Vec<Geometry<f64>>,
        ids: &mut GeometryIdSequence,
    ) -> Result<Vec<S100Geometry>, MappingError> {
        GeometryConverter::new("p.1", ids).convert(&GeometryCollection::new_from(geoms))
    }

    #[test]
    fn point_is_emitted_lat_lon() {
        let mut ids = GeometryIdSequence::new();
        let out = convert(vec![Geometry::Point(point!(x: 10.6, y: 57.7))], &mut ids).unwrap();
        match &out[0] {
            S100Geometry::Point(p) => {
                assert_eq!(p.id, "G.p.1.1");
                assert_eq!(p.position, Position { lat: 57.7, lon: 10.6 });
            }
            other => panic!("Expected Point, got {:?}", other),
        }
    }

    #[test]
    fn polygon_keeps_holes() {
        let mut ids = GeometryIdSequence::new();
        let poly = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 4.0, y: 0.0),
                (x: 4.0, y: 4.0),
                (x: 0.0, y: 4.0),
                (x: 0.0, y: 0.0),
            ],
            interiors: [
                [
                    (x: 1.0, y: 1.0),
                    (x: 2.0, y: 1.0),
                    (x: 2.0, y: 2.0),
                    (x: 1.0, y: 1.0),
                ],
            ],
        );
        let out = convert(vec![Geometry::Polygon(poly)], &mut ids).unwrap();
        match &out[0] {
            S100Geometry::Surface(s) => {
                assert_eq!(s.exterior.len(), 5);
                assert_eq!(s.interiors.len(), 1);
                assert_eq!(s.interiors[0][1], Position { lat: 1.0, lon: 2.0 });
            }
            other => panic!("Expected Surface, got {:?}", other),
        }
    }

    #[test]
    fn multi_geometries_are_flattened_in_order() {
        let mut ids = GeometryIdSequence::new();
        let multi = MultiPoint::new(vec![point!(x: 1.0, y: 2.0), point!(x: 3.0, y: 4.0)]);
        let nested = GeometryCollection::new_from(vec![Geometry::LineString(
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
        )]);
        let out = convert(
            vec![
                Geometry::MultiPoint(multi),
                Geometry::GeometryCollection(nested),
            ],
            &mut ids,
        )
        .unwrap();

        let ids_out: Vec<_> = out.iter().map(S100Geometry::id).collect();
        assert_eq!(ids_out, vec!["G.p.1.1", "G.p.1.2", "G.p.1.3"]);
        assert!(matches!(out[2], S100Geometry::Curve(_)));
    }

    #[test]
    fn sequence_continues_across_converters() {
        let mut ids = GeometryIdSequence::new();
        convert(vec![Geometry::Point(point!(x: 1.0, y: 1.0))], &mut ids).unwrap();
        let out = GeometryConverter::new("p.2", &mut ids)
            .convert(&GeometryCollection::new_from(vec![Geometry::Point(point!(x: 2.0, y: 2.0))]))
            .unwrap();
        assert_eq!(out[0].id(), "G.p.2.2");
    }

    #[test]
    fn rect_is_rejected() {
        let mut ids = GeometryIdSequence::new();
        let rect = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        let err = convert(vec![Geometry::Rect(rect)], &mut ids).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnsupportedGeometry {
                part_id: "p.1".into(),
                kind: "Rect".into()
            }
        );
    }
}
