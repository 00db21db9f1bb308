//! Completed polygons and the document that owns them.

use crate::geometry::polygon_area;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a polygon.
pub type PolygonId = Uuid;

/// Errors from the document JSON round-trip.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("JSON serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("JSON parsing failed: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A closed polygon with its cached enclosed area.
///
/// `area` is derived from `points` and is kept in sync by every mutation
/// path; it is never serialized, only recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    /// Unique polygon identifier.
    pub id: PolygonId,
    /// Vertices in drawing order. Always at least 3 once constructed.
    points: Vec<Point>,
    /// Cached unsigned area in coordinate-space units.
    #[serde(skip)]
    area: f64,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list, computing its area.
    pub fn new(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 vertices");
        let area = polygon_area(&points);
        Self {
            id: Uuid::new_v4(),
            points,
            area,
        }
    }

    /// The vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices. Never true for a constructed
    /// polygon; exists for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The cached unsigned area.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Get a single vertex, if the index is in range.
    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Overwrite a vertex in place and recompute the cached area.
    ///
    /// Out-of-range indices are ignored. Returns true if a vertex moved.
    pub fn set_vertex(&mut self, index: usize, position: Point) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = position;
                self.area = polygon_area(&self.points);
                true
            }
            None => false,
        }
    }

    fn recompute_area(&mut self) {
        self.area = polygon_area(&self.points);
    }
}

/// The ordered collection of completed polygons.
///
/// Insertion order is creation order. Append-only: no polygon is ever
/// removed, and vertex edits go through [`PolygonStore::set_vertex`] so the
/// cached areas stay exact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolygonStore {
    polygons: Vec<Polygon>,
}

impl PolygonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized polygon.
    pub fn push(&mut self, polygon: Polygon) {
        log::debug!(
            "polygon finalized: {} vertices, area {:.3}",
            polygon.len(),
            polygon.area()
        );
        self.polygons.push(polygon);
    }

    /// Polygons in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }

    /// Get a polygon by position in creation order.
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Number of stored polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the store holds no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Move one vertex of one stored polygon and recompute that polygon's
    /// area in the same step. Out-of-range owner or vertex indices are
    /// ignored. Returns true if a vertex moved.
    pub fn set_vertex(&mut self, polygon: usize, vertex: usize, position: Point) -> bool {
        match self.polygons.get_mut(polygon) {
            Some(poly) => poly.set_vertex(vertex, position),
            None => false,
        }
    }

    /// Serialize the store to pretty JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }

    /// Deserialize a store from JSON, recomputing every cached area rather
    /// than trusting the input.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let mut store: Self = serde_json::from_str(json).map_err(DocumentError::Parse)?;
        for polygon in &mut store.polygons {
            polygon.recompute_area();
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_polygon_caches_area_on_creation() {
        let poly = Polygon::new(unit_square());
        assert!((poly.area() - 16.0).abs() < f64::EPSILON);
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn test_set_vertex_recomputes_area() {
        let mut poly = Polygon::new(unit_square());
        // Stretch the square into a 8x4 rectangle.
        assert!(poly.set_vertex(1, Point::new(8.0, 0.0)));
        assert!(poly.set_vertex(2, Point::new(8.0, 4.0)));
        assert!((poly.area() - 32.0).abs() < f64::EPSILON);
        assert!((poly.area() - polygon_area(poly.points())).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_vertex_out_of_range_is_noop() {
        let mut poly = Polygon::new(unit_square());
        let before = poly.area();
        assert!(!poly.set_vertex(17, Point::new(100.0, 100.0)));
        assert!((poly.area() - before).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_preserves_insertion_order() {
        let mut store = PolygonStore::new();
        let first = Polygon::new(unit_square());
        let first_id = first.id;
        store.push(first);
        store.push(Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).map(|p| p.id), Some(first_id));
        assert!((store.get(1).map(|p| p.area()).unwrap() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_set_vertex_keeps_area_exact() {
        let mut store = PolygonStore::new();
        store.push(Polygon::new(unit_square()));

        assert!(store.set_vertex(0, 2, Point::new(4.0, 8.0)));
        let poly = store.get(0).unwrap();
        assert!((poly.area() - polygon_area(poly.points())).abs() < f64::EPSILON);

        // Bad indices leave the store untouched.
        assert!(!store.set_vertex(5, 0, Point::ZERO));
        assert!(!store.set_vertex(0, 99, Point::ZERO));
    }

    #[test]
    fn test_json_round_trip_recomputes_area() {
        let mut store = PolygonStore::new();
        store.push(Polygon::new(unit_square()));

        let json = store.to_json().unwrap();
        let restored = PolygonStore::from_json(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert!((restored.get(0).unwrap().area() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            PolygonStore::from_json("not json"),
            Err(DocumentError::Parse(_))
        ));
    }
}
