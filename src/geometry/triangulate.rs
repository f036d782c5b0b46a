//! Fan triangulation of tinted leaf polygons.

use super::{Polygon, TintedPolygon};

/// Split every polygon with more than three vertices into triangles.
///
/// An n-gon becomes `n - 2` triangles fanned from its first vertex, each
/// carrying a copy of the source attributes. Triangles pass through, and
/// output order follows input order.
pub fn normalize_to_triangles(polygons: Vec<TintedPolygon>) -> Vec<TintedPolygon> {
    let mut out = Vec::with_capacity(polygons.len());

    for tinted in polygons {
        if tinted.polygon.is_triangle() {
            out.push(tinted);
            continue;
        }

        let points = tinted.polygon.points();
        let first = points[0];
        for pair in points[1..].windows(2) {
            out.push(TintedPolygon::new(
                Polygon::triangle(first, pair[0], pair[1]),
                tinted.attribs.clone(),
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Attributes, Point};

    fn pentagon() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.5),
            Point::new(1.0, 3.0),
            Point::new(-1.0, 1.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_pentagon_fans_into_three() {
        let tinted = TintedPolygon::new(pentagon(), Attributes::with_fill("#336699"));
        let tris = normalize_to_triangles(vec![tinted]);

        assert_eq!(tris.len(), 3);
        for tri in &tris {
            assert!(tri.polygon.is_triangle());
            assert_eq!(tri.fill(), Some("#336699"));
            assert_eq!(tri.points()[0], Point::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_fan_preserves_area() {
        let poly = pentagon();
        let area = poly.area();
        let tris = normalize_to_triangles(vec![TintedPolygon::new(poly, Attributes::default())]);
        let total: f64 = tris.iter().map(|t| t.polygon.area()).sum();
        assert!((total - area).abs() < 1e-9);
    }

    #[test]
    fn test_triangles_pass_through_in_order() {
        let a = TintedPolygon::new(
            Polygon::triangle(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)),
            Attributes::with_fill("#000000"),
        );
        let quad = TintedPolygon::new(
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ])
            .unwrap(),
            Attributes::with_fill("#FFFFFF"),
        );

        let out = normalize_to_triangles(vec![a.clone(), quad]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], a);
        assert_eq!(out[1].fill(), Some("#FFFFFF"));
        assert_eq!(out[2].fill(), Some("#FFFFFF"));
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_to_triangles(Vec::new()).is_empty());
    }
}
