//! Points, polygons and tinted leaf polygons.

use crate::error::{Result, TessError};

/// Shoelace areas at or below this are treated as degenerate.
const AREA_EPSILON: f64 = 1e-12;

/// A point in image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other` (0.0 = self, 1.0 = other).
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A planar polygon with at least three vertices.
///
/// Vertex order is the winding order. Area and centroid ignore winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon, rejecting fewer than three vertices.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(TessError::InvalidPolygon {
                vertices: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Create a triangle.
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Self {
            points: vec![a, b, c],
        }
    }

    /// Build a polygon from points produced by a split rule, which always
    /// emits at least three.
    pub(crate) fn from_split(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 3, "split produced {} points", points.len());
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_triangle(&self) -> bool {
        self.points.len() == 3
    }

    /// Iterate edges as `(start, end)` pairs, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed shoelace area (positive for counter-clockwise in a y-up frame).
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid, falling back to the vertex mean when the
    /// polygon has no area.
    pub fn centroid(&self) -> Point {
        let area = self.signed_area();
        if area.abs() <= AREA_EPSILON {
            return self.vertex_mean();
        }

        let (mut cx, mut cy) = (0.0, 0.0);
        for (a, b) in self.edges() {
            let cross = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        let k = 1.0 / (6.0 * area);
        Point::new(cx * k, cy * k)
    }

    fn vertex_mean(&self) -> Point {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }
}

/// Attributes attached to a leaf polygon by the tint stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    /// Fill colour, hex encoded (`#RRGGBB`).
    pub fill: Option<String>,
}

impl Attributes {
    pub fn with_fill(fill: impl Into<String>) -> Self {
        Self {
            fill: Some(fill.into()),
        }
    }
}

/// A leaf polygon together with its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct TintedPolygon {
    pub polygon: Polygon,
    pub attribs: Attributes,
}

impl TintedPolygon {
    pub fn new(polygon: Polygon, attribs: Attributes) -> Self {
        Self { polygon, attribs }
    }

    pub fn points(&self) -> &[Point] {
        self.polygon.points()
    }

    pub fn fill(&self) -> Option<&str> {
        self.attribs.fill.as_deref()
    }
}
