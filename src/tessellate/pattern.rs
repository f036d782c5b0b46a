//! Tessellation patterns: pure rules splitting one polygon into children.
//!
//! Every pattern partitions a convex polygon exactly (children cover the
//! parent with no gaps or overlaps) and only produces convex children, so
//! patterns can be chained to any depth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TessError};
use crate::geometry::{Point, Polygon};

/// How far `Inset` pulls the inner polygon towards the centroid.
const INSET_RATIO: f64 = 0.5;

/// A named split rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// One triangle per edge, fanned from the centroid.
    TriFan,
    /// One quad per vertex: centroid, previous edge midpoint, vertex, next
    /// edge midpoint.
    QuadFan,
    /// Two triangles per edge, split at the edge midpoint, fanned from the
    /// centroid.
    EdgeSplit,
    /// One triangle per corner cut at the edge midpoints, plus the inner
    /// midpoint polygon.
    RimTris,
    /// A ring of quads around a copy of the polygon shrunk towards its
    /// centroid, plus that inner polygon.
    Inset,
    /// Two halves: triangles split from their longest edge's midpoint to the
    /// opposite vertex, larger polygons along the diagonal from vertex 0.
    Bisect,
}

impl Pattern {
    /// All patterns, in listing order.
    pub const ALL: [Pattern; 6] = [
        Pattern::TriFan,
        Pattern::QuadFan,
        Pattern::EdgeSplit,
        Pattern::RimTris,
        Pattern::Inset,
        Pattern::Bisect,
    ];

    /// Config/CLI name of the pattern.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::TriFan => "tri-fan",
            Pattern::QuadFan => "quad-fan",
            Pattern::EdgeSplit => "edge-split",
            Pattern::RimTris => "rim-tris",
            Pattern::Inset => "inset",
            Pattern::Bisect => "bisect",
        }
    }

    /// Number of children produced for a polygon with `vertices` vertices.
    pub fn child_count(self, vertices: usize) -> usize {
        match self {
            Pattern::TriFan | Pattern::QuadFan => vertices,
            Pattern::EdgeSplit => vertices * 2,
            Pattern::RimTris | Pattern::Inset => vertices + 1,
            Pattern::Bisect => 2,
        }
    }

    /// Split `polygon` into its children.
    pub fn apply(self, polygon: &Polygon) -> Vec<Polygon> {
        match self {
            Pattern::TriFan => tri_fan(polygon),
            Pattern::QuadFan => quad_fan(polygon),
            Pattern::EdgeSplit => edge_split(polygon),
            Pattern::RimTris => rim_tris(polygon),
            Pattern::Inset => inset(polygon, INSET_RATIO),
            Pattern::Bisect => bisect(polygon),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = TessError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TessError::Parse {
                message: format!("Unknown pattern: {}", s),
                help: Some(format!(
                    "Available patterns: {}",
                    Pattern::ALL.map(Pattern::name).join(", ")
                )),
            })
    }
}

fn midpoints(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    (0..n).map(|i| points[i].midpoint(points[(i + 1) % n])).collect()
}

fn tri_fan(polygon: &Polygon) -> Vec<Polygon> {
    let c = polygon.centroid();
    polygon
        .edges()
        .map(|(a, b)| Polygon::triangle(c, a, b))
        .collect()
}

fn quad_fan(polygon: &Polygon) -> Vec<Polygon> {
    let c = polygon.centroid();
    let points = polygon.points();
    let mids = midpoints(points);
    let n = points.len();

    (0..n)
        .map(|i| {
            let prev = mids[(i + n - 1) % n];
            Polygon::from_split(vec![c, prev, points[i], mids[i]])
        })
        .collect()
}

fn edge_split(polygon: &Polygon) -> Vec<Polygon> {
    let c = polygon.centroid();
    polygon
        .edges()
        .flat_map(|(a, b)| {
            let m = a.midpoint(b);
            [Polygon::triangle(c, a, m), Polygon::triangle(c, m, b)]
        })
        .collect()
}

fn rim_tris(polygon: &Polygon) -> Vec<Polygon> {
    let points = polygon.points();
    let mids = midpoints(points);
    let n = points.len();

    let mut children: Vec<Polygon> = (0..n)
        .map(|i| Polygon::triangle(mids[(i + n - 1) % n], points[i], mids[i]))
        .collect();
    children.push(Polygon::from_split(mids));
    children
}

fn inset(polygon: &Polygon, ratio: f64) -> Vec<Polygon> {
    let c = polygon.centroid();
    let points = polygon.points();
    let inner: Vec<Point> = points.iter().map(|p| p.lerp(c, ratio)).collect();
    let n = points.len();

    let mut children: Vec<Polygon> = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            Polygon::from_split(vec![points[i], points[j], inner[j], inner[i]])
        })
        .collect();
    children.push(Polygon::from_split(inner));
    children
}

fn bisect(polygon: &Polygon) -> Vec<Polygon> {
    let points = polygon.points();
    let n = points.len();

    if n == 3 {
        // Longest edge; the first one wins a tie
        let mut longest = 0;
        let mut longest_len = f64::MIN;
        for i in 0..3 {
            let len = points[i].distance_squared(points[(i + 1) % 3]);
            if len > longest_len {
                longest = i;
                longest_len = len;
            }
        }

        let a = points[longest];
        let b = points[(longest + 1) % 3];
        let opposite = points[(longest + 2) % 3];
        let m = a.midpoint(b);
        return vec![
            Polygon::triangle(a, m, opposite),
            Polygon::triangle(m, b, opposite),
        ];
    }

    let k = n / 2;
    let first = points[..=k].to_vec();
    let mut second = points[k..].to_vec();
    second.push(points[0]);
    vec![Polygon::from_split(first), Polygon::from_split(second)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn triangle() -> Polygon {
        Polygon::triangle(
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(20.0, 10.0),
        )
    }

    fn hexagon() -> Polygon {
        let points = (0..6)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::PI / 3.0;
                Point::new(50.0 + 20.0 * angle.cos(), 50.0 + 20.0 * angle.sin())
            })
            .collect();
        Polygon::new(points).unwrap()
    }

    fn quad() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(8.0, 1.0),
            Point::new(9.0, 7.0),
            Point::new(-1.0, 5.0),
        ])
        .unwrap()
    }

    fn is_convex(polygon: &Polygon) -> bool {
        let points = polygon.points();
        let n = points.len();
        let mut sign = 0.0;
        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            let c = points[(i + 2) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross.abs() < EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_area_conservation_all_patterns() {
        for parent in [triangle(), quad(), hexagon()] {
            for pattern in Pattern::ALL {
                let children = pattern.apply(&parent);
                let total: f64 = children.iter().map(Polygon::area).sum();
                assert!(
                    (total - parent.area()).abs() < EPSILON * parent.area().max(1.0),
                    "{} lost area on a {}-gon: {} vs {}",
                    pattern,
                    parent.len(),
                    total,
                    parent.area()
                );
            }
        }
    }

    #[test]
    fn test_child_counts_match_apply() {
        for parent in [triangle(), quad(), hexagon()] {
            for pattern in Pattern::ALL {
                assert_eq!(
                    pattern.apply(&parent).len(),
                    pattern.child_count(parent.len()),
                    "{} on a {}-gon",
                    pattern,
                    parent.len()
                );
            }
        }
    }

    #[test]
    fn test_children_stay_convex() {
        for parent in [triangle(), quad(), hexagon()] {
            for pattern in Pattern::ALL {
                for child in pattern.apply(&parent) {
                    assert!(child.len() >= 3);
                    assert!(is_convex(&child), "{} made a concave child", pattern);
                }
            }
        }
    }

    #[test]
    fn test_children_keep_parent_winding() {
        let parent = hexagon();
        let sign = parent.signed_area().signum();
        for pattern in Pattern::ALL {
            for child in pattern.apply(&parent) {
                assert_eq!(child.signed_area().signum(), sign, "{}", pattern);
            }
        }
    }

    #[test]
    fn test_rim_tris_on_triangle_gives_four_equal_children() {
        let parent = triangle();
        let children = Pattern::RimTris.apply(&parent);
        assert_eq!(children.len(), 4);
        for child in &children {
            assert!((child.area() - parent.area() / 4.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_bisect_triangle_splits_longest_edge() {
        let children = Pattern::Bisect.apply(&triangle());
        assert_eq!(children.len(), 2);
        // Longest edge is (0,0)-(40,0); both halves share its midpoint
        assert_eq!(children[0].points()[1], Point::new(20.0, 0.0));
        assert_eq!(children[1].points()[0], Point::new(20.0, 0.0));
    }

    #[test]
    fn test_bisect_pentagon_sizes() {
        let pentagon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.5),
            Point::new(1.0, 3.0),
            Point::new(-1.0, 1.5),
        ])
        .unwrap();
        let children = Pattern::Bisect.apply(&pentagon);
        assert_eq!(children[0].len(), 3);
        assert_eq!(children[1].len(), 4);
    }

    #[test]
    fn test_parse_names() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }
        assert_eq!(" Tri-Fan ".parse::<Pattern>().unwrap(), Pattern::TriFan);
        assert!("spiral".parse::<Pattern>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        for pattern in Pattern::ALL {
            let yaml = serde_yaml::to_string(&pattern).unwrap();
            assert_eq!(yaml.trim(), pattern.name());
        }
    }
}
