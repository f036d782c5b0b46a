//! Planar geometry: polygons, base grids and triangulation.

mod grid;
mod polygon;
mod triangulate;

pub use grid::triangle_grid;
pub use polygon::{Attributes, Point, Polygon, TintedPolygon};
pub use triangulate::normalize_to_triangles;
