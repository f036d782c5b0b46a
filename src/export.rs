//! Serializable mosaic output for external renderers.
//!
//! Two shapes are produced: a document listing each triangle with its fill,
//! and flat position/colour buffers ready to upload as vertex attributes.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TessError};
use crate::geometry::TintedPolygon;
use crate::pipeline::Mosaic;
use crate::types::Colour;

/// One output triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleRecord {
    pub points: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl From<&TintedPolygon> for TriangleRecord {
    fn from(tinted: &TintedPolygon) -> Self {
        Self {
            points: tinted.points().iter().map(|p| [p.x, p.y]).collect(),
            fill: tinted.attribs.fill.clone(),
        }
    }
}

/// Flat vertex buffers: `xyz` positions (z = 0) and per-vertex `rgb` in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub colours: Vec<f32>,
}

impl MeshBuffers {
    /// Flatten polygons, repeating each polygon's fill for all its vertices.
    ///
    /// Missing or unparseable fills become magenta.
    pub fn from_polygons(polygons: &[TintedPolygon]) -> Self {
        let vertices: usize = polygons.iter().map(|p| p.points().len()).sum();
        let mut buffers = Self {
            positions: Vec::with_capacity(vertices * 3),
            colours: Vec::with_capacity(vertices * 3),
        };

        for tinted in polygons {
            let colour = tinted
                .fill()
                .and_then(|hex| Colour::from_hex(hex).ok())
                .unwrap_or(Colour::MAGENTA)
                .to_unit_rgb();

            for p in tinted.points() {
                buffers
                    .positions
                    .extend_from_slice(&[p.x as f32, p.y as f32, 0.0]);
                buffers.colours.extend_from_slice(&colour);
            }
        }

        buffers
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// The JSON document written by `tessera build`.
#[derive(Debug, Clone, Serialize)]
pub struct MosaicDocument {
    pub width: u32,
    pub height: u32,
    pub triangles: Vec<TriangleRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffers: Option<MeshBuffers>,
}

impl MosaicDocument {
    pub fn new(mosaic: &Mosaic, include_buffers: bool) -> Self {
        Self {
            width: mosaic.width,
            height: mosaic.height,
            triangles: mosaic.triangles.iter().map(TriangleRecord::from).collect(),
            buffers: include_buffers.then(|| MeshBuffers::from_polygons(&mosaic.triangles)),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TessError::Build {
            message: format!("Failed to serialize mosaic: {}", e),
            help: None,
        })
    }

    /// Write the document as JSON to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?).map_err(|e| TessError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write mosaic: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Attributes, Point, Polygon};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn tri(fill: Option<&str>) -> TintedPolygon {
        TintedPolygon::new(
            Polygon::triangle(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)),
            Attributes {
                fill: fill.map(str::to_string),
            },
        )
    }

    fn mosaic(triangles: Vec<TintedPolygon>) -> Mosaic {
        Mosaic {
            width: 4,
            height: 2,
            leaf_count: triangles.len(),
            base_count: triangles.len(),
            splits: 0,
            deepest: 0,
            triangles,
        }
    }

    #[test]
    fn test_buffers_repeat_fill_per_vertex() {
        let buffers = MeshBuffers::from_polygons(&[tri(Some("#FF0000"))]);
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(
            buffers.positions,
            vec![0.0_f32, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]
        );
        assert_eq!(buffers.colours, [1.0_f32, 0.0, 0.0].repeat(3));
    }

    #[test]
    fn test_buffers_missing_fill_is_magenta() {
        let buffers = MeshBuffers::from_polygons(&[tri(None), tri(Some("bogus"))]);
        assert_eq!(buffers.colours, [1.0_f32, 0.0, 1.0].repeat(6));
    }

    #[test]
    fn test_document_json() {
        let doc = MosaicDocument::new(&mosaic(vec![tri(Some("#336699"))]), false);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(value["width"], 4);
        assert_eq!(value["triangles"][0]["fill"], "#336699");
        assert_eq!(value["triangles"][0]["points"][1][0], 2.0);
        assert!(value.get("buffers").is_none());
    }

    #[test]
    fn test_document_with_buffers() {
        let doc = MosaicDocument::new(&mosaic(vec![tri(Some("#000000"))]), true);
        let buffers = doc.buffers.as_ref().unwrap();
        assert_eq!(buffers.vertex_count(), 3);
    }

    #[test]
    fn test_write_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mosaic.json");
        MosaicDocument::new(&mosaic(vec![tri(Some("#000000"))]), false)
            .write(&path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"#000000\""));
    }
}
