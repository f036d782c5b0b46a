//! tessera - Content-adaptive triangle mosaics
//!
//! A library for recursively subdividing a polygon grid according to an
//! image, then tinting and triangulating the leaves into a flat mosaic.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod output;
pub mod pipeline;
pub mod sampler;
pub mod subdiv;
pub mod tessellate;
pub mod types;

pub use config::{load_manifest, LoadedManifest, Manifest, MANIFEST_FILENAME};
pub use error::{Result, TessError};
pub use export::{MeshBuffers, MosaicDocument, TriangleRecord};
pub use geometry::{normalize_to_triangles, triangle_grid, Attributes, Point, Polygon, TintedPolygon};
pub use pipeline::{build_mosaic, Mosaic, MosaicOptions};
pub use sampler::{ImageSampler, Sampler};
pub use subdiv::{
    subdivide, subdivide_with_report, tint_all, tint_polygon, ConstantDecision, DecisionKind,
    DepthDecision, LuminosityDecision, SampleMode, SubdivisionReport, TintOptions,
};
pub use tessellate::{
    DepthCyclicSelector, GradientNoise, NoiseField, NoiseSelector, Pattern, PatternSelector,
    SelectorKind, TessellationStack,
};
pub use types::{Colour, Palette};
