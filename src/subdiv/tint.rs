//! Leaf polygon tinting from a sampler.

use serde::{Deserialize, Serialize};

use crate::geometry::{Attributes, Polygon, TintedPolygon};
use crate::sampler::Sampler;
use crate::types::Colour;

/// Where a leaf's colour is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SampleMode {
    /// Average over a circle sized by the polygon's area.
    #[default]
    Area,
    /// The single pixel under the centroid.
    Centroid,
}

/// Tint stage settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintOptions {
    pub mode: SampleMode,
    /// Sampling radius per unit of polygon area.
    pub radius_scale: f64,
    /// Upper bound on the sampling radius, if any.
    pub max_radius: Option<u32>,
}

impl TintOptions {
    pub const DEFAULT_RADIUS_SCALE: f64 = 0.001;
    pub const DEFAULT_MAX_RADIUS: u32 = 16;
}

impl Default for TintOptions {
    fn default() -> Self {
        Self {
            mode: SampleMode::Area,
            radius_scale: Self::DEFAULT_RADIUS_SCALE,
            max_radius: Some(Self::DEFAULT_MAX_RADIUS),
        }
    }
}

/// Sampling radius for a polygon of `area`: `max(floor(area * scale), 1)`,
/// capped at `max_radius`.
pub fn sample_radius(area: f64, options: &TintOptions) -> u32 {
    let radius = (area * options.radius_scale).floor().max(1.0);
    let radius = if radius >= u32::MAX as f64 {
        u32::MAX
    } else {
        radius as u32
    };
    match options.max_radius {
        Some(cap) => radius.min(cap.max(1)),
        None => radius,
    }
}

/// Sample the colour for `polygon`, snapped to the sampler's palette if it
/// has a non-empty one.
pub fn resolve_colour<S: Sampler + ?Sized>(polygon: &Polygon, sampler: &S, options: &TintOptions) -> Colour {
    let centroid = polygon.centroid();
    let sampled = match options.mode {
        SampleMode::Area => {
            sampler.average_colour_circle(centroid, sample_radius(polygon.area(), options))
        }
        SampleMode::Centroid => sampler.colour_at(centroid),
    };

    sampler
        .palette()
        .and_then(|palette| palette.nearest(sampled))
        .unwrap_or(sampled)
}

/// Attach a fill attribute to a leaf polygon.
pub fn tint_polygon<S: Sampler + ?Sized>(polygon: Polygon, sampler: &S, options: &TintOptions) -> TintedPolygon {
    let fill = resolve_colour(&polygon, sampler, options).to_hex_rgb();
    TintedPolygon::new(polygon, Attributes::with_fill(fill))
}

/// Tint every leaf, preserving order.
pub fn tint_all<S: Sampler + ?Sized>(
    polygons: Vec<Polygon>,
    sampler: &S,
    options: &TintOptions,
) -> Vec<TintedPolygon> {
    polygons
        .into_iter()
        .map(|p| tint_polygon(p, sampler, options))
        .collect()
}
