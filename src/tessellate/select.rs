//! Pattern selectors: choose the pattern applied at each recursion step.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Polygon;

use super::{NoiseField, Pattern, TessellationStack};

/// Centroid coordinates are divided by this before sampling noise.
pub const NOISE_SCALE: f64 = 2048.0;

/// Chooses one pattern from a stack for a polygon at a given depth.
pub trait PatternSelector {
    fn select(&self, stack: &TessellationStack, polygon: &Polygon, depth: u32) -> Result<Pattern>;
}

impl<F> PatternSelector for F
where
    F: Fn(&TessellationStack, &Polygon, u32) -> Result<Pattern>,
{
    fn select(&self, stack: &TessellationStack, polygon: &Polygon, depth: u32) -> Result<Pattern> {
        self(stack, polygon, depth)
    }
}

/// Picks by noise sampled at the polygon's centroid and depth.
///
/// Nearby polygons tend to pick the same pattern; the depth axis varies
/// the choice between recursion levels.
#[derive(Debug, Clone)]
pub struct NoiseSelector<N> {
    noise: N,
}

impl<N: NoiseField> NoiseSelector<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    /// Noise remapped to [0, 1] for a polygon at `depth`.
    pub fn value(&self, polygon: &Polygon, depth: u32) -> f64 {
        let c = polygon.centroid();
        let n = self
            .noise
            .noise3(c.x / NOISE_SCALE, c.y / NOISE_SCALE, depth as f64);
        (n * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

impl<N: NoiseField> PatternSelector for NoiseSelector<N> {
    fn select(&self, stack: &TessellationStack, polygon: &Polygon, depth: u32) -> Result<Pattern> {
        let value = self.value(polygon, depth);
        stack.pick((value * stack.len() as f64).floor() as usize)
    }
}

/// Picks `stack[depth % len]`, ignoring position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthCyclicSelector;

impl PatternSelector for DepthCyclicSelector {
    fn select(&self, stack: &TessellationStack, _polygon: &Polygon, depth: u32) -> Result<Pattern> {
        let len = stack.len().max(1);
        stack.pick(depth as usize % len)
    }
}

/// Selector strategy named in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    #[default]
    Noise,
    Depth,
}
