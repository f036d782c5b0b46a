//! End-to-end mosaic construction.
//!
//! Base grid -> subdivision -> tint -> triangulation, all driven by one
//! sampler and one noise field per pass.

use crate::error::{Result, TessError};
use crate::geometry::{normalize_to_triangles, triangle_grid, TintedPolygon};
use crate::sampler::Sampler;
use crate::subdiv::{
    subdivide_with_report, tint_all, ConstantDecision, DecisionKind, DepthDecision,
    LuminosityDecision, TintOptions,
};
use crate::tessellate::{
    DepthCyclicSelector, GradientNoise, NoiseSelector, PatternSelector, SelectorKind,
    TessellationStack,
};

/// Settings for one mosaic pass.
#[derive(Debug, Clone)]
pub struct MosaicOptions {
    /// Triangle columns in the base grid.
    pub grid_density: u32,
    pub max_depth: u32,
    pub decision: DecisionKind,
    /// Intensity used by the constant decision.
    pub intensity: f64,
    /// Refine dark regions instead of bright ones.
    pub invert: bool,
    pub selector: SelectorKind,
    /// Seed of the noise field used by the noise selector.
    pub seed: u64,
    pub stack: TessellationStack,
    /// Replace `stack` with one drawn from `seed`, keeping its length.
    pub random_stack: bool,
    pub tint: TintOptions,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            grid_density: 6,
            max_depth: 3,
            decision: DecisionKind::Luminosity,
            intensity: 0.5,
            invert: false,
            selector: SelectorKind::Noise,
            seed: 0,
            stack: TessellationStack::default(),
            random_stack: false,
            tint: TintOptions::default(),
        }
    }
}

impl MosaicOptions {
    /// The stack the pass will use.
    pub fn resolved_stack(&self) -> TessellationStack {
        if self.random_stack {
            let len = match self.stack.len() {
                0 => TessellationStack::REFERENCE_SIZE,
                n => n,
            };
            TessellationStack::random(self.seed, len)
        } else {
            self.stack.clone()
        }
    }
}

/// A finished mosaic: tinted triangles plus pass statistics.
#[derive(Debug, Clone)]
pub struct Mosaic {
    pub width: u32,
    pub height: u32,
    pub triangles: Vec<TintedPolygon>,
    /// Polygons in the base grid.
    pub base_count: usize,
    /// Leaves before triangulation.
    pub leaf_count: usize,
    pub splits: usize,
    pub deepest: u32,
}

/// Build a mosaic from `sampler`.
///
/// # Errors
///
/// Fails with `SamplerUnavailable` before doing any work when the sampler
/// is not ready, and propagates grid, decision and selector errors.
pub fn build_mosaic<S: Sampler + ?Sized>(sampler: &S, options: &MosaicOptions) -> Result<Mosaic> {
    if !sampler.is_ready() {
        return Err(TessError::SamplerUnavailable);
    }

    let (width, height) = (sampler.width(), sampler.height());
    let stack = options.resolved_stack();
    let base = triangle_grid(width as f64, height as f64, options.grid_density)?;

    let decision: Box<dyn DepthDecision + '_> = match options.decision {
        DecisionKind::Luminosity => Box::new(LuminosityDecision::new(sampler, options.invert)),
        DecisionKind::Constant => Box::new(ConstantDecision(options.intensity)),
    };

    // One noise field for the whole pass keeps neighbouring picks coherent
    let selector: Box<dyn PatternSelector> = match options.selector {
        SelectorKind::Noise => Box::new(NoiseSelector::new(GradientNoise::new(options.seed))),
        SelectorKind::Depth => Box::new(DepthCyclicSelector),
    };

    let report = subdivide_with_report(
        &base,
        &stack,
        selector.as_ref(),
        decision.as_ref(),
        options.max_depth,
    )?;
    let leaf_count = report.leaves.len();

    let tinted = tint_all(report.leaves, sampler, &options.tint);
    let triangles = normalize_to_triangles(tinted);

    Ok(Mosaic {
        width,
        height,
        triangles,
        base_count: base.len(),
        leaf_count,
        splits: report.splits,
        deepest: report.deepest,
    })
}
