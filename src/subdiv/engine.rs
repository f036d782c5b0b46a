//! The recursive subdivision engine.

use crate::error::{Result, TessError};
use crate::geometry::Polygon;
use crate::tessellate::{PatternSelector, TessellationStack};

use super::DepthDecision;

/// Outcome of a subdivision pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubdivisionReport {
    /// Leaf polygons, in depth-first order per base polygon.
    pub leaves: Vec<Polygon>,
    /// Number of polygons that were split.
    pub splits: usize,
    /// Deepest depth any leaf reached.
    pub deepest: u32,
}

/// Recursively refine `polygons`, returning the leaves.
///
/// A polygon at depth `d` is split while `d < decision(polygon) * max_depth`,
/// using the pattern the selector picks from `stack`. Each base polygon is
/// refined independently.
///
/// # Errors
///
/// - `InvalidDecisionValue` if the decision returns a value outside [0, 1].
///   The decision is only consulted while a split is still possible
///   (`d < max_depth`), so polygons at the bound are never validated and
///   `max_depth = 0` never reports it.
/// - `EmptyPatternStack` if a split is needed and `stack` is empty
pub fn subdivide<S, D>(
    polygons: &[Polygon],
    stack: &TessellationStack,
    selector: &S,
    decision: &D,
    max_depth: u32,
) -> Result<Vec<Polygon>>
where
    S: PatternSelector + ?Sized,
    D: DepthDecision + ?Sized,
{
    subdivide_with_report(polygons, stack, selector, decision, max_depth).map(|r| r.leaves)
}

/// Like [`subdivide`], also counting splits and the deepest level reached.
pub fn subdivide_with_report<S, D>(
    polygons: &[Polygon],
    stack: &TessellationStack,
    selector: &S,
    decision: &D,
    max_depth: u32,
) -> Result<SubdivisionReport>
where
    S: PatternSelector + ?Sized,
    D: DepthDecision + ?Sized,
{
    let mut pass = Pass {
        stack,
        selector,
        decision,
        max_depth,
        report: SubdivisionReport {
            leaves: Vec::with_capacity(polygons.len()),
            ..Default::default()
        },
    };

    for polygon in polygons {
        pass.refine(polygon.clone(), 0)?;
    }

    Ok(pass.report)
}

struct Pass<'a, S: ?Sized, D: ?Sized> {
    stack: &'a TessellationStack,
    selector: &'a S,
    decision: &'a D,
    max_depth: u32,
    report: SubdivisionReport,
}

impl<S, D> Pass<'_, S, D>
where
    S: PatternSelector + ?Sized,
    D: DepthDecision + ?Sized,
{
    fn refine(&mut self, polygon: Polygon, depth: u32) -> Result<()> {
        if !self.should_split(&polygon, depth)? {
            self.report.deepest = self.report.deepest.max(depth);
            self.report.leaves.push(polygon);
            return Ok(());
        }

        let pattern = self.selector.select(self.stack, &polygon, depth)?;
        self.report.splits += 1;

        for child in pattern.apply(&polygon) {
            self.refine(child, depth + 1)?;
        }
        Ok(())
    }

    fn should_split(&self, polygon: &Polygon, depth: u32) -> Result<bool> {
        // No intensity can split past the bound
        if depth >= self.max_depth {
            return Ok(false);
        }

        let intensity = self.decision.intensity(polygon);
        if !(0.0..=1.0).contains(&intensity) {
            return Err(TessError::InvalidDecisionValue { value: intensity });
        }

        Ok((depth as f64) < intensity * self.max_depth as f64)
    }
}
