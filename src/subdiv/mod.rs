//! Content-adaptive subdivision: depth decisions, the recursive engine and
//! leaf tinting.

mod decision;
mod engine;
mod tint;

pub use decision::{luminosity_response, ConstantDecision, DecisionKind, DepthDecision, LuminosityDecision};
pub use engine::{subdivide, subdivide_with_report, SubdivisionReport};
pub use tint::{resolve_colour, sample_radius, tint_all, tint_polygon, SampleMode, TintOptions};
