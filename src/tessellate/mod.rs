//! Tessellation patterns, the pattern stack and the selectors choosing
//! between them.

mod noise;
mod pattern;
mod select;
mod stack;

pub use noise::{GradientNoise, NoiseField};
pub use pattern::Pattern;
pub use select::{DepthCyclicSelector, NoiseSelector, PatternSelector, SelectorKind, NOISE_SCALE};
pub use stack::TessellationStack;
