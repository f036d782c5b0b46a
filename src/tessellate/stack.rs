//! The ordered stack of patterns a selector chooses from.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, TessError};

use super::Pattern;

/// An ordered, indexable sequence of patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TessellationStack {
    patterns: Vec<Pattern>,
}

impl TessellationStack {
    /// Stack size used by the default configuration.
    pub const REFERENCE_SIZE: usize = 4;

    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// `len` patterns drawn with replacement from [`Pattern::ALL`].
    ///
    /// The same seed always yields the same stack.
    pub fn random(seed: u64, len: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let patterns = (0..len)
            .filter_map(|_| Pattern::ALL.choose(&mut rng).copied())
            .collect();
        Self::new(patterns)
    }

    pub fn get(&self, index: usize) -> Option<Pattern> {
        self.patterns.get(index).copied()
    }

    /// Replace the pattern at `index`.
    pub fn set(&mut self, index: usize, pattern: Pattern) -> Result<()> {
        let len = self.patterns.len();
        let slot = self
            .patterns
            .get_mut(index)
            .ok_or(TessError::StackIndex { index, len })?;
        *slot = pattern;
        Ok(())
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern at `index`, failing on an empty stack and clamping past the end.
    pub(crate) fn pick(&self, index: usize) -> Result<Pattern> {
        if self.patterns.is_empty() {
            return Err(TessError::EmptyPatternStack);
        }
        Ok(self.patterns[index.min(self.patterns.len() - 1)])
    }
}

impl Default for TessellationStack {
    fn default() -> Self {
        Self::new(vec![
            Pattern::RimTris,
            Pattern::TriFan,
            Pattern::QuadFan,
            Pattern::Bisect,
        ])
    }
}

impl From<Vec<Pattern>> for TessellationStack {
    fn from(patterns: Vec<Pattern>) -> Self {
        Self::new(patterns)
    }
}
