//! Project manifest (tessera.yaml) parsing.
//!
//! The manifest holds the mosaic settings: base grid, recursion, pattern
//! stack, selector and tinting. Every field has a default, so an empty file
//! is a valid manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TessError};
use crate::pipeline::MosaicOptions;
use crate::subdiv::{DecisionKind, SampleMode, TintOptions};
use crate::tessellate::{Pattern, SelectorKind, TessellationStack};
use crate::types::Palette;

/// Project manifest loaded from tessera.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Triangle columns in the base grid.
    pub grid_density: u32,

    /// Maximum recursion depth.
    pub max_depth: u32,

    /// Refine dark regions instead of bright ones.
    pub invert: bool,

    /// How recursion depth is decided per polygon.
    pub decision: DecisionKind,

    /// Intensity for the constant decision, in [0, 1].
    pub intensity: f64,

    /// How a pattern is picked from the stack.
    pub selector: SelectorKind,

    /// Seed for the noise selector.
    pub seed: u64,

    /// Patterns, indexed by the selector.
    pub stack: Vec<Pattern>,

    /// Draw the stack from `seed` instead, keeping the listed length.
    pub random_stack: bool,

    /// Hex colours fills are snapped to. Empty means unquantized.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<String>,

    /// Where leaf colours are sampled from.
    pub sample: SampleMode,

    /// Cap on the area-sampling radius in pixels.
    pub max_radius: Option<u32>,
}

impl Default for Manifest {
    fn default() -> Self {
        let options = MosaicOptions::default();
        Self {
            grid_density: options.grid_density,
            max_depth: options.max_depth,
            invert: options.invert,
            decision: options.decision,
            intensity: options.intensity,
            selector: options.selector,
            seed: options.seed,
            stack: options.stack.patterns().to_vec(),
            random_stack: options.random_stack,
            palette: vec![],
            sample: options.tint.mode,
            max_radius: options.tint.max_radius,
        }
    }
}

impl Manifest {
    /// Load manifest from a tessera.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TessError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| TessError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check tessera.yaml syntax".to_string()),
        })
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TessError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Parse the configured palette, if any.
    pub fn palette(&self) -> Result<Option<Palette>> {
        if self.palette.is_empty() {
            return Ok(None);
        }
        Palette::from_hex_list("manifest", &self.palette)
            .map(Some)
            .map_err(|e| TessError::Config {
                message: format!("Invalid palette entry: {}", e),
                help: Some("Palette entries are hex colours like \"#1a1a2e\"".to_string()),
            })
    }

    /// Mosaic options described by this manifest.
    pub fn options(&self) -> MosaicOptions {
        MosaicOptions {
            grid_density: self.grid_density,
            max_depth: self.max_depth,
            decision: self.decision,
            intensity: self.intensity,
            invert: self.invert,
            selector: self.selector,
            seed: self.seed,
            stack: TessellationStack::new(self.stack.clone()),
            random_stack: self.random_stack,
            tint: TintOptions {
                mode: self.sample,
                max_radius: self.max_radius,
                ..TintOptions::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("max_depth: 5").unwrap();

        assert_eq!(manifest.max_depth, 5);
        assert_eq!(manifest.grid_density, 6);
        assert_eq!(manifest.stack.len(), TessellationStack::REFERENCE_SIZE);
        assert!(manifest.palette.is_empty());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
grid_density: 9
max_depth: 4
invert: true
decision: constant
intensity: 0.75
selector: depth
seed: 77
stack:
  - rim-tris
  - bisect
  - inset
palette:
  - "#1a1a2e"
  - "#e94560"
sample: centroid
max_radius: 8
random_stack: true
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.grid_density, 9);
        assert_eq!(manifest.max_depth, 4);
        assert!(manifest.invert);
        assert_eq!(manifest.decision, DecisionKind::Constant);
        assert_eq!(manifest.intensity, 0.75);
        assert_eq!(manifest.selector, SelectorKind::Depth);
        assert_eq!(manifest.seed, 77);
        assert_eq!(
            manifest.stack,
            vec![Pattern::RimTris, Pattern::Bisect, Pattern::Inset]
        );
        assert_eq!(manifest.sample, SampleMode::Centroid);
        assert_eq!(manifest.max_radius, Some(8));
        assert!(manifest.random_stack);
        assert!(manifest.options().random_stack);

        let palette = manifest.palette().unwrap().unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let err = Manifest::parse("stack: [spiral]").unwrap_err();
        assert!(matches!(err, TessError::Parse { .. }));
    }

    #[test]
    fn test_bad_palette_entry() {
        let manifest = Manifest {
            palette: vec!["#zzzzzz".to_string()],
            ..Default::default()
        };
        assert!(matches!(manifest.palette(), Err(TessError::Config { .. })));
    }

    #[test]
    fn test_yaml_round_trip() {
        let manifest = Manifest {
            seed: 5,
            palette: vec!["#000000".to_string()],
            ..Default::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_options_from_manifest() {
        let manifest = Manifest {
            max_radius: None,
            stack: vec![Pattern::TriFan],
            ..Default::default()
        };
        let options = manifest.options();
        assert_eq!(options.tint.max_radius, None);
        assert_eq!(options.stack.patterns(), &[Pattern::TriFan]);
        assert_eq!(options.tint.radius_scale, TintOptions::DEFAULT_RADIUS_SCALE);
    }
}
