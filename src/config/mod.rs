//! Configuration discovery.
//!
//! Settings come from an explicit manifest path, a `tessera.yaml` in the
//! working directory, or built-in defaults, in that order.

mod manifest;

use std::path::{Path, PathBuf};

pub use manifest::Manifest;

use crate::error::Result;

/// The manifest filename looked up in the project directory.
pub const MANIFEST_FILENAME: &str = "tessera.yaml";

/// A manifest together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    /// `None` when defaults were used.
    pub path: Option<PathBuf>,
}

/// Resolve the manifest for a run.
///
/// An explicit path must exist; otherwise `dir/tessera.yaml` is used when
/// present, falling back to defaults.
pub fn load_manifest(explicit: Option<&Path>, dir: &Path) -> Result<LoadedManifest> {
    if let Some(path) = explicit {
        return Ok(LoadedManifest {
            manifest: Manifest::load(path)?,
            path: Some(path.to_path_buf()),
        });
    }

    let candidate = dir.join(MANIFEST_FILENAME);
    if candidate.is_file() {
        return Ok(LoadedManifest {
            manifest: Manifest::load(&candidate)?,
            path: Some(candidate),
        });
    }

    Ok(LoadedManifest {
        manifest: Manifest::default(),
        path: None,
    })
}
