//! Init command implementation.
//!
//! Writes a `tessera.yaml` holding the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{Result, TessError};
use crate::output::{display_path, plural, Printer};

/// Initialize a tessera project by writing a default tessera.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing tessera.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(TessError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::default();
    let yaml = manifest.to_yaml()?;

    fs::write(&manifest_path, &yaml).map_err(|e| TessError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status(
        "Created",
        &format!(
            "{} {}",
            display_path(&manifest_path),
            printer.dim(&format!(
                "(depth {}, {} in stack)",
                manifest.max_depth,
                plural(manifest.stack.len(), "pattern", "patterns")
            ))
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join("tessera.yaml")).unwrap();
        assert!(content.contains("max_depth: 3"));
        assert!(content.contains("rim-tris"));
        assert_eq!(Manifest::parse(&content).unwrap(), Manifest::default());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tessera.yaml"), "max_depth: 1").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        let result = run(args, &Printer::plain());
        assert!(matches!(result, Err(TessError::Build { .. })));

        let content = fs::read_to_string(dir.path().join("tessera.yaml")).unwrap();
        assert_eq!(content, "max_depth: 1");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tessera.yaml"), "max_depth: 1").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join("tessera.yaml")).unwrap();
        assert!(content.contains("max_depth: 3"));
    }
}
