//! Build command implementation.
//!
//! Samples an image, builds the mosaic and writes it as JSON.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::load_manifest;
use crate::error::Result;
use crate::export::MosaicDocument;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{build_mosaic, MosaicOptions};
use crate::sampler::{ImageSampler, Sampler};
use crate::tessellate::SelectorKind;
use crate::types::Palette;

/// Build a triangle mosaic from an image
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Image to sample
    #[arg(required = true)]
    pub image: PathBuf,

    /// Manifest to read settings from (default: ./tessera.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Maximum recursion depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Triangle columns in the base grid
    #[arg(long)]
    pub density: Option<u32>,

    /// Refine dark regions instead of bright ones
    #[arg(long, overrides_with = "no_invert")]
    pub invert: bool,

    /// Refine bright regions, overriding `invert: true` in the manifest
    #[arg(long, overrides_with = "invert")]
    pub no_invert: bool,

    /// Noise seed for pattern selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pattern selection strategy
    #[arg(long, value_enum)]
    pub selector: Option<SelectorKind>,

    /// Draw the pattern stack from the seed
    #[arg(long)]
    pub random_stack: bool,

    /// Quantize fills to the most frequent colours of this image
    #[arg(long)]
    pub palette_from: Option<PathBuf>,

    /// Number of colours taken by --palette-from
    #[arg(long, default_value = "16")]
    pub palette_size: usize,

    /// Include flat position/colour buffers in the output
    #[arg(long)]
    pub buffers: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let loaded = load_manifest(args.config.as_deref(), Path::new("."))?;
    if let Some(path) = &loaded.path {
        printer.info("Using", &display_path(path));
    }

    let options = apply_overrides(loaded.manifest.options(), &args);

    let palette = match &args.palette_from {
        Some(path) => Some(palette_from_image(path, args.palette_size)?),
        None => loaded.manifest.palette()?,
    };

    let mut sampler = ImageSampler::open(&args.image)?;
    match palette {
        Some(palette) if palette.is_empty() => {
            printer.warning("Palette", "no opaque colours found, fills are unquantized");
        }
        Some(palette) => {
            printer.info("Palette", &plural(palette.len(), "colour", "colours"));
            sampler = sampler.with_palette(palette);
        }
        None => {}
    }

    if options.random_stack {
        let stack = options.resolved_stack();
        let names: Vec<&str> = stack.patterns().iter().map(|p| p.name()).collect();
        printer.info("Stack", &names.join(", "));
    }

    printer.status(
        "Sampling",
        &format!(
            "{} ({}x{})",
            display_path(&args.image),
            sampler.width(),
            sampler.height()
        ),
    );

    let mosaic = build_mosaic(&sampler, &options)?;

    printer.status(
        "Subdivided",
        &format!(
            "{} into {} {}",
            plural(mosaic.base_count, "base polygon", "base polygons"),
            plural(mosaic.leaf_count, "leaf", "leaves"),
            printer.dim(&format!("(depth {} of {})", mosaic.deepest, options.max_depth)),
        ),
    );

    let document = MosaicDocument::new(&mosaic, args.buffers);

    match &args.output {
        Some(path) => {
            document.write(path)?;
            printer.status(
                "Wrote",
                &format!(
                    "{} to {}",
                    plural(mosaic.triangles.len(), "triangle", "triangles"),
                    display_path(path)
                ),
            );
        }
        None => println!("{}", document.to_json()?),
    }

    Ok(())
}

/// Command-line flags take precedence over manifest values.
fn apply_overrides(mut options: MosaicOptions, args: &BuildArgs) -> MosaicOptions {
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if let Some(density) = args.density {
        options.grid_density = density;
    }
    if args.invert {
        options.invert = true;
    } else if args.no_invert {
        options.invert = false;
    }
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    if let Some(selector) = args.selector {
        options.selector = selector;
    }
    if args.random_stack {
        options.random_stack = true;
    }
    options
}

fn palette_from_image(path: &Path, size: usize) -> Result<Palette> {
    let source = ImageSampler::open(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    Ok(Palette::extract(name, source.image(), Some(size)))
}
