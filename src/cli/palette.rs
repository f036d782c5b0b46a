use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::sampler::ImageSampler;
use crate::types::Palette;

/// Extract a colour palette from an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let display = display_path(path);

    let sampler = ImageSampler::open(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let palette = Palette::extract(name, sampler.image(), args.max);

    printer.status(
        "Sampled",
        &format!("{} from {}", plural(palette.len(), "colour", "colours"), display),
    );

    // Lines are ready to paste under `palette:` in tessera.yaml
    print!("{}", palette_yaml(&palette));

    Ok(())
}

fn palette_yaml(palette: &Palette) -> String {
    let mut out = String::from("palette:\n");
    for colour in palette.colours() {
        out.push_str(&format!("  - \"{}\"\n", colour.to_hex_rgb()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Manifest;
    use crate::types::Colour;

    #[test]
    fn test_palette_yaml_lines() {
        let palette = Palette::from_colours(
            "p",
            vec![Colour::rgb(26, 26, 46), Colour::rgb(233, 69, 96)],
        );
        assert_eq!(
            palette_yaml(&palette),
            "palette:\n  - \"#1A1A2E\"\n  - \"#E94560\"\n"
        );
    }

    #[test]
    fn test_palette_yaml_loads_as_manifest() {
        let palette = Palette::from_colours("p", vec![Colour::rgb(0, 128, 255)]);
        let manifest = Manifest::parse(&palette_yaml(&palette)).unwrap();
        let loaded = manifest.palette().unwrap().unwrap();
        assert_eq!(loaded.colours(), palette.colours());
    }
}
