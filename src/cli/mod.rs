pub mod build;
pub mod completions;
pub mod init;
pub mod palette;
pub mod patterns;

use clap::{Parser, Subcommand};

/// tessera - Content-adaptive triangle mosaics from images
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a triangle mosaic from an image
    Build(build::BuildArgs),

    /// Write a default tessera.yaml
    Init(init::InitArgs),

    /// Extract a colour palette from an image
    Palette(palette::PaletteArgs),

    /// List available tessellation patterns
    Patterns(patterns::PatternsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
