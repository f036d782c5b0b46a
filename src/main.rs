use clap::Parser;
use miette::Result;
use tessera::cli::{Cli, Commands};
use tessera::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => tessera::cli::build::run(args, &printer)?,
        Commands::Init(args) => tessera::cli::init::run(args, &printer)?,
        Commands::Palette(args) => tessera::cli::palette::run(args, &printer)?,
        Commands::Patterns(args) => tessera::cli::patterns::run(args, &printer)?,
        Commands::Completions(args) => tessera::cli::completions::run(args)?,
    }

    Ok(())
}
