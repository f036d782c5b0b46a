//! Patterns command implementation.
//!
//! Prints every tessellation pattern with its child counts and the
//! default stack.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::tessellate::{Pattern, TessellationStack};

/// List tessellation patterns
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Also print the default pattern stack
    #[arg(long)]
    pub stack: bool,
}

pub fn run(args: PatternsArgs, printer: &Printer) -> Result<()> {
    for pattern in Pattern::ALL {
        printer.info(pattern.name(), &describe(pattern, printer));
    }

    if args.stack {
        let stack = TessellationStack::default();
        let names: Vec<&str> = stack.patterns().iter().map(|p| p.name()).collect();
        printer.info("stack", &names.join(", "));
    }

    Ok(())
}

fn describe(pattern: Pattern, printer: &Printer) -> String {
    format!(
        "triangle {} {}, quad {} {}",
        printer.dim("->"),
        pattern.child_count(3),
        printer.dim("->"),
        pattern.child_count(4)
    )
}
