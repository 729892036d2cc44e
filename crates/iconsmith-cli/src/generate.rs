//! Generate command implementation for iconsmith CLI.
//!
//! Runs the full pipeline over the installed icon package.

use std::time::Instant;

use iconsmith_core::{Generator, GeneratorConfig};

use crate::colors;

/// Execute the generate command.
pub fn execute(config: GeneratorConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    let generator = Generator::new(&config)?;
    let report = generator.run()?;

    println!(
        "{}✓{} Generated {}{}{} files ({} icons × {} variants) in {} ({:.2}s)",
        colors::GREEN,
        colors::RESET,
        colors::BOLD,
        report.files,
        colors::RESET,
        report.icons,
        report.variants,
        config.out_dir.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
