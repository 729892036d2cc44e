//! Component command implementation for iconsmith CLI.
//!
//! Prints the generated component source for a single SVG file.

use std::fs;
use std::path::Path;

use iconsmith_core::ComponentTransformer;

/// Execute the component command.
pub fn execute(svg_path: &Path) -> anyhow::Result<()> {
    if !svg_path.exists() {
        anyhow::bail!("SVG file not found: {}", svg_path.display());
    }

    let markup = fs::read_to_string(svg_path)?;
    let source = ComponentTransformer::default().transform(&markup)?;
    print!("{source}");

    Ok(())
}
