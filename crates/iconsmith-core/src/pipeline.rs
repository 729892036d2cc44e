//! The generation run: every (icon, variant) pair through every stage.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use crate::catalog::{Catalog, Variant};
use crate::compile::{Compiler, CompilerConfig, Loader};
use crate::declaration::emit_declaration;
use crate::error::{Error, Result};
use crate::paths::{write_output, OutputPaths, PackageLayout};
use crate::transform::ComponentTransformer;

/// Where a run reads from and writes to.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the installed icon package.
    pub package_root: PathBuf,

    /// tsconfig supplying the compiler options.
    pub tsconfig_path: PathBuf,

    /// Directory receiving the `.jsx` and `.d.ts` files.
    pub out_dir: PathBuf,

    /// Worker threads; 1 keeps strict catalog order.
    pub jobs: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_root: PathBuf::from("node_modules/@material-icons/svg"),
            tsconfig_path: PathBuf::from("tsconfig.json"),
            out_dir: PathBuf::from("icons"),
            jobs: 1,
        }
    }
}

/// Both artifacts of one pair, before they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    pub component: String,
    pub declaration: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Distinct icon names in the catalog.
    pub icons: usize,
    pub variants: usize,

    /// Distinct files written.
    pub files: usize,
}

/// Runs the pipeline for a whole catalog.
///
/// The first failing pair aborts the run; files already written stay.
#[derive(Debug, Clone)]
pub struct Generator {
    layout: PackageLayout,
    out_dir: PathBuf,
    compiler_config: CompilerConfig,
    transformer: ComponentTransformer,
    jobs: usize,
}

impl Generator {
    /// Create a generator, loading the compiler configuration once.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the tsconfig cannot be loaded.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let compiler_config = CompilerConfig::load(&config.tsconfig_path)?;
        Ok(Self::with_compiler_config(
            PackageLayout::new(&config.package_root),
            &config.out_dir,
            compiler_config,
        )
        .jobs(config.jobs))
    }

    pub fn with_compiler_config(
        layout: PackageLayout,
        out_dir: impl Into<PathBuf>,
        compiler_config: CompilerConfig,
    ) -> Self {
        Self {
            layout,
            out_dir: out_dir.into(),
            compiler_config,
            transformer: ComponentTransformer::default(),
            jobs: 1,
        }
    }

    /// Set the number of worker threads (0 is treated as 1).
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Load the package catalog and generate every pair.
    pub fn run(&self) -> Result<GenerationReport> {
        let catalog = Catalog::load(&self.layout.catalog_path())?;
        tracing::info!("Loaded catalog with {} icons", catalog.len());
        self.run_catalog(&catalog)
    }

    /// Generate every pair of `catalog`.
    pub fn run_catalog(&self, catalog: &Catalog) -> Result<GenerationReport> {
        let start = Instant::now();
        fs::create_dir_all(&self.out_dir).map_err(|source| Error::Write {
            path: self.out_dir.clone(),
            source,
        })?;

        if self.jobs == 1 {
            for (icon, variant) in catalog.pairs() {
                self.generate_pair(icon, variant)?;
            }
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()
                .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;
            let pairs: Vec<(&str, Variant)> = catalog.pairs().collect();
            pool.install(|| {
                pairs
                    .par_iter()
                    .try_for_each(|&(icon, variant)| self.generate_pair(icon, variant).map(|_| ()))
            })?;
        }

        // Repeated catalog names rewrite the same files.
        let icons = catalog
            .icons()
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len();
        let report = GenerationReport {
            icons,
            variants: Variant::ALL.len(),
            files: icons * Variant::ALL.len() * 2,
        };
        tracing::info!(
            "Generated {} files for {} icons into {} in {:.2}s",
            report.files,
            report.icons,
            self.out_dir.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(report)
    }

    /// Read, transform, compile and declare one pair, then write both files.
    pub fn generate_pair(&self, icon: &str, variant: Variant) -> Result<OutputPaths> {
        let svg = self.layout.read_svg(icon, variant)?;
        let generated = self.render(&svg)?;

        let paths = OutputPaths::new(&self.out_dir, icon, variant);
        write_output(&paths.component, &generated.component)?;
        write_output(&paths.declaration, &generated.declaration)?;

        tracing::debug!(icon, %variant, "generated pair");
        Ok(paths)
    }

    /// Produce both artifacts for SVG markup without touching the disk.
    pub fn render(&self, svg: &str) -> Result<GeneratedPair> {
        let source = self.transformer.transform(svg)?;
        let component = Compiler::new(&self.compiler_config).compile(&source, Loader::Tsx)?;
        let declaration = emit_declaration(&source)?;

        Ok(GeneratedPair {
            component,
            declaration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::JsxMode;
    use tempfile::TempDir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" height="24" viewBox="0 0 24 24" width="24"><path d="M12 2L2 22h20z"/></svg>"#;

    fn generator(temp: &TempDir) -> Generator {
        Generator::with_compiler_config(
            PackageLayout::new(temp.path().join("pkg")),
            temp.path().join("icons"),
            CompilerConfig {
                jsx: JsxMode::Preserve,
                ..CompilerConfig::default()
            },
        )
    }

    #[test]
    fn test_render_produces_both_artifacts() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let pair = generator(&temp).render(SVG).unwrap();

        assert!(pair.component.contains("<svg"));
        assert!(pair.component.contains("currentColor"));
        assert!(!pair.component.contains("SVGProps"));
        assert!(pair.declaration.contains("declare const Icon"));
    }

    #[test]
    fn test_render_keeps_spaces_in_text() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let generator = Generator::with_compiler_config(
            PackageLayout::new(temp.path().join("pkg")),
            temp.path().join("icons"),
            CompilerConfig::default(),
        );

        let pair = generator
            .render(r#"<svg viewBox="0 0 24 24"><text>A <tspan>B</tspan> C</text></svg>"#)
            .unwrap();

        assert!(pair.component.contains("React.createElement"));
        assert!(pair.component.contains(r#""A ""#));
        assert!(pair.component.contains(r#"" C""#));
    }

    #[test]
    fn test_render_rejects_malformed_svg() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        assert!(matches!(
            generator(&temp).render("<svg><path d=\"M0 0\""),
            Err(Error::Transform(_))
        ));
    }

    #[test]
    fn test_generate_pair_missing_source() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let err = generator(&temp)
            .generate_pair("ghost", Variant::Baseline)
            .unwrap_err();

        assert!(matches!(err, Error::SourceRead { .. }));
        assert!(!temp.path().join("icons/ghost-baseline.jsx").exists());
    }

    #[test]
    fn test_default_config_matches_package_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package_root, PathBuf::from("node_modules/@material-icons/svg"));
        assert_eq!(config.out_dir, PathBuf::from("icons"));
        assert_eq!(config.jobs, 1);
    }

    #[test]
    fn test_zero_jobs_clamped() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        assert_eq!(generator(&temp).jobs(0).jobs, 1);
    }
}
