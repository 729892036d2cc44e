//! On-disk layout of the icon package and the generated output.
//!
//! ```text
//! <package-root>/
//! ├── data.json            # catalog
//! └── svg/<icon>/<variant>.svg
//!
//! <out-dir>/
//! ├── <icon>-<variant>.jsx
//! └── <icon>-<variant>.d.ts
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Variant;
use crate::error::{Error, Result};

/// Read-only view of an installed icon package.
#[derive(Debug, Clone)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to the bundled catalog.
    pub fn catalog_path(&self) -> PathBuf {
        self.root.join("data.json")
    }

    /// Path to the SVG source of one (icon, variant) pair.
    pub fn svg_path(&self, icon: &str, variant: Variant) -> PathBuf {
        self.root
            .join("svg")
            .join(icon)
            .join(format!("{}.svg", variant.as_str()))
    }

    /// Read the SVG source of one pair.
    ///
    /// # Errors
    /// Returns [`Error::SourceRead`] if the file is missing or not UTF-8.
    pub fn read_svg(&self, icon: &str, variant: Variant) -> Result<String> {
        let path = self.svg_path(icon, variant);
        fs::read_to_string(&path).map_err(|source| Error::SourceRead { path, source })
    }
}

/// Output paths for one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Compiled component (`.jsx`).
    pub component: PathBuf,

    /// Type declaration (`.d.ts`).
    pub declaration: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path, icon: &str, variant: Variant) -> Self {
        let base = format!("{}-{}", icon, variant.as_str());
        Self {
            component: out_dir.join(format!("{base}.jsx")),
            declaration: out_dir.join(format!("{base}.d.ts")),
        }
    }
}

/// Write a file, overwriting any previous content.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_svg_path_layout() {
        let layout = PackageLayout::new("node_modules/@material-icons/svg");
        assert_eq!(
            layout.svg_path("home", Variant::TwoTone),
            PathBuf::from("node_modules/@material-icons/svg/svg/home/twotone.svg")
        );
        assert_eq!(
            layout.catalog_path(),
            PathBuf::from("node_modules/@material-icons/svg/data.json")
        );
    }

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::new(Path::new("icons"), "3d_rotation", Variant::Outline);
        assert_eq!(paths.component, PathBuf::from("icons/3d_rotation-outline.jsx"));
        assert_eq!(paths.declaration, PathBuf::from("icons/3d_rotation-outline.d.ts"));
    }

    #[test]
    fn test_read_missing_svg() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let layout = PackageLayout::new(temp.path());

        let err = layout.read_svg("ghost", Variant::Baseline).unwrap_err();
        match err {
            Error::SourceRead { path, .. } => assert!(path.ends_with("svg/ghost/baseline.svg")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
