//! Error types for iconsmith-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for iconsmith-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icon components.
#[derive(Debug, Error)]
pub enum Error {
    /// The icon catalog could not be loaded or parsed.
    #[error("failed to load icon catalog {path}: {message}")]
    Catalog { path: PathBuf, message: String },

    /// The compiler configuration could not be loaded or is invalid.
    #[error("invalid compiler configuration {}: {message}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<inline>".to_string()))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// An SVG source file could not be read.
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SVG markup could not be turned into a component.
    #[error("transform error: {0}")]
    Transform(String),

    /// Generated source failed to parse.
    #[error("parse error in {name}: {message}")]
    Parse { name: String, message: String },

    /// Type stripping or JSX lowering failed.
    #[error("compilation failed: {0}")]
    Compile(String),

    /// Declaration emission reported diagnostics.
    #[error("declaration emit failed for {name}: {message}")]
    Declaration { name: String, message: String },

    /// Declaration emission finished without producing any text.
    #[error("declaration emit produced no output for {0}")]
    EmptyDeclaration(String),

    /// A compiler host could not serve a read or write.
    #[error("compiler host error: {0}")]
    Host(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Render the error followed by a recovery hint, when one applies.
    pub fn with_hint(&self) -> String {
        let hint = match self {
            Error::Catalog { .. } => {
                Some("install the icon package (npm install @material-icons/svg) or pass --package-root")
            }
            Error::Config { .. } => Some("check compilerOptions in tsconfig.json or pass --tsconfig"),
            Error::SourceRead { .. } => {
                Some("every catalog icon needs one SVG per variant under <package-root>/svg/<icon>/")
            }
            Error::Write { .. } => Some("make sure the output directory is writable"),
            Error::EmptyDeclaration(_) => Some("the source must export at least one declaration"),
            _ => None,
        };

        match hint {
            Some(hint) => format!("{}\n  hint: {}", self, hint),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_hint_appends_hint() {
        let err = Error::EmptyDeclaration("Icon.tsx".to_string());
        let rendered = err.with_hint();

        assert!(rendered.starts_with("declaration emit produced no output for Icon.tsx"));
        assert!(rendered.contains("hint:"));
    }

    #[test]
    fn test_with_hint_without_hint() {
        let err = Error::Compile("boom".to_string());
        assert_eq!(err.with_hint(), "compilation failed: boom");
    }

    #[test]
    fn test_config_error_without_path() {
        let err = Error::Config {
            path: None,
            message: "unknown jsx mode".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid compiler configuration <inline>: unknown jsx mode"
        );
    }
}
