//! Compiler hosts: where the declaration emitter reads and writes files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The two file capabilities a declaration emit needs.
pub trait CompilerHost {
    /// Return the text of the named source file.
    fn read_source(&self, name: &str) -> Result<String>;

    /// Accept the text of an emitted output file.
    fn write_output(&mut self, name: &str, text: &str) -> Result<()>;
}

/// A single-use host over in-memory buffers.
///
/// Every read returns the same source text whatever name is asked for;
/// the first write is captured and later writes are rejected.
#[derive(Debug, Clone)]
pub struct InMemoryHost {
    source: String,
    output: Option<(String, String)>,
}

impl InMemoryHost {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output: None,
        }
    }

    /// Name and text of the captured output, if any.
    pub fn output(&self) -> Option<(&str, &str)> {
        self.output
            .as_ref()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// Consume the host, returning the captured output text.
    pub fn into_output(self) -> Option<String> {
        self.output.map(|(_, text)| text)
    }
}

impl CompilerHost for InMemoryHost {
    fn read_source(&self, _name: &str) -> Result<String> {
        Ok(self.source.clone())
    }

    fn write_output(&mut self, name: &str, text: &str) -> Result<()> {
        if let Some((previous, _)) = &self.output {
            return Err(Error::Host(format!(
                "in-memory host already holds {previous}, refusing {name}"
            )));
        }
        self.output = Some((name.to_string(), text.to_string()));
        Ok(())
    }
}

/// A host backed by files under a root directory.
#[derive(Debug, Clone)]
pub struct FsHost {
    root: PathBuf,
}

impl FsHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl CompilerHost for FsHost {
    fn read_source(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        fs::read_to_string(&path).map_err(|source| Error::SourceRead { path, source })
    }

    fn write_output(&mut self, name: &str, text: &str) -> Result<()> {
        let path = self.resolve(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, text).map_err(|source| Error::Write { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_reads_ignore_name() {
        let host = InMemoryHost::new("export {};");
        assert_eq!(host.read_source("foo").unwrap(), "export {};");
        assert_eq!(host.read_source("lib.d.ts").unwrap(), "export {};");
    }

    #[test]
    fn test_in_memory_captures_single_write() {
        let mut host = InMemoryHost::new("");
        host.write_output("foo.d.ts", "declare const a: 1;").unwrap();

        assert_eq!(host.output(), Some(("foo.d.ts", "declare const a: 1;")));
        assert!(host.write_output("bar.d.ts", "x").is_err());
        assert_eq!(host.into_output().as_deref(), Some("declare const a: 1;"));
    }

    #[test]
    fn test_fs_host_round_trip() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut host = FsHost::new(temp.path());

        host.write_output("nested/out.d.ts", "export {};\n").unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("nested/out.d.ts")).unwrap(),
            "export {};\n"
        );
        assert_eq!(host.read_source("nested/out.d.ts").unwrap(), "export {};\n");
    }

    #[test]
    fn test_fs_host_missing_source() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let host = FsHost::new(temp.path());
        assert!(matches!(
            host.read_source("missing.tsx"),
            Err(Error::SourceRead { .. })
        ));
    }
}
