//! Declare command implementation for iconsmith CLI.
//!
//! Emits the `.d.ts` of a source file through a filesystem-backed host.

use std::fs;
use std::path::{Path, PathBuf};

use iconsmith_core::{CompilerHost, DeclarationEmitter, Error, FsHost};

/// Reads through an [`FsHost`] but sends the output to a fixed path.
struct RedirectedHost {
    inner: FsHost,
    out: PathBuf,
}

impl CompilerHost for RedirectedHost {
    fn read_source(&self, name: &str) -> iconsmith_core::Result<String> {
        self.inner.read_source(name)
    }

    fn write_output(&mut self, _name: &str, text: &str) -> iconsmith_core::Result<()> {
        fs::write(&self.out, text).map_err(|source| Error::Write {
            path: self.out.clone(),
            source,
        })
    }
}

/// Execute the declare command.
pub fn execute(source_path: &Path, out: Option<&Path>) -> anyhow::Result<()> {
    if !source_path.exists() {
        anyhow::bail!("Source file not found: {}", source_path.display());
    }

    let dir = source_path.parent().unwrap_or(Path::new("."));
    let Some(file_name) = source_path.file_name() else {
        anyhow::bail!("Not a file: {}", source_path.display());
    };
    let file_name = file_name.to_string_lossy();

    let emitter = DeclarationEmitter::default();
    let inner = FsHost::new(dir);
    let written = match out {
        Some(out) => {
            let mut host = RedirectedHost {
                inner,
                out: out.to_path_buf(),
            };
            emitter.emit(&mut host, &file_name)?;
            host.out
        }
        None => {
            let mut host = inner;
            let name = emitter.emit(&mut host, &file_name)?;
            host.root().join(name)
        }
    };

    println!("{}", written.display());
    Ok(())
}
