//! Type declaration emission.
//!
//! The emitter never touches storage itself: it reads the root file and
//! writes the `.d.ts` output through a [`CompilerHost`]. The in-memory host
//! turns a one-shot emit into a pure function of the source text.
//!
//! ```text
//! host.read_source(root) ──► oxc_parser ──► IsolatedDeclarations ──► Codegen ──► host.write_output(root.d.ts)
//! ```

mod host;

pub use host::{CompilerHost, FsHost, InMemoryHost};

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_isolated_declarations::{IsolatedDeclarations, IsolatedDeclarationsOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::compile::join_diagnostics;
use crate::error::{Error, Result};

/// Name given to in-memory sources. Only its extension matters.
pub const VIRTUAL_ROOT: &str = "component.tsx";

/// Emits declaration-only output for a single root file.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationEmitter;

impl DeclarationEmitter {
    /// Emit the declaration of `root_name` through `host`.
    ///
    /// Returns the name the declaration was written under.
    ///
    /// # Errors
    /// Fails on unreadable or unparsable sources, on declaration
    /// diagnostics, and when the emitted text is empty.
    pub fn emit<H: CompilerHost + ?Sized>(&self, host: &mut H, root_name: &str) -> Result<String> {
        let source = host.read_source(root_name)?;
        let source_type = SourceType::from_path(root_name).unwrap_or_else(|_| SourceType::tsx());

        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, &source, source_type).parse();
        if parsed.panicked || !parsed.errors.is_empty() {
            return Err(Error::Parse {
                name: root_name.to_string(),
                message: join_diagnostics(&parsed.errors),
            });
        }

        let declarations = IsolatedDeclarations::new(
            &allocator,
            IsolatedDeclarationsOptions {
                strip_internal: false,
            },
        )
        .build(&parsed.program);
        if !declarations.errors.is_empty() {
            return Err(Error::Declaration {
                name: root_name.to_string(),
                message: join_diagnostics(&declarations.errors),
            });
        }

        let text = Codegen::new().build(&declarations.program).code;
        if text.trim().is_empty() {
            return Err(Error::EmptyDeclaration(root_name.to_string()));
        }

        let output_name = declaration_name(root_name);
        host.write_output(&output_name, &text)?;
        tracing::debug!("emitted {} ({} bytes)", output_name, text.len());
        Ok(output_name)
    }
}

/// Emit the declaration text of `source` as if it were a whole file.
///
/// Builds a fresh [`InMemoryHost`] per call; nothing is shared between calls.
pub fn emit_declaration(source: &str) -> Result<String> {
    let mut host = InMemoryHost::new(source);
    DeclarationEmitter::default().emit(&mut host, VIRTUAL_ROOT)?;
    host.into_output()
        .ok_or_else(|| Error::EmptyDeclaration(VIRTUAL_ROOT.to_string()))
}

/// `icon.tsx` → `icon.d.ts`
pub fn declaration_name(root_name: &str) -> String {
    Path::new(root_name)
        .with_extension("d.ts")
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPONENT: &str = r#"import * as React from "react";
import type { SVGProps } from "react";
const Icon = (props: SVGProps<SVGSVGElement>): React.JSX.Element => (
  <svg viewBox="0 0 24 24" {...props}>
    <path d="M0 0h24v24H0z" />
  </svg>
);
export default Icon;
"#;

    #[test]
    fn test_declaration_of_component() {
        let dts = emit_declaration(COMPONENT).unwrap();

        assert!(dts.contains("declare const Icon"));
        assert!(dts.contains("SVGProps<SVGSVGElement>"));
        assert!(dts.contains("React.JSX.Element"));
        assert!(dts.contains("export default Icon"));
        assert!(!dts.contains("<svg"));
    }

    #[test]
    fn test_declaration_of_named_export() {
        let dts = emit_declaration("export const answer: number = 42;\n").unwrap();

        assert!(dts.contains("answer"));
        assert!(dts.contains("number"));
        assert!(!dts.contains("42"));
    }

    #[test]
    fn test_interleaved_calls_do_not_share_state() {
        let first = "export const alpha: string = \"a\";\n";
        let second = "export function beta(n: number): boolean { return n > 0; }\n";

        let a1 = emit_declaration(first).unwrap();
        let b1 = emit_declaration(second).unwrap();
        let a2 = emit_declaration(first).unwrap();
        let b2 = emit_declaration(second).unwrap();

        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
        assert!(a1.contains("alpha") && !a1.contains("beta"));
        assert!(b1.contains("beta") && !b1.contains("alpha"));
    }

    #[test]
    fn test_empty_output_is_an_error() {
        let err = emit_declaration("").unwrap_err();
        assert!(matches!(err, Error::EmptyDeclaration(_)));
    }

    #[test]
    fn test_missing_annotation_is_an_error() {
        let err = emit_declaration("export function f(a) { return a; }\n").unwrap_err();
        assert!(matches!(err, Error::Declaration { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = emit_declaration("export const = ;").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_emit_writes_through_host() {
        let mut host = InMemoryHost::new(COMPONENT);
        let name = DeclarationEmitter::default().emit(&mut host, "foo").unwrap();

        assert_eq!(name, "foo.d.ts");
        let (written, text) = host.output().unwrap();
        assert_eq!(written, "foo.d.ts");
        assert!(text.contains("Icon"));
    }

    #[test]
    fn test_declaration_name() {
        assert_eq!(declaration_name("component.tsx"), "component.d.ts");
        assert_eq!(declaration_name("src/home.ts"), "src/home.d.ts");
        assert_eq!(declaration_name("foo"), "foo.d.ts");
    }
}
