//! Compilation of generated component source into executable JavaScript.
//!
//! ```text
//! component source ──► oxc_parser ──► SemanticBuilder ──► Transformer ──► Codegen ──► .jsx text
//!                          ▲                                  ▲
//!                       Loader                          CompilerConfig
//! ```

mod config;

pub use config::{CompilerConfig, JsxMode};

use std::fmt::Display;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::Transformer;

use crate::error::{Error, Result};

/// Dialect of the source handed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
    /// TypeScript with JSX.
    Tsx,
    Ts,
    Jsx,
    Js,
}

impl Loader {
    pub(crate) fn source_type(self) -> SourceType {
        match self {
            Loader::Tsx => SourceType::tsx(),
            Loader::Ts => SourceType::ts(),
            Loader::Jsx => SourceType::jsx(),
            Loader::Js => SourceType::mjs(),
        }
    }

    /// Virtual file name used in diagnostics.
    pub(crate) fn file_name(self) -> &'static str {
        match self {
            Loader::Tsx => "component.tsx",
            Loader::Ts => "component.ts",
            Loader::Jsx => "component.jsx",
            Loader::Js => "component.js",
        }
    }
}

/// Strips types and lowers JSX according to a [`CompilerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'c> {
    config: &'c CompilerConfig,
}

impl<'c> Compiler<'c> {
    pub fn new(config: &'c CompilerConfig) -> Self {
        Self { config }
    }

    /// Compile source text into JavaScript.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] on syntax errors and [`Error::Compile`] if
    /// the transform reports diagnostics.
    pub fn compile(&self, source: &str, loader: Loader) -> Result<String> {
        let name = loader.file_name();
        let allocator = Allocator::default();

        let parsed = Parser::new(&allocator, source, loader.source_type()).parse();
        if parsed.panicked || !parsed.errors.is_empty() {
            return Err(Error::Parse {
                name: name.to_string(),
                message: join_diagnostics(&parsed.errors),
            });
        }
        let mut program = parsed.program;

        let semantic = SemanticBuilder::new().build(&program);
        if !semantic.errors.is_empty() {
            return Err(Error::Compile(join_diagnostics(&semantic.errors)));
        }
        let (symbols, scopes) = semantic.semantic.into_symbol_table_and_scope_tree();

        let options = self.config.transform_options();
        let transformed = Transformer::new(&allocator, Path::new(name), &options)
            .build_with_symbols_and_scopes(symbols, scopes, &mut program);
        if !transformed.errors.is_empty() {
            return Err(Error::Compile(join_diagnostics(&transformed.errors)));
        }

        Ok(Codegen::new().build(&program).code)
    }
}

pub(crate) fn join_diagnostics<E: Display>(errors: &[E]) -> String {
    if errors.is_empty() {
        return "unrecoverable syntax error".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
