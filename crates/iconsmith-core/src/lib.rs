//! Core engine for iconsmith.
//!
//! Turns an SVG icon set into React components, one pair of files per
//! (icon, variant):
//!
//! ```text
//! data.json ──► Catalog ──► (icon, variant) pairs
//!                                │
//!      svg/<icon>/<variant>.svg ─┴─► ComponentTransformer ──► component source (TSX)
//!                                                                │
//!                                     ┌──────────────────────────┴──────────────────────┐
//!                                     ▼                                                 ▼
//!                          Compiler (tsconfig) ──► <icon>-<variant>.jsx   DeclarationEmitter ──► <icon>-<variant>.d.ts
//! ```

pub mod catalog;
pub mod compile;
pub mod declaration;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod transform;

pub use catalog::{Catalog, Variant};
pub use compile::{Compiler, CompilerConfig, JsxMode, Loader};
pub use declaration::{
    CompilerHost, DeclarationEmitter, FsHost, InMemoryHost, declaration_name, emit_declaration,
};
pub use error::{Error, Result};
pub use paths::{OutputPaths, PackageLayout};
pub use pipeline::{GeneratedPair, GenerationReport, Generator, GeneratorConfig};
pub use transform::{ComponentOptions, ComponentTransformer};
