//! Compiler configuration loaded from `tsconfig.json`.

use std::fs;
use std::path::Path;

use oxc_transformer::{JsxOptions, JsxRuntime, TransformOptions, TypeScriptOptions};
use serde::Deserialize;

use crate::error::{Error, Result};

/// How JSX is emitted in compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsxMode {
    /// Leave JSX untouched (`preserve`, `react-native`).
    Preserve,

    /// `React.createElement` calls (`react`).
    #[default]
    Classic,

    /// `jsx()` calls from the runtime import source (`react-jsx`).
    Automatic,

    /// `jsxDEV()` calls (`react-jsxdev`).
    AutomaticDev,
}

impl JsxMode {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "preserve" | "react-native" => Some(JsxMode::Preserve),
            "react" => Some(JsxMode::Classic),
            "react-jsx" => Some(JsxMode::Automatic),
            "react-jsxdev" => Some(JsxMode::AutomaticDev),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTsConfig {
    #[serde(default)]
    compiler_options: RawCompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCompilerOptions {
    jsx: Option<String>,
    jsx_import_source: Option<String>,
    jsx_factory: Option<String>,
    jsx_fragment_factory: Option<String>,
    verbatim_module_syntax: Option<bool>,
    preserve_value_imports: Option<bool>,
}

/// Settings shared by every compile call of a run.
///
/// Loaded once and passed by reference; never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    pub jsx: JsxMode,
    pub jsx_import_source: Option<String>,
    pub jsx_factory: Option<String>,
    pub jsx_fragment_factory: Option<String>,

    /// Only drop imports written as `import type`.
    pub preserve_value_imports: bool,
}

impl CompilerConfig {
    /// Load `compilerOptions` from a tsconfig file.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the file cannot be read, is not JSON,
    /// or names an unknown `jsx` mode.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;

        Self::from_json_str(&text).map_err(|err| match err {
            Error::Config { message, .. } => Error::Config {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Parse tsconfig JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawTsConfig = serde_json::from_str(text).map_err(|e| Error::Config {
            path: None,
            message: e.to_string(),
        })?;
        let options = raw.compiler_options;

        let jsx = match options.jsx.as_deref() {
            None => JsxMode::default(),
            Some(value) => JsxMode::parse(value).ok_or_else(|| Error::Config {
                path: None,
                message: format!("unsupported jsx mode {value:?}"),
            })?,
        };

        Ok(Self {
            jsx,
            jsx_import_source: options.jsx_import_source,
            jsx_factory: options.jsx_factory,
            jsx_fragment_factory: options.jsx_fragment_factory,
            preserve_value_imports: options.verbatim_module_syntax.unwrap_or(false)
                || options.preserve_value_imports.unwrap_or(false),
        })
    }

    /// Build the oxc transform options for this configuration.
    pub(crate) fn transform_options(&self) -> TransformOptions {
        let jsx = match self.jsx {
            JsxMode::Preserve => JsxOptions {
                jsx_plugin: false,
                display_name_plugin: false,
                jsx_self_plugin: false,
                jsx_source_plugin: false,
                ..JsxOptions::default()
            },
            JsxMode::Classic => JsxOptions {
                runtime: JsxRuntime::Classic,
                pragma: self.jsx_factory.clone(),
                pragma_frag: self.jsx_fragment_factory.clone(),
                ..JsxOptions::default()
            },
            JsxMode::Automatic | JsxMode::AutomaticDev => JsxOptions {
                runtime: JsxRuntime::Automatic,
                development: self.jsx == JsxMode::AutomaticDev,
                import_source: self.jsx_import_source.clone(),
                ..JsxOptions::default()
            },
        };

        // Imports named by the pragma survive import elision whenever JSX is
        // present. The automatic runtime has no pragma, so a namespace import
        // used only in types is dropped like any other.
        let mut typescript = TypeScriptOptions {
            only_remove_type_imports: self.preserve_value_imports,
            ..TypeScriptOptions::default()
        };
        match self.jsx {
            JsxMode::Automatic | JsxMode::AutomaticDev => {
                typescript.jsx_pragma = String::new().into();
                typescript.jsx_pragma_frag = String::new().into();
            }
            JsxMode::Classic => {
                if let Some(factory) = &self.jsx_factory {
                    typescript.jsx_pragma = factory.clone().into();
                }
                if let Some(fragment) = &self.jsx_fragment_factory {
                    typescript.jsx_pragma_frag = fragment.clone().into();
                }
            }
            JsxMode::Preserve => {}
        }

        TransformOptions {
            typescript,
            jsx,
            ..TransformOptions::default()
        }
    }
}
