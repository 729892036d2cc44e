//! Icon catalog and style variants.
//!
//! The catalog is the `data.json` file shipped with the icon package. Only
//! the `name` of each record is used; every other field is ignored.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One visual style of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Baseline,
    Outline,
    Round,
    Sharp,
    TwoTone,
}

impl Variant {
    /// All variants, in generation order.
    pub const ALL: [Variant; 5] = [
        Variant::Baseline,
        Variant::Outline,
        Variant::Round,
        Variant::Sharp,
        Variant::TwoTone,
    ];

    /// Name used in source and output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Baseline => "baseline",
            Variant::Outline => "outline",
            Variant::Round => "round",
            Variant::Sharp => "sharp",
            Variant::TwoTone => "twotone",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    icons: Vec<IconRecord>,
}

#[derive(Debug, Deserialize)]
struct IconRecord {
    name: String,
}

/// Ordered list of icon names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    icons: Vec<String>,
}

impl Catalog {
    /// Build a catalog from names directly.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icons: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the catalog from a `data.json` file.
    ///
    /// # Errors
    /// Returns [`Error::Catalog`] if the file is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Catalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&text).map_err(|message| Error::Catalog {
            path: path.to_path_buf(),
            message,
        })
    }

    fn parse(text: &str) -> std::result::Result<Self, String> {
        let file: CatalogFile = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Ok(Self {
            icons: file.icons.into_iter().map(|record| record.name).collect(),
        })
    }

    /// Icon names in catalog order.
    pub fn icons(&self) -> &[String] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Every (icon, variant) pair: icons outer, variants inner.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Variant)> + '_ {
        self.icons
            .iter()
            .flat_map(|icon| Variant::ALL.iter().map(move |v| (icon.as_str(), *v)))
    }
}
