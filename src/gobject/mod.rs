//! GObject class skeleton generation
//!
//! Produces the boilerplate `.h`/`.c` pair for a new GObject subclass: type
//! macros, instance and class structs, `G_DEFINE_TYPE`, and optional
//! private data, property accessors, dispose and finalize chaining.

mod templates;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Description of the class to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSpec {
    /// Full class name, `CamelCase` (e.g. `EinaCover`)
    pub class_camel: String,
    /// Class name, `lower_case` (e.g. `eina_cover`)
    pub class_lower: String,
    /// Package name, `UPPER_CASE` (e.g. `EINA`)
    pub package_upper: String,
    /// Object name, `UPPER_CASE` (e.g. `COVER`)
    pub object_upper: String,
    /// Parent type macro (e.g. `G_TYPE_OBJECT`)
    pub parent: String,
    /// Parent class name, `CamelCase` (e.g. `GObject`)
    pub parent_camel: String,
    /// Emit a private struct and `GET_PRIVATE`
    pub private: bool,
    /// Emit property get/set stubs
    pub props: bool,
    /// Emit a chained dispose handler
    pub dispose: bool,
    /// Emit a chained finalize handler
    pub finalize: bool,
}

impl ClassSpec {
    /// Derive every name from a `CamelCase` class name deriving from `GObject`.
    ///
    /// The first word becomes the package, the rest the object name:
    /// `EinaPlayerCover` gives `eina_player_cover`, `EINA`, `PLAYER_COVER`.
    pub fn from_camel(class_camel: &str) -> Result<Self> {
        let words = split_camel(class_camel);
        if words.len() < 2 {
            anyhow::bail!(
                "Class name {:?} needs a package prefix and an object name",
                class_camel
            );
        }

        let class_lower = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("_");
        let package_upper = words[0].to_uppercase();
        let object_upper = words[1..]
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_");

        Ok(Self {
            class_camel: class_camel.to_string(),
            class_lower,
            package_upper,
            object_upper,
            parent: "G_TYPE_OBJECT".to_string(),
            parent_camel: "GObject".to_string(),
            private: false,
            props: false,
            dispose: false,
            finalize: false,
        })
    }

    /// Check that every name is a usable C identifier
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("class_camel", &self.class_camel),
            ("class_lower", &self.class_lower),
            ("package_upper", &self.package_upper),
            ("object_upper", &self.object_upper),
            ("parent", &self.parent),
            ("parent_camel", &self.parent_camel),
        ];

        for (field, value) in fields {
            if !is_c_identifier(value) {
                anyhow::bail!("{} must be a C identifier, got {:?}", field, value);
            }
        }

        Ok(())
    }

    /// Base file name: `class_lower` with dashes
    pub fn filename(&self) -> String {
        self.class_lower.replace('_', "-")
    }

    /// Include guard for the header
    pub fn header_guard(&self) -> String {
        format!("_{}", self.filename().to_uppercase().replace(['.', '-'], "_"))
    }
}

/// Generated header and source for a class
#[derive(Debug, Clone, Serialize)]
pub struct Skeleton {
    /// Base file name without extension
    pub filename: String,
    /// Header contents
    pub header: String,
    /// Source contents
    pub source: String,
}

impl Skeleton {
    /// Header file name
    pub fn header_name(&self) -> String {
        format!("{}.h", self.filename)
    }

    /// Source file name
    pub fn source_name(&self) -> String {
        format!("{}.c", self.filename)
    }

    /// Write both files into `dir`, returning their paths
    pub fn write_to(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

        let header_path = dir.join(self.header_name());
        let source_path = dir.join(self.source_name());

        std::fs::write(&header_path, &self.header)
            .with_context(|| format!("Failed to write {:?}", header_path))?;
        std::fs::write(&source_path, &self.source)
            .with_context(|| format!("Failed to write {:?}", source_path))?;

        tracing::info!(header = ?header_path, source = ?source_path, "wrote class skeleton");
        Ok((header_path, source_path))
    }
}

/// Generate the skeleton for `spec`
pub fn generate(spec: &ClassSpec) -> Result<Skeleton> {
    spec.validate()?;

    Ok(Skeleton {
        filename: spec.filename(),
        header: templates::header(spec),
        source: templates::source(spec),
    })
}

fn is_c_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Split `CamelCase` into words, keeping capital runs together:
/// `GelUIWindow` gives `Gel`, `UI`, `Window`.
fn split_camel(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        let starts_word = match i.checked_sub(1).map(|prev| chars[prev]) {
            None => true,
            Some(prev) if c.is_ascii_uppercase() => {
                !prev.is_ascii_uppercase()
                    || chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase())
            }
            Some(_) => false,
        };

        match words.last_mut() {
            Some(word) if !starts_word => word.push(c),
            _ => words.push(c.to_string()),
        }
    }

    words
}
