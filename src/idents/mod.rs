//! Identifier extraction from C sources
//!
//! Scans a source file for Eina/Gel accessor invocations and reports which
//! accessor names are in use:
//! - Getter macros (`EINA_OBJ_GET_LOMO(`, `GEL_APP_GET_WINDOW(`)
//! - Function-style getters (`eina_obj_get_app(`, `gel_app_get_settings(`)
//! - Plain macros (`EINA_OBJ_NEW(`, `GEL_APP_FOO(`)
//!
//! The file is flattened into one logical line before scanning, so an
//! invocation split across lines still matches.

mod prefix;

pub use prefix::Prefix;

use anyhow::{Context, Result};
use regex::bytes::Regex;
use std::collections::BTreeSet;
use std::path::Path;

/// A single accessor invocation found in the scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentMatch {
    /// Prefix family that matched
    pub prefix: Prefix,
    /// Captured identifier, as written in the source
    pub name: String,
}

impl IdentMatch {
    /// Normalized (lowercase) identifier
    pub fn normalized(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Extracts accessor identifiers from source text
pub struct IdentifierExtractor {
    pattern: Regex,
}

impl IdentifierExtractor {
    /// Create a new extractor with the combined prefix pattern
    pub fn new() -> Result<Self> {
        let source = Prefix::ALL
            .iter()
            .map(|prefix| prefix.pattern())
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&source).context("Failed to compile identifier pattern")?;

        Ok(Self { pattern })
    }

    /// Find every non-overlapping accessor invocation in `content`
    pub fn matches(&self, content: &[u8]) -> Vec<IdentMatch> {
        let flattened = flatten_lines(content);

        self.pattern
            .captures_iter(&flattened)
            .filter_map(|caps| {
                // Alternation guarantees exactly one group participates
                Prefix::ALL.iter().find_map(|prefix| {
                    caps.name(prefix.group()).map(|m| IdentMatch {
                        prefix: *prefix,
                        name: String::from_utf8_lossy(m.as_bytes()).into_owned(),
                    })
                })
            })
            .collect()
    }

    /// Distinct lowercase identifiers found in `content`, in sorted order
    pub fn extract(&self, content: &[u8]) -> BTreeSet<String> {
        self.matches(content)
            .iter()
            .map(IdentMatch::normalized)
            .collect()
    }

    /// Read a file and extract its identifiers
    pub fn extract_file(&self, path: &Path) -> Result<BTreeSet<String>> {
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read source file: {:?}", path))?;

        let idents = self.extract(&content);
        tracing::debug!(path = ?path, count = idents.len(), "extracted identifiers");

        Ok(idents)
    }
}

/// Join identifiers with commas, without leading or trailing separators
pub fn format_list(idents: &BTreeSet<String>) -> String {
    idents.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

fn flatten_lines(content: &[u8]) -> Vec<u8> {
    content
        .iter()
        .copied()
        .filter(|b| *b != b'\n' && *b != b'\r')
        .collect()
}
