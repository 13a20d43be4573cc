//! Fragment loader configuration

use crate::fragment::{NavLink, Page};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the fragment loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Section loaded when the location has no fragment
    #[serde(default = "default_section")]
    pub default_section: String,

    /// Suffix appended to a section name to form its resource path
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Class marking the active navigation link
    #[serde(default = "default_active_class")]
    pub active_class: String,

    /// Navigation links, in document order
    #[serde(default = "default_links")]
    pub links: Vec<LinkConfig>,

    /// Static markup placed before the navigation element
    #[serde(default)]
    pub header: Option<String>,

    /// Static markup placed at the end of the page
    #[serde(default)]
    pub footer: Option<String>,
}

/// A configured navigation link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Link destination (e.g. `#download`)
    pub href: String,

    /// Visible link text
    pub label: String,
}

fn default_section() -> String {
    "about".to_string()
}

fn default_suffix() -> String {
    ".html".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

fn default_links() -> Vec<LinkConfig> {
    [
        ("#about", "About"),
        ("#download", "Download"),
        ("#screenshots", "Screenshots"),
        ("#development", "Development"),
    ]
    .into_iter()
    .map(|(href, label)| LinkConfig {
        href: href.to_string(),
        label: label.to_string(),
    })
    .collect()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_section: default_section(),
            suffix: default_suffix(),
            active_class: default_active_class(),
            links: default_links(),
            header: None,
            footer: None,
        }
    }
}

impl LoaderConfig {
    /// Per-user configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.toml"))
    }

    /// Load configuration from `path` (or the per-user file) or return defaults.
    ///
    /// An explicitly given path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {:?}", path);
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: LoaderConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        tracing::debug!(path = ?config_path, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Build an empty page carrying the configured links and static markup
    pub fn build_page(&self) -> Page {
        let links = self
            .links
            .iter()
            .map(|link| NavLink::new(link.href.clone(), link.label.clone()))
            .collect();

        let mut page = Page::new(links);
        if let Some(ref header) = self.header {
            page = page.with_header(header.clone());
        }
        if let Some(ref footer) = self.footer {
            page = page.with_footer(footer.clone());
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.default_section, "about");
        assert_eq!(config.suffix, ".html");
        assert_eq!(config.active_class, "active");
        assert!(!config.links.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LoaderConfig = toml::from_str("default_section = \"news\"\n").unwrap();
        assert_eq!(config.default_section, "news");
        assert_eq!(config.suffix, ".html");
        assert_eq!(config.links.len(), 4);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = LoaderConfig::default();
        config.suffix = ".htm".to_string();
        config.footer = Some("<footer/>".to_string());
        config.save(&path).unwrap();

        let loaded = LoaderConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded.suffix, ".htm");
        assert_eq!(loaded.footer.as_deref(), Some("<footer/>"));
    }

    #[test]
    fn test_missing_explicit_path() {
        let result = LoaderConfig::load_or_default(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_page() {
        let page = LoaderConfig::default().build_page();
        assert_eq!(page.links().len(), 4);
        assert_eq!(page.find_link("#download"), Some(1));
        assert_eq!(page.active_link(), None);
    }
}
