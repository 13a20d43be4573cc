//! CLI interface using clap
//!
//! Provides the command-line interface for the Eina tools

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Eina developer tools
#[derive(Parser, Debug)]
#[command(name = "eina-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List accessor identifiers used in a source file
    Idents(IdentsArgs),

    /// Load website sections the way the site navigation does
    Fragment(FragmentArgs),

    /// Generate a GObject class skeleton
    Gobject(GobjectArgs),

    /// Show or write the fragment loader configuration
    Config(ConfigArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for idents command
#[derive(Parser, Debug)]
pub struct IdentsArgs {
    /// Source file to scan
    pub file: PathBuf,
}

/// Arguments for fragment command
#[derive(Parser, Debug)]
pub struct FragmentArgs {
    /// Site root: an http(s) URL or a local directory
    pub site: String,

    /// Page location to start from (e.g. "index.html#download")
    #[arg(short, long, default_value = "index.html")]
    pub location: String,

    /// Navigation link hrefs to click, in order
    #[arg(short, long)]
    pub click: Vec<String>,

    /// Loader configuration file
    #[arg(long, env = "EINA_TOOLS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for gobject command
#[derive(Parser, Debug)]
pub struct GobjectArgs {
    /// Full class name, CamelCase (e.g. EinaCover)
    pub class_camel: String,

    /// Class name, lower_case (derived from the class name by default)
    #[arg(long)]
    pub class_lower: Option<String>,

    /// Package name, UPPER_CASE (derived from the class name by default)
    #[arg(long)]
    pub package: Option<String>,

    /// Object name, UPPER_CASE (derived from the class name by default)
    #[arg(long)]
    pub object: Option<String>,

    /// Parent type macro
    #[arg(long, default_value = "G_TYPE_OBJECT")]
    pub parent: String,

    /// Parent class name, CamelCase
    #[arg(long, default_value = "GObject")]
    pub parent_camel: String,

    /// Include a private struct
    #[arg(long)]
    pub private: bool,

    /// Include property get/set
    #[arg(long)]
    pub props: bool,

    /// Include dispose
    #[arg(long)]
    pub dispose: bool,

    /// Include finalize
    #[arg(long)]
    pub finalize: bool,

    /// Write <name>.h and <name>.c here instead of stdout
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Configuration file to read (defaults to the per-user file)
    #[arg(long, env = "EINA_TOOLS_CONFIG")]
    pub path: Option<PathBuf>,

    /// Write the effective configuration to this file
    #[arg(long)]
    pub write: Option<PathBuf>,

    /// Write the effective configuration to the per-user file
    #[arg(long, conflicts_with = "write")]
    pub init: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
