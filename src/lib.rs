//! Eina tools - developer utilities for the Eina music player
//!
//! This library provides the section fragment loader used by the project
//! website, the accessor identifier extractor for the C sources, and the
//! GObject class skeleton generator.

pub mod cli;
pub mod config;
pub mod fragment;
pub mod gobject;
pub mod idents;

/// Re-export commonly used types
pub use config::LoaderConfig;
pub use fragment::{FragmentLoader, FragmentSource, Navigation, Page, SectionId};
pub use idents::{format_list, IdentifierExtractor, Prefix};

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "eina-tools";
