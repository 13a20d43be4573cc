//! Section fragment loading for the project website
//!
//! This module handles:
//! - Deriving the section to show from a page location or link href
//! - Fetching `<section>.html` fragments over HTTP or from a local tree
//! - Swapping the fragment shown after the navigation element

mod loader;
mod page;
mod section;
mod source;

pub use loader::{FragmentLoader, Navigation};
pub use page::{NavLink, Node, Page};
pub use section::SectionId;
pub use source::{DirFragmentSource, FragmentSource, HttpFragmentSource, LoadError};

use std::sync::Arc;

/// Pick a fragment source for `site`: an `http(s)://` URL or a directory
pub fn source_for(site: &str) -> anyhow::Result<Arc<dyn FragmentSource>> {
    if site.starts_with("http://") || site.starts_with("https://") {
        Ok(Arc::new(HttpFragmentSource::new(site)?))
    } else {
        Ok(Arc::new(DirFragmentSource::new(site)))
    }
}
