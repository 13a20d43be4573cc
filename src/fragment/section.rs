//! Section identifiers derived from URL fragments

/// Name of a page section, taken from the part of a URL after `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section identifier from a raw name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Section named by a page location, or `None` if it has no `#`.
    ///
    /// A bare trailing `#` names the empty section.
    pub fn from_location(location: &str) -> Option<Self> {
        let (_, fragment) = location.split_once('#')?;
        Some(Self::new(fragment))
    }

    /// Section targeted by a navigation link.
    ///
    /// A link without a `#` names its whole href as the section.
    pub fn from_href(href: &str) -> Self {
        match href.split_once('#') {
            Some((_, fragment)) => Self::new(fragment),
            None => Self::new(href),
        }
    }

    /// Raw section name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource path for this section, e.g. `about` + `.html`
    pub fn resource(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
