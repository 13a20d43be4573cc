//! Page context for the fragment loader
//!
//! A `Page` is the explicit stand-in for the browser document: a navigation
//! element holding the section links, plus the ordered body nodes around it.
//! Loaded fragments always live in the node directly after the navigation
//! element.

use serde::Serialize;

/// A link inside the navigation element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link destination, e.g. `#download`
    pub href: String,
    /// Visible link text
    pub label: String,
    /// Whether the link carries the active marker
    pub active: bool,
}

impl NavLink {
    /// Create an inactive link
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active: false,
        }
    }
}

/// A node in the page body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "html", rename_all = "snake_case")]
pub enum Node {
    /// The navigation element
    Nav,
    /// A loaded section fragment
    Section(String),
    /// Static markup that is never replaced
    Static(String),
}

/// Document model shared between the loader and its callers
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    links: Vec<NavLink>,
    body: Vec<Node>,
}

impl Page {
    /// Create a page whose body holds only the navigation element
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            body: vec![Node::Nav],
        }
    }

    /// Add static markup before the navigation element
    pub fn with_header(mut self, html: impl Into<String>) -> Self {
        let nav = self.nav_position();
        self.body.insert(nav, Node::Static(html.into()));
        self
    }

    /// Add static markup at the end of the body
    pub fn with_footer(mut self, html: impl Into<String>) -> Self {
        self.body.push(Node::Static(html.into()));
        self
    }

    /// Navigation links in document order
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Look up a link by index
    pub fn link(&self, index: usize) -> Option<&NavLink> {
        self.links.get(index)
    }

    /// Index of the first link whose href matches
    pub fn find_link(&self, href: &str) -> Option<usize> {
        self.links.iter().position(|link| link.href == href)
    }

    /// Index of the link carrying the active marker
    pub fn active_link(&self) -> Option<usize> {
        self.links.iter().position(|link| link.active)
    }

    /// Whether the link at `index` is active
    pub fn is_active(&self, index: usize) -> bool {
        self.links.get(index).is_some_and(|link| link.active)
    }

    /// Clear the active marker from every link, then set it on `index`.
    ///
    /// Returns `false` if there is no such link.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.links.len() {
            return false;
        }

        for link in &mut self.links {
            link.active = false;
        }
        self.links[index].active = true;
        true
    }

    /// Position of the navigation element in the body
    fn nav_position(&self) -> usize {
        self.body
            .iter()
            .position(|node| matches!(node, Node::Nav))
            .unwrap_or(0)
    }

    /// Section currently shown after the navigation element
    pub fn current_section(&self) -> Option<&str> {
        match self.body.get(self.nav_position() + 1) {
            Some(Node::Section(html)) => Some(html),
            _ => None,
        }
    }

    /// Number of section nodes in the body
    pub fn section_count(&self) -> usize {
        self.body
            .iter()
            .filter(|node| matches!(node, Node::Section(_)))
            .count()
    }

    /// Remove the section after the navigation element, if any, and insert
    /// `html` in its place. Returns the removed section.
    pub fn replace_section(&mut self, html: impl Into<String>) -> Option<String> {
        let slot = self.nav_position() + 1;

        let previous = match self.body.get(slot) {
            Some(Node::Section(_)) => match self.body.remove(slot) {
                Node::Section(old) => Some(old),
                _ => None,
            },
            _ => None,
        };

        self.body.insert(slot, Node::Section(html.into()));
        previous
    }

    /// Render the body as HTML, marking the active link with `active_class`
    pub fn render(&self, active_class: &str) -> String {
        let mut out = String::new();

        for node in &self.body {
            match node {
                Node::Nav => {
                    out.push_str("<nav>\n");
                    for link in &self.links {
                        if link.active {
                            out.push_str(&format!(
                                "  <a href=\"{}\" class=\"{}\">{}</a>\n",
                                link.href, active_class, link.label
                            ));
                        } else {
                            out.push_str(&format!(
                                "  <a href=\"{}\">{}</a>\n",
                                link.href, link.label
                            ));
                        }
                    }
                    out.push_str("</nav>\n");
                }
                Node::Section(html) | Node::Static(html) => {
                    out.push_str(html.trim_end());
                    out.push('\n');
                }
            }
        }

        out
    }
}
