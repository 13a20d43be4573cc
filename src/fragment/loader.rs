//! Fragment loader: keeps the page section in sync with navigation

use super::page::Page;
use super::section::SectionId;
use super::source::FragmentSource;
use crate::config::LoaderConfig;
use anyhow::Result;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Whether the default action of a navigation event should go ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    /// Let the browser follow the link (updates the location hash)
    Proceed,
    /// Suppress the default action
    Prevent,
}

/// Loads section fragments into a shared page.
///
/// Loads are not serialized. If several are in flight at once, each one
/// replaces the section when its fetch completes, so the last fetch to
/// finish decides what is shown.
pub struct FragmentLoader {
    page: Arc<Mutex<Page>>,
    source: Arc<dyn FragmentSource>,
    config: LoaderConfig,
}

impl FragmentLoader {
    /// Create a loader for `page`, fetching from `source`
    pub fn new(page: Arc<Mutex<Page>>, source: Arc<dyn FragmentSource>, config: LoaderConfig) -> Self {
        Self {
            page,
            source,
            config,
        }
    }

    /// Shared page this loader writes to
    pub fn page(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    /// Loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn lock_page(&self) -> MutexGuard<'_, Page> {
        // A poisoned page is still structurally valid
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Load the section named by `location`, or the default section when
    /// the location has no fragment
    pub async fn init(&self, location: &str) -> Navigation {
        let section = SectionId::from_location(location)
            .unwrap_or_else(|| SectionId::new(self.config.default_section.clone()));

        tracing::debug!(location, section = %section, "initial section");
        self.load_section(&section.resource(&self.config.suffix)).await
    }

    /// Handle activation of the navigation link at `index`
    pub async fn click(&self, index: usize) -> Result<Navigation> {
        let href = {
            let mut page = self.lock_page();

            let href = match page.link(index) {
                Some(link) => link.href.clone(),
                None => anyhow::bail!("No navigation link at index {}", index),
            };

            if page.is_active(index) {
                tracing::debug!(index, "link already active");
                return Ok(Navigation::Prevent);
            }

            page.activate(index);
            href
        };

        let section = SectionId::from_href(&href);
        Ok(self.load_section(&section.resource(&self.config.suffix)).await)
    }

    /// Handle activation of the first link whose href is `href`
    pub async fn click_href(&self, href: &str) -> Result<Navigation> {
        let index = self
            .lock_page()
            .find_link(href)
            .ok_or_else(|| anyhow::anyhow!("No navigation link with href {:?}", href))?;

        self.click(index).await
    }

    /// Fetch `path` and show it after the navigation element.
    ///
    /// Failures are logged and leave the current section in place.
    pub async fn load_section(&self, path: &str) -> Navigation {
        match self.source.fetch(path).await {
            Ok(html) => {
                let replaced = self.lock_page().replace_section(html);
                tracing::info!(path, replaced = replaced.is_some(), "section loaded");
            }
            Err(e) => {
                tracing::warn!(
                    path,
                    source = %self.source.describe(),
                    status = ?e.status(),
                    error = %e,
                    "failed to load section"
                );
            }
        }

        Navigation::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::page::NavLink;
    use crate::fragment::source::LoadError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    /// In-memory source recording every requested path
    #[derive(Default)]
    struct MockSource {
        fragments: HashMap<String, (String, u64)>,
        unreachable: Vec<String>,
        requests: Mutex<Vec<String>>,
    }

    impl MockSource {
        fn with(mut self, path: &str, html: &str, delay_ms: u64) -> Self {
            self.fragments
                .insert(path.to_string(), (html.to_string(), delay_ms));
            self
        }

        fn unreachable(mut self, path: &str) -> Self {
            self.unreachable.push(path.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FragmentSource for MockSource {
        async fn fetch(&self, path: &str) -> Result<String, LoadError> {
            self.requests.lock().unwrap().push(path.to_string());

            if self.unreachable.iter().any(|p| p == path) {
                return Err(LoadError::Request {
                    url: path.to_string(),
                    reason: "connection refused".to_string(),
                });
            }

            match self.fragments.get(path) {
                Some((html, delay_ms)) => {
                    tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                    Ok(html.clone())
                }
                None => Err(LoadError::Status {
                    url: path.to_string(),
                    status: 404,
                    reason: "Not Found".to_string(),
                }),
            }
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    fn loader(source: Arc<MockSource>) -> FragmentLoader {
        let page = Page::new(vec![
            NavLink::new("index.html#about", "About"),
            NavLink::new("index.html#download", "Download"),
            NavLink::new("index.html#screenshots", "Screenshots"),
        ]);

        FragmentLoader::new(Arc::new(Mutex::new(page)), source, LoaderConfig::default())
    }

    fn sources() -> MockSource {
        MockSource::default()
            .with("about.html", "<section>about</section>", 0)
            .with("download.html", "<section>download</section>", 0)
            .with("foo.html", "<section>foo</section>", 0)
    }

    #[tokio::test]
    async fn test_init_loads_default_section_once() {
        let source = Arc::new(sources());
        let loader = loader(source.clone());

        loader.init("http://eina.sf.net/index.html").await;

        assert_eq!(source.requests(), vec!["about.html"]);
        let page = loader.page();
        let page = page.lock().unwrap();
        assert_eq!(page.current_section(), Some("<section>about</section>"));
    }

    #[tokio::test]
    async fn test_init_loads_hash_section() {
        let source = Arc::new(sources());
        let loader = loader(source.clone());

        loader.init("http://eina.sf.net/index.html#foo").await;

        assert_eq!(source.requests(), vec!["foo.html"]);
    }

    #[tokio::test]
    async fn test_init_with_empty_hash_requests_bare_suffix() {
        let source = Arc::new(sources());
        let loader = loader(source.clone());

        loader.init("http://eina.sf.net/index.html#").await;

        assert_eq!(source.requests(), vec![".html"]);
        let page = loader.page();
        assert_eq!(page.lock().unwrap().current_section(), None);
    }

    #[tokio::test]
    async fn test_click_active_link_is_noop() {
        let source = Arc::new(sources());
        let loader = loader(source.clone());

        assert_eq!(loader.click(1).await.unwrap(), Navigation::Proceed);
        assert_eq!(loader.click(1).await.unwrap(), Navigation::Prevent);

        assert_eq!(source.requests(), vec!["download.html"]);
    }

    #[tokio::test]
    async fn test_click_moves_active_marker() {
        let source = Arc::new(sources());
        let loader = loader(source.clone());

        loader.click(0).await.unwrap();
        loader.click(1).await.unwrap();

        let page = loader.page();
        let page = page.lock().unwrap();
        assert_eq!(page.active_link(), Some(1));
        assert_eq!(page.links().iter().filter(|l| l.active).count(), 1);
        assert_eq!(page.current_section(), Some("<section>download</section>"));
        assert_eq!(page.section_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_section() {
        let source = Arc::new(sources());
        let loader = loader(source.clone());

        loader.init("/").await;
        let outcome = loader.click(2).await.unwrap();

        assert_eq!(outcome, Navigation::Proceed);
        assert_eq!(source.requests(), vec!["about.html", "screenshots.html"]);

        let page = loader.page();
        let page = page.lock().unwrap();
        assert_eq!(page.current_section(), Some("<section>about</section>"));
        assert_eq!(page.active_link(), Some(2));
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_page() {
        let source = Arc::new(sources().unreachable("download.html"));
        let loader = loader(source.clone());

        loader.init("/").await;
        let outcome = loader.click(1).await.unwrap();

        assert_eq!(outcome, Navigation::Proceed);
        assert_eq!(source.requests(), vec!["about.html", "download.html"]);

        let page = loader.page();
        let page = page.lock().unwrap();
        assert_eq!(page.current_section(), Some("<section>about</section>"));
        assert_eq!(page.section_count(), 1);
        assert_eq!(page.active_link(), Some(1));
    }

    #[tokio::test]
    async fn test_click_out_of_range() {
        let loader = loader(Arc::new(sources()));
        assert!(loader.click(9).await.is_err());
        assert!(loader.click_href("#nowhere").await.is_err());
    }

    #[tokio::test]
    async fn test_last_completed_load_wins() {
        let source = Arc::new(
            MockSource::default()
                .with("about.html", "<section>slow</section>", 80)
                .with("download.html", "<section>fast</section>", 5),
        );
        let loader = loader(source.clone());

        let (first, second) = tokio::join!(loader.click(0), loader.click(1));
        first.unwrap();
        second.unwrap();

        let page = loader.page();
        let page = page.lock().unwrap();
        assert_eq!(page.current_section(), Some("<section>slow</section>"));
        assert_eq!(page.active_link(), Some(1));
        assert_eq!(page.section_count(), 1);
    }
}
