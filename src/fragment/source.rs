//! Fragment sources
//!
//! A source turns a section resource path (`download.html`) into the
//! fragment markup. Sources never retry and never cache: every call is a
//! fresh fetch.

use async_trait::async_trait;
use reqwest::Url;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Failure to fetch a fragment
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not name a reachable fragment resource
    #[error("invalid fragment path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The path resolves outside the origin of the site
    #[error("fragment {url} is not on origin {origin}")]
    CrossOrigin { url: String, origin: String },

    /// Transport-level failure (connection refused, reset, TLS)
    #[error("request for {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-2xx status
    #[error("request for {url} returned {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body could not be read as text
    #[error("malformed response for {url}: {reason}")]
    Body { url: String, reason: String },

    /// Local file access failed
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// HTTP status code, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Something that can fetch section fragments
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetch the fragment stored at `path`
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;

    /// Human-readable description used in logs
    fn describe(&self) -> String;
}

/// Fetches fragments over HTTP relative to a base URL
pub struct HttpFragmentSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpFragmentSource {
    /// Create a source rooted at `base` (e.g. `http://eina.sf.net/`)
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| anyhow::anyhow!("Invalid base URL {:?}: {}", base, e))?;

        Ok(Self {
            base,
            client: reqwest::Client::new(),
        })
    }

    /// Resolve a fragment path, keeping it on the base origin
    pub fn resolve(&self, path: &str) -> Result<Url, LoadError> {
        let url = self.base.join(path).map_err(|e| LoadError::InvalidPath {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        if url.origin() != self.base.origin() {
            return Err(LoadError::CrossOrigin {
                url: url.to_string(),
                origin: self.base.origin().ascii_serialization(),
            });
        }

        Ok(url)
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.resolve(path)?;
        tracing::debug!(url = %url, "fetching fragment");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LoadError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.text().await.map_err(|e| LoadError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

/// Reads fragments from a local directory (a checked-out site tree)
pub struct DirFragmentSource {
    root: PathBuf,
}

impl DirFragmentSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a fragment path to a file under the root
    pub fn resolve(&self, path: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(path);

        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        if path.is_empty() || !contained {
            return Err(LoadError::InvalidPath {
                path: path.to_string(),
                reason: "must be a relative path inside the site root".to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FragmentSource for DirFragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let file = self.resolve(path)?;
        tracing::debug!(path = ?file, "reading fragment");

        let bytes = tokio::fs::read(&file).await.map_err(|source| LoadError::Io {
            path: file.clone(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|e| LoadError::Body {
            url: file.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
