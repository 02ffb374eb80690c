//! Source document retrieval.
//!
//! The orchestrator only sees the [`Fetcher`] trait; [`HttpFetcher`] reads the
//! upstream repository over HTTPS, [`DirFetcher`] reads a local checkout.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::FetchError;

/// Returns the raw body of a source document, addressed by its file name
/// (`palette.json`, ...).
pub trait Fetcher {
    fn fetch(&self, file_name: &str) -> Result<String, FetchError>;
}

// ---------------------------------------------------------------------------
// HttpFetcher
// ---------------------------------------------------------------------------

/// Blocking HTTP fetcher rooted at a base URL.
pub struct HttpFetcher {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("vkxaml/", env!("CARGO_PKG_VERSION")))
            .build();
        HttpFetcher {
            agent,
            base_url: base_url.into(),
        }
    }

    /// `<base_url>/<file_name>`, tolerating a missing trailing slash.
    pub fn url_for(&self, file_name: &str) -> String {
        join_url(&self.base_url, file_name)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, file_name: &str) -> Result<String, FetchError> {
        let url = self.url_for(file_name);
        tracing::debug!("GET {url}");
        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(status, _) => FetchError::Status {
                url: url.clone(),
                status,
            },
            ureq::Error::Transport(transport) => FetchError::Transport {
                url: url.clone(),
                message: transport.to_string(),
            },
        })?;
        response.into_string().map_err(|err| FetchError::Transport {
            url,
            message: err.to_string(),
        })
    }
}

pub(crate) fn join_url(base: &str, file_name: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{file_name}")
    } else {
        format!("{base}/{file_name}")
    }
}

// ---------------------------------------------------------------------------
// DirFetcher
// ---------------------------------------------------------------------------

/// Reads source documents from a local directory.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirFetcher { root: root.into() }
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, file_name: &str) -> Result<String, FetchError> {
        let path = self.root.join(file_name);
        tracing::debug!("read {}", path.display());
        std::fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })
    }
}

/// `true` when the error means the document does not exist at all.
pub fn is_not_found(err: &FetchError) -> bool {
    match err {
        FetchError::Status { status, .. } => *status == 404,
        FetchError::Io { source, .. } => source.kind() == ErrorKind::NotFound,
        FetchError::Transport { .. } => false,
    }
}
