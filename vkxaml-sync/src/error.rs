//! Error types for vkxaml-sync.

use std::path::PathBuf;

use thiserror::Error;

use vkxaml_renderer::RenderError;

/// Failure to obtain one source document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// DNS, TLS, connection or body read failure.
    #[error("GET {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Reading a document from a local source directory failed.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// All errors that can arise from a generation run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A source document could not be fetched.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// A source document is not the JSON shape expected.
    #[error("failed to parse {source_file}: {source}")]
    Parse {
        source_file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The caller cancelled the run between two steps.
    #[error("generation cancelled")]
    Cancelled,

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
