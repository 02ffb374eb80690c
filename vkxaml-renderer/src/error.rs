//! Error types for vkxaml-renderer.

use std::path::PathBuf;

use thiserror::Error;

use vkxaml_core::IdentifierError;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A palette or scheme key could not be turned into a resource key.
    #[error("invalid resource key: {0}")]
    Identifier(#[from] IdentifierError),

    /// A color in a selected scheme has no `color_identifier`.
    #[error("scheme color '{color}' has no color_identifier")]
    MissingColorIdentifier { color: String },
}
