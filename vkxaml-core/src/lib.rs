//! vkxaml core library: source document types, key formatting, version
//! stamps, configuration, errors.
//!
//! - [`types`] — palette / scheme documents and [`DocumentKind`]
//! - [`identifier`] — [`format_key`]
//! - [`version`] — [`RenderStamp`]
//! - [`config`] — load / save / init `~/.vkxaml/config.yaml`
//! - [`error`] — [`ConfigError`], [`IdentifierError`]

pub mod config;
pub mod error;
pub mod identifier;
pub mod types;
pub mod version;

pub use config::Config;
pub use error::{ConfigError, IdentifierError};
pub use identifier::format_key;
pub use types::{
    Appearance, ColorMap, ColorRef, DocumentKind, PaletteDocument, SchemeDocument, SchemeEntry,
    SchemeName, SchemeSelection,
};
pub use version::{version_at, RenderStamp};
