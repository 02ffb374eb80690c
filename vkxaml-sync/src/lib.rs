//! # vkxaml-sync
//!
//! Fetch-and-assemble orchestration and the atomic output writer.
//!
//! Call [`run`] with a [`Fetcher`] to obtain the four generated dictionaries,
//! then [`write_outputs`] to place them on disk.

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod progress;
pub mod writer;

pub use error::{FetchError, SyncError};
pub use fetch::{is_not_found, DirFetcher, Fetcher, HttpFetcher};
pub use pipeline::{run, GeneratedFiles, RunOptions};
pub use progress::{CancelToken, ProgressEvent, ProgressLevel, ProgressListener};
pub use writer::{write_outputs, WriteResult};
