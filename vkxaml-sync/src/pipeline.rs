//! Fetch-and-assemble orchestrator shared by the CLI commands.
//!
//! A run is strictly sequential: four fetches, then parse + render per
//! document. It either returns all four outputs or an error; it never writes
//! to disk (see [`crate::writer`]).

use std::collections::BTreeMap;

use serde_json::from_str;

use vkxaml_core::{
    Appearance, DocumentKind, PaletteDocument, RenderStamp, SchemeDocument, SchemeSelection,
};
use vkxaml_renderer::Renderer;

use crate::fetch::Fetcher;
use crate::progress::{CancelToken, ProgressEvent, ProgressListener};
use crate::SyncError;

/// Output file name → generated XAML.
pub type GeneratedFiles = BTreeMap<String, String>;

/// Parameters of a run that are not collaborators.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub selection: SchemeSelection,
    /// Shared by all four outputs of the run.
    pub stamp: RenderStamp,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            selection: SchemeSelection::default(),
            stamp: RenderStamp::now(),
        }
    }
}

/// Raw bodies of the four source documents, in fetch order.
struct Sources {
    palette: String,
    palette_messages: String,
    scheme: String,
    scheme_messages: String,
}

struct Run<'a> {
    fetcher: &'a dyn Fetcher,
    renderer: &'a Renderer,
    options: &'a RunOptions,
    progress: Option<&'a dyn ProgressListener>,
    cancel: &'a CancelToken,
}

impl Run<'_> {
    fn report(&self, event: ProgressEvent) {
        tracing::debug!("{event}");
        if let Some(listener) = self.progress {
            listener.on_progress(&event);
        }
    }

    fn checkpoint(&self) -> Result<(), SyncError> {
        if self.cancel.is_cancelled() {
            return Err(SyncError::Cancelled);
        }
        Ok(())
    }

    fn fetch(&self, kind: DocumentKind) -> Result<String, SyncError> {
        self.checkpoint()?;
        self.report(ProgressEvent::Fetching(kind));
        Ok(self.fetcher.fetch(kind.source_file())?)
    }

    fn fetch_all(&self) -> Result<Sources, SyncError> {
        Ok(Sources {
            palette: self.fetch(DocumentKind::Palette)?,
            palette_messages: self.fetch(DocumentKind::PaletteMessages)?,
            scheme: self.fetch(DocumentKind::Scheme)?,
            scheme_messages: self.fetch(DocumentKind::SchemeMessages)?,
        })
    }

    fn palette(&self, kind: DocumentKind, body: &str) -> Result<String, SyncError> {
        self.checkpoint()?;
        self.report(ProgressEvent::Parsing(kind));
        let palette: PaletteDocument = parse(kind, body)?;
        self.report(ProgressEvent::PaletteLoaded {
            kind,
            colors: palette.len(),
        });
        Ok(self.renderer.render_palette(&palette, &self.options.stamp)?)
    }

    fn schemes(&self, kind: DocumentKind, body: &str) -> Result<String, SyncError> {
        self.checkpoint()?;
        self.report(ProgressEvent::Parsing(kind));
        let schemes: SchemeDocument = parse(kind, body)?;
        let selection = &self.options.selection;
        self.report(ProgressEvent::SchemeSelection {
            kind,
            dark: selection.dark.clone(),
            light: selection.light.clone(),
            display_name: selection.display_name.clone(),
        });
        for (name, appearance) in [
            (&selection.dark, Appearance::Dark),
            (&selection.light, Appearance::Light),
        ] {
            if schemes.select(name, appearance).is_none() {
                self.report(ProgressEvent::SchemeMissing {
                    kind,
                    name: name.clone(),
                    appearance,
                });
            }
        }
        Ok(self.renderer.render_schemes(
            kind == DocumentKind::SchemeMessages,
            &schemes,
            selection,
            &self.options.stamp,
        )?)
    }

    fn execute(&self) -> Result<GeneratedFiles, SyncError> {
        let sources = self.fetch_all()?;
        let mut files = GeneratedFiles::new();

        for (kind, body) in [
            (DocumentKind::Palette, &sources.palette),
            (DocumentKind::PaletteMessages, &sources.palette_messages),
        ] {
            let xaml = self.palette(kind, body)?;
            files.insert(kind.output_file().to_string(), xaml);
            self.report(ProgressEvent::Generated {
                file_name: kind.output_file(),
            });
        }

        for (kind, body) in [
            (DocumentKind::Scheme, &sources.scheme),
            (DocumentKind::SchemeMessages, &sources.scheme_messages),
        ] {
            let xaml = self.schemes(kind, body)?;
            files.insert(kind.output_file().to_string(), xaml);
            self.report(ProgressEvent::Generated {
                file_name: kind.output_file(),
            });
        }

        Ok(files)
    }
}

fn parse<T: serde::de::DeserializeOwned>(kind: DocumentKind, body: &str) -> Result<T, SyncError> {
    from_str(body).map_err(|source| SyncError::Parse {
        source_file: kind.source_file(),
        source,
    })
}

/// Fetch the four source documents and render the four XAML dictionaries.
///
/// Any fetch, parse or render failure aborts the run: the error is reported
/// to `progress` as [`ProgressEvent::Failed`] and returned, and no outputs
/// are produced. A missing dark/light scheme is not a failure.
pub fn run(
    fetcher: &dyn Fetcher,
    renderer: &Renderer,
    options: &RunOptions,
    progress: Option<&dyn ProgressListener>,
    cancel: &CancelToken,
) -> Result<GeneratedFiles, SyncError> {
    let run = Run {
        fetcher,
        renderer,
        options,
        progress,
        cancel,
    };
    run.execute().inspect_err(|err| {
        tracing::debug!("generation failed: {err}");
        run.report(ProgressEvent::Failed(err.to_string()));
    })
}
