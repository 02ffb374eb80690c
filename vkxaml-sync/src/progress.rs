//! Progress reporting and cooperative cancellation for a generation run.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use vkxaml_core::{Appearance, DocumentKind, SchemeName};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Severity of a [`ProgressEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Info,
    Warning,
    Error,
}

/// One step of a run, in the order the orchestrator performs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Fetching(DocumentKind),
    Parsing(DocumentKind),
    PaletteLoaded { kind: DocumentKind, colors: usize },
    SchemeSelection {
        kind: DocumentKind,
        dark: SchemeName,
        light: SchemeName,
        display_name: String,
    },
    /// A requested scheme had no entry with that name and appearance.
    SchemeMissing {
        kind: DocumentKind,
        name: SchemeName,
        appearance: Appearance,
    },
    Generated { file_name: &'static str },
    Failed(String),
}

impl ProgressEvent {
    pub fn level(&self) -> ProgressLevel {
        match self {
            ProgressEvent::SchemeMissing { .. } => ProgressLevel::Warning,
            ProgressEvent::Failed(_) => ProgressLevel::Error,
            _ => ProgressLevel::Info,
        }
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Fetching(kind) => write!(f, "Getting {kind}..."),
            ProgressEvent::Parsing(kind) => write!(f, "Parsing {kind}..."),
            ProgressEvent::PaletteLoaded { kind, colors } => {
                write!(f, "Total colors in {kind}: {colors}. Generating XAML...")
            }
            ProgressEvent::SchemeSelection {
                kind,
                dark,
                light,
                display_name,
            } => write!(
                f,
                "Parsing {kind}: \"{dark}\" and \"{light}\" for \"{display_name}\"..."
            ),
            ProgressEvent::SchemeMissing {
                kind,
                name,
                appearance,
            } => write!(
                f,
                "No {appearance} scheme \"{name}\" in {kind}; its theme will be empty"
            ),
            ProgressEvent::Generated { file_name } => write!(f, "{file_name} generated."),
            ProgressEvent::Failed(message) => write!(f, "{message}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Receives progress events. Purely informational: a run behaves the same
/// with or without a listener.
pub trait ProgressListener {
    fn on_progress(&self, event: &ProgressEvent);
}

impl<F> ProgressListener for F
where
    F: Fn(&ProgressEvent),
{
    fn on_progress(&self, event: &ProgressEvent) {
        self(event)
    }
}

/// Forwards events over a channel; a dropped receiver is ignored.
impl ProgressListener for Sender<ProgressEvent> {
    fn on_progress(&self, event: &ProgressEvent) {
        let _ = self.send(event.clone());
    }
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Shared flag checked by the orchestrator between steps. Clones observe the
/// same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn levels() {
        assert_eq!(
            ProgressEvent::Fetching(DocumentKind::Palette).level(),
            ProgressLevel::Info
        );
        assert_eq!(
            ProgressEvent::SchemeMissing {
                kind: DocumentKind::Scheme,
                name: SchemeName::from("space_gray"),
                appearance: Appearance::Dark,
            }
            .level(),
            ProgressLevel::Warning
        );
        assert_eq!(ProgressEvent::Failed("x".into()).level(), ProgressLevel::Error);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            ProgressEvent::Fetching(DocumentKind::PaletteMessages).to_string(),
            "Getting messages palette..."
        );
        assert_eq!(
            ProgressEvent::Generated { file_name: "VKScheme.xaml" }.to_string(),
            "VKScheme.xaml generated."
        );
    }

    #[test]
    fn sender_listener_forwards_events() {
        let (tx, rx) = mpsc::channel();
        tx.on_progress(&ProgressEvent::Parsing(DocumentKind::Scheme));
        assert_eq!(rx.recv().unwrap(), ProgressEvent::Parsing(DocumentKind::Scheme));
    }

    #[test]
    fn sender_listener_ignores_closed_channel() {
        let (tx, rx) = mpsc::channel::<ProgressEvent>();
        drop(rx);
        tx.on_progress(&ProgressEvent::Parsing(DocumentKind::Scheme));
    }

    #[test]
    fn cancel_token_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
