//! Domain types for the VK Appearance source documents.
//!
//! Maps keep the key order of the source JSON (`IndexMap`); generated output
//! follows that order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of a scheme entry in a scheme document (`"space_gray"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeName(pub String);

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SchemeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SchemeName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for SchemeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Appearance declared by a scheme entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
    /// Anything else, or no appearance at all; never matches a selection.
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Dark => write!(f, "dark"),
            Appearance::Light => write!(f, "light"),
            Appearance::Other => write!(f, "other"),
        }
    }
}

/// The four documents the tool consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Palette,
    PaletteMessages,
    Scheme,
    SchemeMessages,
}

impl DocumentKind {
    /// All kinds in fetch order.
    pub fn all() -> &'static [DocumentKind] {
        &[
            DocumentKind::Palette,
            DocumentKind::PaletteMessages,
            DocumentKind::Scheme,
            DocumentKind::SchemeMessages,
        ]
    }

    /// JSON file name in the source repository.
    pub fn source_file(&self) -> &'static str {
        match self {
            DocumentKind::Palette         => "palette.json",
            DocumentKind::PaletteMessages => "palette_messages.json",
            DocumentKind::Scheme          => "scheme.json",
            DocumentKind::SchemeMessages  => "scheme_messages.json",
        }
    }

    /// Generated XAML file name.
    pub fn output_file(&self) -> &'static str {
        match self {
            DocumentKind::Palette         => "VKPalette.xaml",
            DocumentKind::PaletteMessages => "VKPaletteMessages.xaml",
            DocumentKind::Scheme          => "VKScheme.xaml",
            DocumentKind::SchemeMessages  => "VKSchemeMessages.xaml",
        }
    }

}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Palette         => write!(f, "palette"),
            DocumentKind::PaletteMessages => write!(f, "messages palette"),
            DocumentKind::Scheme          => write!(f, "schemes"),
            DocumentKind::SchemeMessages  => write!(f, "messages schemes"),
        }
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Flat color-name → color-value mapping (`"white": "#FFFFFF"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteDocument(pub IndexMap<String, String>);

impl PaletteDocument {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for PaletteDocument {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reference from a scheme color to a palette key. Other fields the source
/// carries (alpha multipliers and the like) are ignored.
///
/// The identifier is optional here so that a malformed entry in a scheme
/// nobody selected does not fail the whole document; the renderer rejects
/// a missing identifier in the selected maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_identifier: Option<String>,
}

impl ColorRef {
    pub fn identifier(&self) -> Option<&str> {
        self.color_identifier.as_deref()
    }
}

impl From<&str> for ColorRef {
    fn from(s: &str) -> Self {
        Self {
            color_identifier: Some(s.to_owned()),
        }
    }
}

/// Semantic color name → palette reference.
pub type ColorMap = IndexMap<String, ColorRef>;

/// One named variant in a scheme document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeEntry {
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub colors: ColorMap,
}

/// Scheme-name → scheme entry mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeDocument(pub IndexMap<String, SchemeEntry>);

impl SchemeDocument {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SchemeEntry)> {
        self.0.iter()
    }

    /// Colors of the entry named `name` whose appearance is `appearance`.
    ///
    /// A name that is absent, or present with another appearance, yields
    /// `None`; callers render an empty block for it.
    pub fn select(&self, name: &SchemeName, appearance: Appearance) -> Option<&ColorMap> {
        self.0
            .iter()
            .find(|(key, entry)| name == key.as_str() && entry.appearance == appearance)
            .map(|(_, entry)| &entry.colors)
    }
}

impl FromIterator<(String, SchemeEntry)> for SchemeDocument {
    fn from_iter<I: IntoIterator<Item = (String, SchemeEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Which schemes become the `Default` (dark) and `Light` themed dictionaries,
/// and the display name written next to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeSelection {
    pub dark: SchemeName,
    pub light: SchemeName,
    pub display_name: String,
}

impl Default for SchemeSelection {
    fn default() -> Self {
        Self {
            dark: SchemeName::from("space_gray"),
            light: SchemeName::from("bright_light"),
            display_name: "Milkshake".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(appearance: Appearance, colors: &[(&str, &str)]) -> SchemeEntry {
        SchemeEntry {
            appearance,
            colors: colors
                .iter()
                .map(|(k, v)| (k.to_string(), ColorRef::from(*v)))
                .collect(),
        }
    }

    #[test]
    fn newtype_display() {
        assert_eq!(SchemeName::from("space_gray").to_string(), "space_gray");
    }

    #[test]
    fn document_kind_file_names() {
        let outputs: Vec<_> = DocumentKind::all().iter().map(|k| k.output_file()).collect();
        assert_eq!(
            outputs,
            [
                "VKPalette.xaml",
                "VKPaletteMessages.xaml",
                "VKScheme.xaml",
                "VKSchemeMessages.xaml"
            ]
        );
        assert_eq!(DocumentKind::SchemeMessages.source_file(), "scheme_messages.json");
    }

    #[test]
    fn select_requires_matching_appearance() {
        let doc: SchemeDocument = [
            ("space_gray".to_string(), entry(Appearance::Light, &[("accent", "blue")])),
            ("bright_light".to_string(), entry(Appearance::Light, &[("accent", "azure_300")])),
        ]
        .into_iter()
        .collect();

        assert!(doc.select(&SchemeName::from("space_gray"), Appearance::Dark).is_none());
        let light = doc
            .select(&SchemeName::from("bright_light"), Appearance::Light)
            .expect("light selection");
        assert_eq!(light["accent"].identifier(), Some("azure_300"));
        assert!(doc.select(&SchemeName::from("missing"), Appearance::Light).is_none());
    }

    #[test]
    fn default_selection() {
        let sel = SchemeSelection::default();
        assert_eq!(sel.dark.0, "space_gray");
        assert_eq!(sel.light.0, "bright_light");
        assert_eq!(sel.display_name, "Milkshake");
    }

    #[test]
    fn appearance_display() {
        assert_eq!(Appearance::Dark.to_string(), "dark");
        assert_eq!(Appearance::Other.to_string(), "other");
        assert_eq!(Appearance::default(), Appearance::Other);
    }
}
