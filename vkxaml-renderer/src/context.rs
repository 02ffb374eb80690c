//! Template contexts: serializable rendering payloads built from the source
//! documents.
//!
//! Resource identifiers are resolved here, through [`format_key`], before
//! anything reaches a template; templates only lay text out.

use serde::{Deserialize, Serialize};

use vkxaml_core::identifier::{BRUSH_SUFFIX, COLOR_SUFFIX};
use vkxaml_core::{format_key, ColorMap, DocumentKind, PaletteDocument, RenderStamp, SchemeName};

use crate::error::RenderError;

/// Header and version data shared by every dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub tool_version: String,
    /// `YYYY/MM/DD`.
    pub generated_on: String,
    pub version: u32,
}

impl MetaCtx {
    pub fn from_stamp(stamp: &RenderStamp) -> Self {
        MetaCtx {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_on: stamp.header_date(),
            version: stamp.version,
        }
    }
}

/// One `<Color>` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorCtx {
    pub key: String,
    pub value: String,
}

/// Payload for `palette.xaml.tera`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteContext {
    pub meta: MetaCtx,
    pub colors: Vec<ColorCtx>,
}

impl PaletteContext {
    pub fn from_palette(palette: &PaletteDocument, stamp: &RenderStamp) -> Result<Self, RenderError> {
        let colors = palette
            .iter()
            .map(|(name, value)| -> Result<ColorCtx, RenderError> {
                Ok(ColorCtx {
                    key: format_key(name, COLOR_SUFFIX)?,
                    value: value.clone(),
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(PaletteContext {
            meta: MetaCtx::from_stamp(stamp),
            colors,
        })
    }
}

/// One `<SolidColorBrush>` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushCtx {
    pub key: String,
    /// Full markup-extension value, e.g. `{StaticResource VKWhiteColor}`.
    pub color: String,
}

/// Payload for `scheme_colors.xaml.tera`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemeColorsContext {
    pub brushes: Vec<BrushCtx>,
}

impl SchemeColorsContext {
    /// `None` (selection miss) yields no brushes.
    pub fn from_colors(colors: Option<&ColorMap>) -> Result<Self, RenderError> {
        let Some(colors) = colors else {
            return Ok(SchemeColorsContext::default());
        };
        let brushes = colors
            .iter()
            .map(|(name, reference)| -> Result<BrushCtx, RenderError> {
                let identifier = reference
                    .identifier()
                    .ok_or_else(|| RenderError::MissingColorIdentifier {
                        color: name.clone(),
                    })?;
                let color_key = format_key(identifier, COLOR_SUFFIX)?;
                Ok(BrushCtx {
                    key: format_key(name, BRUSH_SUFFIX)?,
                    color: format!("{{StaticResource {color_key}}}"),
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;
        Ok(SchemeColorsContext { brushes })
    }
}

/// One themed sub-dictionary; `body` is already-rendered brush lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeCtx {
    pub scheme_name: String,
    pub body: String,
}

/// Payload for `scheme.xaml.tera`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeContext {
    pub meta: MetaCtx,
    pub source_file: String,
    pub name_key: String,
    pub version_key: String,
    pub display_name: String,
    pub dark: ThemeCtx,
    pub light: ThemeCtx,
}

impl SchemeContext {
    /// Resource keys and provenance differ between the main and the messages
    /// scheme; everything else is shared.
    pub fn new(
        for_messages: bool,
        display_name: &str,
        stamp: &RenderStamp,
        dark: (&SchemeName, String),
        light: (&SchemeName, String),
    ) -> Self {
        let (kind, name_key, version_key) = if for_messages {
            (
                DocumentKind::SchemeMessages,
                "VKUIMessagesSchemeName",
                "VKUIMessagesSchemeVersion",
            )
        } else {
            (DocumentKind::Scheme, "VKUISchemeName", "VKUISchemeVersion")
        };
        SchemeContext {
            meta: MetaCtx::from_stamp(stamp),
            source_file: kind.source_file().to_string(),
            name_key: name_key.to_string(),
            version_key: version_key.to_string(),
            display_name: display_name.to_string(),
            dark: ThemeCtx {
                scheme_name: dark.0.to_string(),
                body: dark.1,
            },
            light: ThemeCtx {
                scheme_name: light.0.to_string(),
                body: light.1,
            },
        }
    }
}

/// Convert any context to a [`tera::Context`] for rendering.
pub fn to_tera_context<T: Serialize>(ctx: &T) -> Result<tera::Context, RenderError> {
    tera::Context::from_serialize(ctx).map_err(RenderError::from)
}
