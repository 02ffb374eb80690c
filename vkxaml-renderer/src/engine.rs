//! Tera rendering engine: [`TemplateEngine`] and the XAML [`Renderer`].
//!
//! # Templates
//!
//! | Template                  | Produces                                   |
//! |---------------------------|--------------------------------------------|
//! | `palette.xaml.tera`       | `VKPalette.xaml`, `VKPaletteMessages.xaml` |
//! | `scheme.xaml.tera`        | `VKScheme.xaml`, `VKSchemeMessages.xaml`   |
//! | `scheme_colors.xaml.tera` | brush lines of one themed dictionary       |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Tera;

use vkxaml_core::{
    Appearance, ColorMap, PaletteDocument, RenderStamp, SchemeDocument, SchemeSelection,
};

use crate::context::{to_tera_context, PaletteContext, SchemeColorsContext, SchemeContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

pub const PALETTE_TEMPLATE: &str = "palette.xaml.tera";
pub const SCHEME_TEMPLATE: &str = "scheme.xaml.tera";
pub const SCHEME_COLORS_TEMPLATE: &str = "scheme_colors.xaml.tera";

const TPLS: &[(&str, &str)] = &[
    (PALETTE_TEMPLATE, include_str!("templates/palette.xaml.tera")),
    (SCHEME_TEMPLATE, include_str!("templates/scheme.xaml.tera")),
    (
        SCHEME_COLORS_TEMPLATE,
        include_str!("templates/scheme_colors.xaml.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path
            .strip_prefix(dir)
            .unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("template override: {name} ({})", path.display());
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults by name. Template names are normalised to lowercase relative paths.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render template `name` with `ctx`. Line endings are normalised to LF.
    pub fn render<T: Serialize>(&self, name: &str, ctx: &T) -> Result<String, RenderError> {
        let tera_ctx = to_tera_context(ctx)?;
        let content = self.tera.render(name, &tera_ctx)?;
        Ok(content.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Palette and scheme renderer. Create once and reuse; rendering is pure.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template_dir(None)
    }

    /// Construct a [`Renderer`] whose embedded templates may be overridden by
    /// `.tera` files in `dir`.
    pub fn with_template_dir(dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(dir)? })
    }

    /// Render a palette into a dictionary of `<Color>` resources plus the
    /// `VKUIPaletteVersion` string.
    pub fn render_palette(
        &self,
        palette: &PaletteDocument,
        stamp: &RenderStamp,
    ) -> Result<String, RenderError> {
        let ctx = PaletteContext::from_palette(palette, stamp)?;
        self.engine.render(PALETTE_TEMPLATE, &ctx)
    }

    /// Render the `Default` (dark) and `Light` themed dictionaries of a scheme
    /// document.
    ///
    /// A selection that matches no entry (name absent, or the named entry has
    /// the other appearance) is rendered as an empty themed dictionary.
    pub fn render_schemes(
        &self,
        for_messages: bool,
        schemes: &SchemeDocument,
        selection: &SchemeSelection,
        stamp: &RenderStamp,
    ) -> Result<String, RenderError> {
        let dark = schemes.select(&selection.dark, Appearance::Dark);
        let light = schemes.select(&selection.light, Appearance::Light);
        if dark.is_none() {
            tracing::warn!("no dark scheme named \"{}\"; Default theme left empty", selection.dark);
        }
        if light.is_none() {
            tracing::warn!("no light scheme named \"{}\"; Light theme left empty", selection.light);
        }

        let ctx = SchemeContext::new(
            for_messages,
            &selection.display_name,
            stamp,
            (&selection.dark, self.render_scheme_colors(dark)?),
            (&selection.light, self.render_scheme_colors(light)?),
        );
        self.engine.render(SCHEME_TEMPLATE, &ctx)
    }

    /// Render one `<SolidColorBrush>` line per color, in document order.
    /// `None` renders to an empty string.
    pub fn render_scheme_colors(&self, colors: Option<&ColorMap>) -> Result<String, RenderError> {
        if colors.is_none() {
            return Ok(String::new());
        }
        let ctx = SchemeColorsContext::from_colors(colors)?;
        self.engine.render(SCHEME_COLORS_TEMPLATE, &ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
