//! # vkxaml-renderer
//!
//! Tera-based renderer that turns VK Appearance palettes and schemes into
//! XAML resource dictionaries.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vkxaml_core::{PaletteDocument, RenderStamp};
//! use vkxaml_renderer::Renderer;
//!
//! fn render(palette: &PaletteDocument) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(xaml) = renderer.render_palette(palette, &RenderStamp::now()) {
//!             println!("{xaml}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{PaletteContext, SchemeColorsContext, SchemeContext};
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
