//! snake_case key → XAML resource identifier.
//!
//! Palette and scheme renderers both go through [`format_key`], which is what
//! makes a brush's `StaticResource` reference land on the palette color
//! emitted for the same raw key.

use crate::error::IdentifierError;

/// Prefix shared by every generated resource key.
pub const KEY_PREFIX: &str = "VK";

/// Suffix for palette color resources.
pub const COLOR_SUFFIX: &str = "Color";

/// Suffix for scheme brush resources.
pub const BRUSH_SUFFIX: &str = "Brush";

/// Convert `key` into `VK` + PascalCase(`key`) + `suffix`.
///
/// Each `_`-separated segment gets its first character uppercased; the rest
/// of the segment is kept verbatim (`azure_A100` → `VKAzureA100`).
pub fn format_key(key: &str, suffix: &str) -> Result<String, IdentifierError> {
    let mut out = String::with_capacity(KEY_PREFIX.len() + key.len() + suffix.len());
    out.push_str(KEY_PREFIX);
    for segment in key.split('_') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(IdentifierError::EmptySegment {
                key: key.to_owned(),
            });
        };
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out.push_str(suffix);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_suffix_is_appended() {
        assert_eq!(
            format_key("space_gray", COLOR_SUFFIX).unwrap(),
            "VKSpaceGrayColor"
        );
    }

    #[test]
    fn empty_suffix() {
        assert_eq!(format_key("bg_primary", "").unwrap(), "VKBgPrimary");
    }

    #[test]
    fn single_segment() {
        assert_eq!(format_key("white", BRUSH_SUFFIX).unwrap(), "VKWhiteBrush");
    }

    #[test]
    fn tail_of_segment_is_kept_verbatim() {
        assert_eq!(format_key("azure_A100", "").unwrap(), "VKAzureA100");
        assert_eq!(format_key("gray_900", COLOR_SUFFIX).unwrap(), "VKGray900Color");
    }

    #[test]
    fn empty_segments_are_rejected() {
        for key in ["", "_accent", "accent_", "im__bubble"] {
            let err = format_key(key, COLOR_SUFFIX).unwrap_err();
            assert_eq!(
                err,
                IdentifierError::EmptySegment {
                    key: key.to_owned()
                },
                "key {key:?}"
            );
        }
    }
}
