//! Style sheet (`default.css`) lookups.
//!
//! Despite its extension the style sheet is INI: one `[STYLE<n>]` section per
//! style index, with `NM_IMG` / `HL_IMG` keys of the form `file,imageIndex`.
//! Keys may repeat; the first value is the one used.

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use super::ini::{read_ini, IniDocument};
use crate::constants::{IMAGE_REF_PREFIX, STYLE_SECTION_PREFIX};
use crate::models::{ImageRef, StyleImages, StyleState};

/// Parsed style sheet.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    document: IniDocument,
}

impl StyleSheet {
    /// Wraps an already parsed document.
    #[must_use]
    pub const fn new(document: IniDocument) -> Self {
        Self { document }
    }

    /// Reads a style sheet from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is structurally invalid.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(read_ini(path)?))
    }

    fn entry(&self, index: &str, key: &str) -> Option<&str> {
        self.document
            .section(&format!("{STYLE_SECTION_PREFIX}{index}"))?
            .first(key)
    }

    /// True if `STYLE<index>` defines a normal-state image.
    #[must_use]
    pub fn has_normal_image(&self, index: &str) -> bool {
        self.entry(index.trim(), StyleState::Normal.key()).is_some()
    }

    /// Resolves the image of style `index` for `state`.
    ///
    /// Returns `None` (and logs why) when the style, the state key, or a
    /// well-formed `file,imageIndex` value is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamster_skin::models::{ImageRef, StyleState};
    /// use hamster_skin::parser::ini::IniDocument;
    /// use hamster_skin::parser::style_sheet::StyleSheet;
    ///
    /// let doc = IniDocument::parse("[STYLE7]\nNM_IMG=\"skin.png,12\"\n", "default.css").unwrap();
    /// let sheet = StyleSheet::new(doc);
    /// assert_eq!(
    ///     sheet.resolve("7", StyleState::Normal),
    ///     Some(ImageRef::new("skin.png", "IMG12"))
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, index: &str, state: StyleState) -> Option<ImageRef> {
        let index = index.trim();
        let key = state.key();

        let Some(value) = self.entry(index, key) else {
            warn!("Style {index} or type {key} not found in style sheet");
            return None;
        };

        let value = value.trim().trim_matches('"');
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [file, image] if !file.is_empty() && !image.is_empty() => Some(ImageRef::new(
                *file,
                format!("{IMAGE_REF_PREFIX}{image}"),
            )),
            _ => {
                warn!("Malformed {key} value for style {index}: '{value}'");
                None
            }
        }
    }

    /// Resolves both states of style `index`.
    #[must_use]
    pub fn resolve_images(&self, index: &str) -> StyleImages {
        StyleImages {
            normal_image: self.resolve(index, StyleState::Normal),
            highlight_image: self.resolve(index, StyleState::Highlight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(content: &str) -> StyleSheet {
        StyleSheet::new(IniDocument::parse(content, "default.css").unwrap())
    }

    #[test]
    fn test_resolve_normal_image() {
        let sheet = sheet("[STYLE7]\nNM_IMG = \"skin.png,12\"\n");
        assert_eq!(
            sheet.resolve("7", StyleState::Normal),
            Some(ImageRef::new("skin.png", "IMG12"))
        );
    }

    #[test]
    fn test_resolve_uses_first_duplicate_value() {
        let sheet = sheet("[STYLE1]\nHL_IMG=a.png,3\nHL_IMG=b.png,4\n");
        assert_eq!(
            sheet.resolve("1", StyleState::Highlight),
            Some(ImageRef::new("a.png", "IMG3"))
        );
    }

    #[test]
    fn test_missing_style_or_state_resolves_to_none() {
        let sheet = sheet("[STYLE1]\nNM_IMG=a.png,1\n");
        assert_eq!(sheet.resolve("2", StyleState::Normal), None);
        assert_eq!(sheet.resolve("1", StyleState::Highlight), None);
    }

    #[test]
    fn test_malformed_value_resolves_to_none() {
        let sheet = sheet("[STYLE1]\nNM_IMG=a.png\n[STYLE2]\nNM_IMG=a.png,1,2\n");
        assert_eq!(sheet.resolve("1", StyleState::Normal), None);
        assert_eq!(sheet.resolve("2", StyleState::Normal), None);
    }

    #[test]
    fn test_index_whitespace_is_ignored() {
        let sheet = sheet("[STYLE5]\nNM_IMG=k.png,9\n");
        assert!(sheet.has_normal_image(" 5"));
        assert!(sheet.resolve("5 ", StyleState::Normal).is_some());
    }

    #[test]
    fn test_resolve_images_is_partial() {
        let sheet = sheet("[STYLE3]\nNM_IMG=k.png,1\n");
        let images = sheet.resolve_images("3");
        assert_eq!(images.normal_image, Some(ImageRef::new("k.png", "IMG1")));
        assert_eq!(images.highlight_image, None);
    }
}
