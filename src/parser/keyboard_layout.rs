//! Baidu keyboard layout (`py_26.ini`, `num_9.ini`, ...) transcoder.
//!
//! Every section with a `CENTER` label describes one key. Its `BACK_STYLE`
//! and `FORE_STYLE` indexes are resolved against the theme's style sheet to
//! produce Hamster [`KeyRecord`]s.

use anyhow::Result;
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

use super::ini::{read_ini, IniDocument, IniSection};
use super::style_sheet::StyleSheet;
use crate::constants::resolve_key_alias;
use crate::models::KeyRecord;

/// Key label of a key section.
pub const CENTER_KEY: &str = "CENTER";

/// Background style index of a key section.
pub const BACK_STYLE_KEY: &str = "BACK_STYLE";

/// Comma-separated foreground style indexes of a key section.
pub const FORE_STYLE_KEY: &str = "FORE_STYLE";

/// Key records of one layout, keyed by Hamster key name in file order.
pub type KeyboardLayout = IndexMap<String, KeyRecord>;

/// Reads a layout file and resolves every key against `styles`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is structurally invalid.
pub fn read_keyboard_layout(path: &Path, styles: &StyleSheet) -> Result<KeyboardLayout> {
    let document = read_ini(path)?;
    Ok(transcode_layout(&document, styles))
}

/// Resolves every key section of a parsed layout.
///
/// A key whose styles cannot be resolved is still emitted with empty styles.
/// When two sections map to the same key name the later one wins, keeping the
/// position of the first.
#[must_use]
pub fn transcode_layout(document: &IniDocument, styles: &StyleSheet) -> KeyboardLayout {
    let mut layout = KeyboardLayout::new();

    for (name, section) in document.sections() {
        let Some(label) = section.get(CENTER_KEY) else {
            continue;
        };

        let key_name = resolve_key_alias(label).to_string();
        let record = transcode_key(section, styles);
        if record.is_empty() {
            debug!("Key [{name}] '{key_name}' has no resolvable styles");
        }
        layout.insert(key_name, record);
    }

    layout
}

/// Resolves the background and foreground styles of one key section.
///
/// Foreground indexes whose style has no normal image are skipped; the other
/// foreground entries are kept.
#[must_use]
pub fn transcode_key(section: &IniSection, styles: &StyleSheet) -> KeyRecord {
    let background_style = section
        .get(BACK_STYLE_KEY)
        .map(|index| styles.resolve_images(index));

    let foreground_style = section
        .get(FORE_STYLE_KEY)
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|index| !index.is_empty())
                .filter(|index| styles.has_normal_image(index))
                .map(|index| styles.resolve_images(index))
                .collect()
        })
        .unwrap_or_default();

    KeyRecord {
        background_style,
        foreground_style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageRef, StyleImages};

    const STYLES: &str = "\
[STYLE1]
NM_IMG=keys.png,1
HL_IMG=keys.png,2
[STYLE2]
NM_IMG=fore.png,5
[STYLE3]
HL_IMG=fore.png,6
";

    fn layout(content: &str) -> KeyboardLayout {
        let styles = StyleSheet::new(IniDocument::parse(STYLES, "default.css").unwrap());
        let document = IniDocument::parse(content, "py_26.ini").unwrap();
        transcode_layout(&document, &styles)
    }

    #[test]
    fn test_alias_resolves_display_name() {
        let keys = layout("[KEY1]\nCENTER=F38\nBACK_STYLE=1\n");
        assert!(keys.contains_key("space"));
        assert!(!keys.contains_key("F38"));
    }

    #[test]
    fn test_raw_label_used_without_alias() {
        let keys = layout("[KEY1]\nCENTER=q\n");
        assert!(keys.contains_key("q"));
    }

    #[test]
    fn test_sections_without_center_are_ignored() {
        let keys = layout("[PANEL]\nBACK_STYLE=1\n[KEY1]\nCENTER=a\n");
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_background_style_resolution() {
        let keys = layout("[KEY1]\nCENTER=a\nBACK_STYLE=1\n");
        assert_eq!(
            keys["a"].background_style,
            Some(StyleImages {
                normal_image: Some(ImageRef::new("keys.png", "IMG1")),
                highlight_image: Some(ImageRef::new("keys.png", "IMG2")),
            })
        );
    }

    #[test]
    fn test_unresolvable_background_keeps_empty_images() {
        let keys = layout("[KEY1]\nCENTER=a\nBACK_STYLE=99\n");
        assert_eq!(keys["a"].background_style, Some(StyleImages::default()));
    }

    #[test]
    fn test_foreground_skips_styles_without_normal_image() {
        let keys = layout("[KEY1]\nCENTER=a\nFORE_STYLE=2,3,99,1\n");
        let fore = &keys["a"].foreground_style;

        assert_eq!(fore.len(), 2);
        assert_eq!(fore[0].normal_image, Some(ImageRef::new("fore.png", "IMG5")));
        assert_eq!(fore[0].highlight_image, None);
        assert_eq!(fore[1].normal_image, Some(ImageRef::new("keys.png", "IMG1")));
    }

    #[test]
    fn test_key_without_styles_is_still_present() {
        let keys = layout("[KEY1]\nCENTER=F36\n");
        let record = &keys["backspace"];
        assert!(record.is_empty());
    }

    #[test]
    fn test_later_duplicate_key_wins_but_keeps_position() {
        let keys = layout("[K1]\nCENTER=a\n[K2]\nCENTER=b\n[K3]\nCENTER=a\nBACK_STYLE=1\n");
        let names: Vec<_> = keys.keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(keys["a"].background_style.is_some());
    }
}
