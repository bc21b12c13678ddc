//! Sprite descriptor (`.til`) reader.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use super::ini::{read_ini, IniDocument};
use crate::models::{Rect, SpriteSection, SpriteSheet};

/// Key holding a sprite's bounds.
pub const SOURCE_RECT_KEY: &str = "SOURCE_RECT";

/// Key holding a sprite's stretchable content area.
pub const INNER_RECT_KEY: &str = "INNER_RECT";

/// Reads a descriptor file into a [`SpriteSheet`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is structurally invalid.
pub fn read_sprite_sheet(path: &Path) -> Result<SpriteSheet> {
    let document = read_ini(path)?;
    Ok(sprite_sheet_from_ini(&document, &path.display().to_string()))
}

/// Extracts sprites from a parsed descriptor.
///
/// Sections without `SOURCE_RECT` are not sprites and are left out silently.
/// A `SOURCE_RECT` that does not parse drops the section with a warning; an
/// unparsable `INNER_RECT` is reported and treated as absent.
#[must_use]
pub fn sprite_sheet_from_ini(document: &IniDocument, origin: &str) -> SpriteSheet {
    let mut sheet = SpriteSheet::default();

    for (name, section) in document.sections() {
        let Some(source) = section.get(SOURCE_RECT_KEY) else {
            debug!("{origin}: section [{name}] has no {SOURCE_RECT_KEY}, skipping");
            continue;
        };

        let rect: Rect = match source.parse() {
            Ok(rect) => rect,
            Err(e) => {
                warn!("{origin}: section [{name}] skipped: {e:#}");
                continue;
            }
        };

        let inner = section
            .get(INNER_RECT_KEY)
            .and_then(|value| match value.parse::<Rect>() {
                Ok(inner) => Some(inner),
                Err(e) => {
                    warn!("{origin}: ignoring {INNER_RECT_KEY} of [{name}]: {e:#}");
                    None
                }
            });

        sheet.sections.push(SpriteSection {
            name: name.to_string(),
            rect,
            inner,
        });
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sheet_from(content: &str) -> SpriteSheet {
        let document = IniDocument::parse(content, "test.til").unwrap();
        sprite_sheet_from_ini(&document, "test.til")
    }

    #[test]
    fn test_reads_rects_in_file_order() {
        let sheet = sheet_from(
            "[IMG2]\nSOURCE_RECT=0,0,10,10\n[IMG1]\nSOURCE_RECT=10,0,10,10\nINNER_RECT=12,2,6,6\n",
        );

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.sections[0].name, "IMG2");
        assert_eq!(sheet.sections[0].inner, None);
        assert_eq!(sheet.sections[1].name, "IMG1");
        assert_eq!(sheet.sections[1].inner, Some(Rect::new(12, 2, 6, 6)));
    }

    #[test]
    fn test_section_without_source_rect_is_excluded() {
        let sheet = sheet_from("[INFO]\nVERSION=3\n[IMG1]\nSOURCE_RECT=0,0,1,1\n");
        assert_eq!(sheet.len(), 1);
        assert!(sheet.get("INFO").is_none());
        assert!(sheet.get("IMG1").is_some());
    }

    #[test]
    fn test_malformed_source_rect_is_excluded() {
        let sheet = sheet_from("[IMG1]\nSOURCE_RECT=0,0,1\n[IMG2]\nSOURCE_RECT=0,0,1,1\n");
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.sections[0].name, "IMG2");
    }

    #[test]
    fn test_malformed_inner_rect_is_ignored() {
        let sheet = sheet_from("[IMG1]\nSOURCE_RECT=0,0,10,10\nINNER_RECT=oops\n");
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.sections[0].inner, None);
    }

    #[test]
    fn test_read_sprite_sheet_with_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keys.til");
        fs::write(&path, "\u{feff}[IMG3]\r\nSOURCE_RECT=10,20,100,100\r\nINNER_RECT=15,25,90,80\r\n")
            .unwrap();

        let sheet = read_sprite_sheet(&path).unwrap();
        let section = sheet.get("IMG3").unwrap();
        assert_eq!(section.rect, Rect::new(10, 20, 100, 100));
        assert_eq!(section.inner, Some(Rect::new(15, 25, 90, 80)));
    }
}
