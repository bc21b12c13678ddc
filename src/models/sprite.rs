//! Sprite sheet descriptor model.

use serde::Serialize;

use super::rect::{InsetTransform, Insets, Rect};

/// One named sprite (`[IMG<n>]` stanza) from a descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSection {
    /// Section name as written in the descriptor (e.g. "IMG12")
    pub name: String,
    /// Sprite bounds on the sheet (`SOURCE_RECT`)
    pub rect: Rect,
    /// Stretchable content area (`INNER_RECT`), if declared
    pub inner: Option<Rect>,
}

impl SpriteSection {
    /// Creates a section without an inner rectangle.
    #[must_use]
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
            inner: None,
        }
    }

    /// Sets the inner rectangle.
    #[must_use]
    pub fn with_inner(mut self, inner: Rect) -> Self {
        self.inner = Some(inner);
        self
    }

    /// Display label used on overlays: the section name without its `IMG` prefix.
    #[must_use]
    pub fn label(&self) -> String {
        self.name.replace(crate::constants::SECTION_LABEL_PREFIX, "")
    }

    /// Converts the section into its Hamster resource record.
    #[must_use]
    pub fn to_record(&self, transform: InsetTransform) -> SpriteRecord {
        SpriteRecord {
            rect: self.rect,
            insets: transform.apply(&self.rect, self.inner.as_ref()),
        }
    }
}

/// Hamster resource record for one sprite: `{rect, insets?}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpriteRecord {
    /// Sprite bounds
    pub rect: Rect,
    /// Insets, omitted when the sprite declares no inner rectangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insets: Option<Insets>,
}

/// All sprites declared by one descriptor file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Sections with a usable `SOURCE_RECT`
    pub sections: Vec<SpriteSection>,
}

impl SpriteSheet {
    /// Number of sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the descriptor declared no usable sprite.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Looks up a section by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpriteSection> {
        self.sections.iter().find(|section| section.name == name)
    }
}
