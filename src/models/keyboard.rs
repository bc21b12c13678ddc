//! Hamster keyboard style records.
//!
//! These types serialize directly to the per-layout JSON documents. Style
//! references that could not be resolved are written as empty objects (`{}`)
//! rather than omitted, so every key in the source layout shows up in the
//! output.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Reference to one slice of a sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Sprite sheet file name (as written in the style sheet)
    pub file: String,
    /// Section name inside the sheet's descriptor (e.g. "IMG12")
    pub image: String,
}

impl ImageRef {
    /// Creates a new image reference.
    #[must_use]
    pub fn new(file: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            image: image.into(),
        }
    }
}

/// Visual state of a key a style entry is looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleState {
    /// Resting key (`NM_IMG`)
    Normal,
    /// Pressed key (`HL_IMG`)
    Highlight,
}

impl StyleState {
    /// Style sheet key holding the image for this state.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Normal => "NM_IMG",
            Self::Highlight => "HL_IMG",
        }
    }
}

/// Normal and highlighted images of one style entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleImages {
    /// Image shown at rest
    #[serde(serialize_with = "object_or_empty")]
    pub normal_image: Option<ImageRef>,
    /// Image shown while pressed
    #[serde(serialize_with = "object_or_empty")]
    pub highlight_image: Option<ImageRef>,
}

/// Background and foreground styles of one key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    /// Key background (`BACK_STYLE`)
    #[serde(serialize_with = "object_or_empty")]
    pub background_style: Option<StyleImages>,
    /// Key foreground layers (`FORE_STYLE`), in declaration order
    pub foreground_style: Vec<StyleImages>,
}

impl KeyRecord {
    /// True when neither a background nor any foreground style resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background_style.is_none() && self.foreground_style.is_empty()
    }
}

/// Writes `Some(value)` as the value itself and `None` as `{}`.
#[allow(clippy::ref_option)]
fn object_or_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
