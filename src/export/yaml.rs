//! Hamster resource YAML for one sprite sheet.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

use crate::models::{InsetTransform, SpriteRecord, SpriteSheet};

/// Serializes a sprite sheet to Hamster resource YAML.
///
/// Each section becomes `NAME: {rect: {x, y, width, height}, insets?: {...}}`,
/// in descriptor order. `insets` is present only for sections with an inner
/// rectangle.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn sprite_sheet_to_yaml(sheet: &SpriteSheet, transform: InsetTransform) -> Result<String> {
    let records: IndexMap<&str, SpriteRecord> = sheet
        .sections
        .iter()
        .map(|section| {
            let record = section.to_record(transform);
            if record.insets.is_some_and(|insets| insets.has_negative()) {
                debug!(
                    "{}: inner rectangle extends outside {}, insets are negative",
                    section.name, section.rect
                );
            }
            (section.name.as_str(), record)
        })
        .collect();

    serde_yml::to_string(&records).context("Failed to serialize sprite sheet to YAML")
}
