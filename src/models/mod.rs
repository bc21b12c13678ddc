//! Data models for sprite descriptors, insets and keyboard styles.
//!
//! Models are independent of file formats and of the directory walking done
//! by the conversion stages.

pub mod keyboard;
pub mod rect;
pub mod rgb;
pub mod sprite;

// Re-export all model types
pub use keyboard::{ImageRef, KeyRecord, StyleImages, StyleState};
pub use rect::{InsetTransform, Insets, Rect};
pub use rgb::RgbColor;
pub use sprite::{SpriteRecord, SpriteSection, SpriteSheet};
