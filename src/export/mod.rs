//! Output formats produced from a skin package.
//!
//! Hamster resource YAML for sprite sheets, keyboard style JSON for layouts,
//! and debug overlays drawn onto sprite sheet images.

pub mod keyboard_json;
pub mod overlay;
pub mod yaml;

pub use keyboard_json::keyboard_layout_to_json;
pub use overlay::{render_overlay, OverlayStyle};
pub use yaml::sprite_sheet_to_yaml;
