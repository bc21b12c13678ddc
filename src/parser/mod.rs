//! Parsing for the file formats found in Baidu skin packages.
//!
//! This module handles the INI dialect shared by every skin file, sprite
//! descriptors, the style sheet, and keyboard layout descriptors.

pub mod ini;
pub mod keyboard_layout;
pub mod sprite;
pub mod style_sheet;

// Re-export commonly used functions
pub use keyboard_layout::{read_keyboard_layout, KeyboardLayout};
pub use sprite::read_sprite_sheet;
pub use style_sheet::StyleSheet;
