//! Hamster keyboard style JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::parser::KeyboardLayout;

/// Serializes a transcoded layout to JSON with four-space indentation.
///
/// Key order follows the layout file; non-ASCII key names are written as-is.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn keyboard_layout_to_json(layout: &KeyboardLayout) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    layout
        .serialize(&mut serializer)
        .context("Failed to serialize keyboard layout to JSON")?;

    String::from_utf8(buffer).context("Serialized keyboard layout is not valid UTF-8")
}
