//! Tolerant reader for the INI dialect used throughout Baidu skin packages.
//!
//! Skin files are "almost INI": they may start with a byte-order mark, contain
//! stray lines that are neither headers nor assignments, and repeat keys
//! inside a section (the style sheet does this). The rules are:
//!
//! - Blank lines and lines starting with `;` or `#` are ignored.
//! - `[NAME]` opens a section. Repeated headers extend the earlier section.
//! - `key=value` is split on the first `=`; both sides are trimmed. Every
//!   value of a repeated key is kept in order.
//! - Any other line is skipped with a warning.
//! - An assignment before the first section header is a structural error.
//!
//! Key lookups are ASCII case-insensitive; section names are matched exactly.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Keys of one section with all of their values, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    entries: IndexMap<String, Vec<String>>,
}

impl IniSection {
    fn push(&mut self, key: &str, value: &str) {
        self.entries
            .entry(key.to_ascii_uppercase())
            .or_default()
            .push(value.to_string());
    }

    /// True if the section assigns `key` at least once.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_ascii_uppercase())
    }

    /// Last value assigned to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values(key).last().map(String::as_str)
    }

    /// First value assigned to `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key).first().map(String::as_str)
    }

    /// Every value assigned to `key`, in file order.
    #[must_use]
    pub fn values(&self, key: &str) -> &[String] {
        self.entries
            .get(&key.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the section has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parsed INI document, sections in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: IndexMap<String, IniSection>,
}

impl IniDocument {
    /// Parses INI text. `origin` names the source in warnings and errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a `key=value` line appears before any section header.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut document = Self::default();
        let mut current: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                let name = name.trim().to_string();
                document.sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let Some(section) = current.as_ref() else {
                    anyhow::bail!(
                        "{origin}:{line_number}: assignment outside of any section: {line}"
                    );
                };
                document
                    .sections
                    .entry(section.clone())
                    .or_default()
                    .push(key.trim(), value.trim());
                continue;
            }

            warn!("{origin}:{line_number}: ignoring invalid line: {line}");
        }

        Ok(document)
    }

    /// Section by exact name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    /// Iterates over `(name, section)` pairs in file order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IniSection)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Reads and parses an INI file (UTF-8, optional byte-order mark).
///
/// # Errors
///
/// Returns an error if the file cannot be read or is structurally invalid.
pub fn read_ini(path: &Path) -> Result<IniDocument> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read skin file: {}", path.display()))?;

    IniDocument::parse(&content, &path.display().to_string())
        .context(format!("Failed to parse skin file: {}", path.display()))
}
