//! Skin package directory walking.
//!
//! Finds descriptor files per theme, pairs them with their sprite sheets,
//! and filters out the landscape asset family. All listings are sorted so a
//! run visits files in a stable order.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{FALLBACK_THEME, IMAGE_EXTENSION, LANDSCAPE_MARKER, THEME_DIRS};

/// How descriptor files are assigned to themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeDiscovery {
    /// Walk `<source>/dark` and `<source>/light`
    #[default]
    Subdirs,
    /// Walk the whole source tree and classify files by `dark`/`light` in
    /// their relative path, falling back to `other`
    PathMatch,
}

/// A file found under a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedFile {
    /// Theme name (`dark`, `light` or `other`)
    pub theme: String,
    /// Path of the file below the source directory
    pub path: PathBuf,
}

/// True when `path` belongs to the landscape asset family.
///
/// Only the part of the path below `root` is inspected, so a source directory
/// whose own name happens to contain the marker is still processed.
#[must_use]
pub fn is_landscape(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().contains(LANDSCAPE_MARKER)
}

/// Theme of a source-relative path in [`ThemeDiscovery::PathMatch`] mode.
#[must_use]
pub fn classify_theme(relative: &Path) -> &'static str {
    let text = relative.to_string_lossy();
    THEME_DIRS
        .iter()
        .copied()
        .find(|theme| text.contains(theme))
        .unwrap_or(FALLBACK_THEME)
}

/// Sprite sheet paired with a descriptor (same stem, `.png` extension).
#[must_use]
pub fn sibling_image(descriptor: &Path) -> PathBuf {
    descriptor.with_extension(IMAGE_EXTENSION)
}

/// Sibling directory of `source` named `<source name><suffix>`.
///
/// # Errors
///
/// Returns an error if `source` has no final path component.
pub fn default_output_dir(source: &Path, suffix: &str) -> Result<PathBuf> {
    let absolute = if source.is_absolute() {
        source.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to determine current directory")?
            .join(source)
    };

    let name = absolute
        .file_name()
        .context(format!(
            "Source directory has no name: {}",
            source.display()
        ))?
        .to_string_lossy();
    let parent = absolute.parent().unwrap_or_else(|| Path::new(""));

    Ok(parent.join(format!("{name}{suffix}")))
}

/// Recursively collects files below `dir` matching `filter`, sorted by path.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn collect_files<F>(dir: &Path, filter: &F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut files = Vec::new();
    collect_files_recursive(dir, filter, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files_recursive<F>(dir: &Path, filter: &F, files: &mut Vec<PathBuf>) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    let entries =
        fs::read_dir(dir).context(format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .context(format!("Failed to read file type: {}", path.display()))?;

        // Symlinked directories are not followed.
        if file_type.is_dir() {
            collect_files_recursive(&path, filter, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            debug!("Not following directory symlink: {}", path.display());
        } else if filter(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Recursively collects directories below `dir` whose name is one of `names`.
fn collect_dirs_named(dir: &Path, names: &[&str], found: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).context(format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .context(format!("Failed to read file type: {}", path.display()))?
            .is_dir();
        if !is_dir {
            continue;
        }

        if path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|dir_name| names.contains(&dir_name))
        {
            found.push(path.clone());
        }
        collect_dirs_named(&path, names, found)?;
    }

    Ok(())
}

/// ASCII case-insensitive, so `keys.TIL` counts as a descriptor.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Finds every file with `extension` per theme, skipping landscape assets.
///
/// # Errors
///
/// Returns an error if the source tree cannot be read.
pub fn discover_themed_files(
    source: &Path,
    extension: &str,
    discovery: ThemeDiscovery,
) -> Result<Vec<ThemedFile>> {
    let filter = |path: &Path| has_extension(path, extension);
    let mut themed = Vec::new();

    match discovery {
        ThemeDiscovery::Subdirs => {
            for theme in THEME_DIRS {
                let theme_dir = source.join(theme);
                if !theme_dir.is_dir() {
                    warn!(
                        "Theme directory '{theme}' not found in source: {}",
                        theme_dir.display()
                    );
                    continue;
                }

                for path in collect_files(&theme_dir, &filter)? {
                    themed.push(ThemedFile {
                        theme: theme.to_string(),
                        path,
                    });
                }
            }
        }
        ThemeDiscovery::PathMatch => {
            for path in collect_files(source, &filter)? {
                let relative = path.strip_prefix(source).unwrap_or(&path);
                themed.push(ThemedFile {
                    theme: classify_theme(relative).to_string(),
                    path,
                });
            }
        }
    }

    let (kept, landscape): (Vec<_>, Vec<_>) = themed
        .into_iter()
        .partition(|file| !is_landscape(source, &file.path));
    for file in &landscape {
        debug!("Skipping landscape asset: {}", file.path.display());
    }

    Ok(kept)
}

/// Finds theme directories (any directory named `dark` or `light`) below
/// `source`, keyed by theme name.
///
/// When a theme name occurs more than once the first directory in path order
/// is used and the others are reported. Landscape directories are ignored.
///
/// # Errors
///
/// Returns an error if the source tree cannot be read.
pub fn find_theme_dirs(source: &Path) -> Result<IndexMap<String, PathBuf>> {
    let mut found = Vec::new();
    collect_dirs_named(source, &THEME_DIRS, &mut found)?;
    found.sort();

    let mut themes: IndexMap<String, PathBuf> = IndexMap::new();
    for dir in found {
        if is_landscape(source, &dir) {
            debug!("Skipping landscape theme directory: {}", dir.display());
            continue;
        }

        let theme = dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if let Some(existing) = themes.get(&theme) {
            warn!(
                "Ignoring duplicate '{theme}' directory {} (using {})",
                dir.display(),
                existing.display()
            );
            continue;
        }
        themes.insert(theme, dir);
    }

    Ok(themes)
}

/// Finds files below `dir` whose names are in `names`, skipping landscape
/// assets. The first match in path order wins for each name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn find_named_files(
    root: &Path,
    dir: &Path,
    names: &[String],
) -> Result<IndexMap<String, PathBuf>> {
    let filter = |path: &Path| {
        path.file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|file_name| names.iter().any(|name| name == file_name))
    };

    let mut found: IndexMap<String, PathBuf> = IndexMap::new();
    for path in collect_files(dir, &filter)? {
        if is_landscape(root, &path) {
            debug!("Skipping landscape asset: {}", path.display());
            continue;
        }
        let name = path
            .file_name()
            .map(|file_name| file_name.to_string_lossy().to_string())
            .unwrap_or_default();
        found.entry(name).or_insert(path);
    }

    Ok(found)
}
