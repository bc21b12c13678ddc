//! The three conversion stages run over a skin package.
//!
//! Each stage walks the source tree, converts what it can and records
//! everything else in a [`StageReport`]. Only problems with the source or
//! output directory as a whole are returned as errors; a bad file is skipped
//! and the run continues.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::report::{Stage, StageReport};
use super::walker::{
    discover_themed_files, find_named_files, find_theme_dirs, sibling_image, ThemeDiscovery,
    ThemedFile,
};
use crate::constants::{DESCRIPTOR_EXTENSION, IMAGE_EXTENSION, RESOURCES_DIR};
use crate::export::{keyboard_layout_to_json, render_overlay, sprite_sheet_to_yaml, OverlayStyle};
use crate::models::InsetTransform;
use crate::parser::{read_keyboard_layout, read_sprite_sheet, StyleSheet};

/// Settings for [`convert_resources`].
#[derive(Debug, Clone)]
pub struct ResourcesOptions {
    /// Root of the converted skin
    pub output_dir: PathBuf,
    /// How descriptors are assigned to themes
    pub discovery: ThemeDiscovery,
    /// Inset computation policy
    pub transform: InsetTransform,
}

/// Settings for [`mark_edges`].
#[derive(Debug, Clone)]
pub struct EdgemarkOptions {
    /// Root of the overlay images
    pub output_dir: PathBuf,
    /// How descriptors are assigned to themes
    pub discovery: ThemeDiscovery,
    /// Overlay colors and sizes
    pub style: OverlayStyle,
}

/// Settings for [`convert_keyboards`].
#[derive(Debug, Clone)]
pub struct KeyboardOptions {
    /// Root of the keyboard JSON files
    pub output_dir: PathBuf,
    /// Style sheet file name inside each theme directory
    pub style_sheet: String,
    /// Layout file names to transcode
    pub layouts: Vec<String>,
}

/// Tracks destinations already written in a run.
#[derive(Debug, Default)]
struct Destinations {
    written: HashSet<PathBuf>,
}

impl Destinations {
    /// Claims `path`, or reports it as already taken.
    fn claim(&mut self, report: &mut StageReport, source: &Path, path: &Path) -> bool {
        if self.written.insert(path.to_path_buf()) {
            return true;
        }
        report.skipped(
            source,
            format!("output {} already written in this run", path.display()),
        );
        false
    }
}

/// Checks that `source` is a directory and that `output` does not point at it.
///
/// # Errors
///
/// Returns an error if the source directory is missing or the two paths
/// resolve to the same directory.
pub fn check_directories(source: &Path, output: &Path) -> Result<()> {
    if !source.is_dir() {
        anyhow::bail!("Source directory not found: {}", source.display());
    }

    let source_abs = source
        .canonicalize()
        .context(format!("Failed to resolve source directory: {}", source.display()))?;
    let output_abs = if output.exists() {
        output
            .canonicalize()
            .context(format!("Failed to resolve output directory: {}", output.display()))?
    } else {
        output.to_path_buf()
    };

    if source_abs == output_abs {
        anyhow::bail!(
            "Output directory must differ from the source directory: {}",
            output.display()
        );
    }

    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    create_parent(path)?;
    fs::write(path, content).context(format!("Failed to write file: {}", path.display()))
}

/// Converts every descriptor under `source` into Hamster resource YAML.
///
/// For `<theme>/.../<stem>.til` this writes
/// `<output>/<theme>/resources/<stem>.yaml` and copies the sprite sheet next
/// to it as `<stem>.png`. A missing sprite sheet is reported as a warning;
/// the YAML is still written.
///
/// # Errors
///
/// Returns an error if the source directory cannot be walked.
pub fn convert_resources(source: &Path, options: &ResourcesOptions) -> Result<StageReport> {
    let mut report = StageReport::new(Stage::Resources, &options.output_dir);
    let mut destinations = Destinations::default();

    for file in discover_themed_files(source, DESCRIPTOR_EXTENSION, options.discovery)? {
        let stem = file_stem(&file.path);
        let resources_dir = options
            .output_dir
            .join(&file.theme)
            .join(RESOURCES_DIR);
        let yaml_path = resources_dir.join(format!("{stem}.yaml"));

        if !destinations.claim(&mut report, &file.path, &yaml_path) {
            continue;
        }

        if let Err(err) = convert_descriptor(&file, &yaml_path, options.transform) {
            report.skipped(&file.path, format!("{err:#}"));
            continue;
        }

        let image = sibling_image(&file.path);
        if image.is_file() {
            let copy_path = resources_dir.join(format!("{stem}.{IMAGE_EXTENSION}"));
            if let Err(err) = fs::copy(&image, &copy_path) {
                report.warning(format!(
                    "Failed to copy {} to {}: {err}",
                    image.display(),
                    copy_path.display()
                ));
            }
        } else {
            report.warning(format!(
                "Sprite sheet not found, YAML written without image: {}",
                image.display()
            ));
        }

        report.converted(&file.path, &yaml_path);
    }

    Ok(report)
}

fn convert_descriptor(file: &ThemedFile, yaml_path: &Path, transform: InsetTransform) -> Result<()> {
    let sheet = read_sprite_sheet(&file.path)?;
    if sheet.is_empty() {
        debug!("No sprite sections in {}", file.path.display());
    }
    let yaml = sprite_sheet_to_yaml(&sheet, transform)?;
    write_output(yaml_path, &yaml)
}

/// Draws debug overlays for every descriptor under `source`.
///
/// For `<theme>/.../<stem>.til` with a sibling `<stem>.png` this writes
/// `<output>/<theme>/<stem>.png`. Descriptors without a sprite sheet are
/// skipped.
///
/// # Errors
///
/// Returns an error if the source directory cannot be walked.
pub fn mark_edges(source: &Path, options: &EdgemarkOptions) -> Result<StageReport> {
    let mut report = StageReport::new(Stage::Edgemark, &options.output_dir);
    let mut destinations = Destinations::default();

    for file in discover_themed_files(source, DESCRIPTOR_EXTENSION, options.discovery)? {
        let image = sibling_image(&file.path);
        if !image.is_file() {
            report.skipped(
                &file.path,
                format!("Sprite sheet not found: {}", image.display()),
            );
            continue;
        }

        let output_path = options
            .output_dir
            .join(&file.theme)
            .join(format!("{}.{IMAGE_EXTENSION}", file_stem(&file.path)));

        if !destinations.claim(&mut report, &file.path, &output_path) {
            continue;
        }

        let result = read_sprite_sheet(&file.path).and_then(|sheet| {
            create_parent(&output_path)?;
            render_overlay(&image, &sheet, &options.style, &output_path)
        });

        match result {
            Ok(()) => report.converted(&file.path, &output_path),
            Err(err) => report.skipped(&file.path, format!("{err:#}")),
        }
    }

    Ok(report)
}

/// Transcodes keyboard layouts for every theme directory under `source`.
///
/// Theme directories are directories named `dark` or `light` anywhere in the
/// tree. Each needs the configured style sheet; a theme without one is
/// skipped. Every configured layout found in the theme is written to
/// `<output>/<theme>/<layout stem>.json`.
///
/// # Errors
///
/// Returns an error if the source directory cannot be walked.
pub fn convert_keyboards(source: &Path, options: &KeyboardOptions) -> Result<StageReport> {
    let mut report = StageReport::new(Stage::Keyboard, &options.output_dir);

    let themes = find_theme_dirs(source)?;
    if themes.is_empty() {
        report.warning(format!(
            "No theme directories found in {}",
            source.display()
        ));
    }

    let mut wanted = options.layouts.clone();
    wanted.push(options.style_sheet.clone());

    for (theme, dir) in &themes {
        let files = find_named_files(source, dir, &wanted)?;

        let Some(style_path) = files.get(&options.style_sheet) else {
            report.skipped(dir, format!("No {} in theme directory", options.style_sheet));
            continue;
        };

        let styles = match StyleSheet::load(style_path) {
            Ok(styles) => styles,
            Err(err) => {
                report.skipped(style_path, format!("{err:#}"));
                continue;
            }
        };

        for layout in &options.layouts {
            let Some(layout_path) = files.get(layout) else {
                debug!("Layout {layout} not present in {}", dir.display());
                continue;
            };

            let output_path = options
                .output_dir
                .join(theme)
                .join(format!("{}.json", file_stem(layout_path)));

            let result = read_keyboard_layout(layout_path, &styles)
                .and_then(|keys| keyboard_layout_to_json(&keys))
                .and_then(|json| write_output(&output_path, &json));

            match result {
                Ok(()) => report.converted(layout_path, &output_path),
                Err(err) => report.skipped(layout_path, format!("{err:#}")),
            }
        }
    }

    Ok(report)
}
