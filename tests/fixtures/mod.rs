//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Descriptor with one sprite carrying insets and one without.
pub const KEYS_DESCRIPTOR: &str = "\u{feff}[IMG1]\r\nSOURCE_RECT=0,0,120,120\r\nINNER_RECT=10,20,100,90\r\n\r\n[IMG2]\r\nSOURCE_RECT=120,0,40,40\r\n";

/// Descriptor whose inner rectangle equals its outer rectangle.
pub const DEGENERATE_DESCRIPTOR: &str = "[IMG1]\nSOURCE_RECT=0,0,100,100\nINNER_RECT=0,0,100,100\n";

/// Style sheet with a background style and one usable foreground style.
pub const STYLE_SHEET: &str = "\
[STYLE1]
NM_IMG=keys.png,1
HL_IMG=keys.png,2

[STYLE2]
NM_IMG=\"fore.png,7\"

[STYLE3]
HL_IMG=fore.png,8
";

/// Layout with a space key and a letter key.
pub const PY_26_LAYOUT: &str = "\
[KEY1]
CENTER=F38
BACK_STYLE=1
FORE_STYLE=2,3

[KEY2]
CENTER=Q
BACK_STYLE=9
";

/// Path to the hamster-skin binary
pub fn hamster_skin_bin() -> &'static str {
    env!("CARGO_BIN_EXE_hamster-skin")
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Writes a white PNG of the given size to `root/relative`.
pub fn write_png(root: &Path, relative: &str, width: u32, height: u32) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
        .save(&path)
        .unwrap();
    path
}

/// Creates a small skin package in a temp directory.
///
/// Layout below `<temp>/skin`:
/// - `dark/keys.til` + `dark/keys.png` (200x200)
/// - `dark/orphan.til` (no sprite sheet)
/// - `dark/land/keys_land.til` + png (landscape, always ignored)
/// - `dark/default.css`, `dark/keyboard/py_26.ini`
/// - `light/keys.til` (degenerate insets) + `light/keys.png`
/// - `light/py_26.ini` (no style sheet, theme skipped by keyboard)
///
/// Returns the temp dir (keep it alive) and the source path.
pub fn create_skin_package() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = temp_dir.path().join("skin");

    write_file(&source, "dark/keys.til", KEYS_DESCRIPTOR);
    write_png(&source, "dark/keys.png", 200, 200);
    write_file(&source, "dark/orphan.til", "[IMG5]\nSOURCE_RECT=0,0,10,10\n");
    write_file(&source, "dark/land/keys_land.til", KEYS_DESCRIPTOR);
    write_png(&source, "dark/land/keys_land.png", 200, 200);
    write_file(&source, "dark/default.css", STYLE_SHEET);
    write_file(&source, "dark/keyboard/py_26.ini", PY_26_LAYOUT);

    write_file(&source, "light/keys.til", DEGENERATE_DESCRIPTOR);
    write_png(&source, "light/keys.png", 120, 120);
    write_file(&source, "light/py_26.ini", PY_26_LAYOUT);

    (temp_dir, source)
}

/// Parses YAML written by the resources stage.
pub fn read_yaml(path: &Path) -> serde_yml::Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_yml::from_str(&content).expect("Should parse YAML output")
}

/// Parses JSON printed to stdout.
pub fn parse_stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_str(&String::from_utf8_lossy(stdout)).expect("Should parse JSON output")
}
