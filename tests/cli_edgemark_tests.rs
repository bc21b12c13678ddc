//! End-to-end tests for `hamster-skin edgemark` command.

use image::Rgba;
use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

const LABEL_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const LEFT_BLUE: Rgba<u8> = Rgba([0x4b, 0x5c, 0xc4, 255]);

#[test]
fn test_edgemark_draws_overlay() {
    let (temp_dir, source) = create_skin_package();
    let original = fs::read(source.join("dark/keys.png")).unwrap();

    let output = Command::new(hamster_skin_bin())
        .args(["edgemark", source.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Edgemark should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let overlay_path = temp_dir.path().join("skin-辅助/dark/keys.png");
    let overlay = image::open(&overlay_path)
        .expect("Should decode overlay")
        .to_rgba8();

    assert_eq!(overlay.dimensions(), (200, 200));
    // Outline of IMG1 (0,0,120,120)
    assert_eq!(overlay.get_pixel(65, 0), &LABEL_RED);
    // Left margin ruler of IMG1 at y=50
    assert_eq!(overlay.get_pixel(5, 50), &LEFT_BLUE);
    // Untouched background
    assert_eq!(overlay.get_pixel(190, 190), &Rgba([255, 255, 255, 255]));

    assert_eq!(fs::read(source.join("dark/keys.png")).unwrap(), original);
}

#[test]
fn test_edgemark_skips_missing_image_and_landscape() {
    let (temp_dir, source) = create_skin_package();
    let out_dir = temp_dir.path().join("marks");

    let output = Command::new(hamster_skin_bin())
        .args([
            "edgemark",
            source.to_str().unwrap(),
            "--output",
            out_dir.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let report = parse_stdout_json(&output.stdout);
    assert_eq!(report["stage"], "edgemark");
    assert_eq!(report["converted"].as_array().unwrap().len(), 2);

    let skipped = report["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0]["source"].as_str().unwrap().ends_with("orphan.til"));

    assert!(out_dir.join("dark/keys.png").is_file());
    assert!(out_dir.join("light/keys.png").is_file());
    assert!(!out_dir.join("dark/orphan.png").exists());
    assert!(!out_dir.join("dark/keys_land.png").exists());
}

#[test]
fn test_edgemark_small_sprite_has_no_rulers() {
    let (temp_dir, source) = create_skin_package();
    write_file(
        &source,
        "dark/small.til",
        "[IMG1]\nSOURCE_RECT=10,10,50,50\nINNER_RECT=20,20,30,30\n",
    );
    write_png(&source, "dark/small.png", 80, 80);
    let out_dir = temp_dir.path().join("marks");

    let output = Command::new(hamster_skin_bin())
        .args(["edgemark", source.to_str().unwrap(), "-o", out_dir.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let overlay = image::open(out_dir.join("dark/small.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(overlay.get_pixel(10, 30), &LABEL_RED);
    assert_eq!(overlay.get_pixel(15, 20), &Rgba([255, 255, 255, 255]));
}

#[test]
fn test_edgemark_custom_colors_from_config() {
    let (temp_dir, source) = create_skin_package();
    let config = write_file(
        temp_dir.path(),
        "config.toml",
        "[overlay]\nlabel_color = \"#00ff00\"\n",
    );
    let out_dir = temp_dir.path().join("marks");

    let output = Command::new(hamster_skin_bin())
        .args([
            "--config",
            config.to_str().unwrap(),
            "edgemark",
            source.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let overlay = image::open(out_dir.join("dark/keys.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(overlay.get_pixel(65, 0), &Rgba([0, 255, 0, 255]));
}

#[test]
fn test_edgemark_rerun_redraws_from_source() {
    let (temp_dir, source) = create_skin_package();
    let out_dir = temp_dir.path().join("marks");
    let run = || {
        Command::new(hamster_skin_bin())
            .args(["edgemark", source.to_str().unwrap(), "-o", out_dir.to_str().unwrap()])
            .output()
            .expect("Failed to execute command")
    };

    assert_eq!(run().status.code(), Some(0));
    let first = fs::read(out_dir.join("dark/keys.png")).unwrap();

    assert_eq!(run().status.code(), Some(0));
    let second = fs::read(out_dir.join("dark/keys.png")).unwrap();

    assert_eq!(first, second, "Second run draws onto the untouched source again");
}

#[test]
fn test_edgemark_missing_source() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = Command::new(hamster_skin_bin())
        .args(["edgemark", temp_dir.path().join("nope").to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
