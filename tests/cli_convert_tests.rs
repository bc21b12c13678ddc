//! End-to-end tests for `hamster-skin convert` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_convert_default_destinations() {
    let (temp_dir, source) = create_skin_package();

    let output = Command::new(hamster_skin_bin())
        .args(["convert", source.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Convert should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let resources = temp_dir.path().join("skin-仓输入法");
    let aux = temp_dir.path().join("skin-辅助");
    assert!(resources.join("dark/resources/keys.yaml").is_file());
    assert!(aux.join("dark/keys.png").is_file());
    assert!(aux.join("dark/py_26.json").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resources"));
    assert!(stdout.contains("edgemark"));
    assert!(stdout.contains("keyboard"));
}

#[test]
fn test_convert_with_destination() {
    let (temp_dir, source) = create_skin_package();
    let destination = temp_dir.path().join("dest");

    let output = Command::new(hamster_skin_bin())
        .args([
            "convert",
            source.to_str().unwrap(),
            destination.to_str().unwrap(),
            "--replace",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let reports = parse_stdout_json(&output.stdout);
    let stages: Vec<&str> = reports
        .as_array()
        .unwrap()
        .iter()
        .map(|report| report["stage"].as_str().unwrap())
        .collect();
    assert_eq!(stages, ["resources", "edgemark", "keyboard"]);

    assert!(destination.join("dark/keys.png").is_file());
    assert!(destination.join("dark/py_26.json").is_file());
    assert!(!destination.join("dark/resources").exists());

    let yaml = read_yaml(
        &temp_dir
            .path()
            .join("skin-仓输入法/light/resources/keys.yaml"),
    );
    assert_eq!(yaml["IMG1"]["insets"]["top"].as_i64(), Some(40));
}

#[test]
fn test_convert_missing_source() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = Command::new(hamster_skin_bin())
        .args(["convert", temp_dir.path().join("nope").to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_flag_is_validation_error() {
    let output = Command::new(hamster_skin_bin())
        .args(["convert", "--bogus"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_successfully() {
    let output = Command::new(hamster_skin_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resources"));
    assert!(stdout.contains("edgemark"));
}
