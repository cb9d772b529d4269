//! Integration tests for Minimap
//!
//! These tests drive the built binary end to end.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const FIELD: &str = r#"[{
    "PathActorBP": {"X": 0, "Y": 0, "HiddenPath": false, "Link": ["PathActor1", "None"],
        "FastTravel": "Gate", "UniqueLabel": "None"},
    "PathActor1": {"X": 0, "Y": 500, "HiddenPath": false, "Link": ["PathActorBP", "PathActor2"],
        "FastTravel": "None", "UniqueLabel": "None"},
    "PathActor2": {"X": 300, "Y": 500, "HiddenPath": true, "Link": ["PathActor1"],
        "FastTravel": "None", "UniqueLabel": "Gate"},
    "PathActor3": {"X": -400, "Y": -200, "HiddenPath": false, "Link": "None",
        "FastTravel": "Nowhere", "UniqueLabel": "None"},
    "Settings": {"Scale": 2}
}]"#;

fn minimap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minimap"))
}

fn write_input(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = minimap().arg("--help").output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Render path-actor travel graphs into minimap images"));
}

#[test]
fn test_render_png_named_after_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "Field_01.json", FIELD);
    let out_dir = temp_dir.path().join("out/maps");

    let output = minimap()
        .arg("render")
        .arg(&input)
        .arg("--output")
        .arg(&out_dir)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let png = std::fs::read(out_dir.join("Field_01.png")).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn test_render_svg_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "field.json", FIELD);
    let config = write_input(
        temp_dir.path(),
        "style.toml",
        "margin = 100\n[palette]\nunlinked = \"orange\"\n",
    );

    let output = minimap()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(&input)
        .args(["--format", "svg", "--output"])
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let svg = std::fs::read_to_string(temp_dir.path().join("field.svg")).unwrap();
    // x spans -200..500 and y spans -400..300, plus the margin.
    assert!(svg.contains(r#"width="800" height="800""#));
    assert!(svg.contains(r#"fill="orange""#));
    assert_eq!(svg.matches("<line ").count(), 2);
}

#[test]
fn test_inspect_reports_components() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "field.json", FIELD);

    let output = minimap()
        .arg("inspect")
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("actors:       4 (1 hidden)"));
    assert!(stdout.contains("components:   2"));
    assert!(stdout.contains("warps:        2"));
    assert!(stdout.contains("no arrival:   Nowhere"));
}

#[test]
fn test_malformed_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "broken.json",
        r#"[{"PathActorA": {"X": 0, "HiddenPath": false}}]"#,
    );

    let output = minimap()
        .arg("render")
        .arg(&input)
        .arg("--output")
        .arg(temp_dir.path().join("out"))
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PathActorA"));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_empty_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "empty.json", r#"[{"Settings": {}}]"#);

    let output = minimap()
        .arg("render")
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no path actors"));
}
