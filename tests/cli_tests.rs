//! End-to-end tests for the `pixelgrid` command line.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Path to the pixelgrid binary
fn pixelgrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pixelgrid")
}

/// Creates a Command with an isolated config directory.
fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(pixelgrid_bin());
    cmd.env("PIXELGRID_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

#[test]
fn test_help_lists_flags() {
    let output = Command::new(pixelgrid_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--rows", "--cols", "--output-dir", "--log-file", "--print-config", "--write-config"] {
        assert!(stdout.contains(flag), "help should mention {flag}");
    }
}

#[test]
fn test_version() {
    let output = Command::new(pixelgrid_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_config_defaults() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["--print-config"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[grid]"));
    assert!(stdout.contains("rows = 6"));
    assert!(stdout.contains("cols = 9"));
    assert!(stdout.contains("saved_data.csv"));
}

#[test]
fn test_print_config_applies_overrides() {
    let temp = TempDir::new().unwrap();
    let export_dir = temp.path().join("exports");
    let output = isolated_command(
        &[
            "--print-config",
            "--rows",
            "8",
            "--cols",
            "8",
            "--output-dir",
            export_dir.to_str().unwrap(),
        ],
        temp.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rows = 8"));
    assert!(stdout.contains("cols = 8"));
    assert!(stdout.contains("exports"));
}

#[test]
fn test_print_config_reads_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[grid]\nrows = 12\ncols = 10\n",
    )
    .unwrap();

    let output = isolated_command(&["--print-config"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rows = 12"));
    assert!(stdout.contains("cols = 10"));
}

#[test]
fn test_invalid_grid_size_is_rejected() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["--print-config", "--rows", "0"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rows"), "stderr: {stderr}");
}

#[test]
fn test_write_config_saves_overrides() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("fresh");

    let output = isolated_command(&["--write-config", "--rows", "7"], &config_dir)
        .output()
        .expect("Failed to execute command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let saved = std::fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(saved.contains("rows = 7"));

    // The saved file is picked up on the next run
    let output = isolated_command(&["--print-config"], &config_dir)
        .output()
        .expect("Failed to execute command");
    assert!(String::from_utf8_lossy(&output.stdout).contains("rows = 7"));
}

#[test]
fn test_write_config_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["--write-config", "--cols", "0"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(!temp.path().join("config.toml").exists());
}
