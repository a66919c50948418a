//! Integration tests for the colorized CLI

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{run_colorized, run_colorized_with_env, temp_config, visible};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let run = run_colorized(&["--help"]);

    assert_eq!(run.code, 0);
    assert!(run.stdout.contains("Paint text with ANSI colors and styles"));
    assert!(run.stdout.contains("--fg <COLOR>"));
    assert!(run.stdout.contains("[TEXT]..."));
    assert!(run.stdout.contains("Color forms:"));
}

#[test]
fn snapshot_cli_help() {
    let run = run_colorized(&["--help"]);
    let output = format!(
        "=== colorized --help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        run.code, run.stdout, run.stderr
    );
    insta::assert_snapshot!("cli_help", output);
}

#[test]
fn version_shows_package_version() {
    let run = run_colorized(&["--version"]);

    assert_eq!(run.code, 0);
    assert!(run.stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Painting Tests
// ============================================================================

#[test]
fn named_colors_with_reset_and_newline() {
    let run = run_colorized(&["--color", "always", "-s", "bold", "-f", "red", "Hello", "world"]);

    assert_eq!(run.code, 0);
    insta::assert_snapshot!(
        visible(run.stdout.trim_end()),
        @r"\e[0m\e[1;49m\e[1;31mHello world\e[0m"
    );
    assert!(run.stdout.ends_with('\n'));
}

#[test]
fn rgb_colors() {
    let run = run_colorized(&[
        "--color", "always", "-s", "bold", "-f", "#ff0000", "-b", "255,255,255", "Hi!",
    ]);

    assert_eq!(run.code, 0);
    assert_eq!(
        run.stdout,
        "\x1b[0m\x1b[1;49m\x1b[48;2;255;255;255m\x1b[38;2;255;0;0mHi!\x1b[0m\n"
    );
}

#[test]
fn palette_colors_by_index_and_name() {
    let by_index = run_colorized(&["--color", "always", "-f", "196", "-b", "16", "x"]);
    let by_name = run_colorized(&["--color", "always", "-f", "red1", "-b", "grey0", "x"]);

    assert_eq!(
        by_index.stdout,
        "\x1b[0m\x1b[0;49m\x1b[48;5;16m\x1b[38;5;196mx\x1b[0m\n"
    );
    assert_eq!(by_name.stdout, by_index.stdout);
}

#[test]
fn no_reset_and_no_newline() {
    let run = run_colorized(&["--color", "always", "--no-reset", "-n", "-f", "green", "ok"]);

    assert_eq!(run.stdout, "\x1b[0m\x1b[0;49m\x1b[0;32mok");
}

#[test]
fn stderr_flag_writes_to_stderr() {
    let run = run_colorized(&["--color", "always", "-e", "-f", "bright-red", "oops"]);

    assert_eq!(run.code, 0);
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("\x1b[0m\x1b[0;49m\x1b[0;91moops\x1b[0m"));
}

#[test]
fn auto_color_is_plain_when_piped() {
    let run = run_colorized(&["-s", "bold", "-f", "red", "plain"]);

    assert_eq!(run.stdout, "plain\n");
}

#[test]
fn never_color_is_plain() {
    let run = run_colorized(&["--color", "never", "-f", "red", "plain"]);

    assert_eq!(run.stdout, "plain\n");
}

#[test]
fn no_color_env_keeps_auto_plain_but_always_wins() {
    let auto = run_colorized_with_env(&["-f", "red", "x"], &[("NO_COLOR", "1")]);
    let always = run_colorized_with_env(&["--color", "always", "-f", "red", "x"], &[("NO_COLOR", "1")]);

    assert_eq!(auto.stdout, "x\n");
    assert!(always.stdout.starts_with("\x1b[0m"));
}

#[test]
fn reads_stdin_when_no_text() {
    let home = TempDir::new().unwrap();
    AssertCommand::new(env!("CARGO_BIN_EXE_colorized"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["--color", "always", "-f", "cyan"])
        .write_stdin("piped\n")
        .assert()
        .success()
        .stdout("\x1b[0m\x1b[0;49m\x1b[0;36mpiped\x1b[0m\n");
}

#[test]
fn stdin_that_is_not_utf8_is_painted_as_is() {
    let home = TempDir::new().unwrap();
    AssertCommand::new(env!("CARGO_BIN_EXE_colorized"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["--color", "always", "-f", "red"])
        .write_stdin(&b"\xff\xfe\n"[..])
        .assert()
        .success()
        .stdout(&b"\x1b[0m\x1b[0;49m\x1b[0;31m\xff\xfe\x1b[0m\n"[..]);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn mixed_color_kinds_fail_before_writing() {
    let run = run_colorized(&["--color", "always", "-f", "red", "-b", "#000000", "x"]);

    assert_eq!(run.code, 1);
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("same kind"));
}

#[test]
fn unknown_color_is_usage_error() {
    let run = run_colorized(&["-f", "nope", "x"]);

    assert_eq!(run.code, 2);
    assert!(run.stderr.contains("Unknown color 'nope'"));
}

#[test]
fn palette_index_out_of_range_is_usage_error() {
    let run = run_colorized(&["-f", "300", "-b", "0", "x"]);

    assert_eq!(run.code, 2);
    assert!(run.stderr.contains("out of range"));
}

#[test]
fn unknown_style_is_usage_error() {
    let home = TempDir::new().unwrap();
    AssertCommand::new(env!("CARGO_BIN_EXE_colorized"))
        .env("HOME", home.path())
        .args(["-s", "loud", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown style 'loud'"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_defaults_apply() {
    let (_dir, path) = temp_config("[defaults]\nstyle = \"underline\"\nfg = \"blue\"\nreset = false\n");
    let path = path.to_str().unwrap();
    let run = run_colorized(&["--color", "always", "-c", path, "cfg"]);

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, "\x1b[0m\x1b[4;49m\x1b[4;34mcfg\n");
}

#[test]
fn flags_override_config() {
    let (_dir, path) = temp_config("[defaults]\nstyle = \"underline\"\nfg = \"blue\"\n");
    let path = path.to_str().unwrap();
    let run = run_colorized(&["--color", "always", "-c", path, "-s", "dim", "-f", "yellow", "x"]);

    assert_eq!(run.stdout, "\x1b[0m\x1b[2;49m\x1b[2;33mx\x1b[0m\n");
}

#[test]
fn config_in_xdg_dir_is_picked_up() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("colorized");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[defaults]\nfg = \"magenta\"\n").unwrap();

    let output = crate::helpers::colorized_command(&home)
        .args(["--color", "always", "x"])
        .output()
        .unwrap();

    // dirs::config_dir follows XDG_CONFIG_HOME on Linux only
    if cfg!(target_os = "linux") {
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "\x1b[0m\x1b[0;49m\x1b[0;35mx\x1b[0m\n"
        );
    }
}

#[test]
fn missing_explicit_config_fails() {
    let run = run_colorized(&["-c", "/nonexistent/colorized.toml", "x"]);

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("Config file not found"));
}

#[test]
fn invalid_config_fails_with_path() {
    let (_dir, path) = temp_config("[defaults]\nfg = 12\n");
    let path_str = path.to_str().unwrap();
    let run = run_colorized(&["-c", path_str, "x"]);

    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("Invalid config file"));
    assert!(run.stderr.contains("config.toml"));
}

#[test]
fn config_show_prints_toml() {
    let (_dir, path) = temp_config("[defaults]\nstyle = \"italic\"\n");
    let path = path.to_str().unwrap();
    let run = run_colorized(&["config", "show", "--config", path]);

    assert_eq!(run.code, 0);
    assert!(run.stdout.starts_with("[defaults]"));
    assert!(run.stdout.contains("style = \"italic\""));
    assert!(run.stdout.contains("fg = \"default\""));
}

#[test]
fn config_path_reports_missing_explicit_file() {
    let run = run_colorized(&["config", "path", "--config", "/tmp/does-not-exist.toml"]);

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout.trim_end(), "/tmp/does-not-exist.toml (not found)");

    // Painting with the same flag refuses the missing file
    let run = run_colorized(&["--config", "/tmp/does-not-exist.toml", "x"]);
    assert_eq!(run.code, 1);
    assert!(run.stderr.contains("/tmp/does-not-exist.toml"));
}

#[test]
fn config_path_reports_missing_default_file() {
    let run = run_colorized(&["config", "path"]);

    assert_eq!(run.code, 0);
    assert!(run.stdout.contains("config.toml"));
    assert!(run.stdout.trim_end().ends_with("(not found, using defaults)"));
}

// ============================================================================
// Subcommand Tests
// ============================================================================

#[test]
fn palette_lists_all_entries() {
    let run = run_colorized(&["palette", "--color", "never"]);

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout.lines().count(), 256);
    assert!(run.stdout.contains(" 196  Red1\n"));
}

#[test]
fn palette_with_color_paints_swatches() {
    let run = run_colorized(&["palette", "--color", "always"]);

    assert!(run.stdout.contains("\x1b[48;5;196m"));
}

#[test]
fn completions_generate_for_bash() {
    let run = run_colorized(&["completions", "bash"]);

    assert_eq!(run.code, 0);
    assert!(run.stdout.contains("colorized"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let run = run_colorized(&["-v", "--color", "never", "x"]);

    assert_eq!(run.stdout, "x\n");
    assert!(run.stderr.contains("DEBUG"));
}
