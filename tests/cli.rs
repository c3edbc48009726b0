use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn whiteboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("whiteboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn whiteboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    whiteboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay whiteboard gestures and save the board as PNG",
        ));
}

#[test]
fn script_is_replayed_and_saved_to_output() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("draw.txt");
    fs::write(
        &script,
        "# red vertical stroke\ntool pen\ncolor #ff0000\ndown 5 5\nmove 5 50\nup 5 50\n",
    )
    .unwrap();
    let output = temp.path().join("out").join("board.png");

    whiteboard_cmd(&temp)
        .args(["--width", "64", "--height", "64", "--output"])
        .arg(&output)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("board.png"));

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], PNG_SIGNATURE);
}

#[test]
fn script_is_read_from_stdin() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("stdin.png");

    whiteboard_cmd(&temp)
        .args(["--width", "32", "--height", "32", "--output"])
        .arg(&output)
        .arg("-")
        .write_stdin("tool rectangle\ndown 2 2\nup 20 20\nundo\nredo\n")
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn parse_error_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    fs::write(&script, "tool pen\ndown 5\n").unwrap();

    whiteboard_cmd(&temp)
        .arg("--output")
        .arg(temp.path().join("never.png"))
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert!(!temp.path().join("never.png").exists());
}

#[test]
fn missing_script_fails_with_context() {
    let temp = TempDir::new().unwrap();
    whiteboard_cmd(&temp)
        .arg(temp.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn print_config_reflects_file_and_flags() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[history]\nmax_undo = 7\n\n[board]\ntheme = \"dark\"\n").unwrap();

    whiteboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--width", "123", "--print-config"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("max_undo = 7")
                .and(predicate::str::contains("width = 123"))
                .and(predicate::str::contains("theme = \"dark\"")),
        );
}

#[test]
fn invalid_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[board\nwidth = 3").unwrap();

    whiteboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--print-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn probe_prints_pixels_after_replay() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("probe.png");

    whiteboard_cmd(&temp)
        .args(["--width", "20", "--height", "20", "--output"])
        .arg(&output)
        .args(["--probe", "10,5", "--probe", "2,15", "-"])
        .write_stdin("tool pen\ncolor #ff0000\ndown 0 5.5\nmove 20 5.5\nup 20 5.5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("10,5 255 0 0 255")
                .and(predicate::str::contains("2,15 255 255 255 255")),
        );
}

#[test]
fn probe_outside_board_fails() {
    let temp = TempDir::new().unwrap();

    whiteboard_cmd(&temp)
        .args(["--width", "8", "--height", "8", "--output"])
        .arg(temp.path().join("small.png"))
        .args(["--probe", "8,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the 8x8 board"));
}

#[test]
fn malformed_probe_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();

    whiteboard_cmd(&temp)
        .args(["--probe", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}
