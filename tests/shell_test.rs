//! Shell execution behavior through the public API.

use std::collections::HashMap;

use sherpa::{Shell, ShellOptions, SherpaError, CANCEL_MARKER};

fn silent() -> ShellOptions {
    ShellOptions::silent()
}

#[test]
fn captured_output_is_trimmed() {
    let shell = Shell::new();
    assert_eq!(shell.run("echo hi", &silent()).unwrap(), "hi");
}

#[test]
fn safety_flags_are_independent() {
    let shell = Shell::new();

    // set -e off: an intermediate failure with a zero final exit is fine.
    let lax = ShellOptions {
        abort_on_failure: false,
        ..silent()
    };
    assert_eq!(shell.run("false; echo ok", &lax).unwrap(), "ok");

    // set -u off: unset variables expand to empty.
    let loose = ShellOptions {
        abort_on_unset_variable: false,
        ..silent()
    };
    assert_eq!(
        shell
            .run("echo \"x${SHERPA_NOT_SET_98765:-}y\"", &loose)
            .unwrap(),
        "xy"
    );
}

#[test]
fn trace_output_lands_in_the_capture() {
    let shell = Shell::new();
    let options = ShellOptions {
        trace_execution: true,
        ..silent()
    };
    let out = shell.run("echo traced", &options).unwrap();
    // `set -x` writes the `+ echo traced` trace line to stderr, which is
    // merged into the captured stream.
    assert!(out.contains("+ echo traced"));
    assert!(out.contains("\ntraced") || out.ends_with("traced"));
}

#[test]
fn nonzero_exit_without_marker_is_command_failure() {
    let shell = Shell::new();
    let err = shell.run("exit 7", &silent()).unwrap_err();
    assert!(matches!(
        err,
        SherpaError::CommandFailed { code: Some(7), .. }
    ));
}

#[test]
fn failure_carries_the_captured_output() {
    let shell = Shell::new();
    let err = shell
        .run("echo bad thing >&2; exit 3", &silent())
        .unwrap_err();
    match err {
        SherpaError::CommandFailed { code, output } => {
            assert_eq!(code, Some(3));
            assert!(output.contains("bad thing"));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn marker_in_output_is_cancellation() {
    let shell = Shell::new();
    let command = format!("echo '{CANCEL_MARKER}'; exit 1");
    let err = shell.run(&command, &silent()).unwrap_err();
    assert!(matches!(err, SherpaError::Cancelled));
}

#[test]
fn marker_with_zero_exit_is_plain_output() {
    let shell = Shell::new();
    let out = shell
        .run(&format!("echo '{CANCEL_MARKER}'"), &silent())
        .unwrap();
    assert_eq!(out, CANCEL_MARKER);
}

#[test]
fn dry_run_returns_empty_and_side_effect_free() {
    let dir = tempfile::TempDir::new().unwrap();
    let marker = dir.path().join("created");
    let shell = Shell::new();
    let options = ShellOptions {
        dry_run: true,
        working_dir: Some(dir.path().to_path_buf()),
        ..silent()
    };

    let out = shell.run("touch created", &options).unwrap();
    assert_eq!(out, "");
    assert!(!marker.exists());
}

#[test]
fn environment_overrides_process_env() {
    let shell = Shell::new();
    let options = ShellOptions {
        env: HashMap::from([("HOME".to_string(), "/nowhere".to_string())]),
        ..silent()
    };
    assert_eq!(shell.run("echo \"$HOME\"", &options).unwrap(), "/nowhere");
}

#[test]
fn long_streams_are_captured_line_by_line() {
    let shell = Shell::new();
    let out = shell
        .run("for i in 1 2 3 4 5; do echo \"line $i\"; done", &silent())
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "line 1");
    assert_eq!(lines[4], "line 5");
}
