//! Shell command execution.
//!
//! [`Shell::run`] composes a command with its safety prefix, spawns it via
//! `sh -c` with stdout and stderr sharing one pipe, and reads the merged
//! output line-by-line on the calling thread. The capture buffer only grows
//! while the subprocess is alive; once the process exits the result is
//! classified as success, failure, or user cancellation.

use std::collections::HashMap;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, SherpaError};
use crate::select::{ConfirmRequest, Selector};
use crate::shell::{compose, format, CANCEL_MARKER};
use crate::ui::Reporter;

/// Options for one shell invocation.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Directory to run in (the caller's directory when `None`).
    pub working_dir: Option<PathBuf>,

    /// Environment variables merged over the process environment.
    pub env: HashMap<String, String>,

    /// Print the composed command without executing it.
    pub dry_run: bool,

    /// Suppress all streaming output.
    pub quiet: bool,

    /// Capture combined output and return it (trimmed).
    pub capture_output: bool,

    /// Prepend `set -e` (abort on first failing command).
    pub abort_on_failure: bool,

    /// Prepend `set -u` (abort on unset variable).
    pub abort_on_unset_variable: bool,

    /// Prepend `set -x` (trace execution).
    pub trace_execution: bool,

    /// Print the formatted command before executing it.
    pub show_command: bool,

    /// Ask for confirmation before executing.
    pub confirm: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            working_dir: None,
            env: HashMap::new(),
            dry_run: false,
            quiet: false,
            capture_output: true,
            abort_on_failure: true,
            abort_on_unset_variable: true,
            trace_execution: false,
            show_command: true,
            confirm: false,
        }
    }
}

impl ShellOptions {
    /// Options that neither print nor echo anything.
    pub fn silent() -> Self {
        Self {
            quiet: true,
            show_command: false,
            ..Self::default()
        }
    }
}

/// Runs shell commands with streaming capture.
#[derive(Debug, Default)]
pub struct Shell {
    reporter: Reporter,
    selector: Selector,
}

impl Shell {
    /// Create a shell executor with default reporter and selector.
    pub fn new() -> Self {
        Self {
            reporter: Reporter::new(),
            selector: Selector::new(),
        }
    }

    /// Create a shell executor from existing parts.
    pub fn with_parts(reporter: Reporter, selector: Selector) -> Self {
        Self { reporter, selector }
    }

    /// Run `command` and return its captured combined output, trimmed.
    ///
    /// Returns an empty string in dry-run mode, when capture is disabled,
    /// or when a requested confirmation is declined (the decline is
    /// reported, not raised).
    ///
    /// A non-zero exit raises [`SherpaError::CommandFailed`] carrying the
    /// captured output, unless that output carries the cancellation marker
    /// (or the process was interrupted), which raises
    /// [`SherpaError::Cancelled`].
    pub fn run(&self, command: &str, options: &ShellOptions) -> Result<String> {
        let formatted = if options.show_command || options.dry_run {
            format::prettify(command)
        } else {
            command.to_string()
        };

        if options.dry_run {
            self.reporter.command(&format!("🐚 Dry run\n{}", formatted));
            return Ok(String::new());
        }

        if (options.show_command && !options.quiet) || options.confirm {
            self.reporter.command(&format!("🐚\n{}", formatted));
        }

        if options.confirm {
            let request =
                ConfirmRequest::new("Are you sure you want to run the above command?");
            if !self.selector.confirm(&request)? {
                self.reporter.error("Aborted");
                return Ok(String::new());
            }
        }

        let script = compose::compose(command, options);

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(&script);
        if let Some(dir) = &options.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &options.env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::inherit());
        // Both streams share one pipe, so the shell's own diagnostics
        // (syntax errors raised before the first command runs) land in the
        // same capture as regular output.
        let (reader, writer) = std::io::pipe()?;
        cmd.stdout(writer.try_clone()?);
        cmd.stderr(writer);

        let mut child = cmd.spawn()?;
        // The command still owns write ends of the pipe; close them or the
        // read loop below never sees EOF.
        drop(cmd);

        let mut buffer = String::new();
        for segment in BufReader::new(reader).split(b'\n') {
            let bytes = segment?;
            match String::from_utf8(bytes) {
                Ok(line) => {
                    if !options.quiet {
                        println!("{}", line);
                    }
                    if options.capture_output {
                        buffer.push_str(&line);
                        buffer.push('\n');
                    }
                }
                Err(_) => {
                    // Per-line decode failures never abort the stream.
                    self.reporter.error("Error decoding output, skipping the line");
                }
            }
        }

        let status = child.wait()?;
        let output = if options.capture_output {
            buffer
        } else {
            String::new()
        };

        if !status.success() {
            if output.contains(CANCEL_MARKER) || status.code() == Some(130) {
                return Err(SherpaError::Cancelled);
            }
            return Err(SherpaError::CommandFailed {
                code: status.code(),
                output: output.trim().to_string(),
            });
        }

        if options.show_command && !options.quiet {
            self.reporter.separator();
        }

        Ok(output.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::with_parts(Reporter::plain(), Selector::new())
    }

    fn silent() -> ShellOptions {
        ShellOptions::silent()
    }

    #[test]
    fn echo_returns_trimmed_output() {
        let out = shell().run("echo hi", &silent()).unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn multiline_output_is_captured_in_order() {
        let out = shell().run("echo one; echo two", &silent()).unwrap();
        assert_eq!(out, "one\ntwo");
    }

    #[test]
    fn stderr_is_merged_into_capture() {
        let out = shell().run("echo oops >&2", &silent()).unwrap();
        assert_eq!(out, "oops");
    }

    #[test]
    fn failing_command_raises_command_failed() {
        let err = shell().run("false", &silent()).unwrap_err();
        assert!(matches!(
            err,
            SherpaError::CommandFailed { code: Some(1), .. }
        ));
    }

    #[test]
    fn shell_syntax_errors_surface_in_the_failure() {
        let err = shell().run("do done", &silent()).unwrap_err();
        match err {
            SherpaError::CommandFailed { code, output } => {
                assert!(code.is_some_and(|c| c != 0));
                assert!(output.to_lowercase().contains("syntax error"), "{output}");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn abort_on_failure_stops_at_first_error() {
        let err = shell().run("false; echo unreachable", &silent()).unwrap_err();
        assert!(matches!(err, SherpaError::CommandFailed { .. }));
    }

    #[test]
    fn intermediate_failure_with_zero_exit_is_ok() {
        let options = ShellOptions {
            abort_on_failure: false,
            ..silent()
        };
        let out = shell().run("false; echo survived", &options).unwrap();
        assert_eq!(out, "survived");
    }

    #[test]
    fn unset_variable_aborts_by_default() {
        let err = shell().run("echo \"$SHERPA_UNSET_VARIABLE_12345\"", &silent());
        assert!(err.is_err());
    }

    #[test]
    fn cancellation_marker_classifies_as_cancelled() {
        let command = format!("echo '{}'; exit 1", CANCEL_MARKER);
        let err = shell().run(&command, &silent()).unwrap_err();
        assert!(matches!(err, SherpaError::Cancelled));
    }

    #[test]
    fn sigint_style_exit_code_classifies_as_cancelled() {
        let err = shell().run("exit 130", &silent()).unwrap_err();
        assert!(matches!(err, SherpaError::Cancelled));
    }

    #[test]
    fn dry_run_executes_nothing() {
        let probe = tempfile::TempDir::new().unwrap();
        let marker = probe.path().join("ran");
        let options = ShellOptions {
            dry_run: true,
            ..silent()
        };

        let out = shell()
            .run(&format!("touch {}", marker.display()), &options)
            .unwrap();
        assert_eq!(out, "");
        assert!(!marker.exists());
    }

    #[test]
    fn capture_disabled_returns_empty() {
        let options = ShellOptions {
            capture_output: false,
            ..silent()
        };
        let out = shell().run("echo hi", &options).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn working_dir_is_threaded_not_global() {
        let dir = tempfile::TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();
        let options = ShellOptions {
            working_dir: Some(dir.path().to_path_buf()),
            ..silent()
        };

        let out = shell().run("pwd", &options).unwrap();
        assert_eq!(
            std::fs::canonicalize(&out).unwrap(),
            std::fs::canonicalize(dir.path()).unwrap()
        );
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn env_vars_reach_the_subprocess() {
        let options = ShellOptions {
            env: HashMap::from([("SHERPA_TEST_VAR".to_string(), "42".to_string())]),
            ..silent()
        };
        let out = shell().run("echo \"$SHERPA_TEST_VAR\"", &options).unwrap();
        assert_eq!(out, "42");
    }

    #[test]
    fn indented_raw_literals_compose_cleanly() {
        let out = shell()
            .run(
                r#"
                    greeting=hello
                    echo "$greeting world"
                "#,
                &silent(),
            )
            .unwrap();
        assert_eq!(out, "hello world");
    }
}
