//! Cosmetic command formatting via an external `shfmt` process.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::ui::dedent;

/// Pretty-print shell text through `shfmt`.
///
/// Formatting is cosmetic and must never abort execution: any failure
/// (missing binary, non-zero exit, unwritable pipe) falls back to the raw
/// text unmodified.
pub(crate) fn prettify(command: &str) -> String {
    let raw = dedent(command).trim().to_string();
    match run_shfmt(&raw) {
        Ok(formatted) if !formatted.trim().is_empty() => formatted.trim_end().to_string(),
        Ok(_) => raw,
        Err(e) => {
            tracing::debug!("shfmt unavailable, showing raw command: {}", e);
            raw
        }
    }
}

fn run_shfmt(command: &str) -> std::io::Result<String> {
    let mut child = Command::new("shfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // A formatter that exits early closes the pipe; that is a
        // formatting failure, not an execution failure.
        let _ = stdin.write_all(command.as_bytes());
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(std::io::Error::other("shfmt exited non-zero"));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prettify_never_fails() {
        // Whether or not shfmt is installed, the text comes back usable.
        let out = prettify("echo hi");
        assert!(out.contains("echo hi"));
    }

    #[test]
    fn prettify_dedents_raw_fallback() {
        let out = prettify("\n        echo indented\n    ");
        assert!(out.starts_with("echo indented") || out.contains("echo indented"));
    }
}
