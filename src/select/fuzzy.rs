//! External fuzzy-picker backend.
//!
//! Choices are serialized as tab-delimited `label\tshort\tlong` records,
//! NUL-separated, and piped to `fzf`. The first two fields are shown in the
//! list, the third feeds the preview pane. Picked records come back one per
//! line with the delimiter preserved; the label field resolves back to the
//! original value through a map built during serialization.

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::anyhow;

use crate::error::{Result, SherpaError};
use crate::select::{Choice, PickerBackend};

const DELIMITER: char = '\t';

/// Backend driving an external `fzf` process.
#[derive(Debug)]
pub(crate) struct FuzzyPicker;

impl FuzzyPicker {
    /// Probe for the picker binary. Called once at selector construction;
    /// an absent binary selects the built-in backend for the lifetime of
    /// the selector.
    pub(crate) fn detect() -> Option<Self> {
        let probe = Command::new("fzf")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match probe {
            Ok(status) if status.success() => Some(Self),
            _ => {
                tracing::debug!("fzf not available, using built-in prompts");
                None
            }
        }
    }

    fn run(&self, message: &str, choices: &[Choice], multi: bool) -> Result<Vec<String>> {
        let (stream, labels) = serialize(choices)?;

        let mut cmd = Command::new("fzf");
        cmd.args([
            "--read0",
            "--with-nth",
            "1,2",
            "--delimiter",
            "\t",
            "--preview",
            "echo {} | cut -f3",
            "--preview-window",
            "down:30%:wrap",
        ]);
        cmd.arg("--prompt").arg(format!("{} 👆", message));
        if multi {
            cmd.arg("--multi");
        }
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::null());

        let mut child = cmd.spawn()?;
        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| anyhow!("picker stdin unavailable"))?;
            if let Err(e) = stdin.write_all(stream.as_bytes()) {
                // The picker closing its input early is a cancel, not an error.
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(SherpaError::Cancelled);
        }

        let mut picked = Vec::new();
        for line in text.lines() {
            let label = line.split(DELIMITER).next().unwrap_or(line);
            match labels.get(label) {
                Some(value) => picked.push(value.clone()),
                None => tracing::warn!("picker returned unknown label: {}", label),
            }
        }
        Ok(picked)
    }
}

impl PickerBackend for FuzzyPicker {
    // fzf has no notion of a pre-highlighted default; the default only
    // applies to the built-in backend.
    fn pick_one(&self, message: &str, choices: &[Choice], _default: Option<&str>) -> Result<String> {
        let picked = self.run(message, choices, false)?;
        match picked.into_iter().next() {
            Some(value) => Ok(value),
            None => Err(SherpaError::Cancelled),
        }
    }

    fn pick_many(
        &self,
        message: &str,
        choices: &[Choice],
        _defaults: &[String],
    ) -> Result<Vec<String>> {
        self.run(message, choices, true)
    }
}

/// Serialize choices to the picker's input stream and build the label→value
/// resolution map. Duplicate labels would make resolution ambiguous, so
/// they fail fast instead of silently keeping the last entry.
pub(crate) fn serialize(choices: &[Choice]) -> Result<(String, HashMap<String, String>)> {
    let mut labels = HashMap::new();
    let mut records = Vec::with_capacity(choices.len());

    for choice in choices {
        if labels
            .insert(choice.label.clone(), choice.value.clone())
            .is_some()
        {
            return Err(SherpaError::validation(format!(
                "duplicate display label '{}' in selection",
                choice.label
            )));
        }
        records.push(format!(
            "{}{d}{}{d}{}",
            choice.label,
            choice.short,
            choice.long,
            d = DELIMITER
        ));
    }

    Ok((records.join("\0"), labels))
}
