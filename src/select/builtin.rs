//! Built-in prompt backend.
//!
//! The guaranteed structural fallback when the external picker is not
//! installed: dialoguer list/checkbox/input widgets on the terminal. Esc or
//! Ctrl-C in any widget raises [`SherpaError::Cancelled`].

use console::Term;
use dialoguer::{Completion, Editor, Input, MultiSelect, Select};

use crate::error::{Result, SherpaError};
use crate::select::{AutocompleteRequest, Choice, InputRequest, PathRequest, PickerBackend};

/// Backend built on dialoguer widgets.
#[derive(Debug, Default)]
pub(crate) struct BuiltinPicker;

/// Convert dialoguer errors, mapping an interrupted read to cancellation.
fn map_prompt_err(e: dialoguer::Error) -> SherpaError {
    let io: std::io::Error = e.into();
    if io.kind() == std::io::ErrorKind::Interrupted {
        SherpaError::Cancelled
    } else {
        SherpaError::Io(io)
    }
}

/// Title shown for a choice in the list widgets.
fn title(choice: &Choice) -> String {
    match (!choice.short.is_empty(), !choice.long.is_empty()) {
        (true, true) => format!("{} - {} ({})", choice.label, choice.short, choice.long),
        (false, true) => format!("{} ({})", choice.label, choice.long),
        (true, false) => format!("{} - {}", choice.label, choice.short),
        (false, false) => choice.label.clone(),
    }
}

impl PickerBackend for BuiltinPicker {
    fn pick_one(&self, message: &str, choices: &[Choice], default: Option<&str>) -> Result<String> {
        let titles: Vec<String> = choices.iter().map(title).collect();
        let default_idx = default
            .and_then(|d| choices.iter().position(|c| c.value == d))
            .unwrap_or(0);

        let term = Term::stderr();
        let selection = Select::new()
            .with_prompt(message)
            .items(&titles)
            .default(default_idx)
            .interact_on_opt(&term)
            .map_err(map_prompt_err)?;

        match selection {
            Some(index) => Ok(choices[index].value.clone()),
            None => Err(SherpaError::Cancelled),
        }
    }

    fn pick_many(
        &self,
        message: &str,
        choices: &[Choice],
        defaults: &[String],
    ) -> Result<Vec<String>> {
        let titles: Vec<String> = choices.iter().map(title).collect();
        let checked: Vec<bool> = choices
            .iter()
            .map(|c| defaults.contains(&c.value))
            .collect();

        let term = Term::stderr();
        let selection = MultiSelect::new()
            .with_prompt(message)
            .items(&titles)
            .defaults(&checked)
            .interact_on_opt(&term)
            .map_err(map_prompt_err)?;

        match selection {
            Some(indices) => Ok(indices.iter().map(|&i| choices[i].value.clone()).collect()),
            None => Err(SherpaError::Cancelled),
        }
    }
}

impl BuiltinPicker {
    /// Free-text input; re-asks while the submission is empty unless empty
    /// is allowed. Multiline input goes through `$EDITOR`.
    pub(crate) fn prompt_input(&self, request: &InputRequest) -> Result<String> {
        let term = Term::stderr();
        loop {
            let result = if request.multiline {
                match Editor::new()
                    .edit(&request.default)
                    .map_err(map_prompt_err)?
                {
                    Some(text) => text,
                    None => return Err(SherpaError::Cancelled),
                }
            } else {
                let mut input = Input::<String>::new()
                    .with_prompt(&request.message)
                    .allow_empty(true);
                if !request.default.is_empty() {
                    input = input.default(request.default.clone());
                }
                input.interact_text_on(&term).map_err(map_prompt_err)?
            };

            if request.allow_empty || !result.trim().is_empty() {
                return Ok(result);
            }
        }
    }

    /// Input with prefix completion over the candidate list.
    pub(crate) fn prompt_autocomplete(&self, request: &AutocompleteRequest) -> Result<String> {
        let completion = PrefixCompletion {
            choices: request.choices.clone(),
        };

        let term = Term::stderr();
        let mut input = Input::<String>::new()
            .with_prompt(&request.message)
            .completion_with(&completion)
            .allow_empty(true);
        if !request.default.is_empty() {
            input = input.default(request.default.clone());
        }
        input.interact_text_on(&term).map_err(map_prompt_err)
    }

    /// Path input with completion over directory entries.
    pub(crate) fn prompt_path(&self, request: &PathRequest) -> Result<String> {
        let completion = PathCompletion;

        let term = Term::stderr();
        let mut input = Input::<String>::new()
            .with_prompt(&request.message)
            .completion_with(&completion)
            .allow_empty(true);
        if !request.default.is_empty() {
            input = input.default(request.default.clone());
        }
        input.interact_text_on(&term).map_err(map_prompt_err)
    }
}

/// Completes to the single candidate matching the typed prefix.
struct PrefixCompletion {
    choices: Vec<String>,
}

impl Completion for PrefixCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let mut matches = self.choices.iter().filter(|c| c.starts_with(input));
        let first = matches.next()?;
        if matches.next().is_none() {
            Some(first.clone())
        } else {
            None
        }
    }
}

/// Completes the last path segment against the entries of its directory.
/// Directories complete with a trailing separator so the next segment can
/// be typed straight away; hidden entries only complete once a dot is typed.
struct PathCompletion;

impl Completion for PathCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let (parent, prefix) = match input.rsplit_once('/') {
            Some((parent, prefix)) => (parent, prefix),
            None => ("", input),
        };
        let read_from = if !parent.is_empty() {
            parent
        } else if input.starts_with('/') {
            "/"
        } else {
            "."
        };

        let mut matches = std::fs::read_dir(read_from).ok()?.filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name().into_string().ok()?;
            if !name.starts_with(prefix) || (prefix.is_empty() && name.starts_with('.')) {
                return None;
            }
            if entry.file_type().ok()?.is_dir() {
                Some(format!("{}/", name))
            } else {
                Some(name)
            }
        });

        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }

        if input.contains('/') {
            Some(format!("{}/{}", parent, first))
        } else {
            Some(first)
        }
    }
}
