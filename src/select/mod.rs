//! Interactive selection.
//!
//! [`Selector`] presents single/multi selects, confirmations, free-text
//! input, autocomplete, and path input. The primary backend pipes choices
//! through an
//! external fuzzy picker (`fzf`); a built-in dialoguer backend is the
//! guaranteed structural fallback. The backend is chosen once, when the
//! selector is constructed, by probing for the picker binary.
//!
//! Every prompt can be bypassed with a provided answer for scripted runs;
//! provided answers are validated against the declared choices before any
//! backend is touched.

pub mod builtin;
pub mod fuzzy;

use console::{Key, Term};

use crate::error::{Result, SherpaError};
use crate::ui::Reporter;

use builtin::BuiltinPicker;
use fuzzy::FuzzyPicker;

/// One selectable option.
#[derive(Debug, Clone)]
pub struct Choice {
    /// The effective answer returned on selection.
    pub value: String,
    /// Display label; defaults to the value's textual form. Labels are the
    /// lookup keys for the external picker and must be unique per request.
    pub label: String,
    /// Short description shown next to the label.
    pub short: String,
    /// Long description shown in the picker's preview pane.
    pub long: String,
}

impl Choice {
    /// Create a choice whose label equals its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            short: String::new(),
            long: String::new(),
        }
    }

    /// Override the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the short description.
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Set the long description.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A single-select request.
#[derive(Debug, Clone)]
pub struct SelectRequest {
    /// Question shown above the choices.
    pub message: String,
    /// Ordered choices.
    pub choices: Vec<Choice>,
    /// Value highlighted by the built-in backend.
    pub default: Option<String>,
    /// Prefer the fuzzy backend when available.
    pub fuzzy: bool,
    /// Scripted answer; skips the prompt after membership validation.
    pub provided: Option<String>,
}

impl SelectRequest {
    /// Build a request from anything choice-like.
    pub fn new<I, C>(message: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self {
            message: message.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            default: None,
            fuzzy: true,
            provided: None,
        }
    }

    /// Set the default value.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Force the built-in backend.
    pub fn no_fuzzy(mut self) -> Self {
        self.fuzzy = false;
        self
    }

    /// Supply a scripted answer.
    pub fn provided(mut self, value: impl Into<String>) -> Self {
        self.provided = Some(value.into());
        self
    }
}

/// A multi-select request.
#[derive(Debug, Clone)]
pub struct MultiSelectRequest {
    /// Question shown above the choices.
    pub message: String,
    /// Ordered choices.
    pub choices: Vec<Choice>,
    /// Values pre-checked by the built-in backend.
    pub defaults: Vec<String>,
    /// Prefer the fuzzy backend when available.
    pub fuzzy: bool,
    /// Permit returning an empty selection instead of re-prompting.
    pub allow_empty: bool,
}

impl MultiSelectRequest {
    /// Build a request from anything choice-like.
    pub fn new<I, C>(message: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self {
            message: message.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            defaults: Vec::new(),
            fuzzy: true,
            allow_empty: false,
        }
    }

    /// Set the pre-checked values.
    pub fn defaults<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.defaults = values.into_iter().map(Into::into).collect();
        self
    }

    /// Force the built-in backend.
    pub fn no_fuzzy(mut self) -> Self {
        self.fuzzy = false;
        self
    }

    /// Allow an empty result.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
}

/// A yes/no confirmation request.
#[derive(Debug, Clone)]
pub struct ConfirmRequest {
    /// Question to confirm.
    pub message: String,
    /// Answer listed first (and returned on plain Enter).
    pub default: bool,
    /// Scripted answer token; parsed strictly, see [`parse_confirm_token`].
    pub provided: Option<String>,
}

impl ConfirmRequest {
    /// Build a confirmation defaulting to yes.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: true,
            provided: None,
        }
    }

    /// Set the default answer.
    pub fn default(mut self, value: bool) -> Self {
        self.default = value;
        self
    }

    /// Supply a scripted boolean answer.
    pub fn provided(mut self, value: bool) -> Self {
        self.provided = Some(value.to_string());
        self
    }

    /// Supply a scripted textual answer ("y", "no", "true", ...).
    pub fn provided_token(mut self, token: impl Into<String>) -> Self {
        self.provided = Some(token.into());
        self
    }
}

/// A free-text input request.
#[derive(Debug, Clone)]
pub struct InputRequest {
    /// Question shown before the input field.
    pub message: String,
    /// Pre-filled default.
    pub default: String,
    /// Accept an empty submission instead of re-asking.
    pub allow_empty: bool,
    /// Edit in `$EDITOR` instead of a single line.
    pub multiline: bool,
}

impl InputRequest {
    /// Build an input request.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: String::new(),
            allow_empty: false,
            multiline: false,
        }
    }

    /// Set the pre-filled default.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    /// Accept empty submissions.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Edit multiline text in `$EDITOR`.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

/// An autocomplete request.
#[derive(Debug, Clone)]
pub struct AutocompleteRequest {
    /// Question shown before the input field.
    pub message: String,
    /// Completion candidates.
    pub choices: Vec<String>,
    /// Pre-filled default.
    pub default: String,
    /// Scripted answer; skips the prompt (free text, no membership check).
    pub provided: Option<String>,
}

impl AutocompleteRequest {
    /// Build an autocomplete request.
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(
        message: impl Into<String>,
        choices: I,
    ) -> Self {
        Self {
            message: message.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            default: String::new(),
            provided: None,
        }
    }

    /// Set the pre-filled default.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    /// Supply a scripted answer.
    pub fn provided(mut self, value: impl Into<String>) -> Self {
        self.provided = Some(value.into());
        self
    }
}

/// A path input request.
#[derive(Debug, Clone)]
pub struct PathRequest {
    /// Question shown before the input field.
    pub message: String,
    /// Pre-filled default.
    pub default: String,
    /// Scripted answer; returned as-is without touching the filesystem.
    pub provided: Option<String>,
}

impl PathRequest {
    /// Build a path request.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: String::new(),
            provided: None,
        }
    }

    /// Set the pre-filled default.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    /// Supply a scripted answer.
    pub fn provided(mut self, value: impl Into<String>) -> Self {
        self.provided = Some(value.into());
        self
    }
}

/// Strategy interface over the two picker backends.
pub(crate) trait PickerBackend {
    fn pick_one(&self, message: &str, choices: &[Choice], default: Option<&str>)
        -> Result<String>;

    fn pick_many(
        &self,
        message: &str,
        choices: &[Choice],
        defaults: &[String],
    ) -> Result<Vec<String>>;
}

/// Interactive selection engine.
#[derive(Debug)]
pub struct Selector {
    reporter: Reporter,
    fuzzy: Option<FuzzyPicker>,
    builtin: BuiltinPicker,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// Create a selector, probing once for the external picker binary.
    pub fn new() -> Self {
        Self::with_reporter(Reporter::new())
    }

    /// Create a selector with a custom reporter.
    pub fn with_reporter(reporter: Reporter) -> Self {
        Self {
            reporter,
            fuzzy: FuzzyPicker::detect(),
            builtin: BuiltinPicker,
        }
    }

    fn backend(&self, prefer_fuzzy: bool) -> &dyn PickerBackend {
        if prefer_fuzzy {
            if let Some(fuzzy) = &self.fuzzy {
                return fuzzy;
            }
        }
        &self.builtin
    }

    /// Present a single select and return the chosen value.
    ///
    /// A provided answer bypasses the prompt entirely; a provided value not
    /// among the declared choices raises [`SherpaError::Validation`].
    pub fn select(&self, request: &SelectRequest) -> Result<String> {
        if let Some(provided) = &request.provided {
            if !request.choices.iter().any(|c| c.value == *provided) {
                return Err(SherpaError::validation(format!(
                    "provided answer '{}' is not in choices",
                    provided
                )));
            }
            return Ok(provided.clone());
        }

        self.backend(request.fuzzy).pick_one(
            &request.message,
            &request.choices,
            request.default.as_deref(),
        )
    }

    /// Present a multi select and return the chosen values.
    ///
    /// When empty selections are disallowed, an empty submit re-prompts
    /// from the start; only cancellation breaks the loop.
    pub fn select_many(&self, request: &MultiSelectRequest) -> Result<Vec<String>> {
        self.select_many_with(request, self.backend(request.fuzzy))
    }

    fn select_many_with(
        &self,
        request: &MultiSelectRequest,
        backend: &dyn PickerBackend,
    ) -> Result<Vec<String>> {
        loop {
            let picked =
                backend.pick_many(&request.message, &request.choices, &request.defaults)?;
            if picked.is_empty() && !request.allow_empty {
                self.reporter.info("Select at least one entry");
                continue;
            }
            return Ok(picked);
        }
    }

    /// Ask a yes/no question.
    ///
    /// Presented as a two-entry select with the default listed first. A
    /// provided token bypasses the prompt after strict parsing.
    pub fn confirm(&self, request: &ConfirmRequest) -> Result<bool> {
        if let Some(token) = &request.provided {
            return parse_confirm_token(token);
        }

        // Arrow-key selection beats typing y/N; the built-in widget is
        // deliberate here, matching the two-entry layout.
        let answer =
            self.builtin
                .pick_one(&request.message, &confirm_choices(request.default), None)?;
        Ok(answer == "Yes")
    }

    /// Ask for free-text input.
    pub fn input(&self, request: &InputRequest) -> Result<String> {
        self.builtin.prompt_input(request)
    }

    /// Ask for input with completion over a candidate list.
    pub fn autocomplete(&self, request: &AutocompleteRequest) -> Result<String> {
        if let Some(provided) = &request.provided {
            return Ok(provided.clone());
        }
        self.builtin.prompt_autocomplete(request)
    }

    /// Ask for a filesystem path, with completion over directory entries.
    ///
    /// The answer is not checked for existence; commands that create files
    /// ask for paths that do not exist yet.
    pub fn path(&self, request: &PathRequest) -> Result<String> {
        if let Some(provided) = &request.provided {
            return Ok(provided.clone());
        }
        self.builtin.prompt_path(request)
    }

    /// Print `message` and wait for a single keypress. Ctrl-C raises
    /// [`SherpaError::Cancelled`] like every other prompt.
    pub fn press_any_key(&self, message: &str) -> Result<()> {
        let term = Term::stderr();
        self.reporter.info(message);
        match term.read_key() {
            Ok(Key::CtrlC) => Err(SherpaError::Cancelled),
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Err(SherpaError::Cancelled),
            Err(e) => Err(e.into()),
        }
    }

    /// Present a select with a trailing escape choice that falls through to
    /// free-text input.
    pub fn select_or_input(&self, request: &SelectRequest) -> Result<String> {
        const CUSTOM: &str = "Custom";

        let mut augmented = request.clone();
        augmented.choices.push(Choice::new(CUSTOM));

        let picked = self.select(&augmented)?;
        if picked != CUSTOM {
            return Ok(picked);
        }
        self.input(&InputRequest::new(&request.message))
    }
}

/// The two confirm entries, default listed first.
pub(crate) fn confirm_choices(default: bool) -> Vec<Choice> {
    if default {
        vec![Choice::new("Yes"), Choice::new("No")]
    } else {
        vec![Choice::new("No"), Choice::new("Yes")]
    }
}

/// Parse a scripted confirm answer against a fixed vocabulary.
///
/// Accepts y/yes/true/1 and n/no/false/0, case-insensitive; anything else
/// raises [`SherpaError::Validation`].
pub fn parse_confirm_token(token: &str) -> Result<bool> {
    match token.to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(SherpaError::validation(format!(
            "cannot interpret '{}' as yes or no",
            token
        ))),
    }
}
