//! Command declarations.
//!
//! A [`CommandSpec`] names a command, its parameters, the directory policy it
//! runs under, and whether its lifecycle is reported. Declaration problems
//! (a parameter without a default, duplicate parameter names) are caught by
//! [`CommandSpecBuilder::build`], before any invocation can happen.

use std::path::PathBuf;

use crate::error::{Result, SherpaError};

/// Where a command runs from.
///
/// Exactly one policy is active per command. `Path` never creates the
/// directory; a missing path is an invocation error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunFrom {
    /// The repository root discovered by walking up from the command's
    /// declaration directory.
    RepoRoot,
    /// The command's declaration directory itself.
    CommandFile,
    /// The caller's current directory.
    #[default]
    CurrentDir,
    /// A fresh unique temp directory, removed when the invocation ends.
    TempDir,
    /// An explicit existing directory.
    Path(PathBuf),
}

/// The declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A single string value.
    String,
    /// An ordered list of string values.
    StringList,
}

/// A parameter's default (and provided) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Get as a single string, if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Get as a list, if this is a `List` value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Str(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

/// One declared command parameter.
///
/// Every parameter must declare a default; this is checked when the owning
/// [`CommandSpec`] is built, not at call time.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub kind: ParamKind,
    /// Whether the caller may omit the value entirely (falling back to an
    /// interactive prompt inside the command body).
    pub optional: bool,
    /// Default value. `None` only while building; `build` rejects it.
    pub default: Option<ParamValue>,
}

impl ParamSpec {
    /// Declare a string parameter.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::String,
            optional: false,
            default: None,
        }
    }

    /// Declare a string-list parameter.
    pub fn string_list(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::StringList,
            optional: false,
            default: None,
        }
    }

    /// Mark the parameter as omittable.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the mandatory default value.
    pub fn default(mut self, value: impl Into<ParamValue>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A validated command declaration.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command name, used in lifecycle reporting.
    pub name: String,
    /// Ordered parameter list.
    pub params: Vec<ParamSpec>,
    /// Working-directory policy.
    pub run_from: RunFrom,
    /// The command's declaration directory, used by the `RepoRoot` and
    /// `CommandFile` policies and for env-file discovery.
    pub source_dir: PathBuf,
    /// Whether to report entry/success/failure for this command.
    pub verbose: bool,
}

impl CommandSpec {
    /// Start building a command declaration.
    ///
    /// # Example
    ///
    /// ```
    /// use sherpa::{CommandSpec, ParamSpec, RunFrom};
    ///
    /// let spec = CommandSpec::builder("deploy")
    ///     .param(ParamSpec::string("env").default("staging"))
    ///     .run_from(RunFrom::RepoRoot)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(spec.name, "deploy");
    /// ```
    pub fn builder(name: impl Into<String>) -> CommandSpecBuilder {
        CommandSpecBuilder {
            name: name.into(),
            params: Vec::new(),
            run_from: RunFrom::default(),
            source_dir: None,
            verbose: true,
        }
    }

    /// Look up a parameter's default value.
    pub fn default_for(&self, param: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|p| p.name == param)
            .and_then(|p| p.default.as_ref())
    }
}

/// Builder for [`CommandSpec`].
#[derive(Debug)]
pub struct CommandSpecBuilder {
    name: String,
    params: Vec<ParamSpec>,
    run_from: RunFrom,
    source_dir: Option<PathBuf>,
    verbose: bool,
}

impl CommandSpecBuilder {
    /// Add a parameter declaration.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Set the working-directory policy.
    pub fn run_from(mut self, run_from: RunFrom) -> Self {
        self.run_from = run_from;
        self
    }

    /// Set the declaration directory. Typically derived from `file!()`:
    ///
    /// ```ignore
    /// .source_dir(std::path::Path::new(file!()).parent().unwrap())
    /// ```
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Disable lifecycle reporting for this command.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    /// Validate and finish the declaration.
    ///
    /// Fails with [`SherpaError::Validation`] when a parameter lacks a
    /// default or two parameters share a name. These failures are fatal to
    /// the declaring call and never reach the runtime's success/failure
    /// reporting.
    pub fn build(self) -> Result<CommandSpec> {
        for (i, param) in self.params.iter().enumerate() {
            if param.default.is_none() {
                return Err(SherpaError::validation(format!(
                    "parameter '{}' of command '{}' has no default",
                    param.name, self.name
                )));
            }
            if self.params[..i].iter().any(|p| p.name == param.name) {
                return Err(SherpaError::validation(format!(
                    "duplicate parameter '{}' in command '{}'",
                    param.name, self.name
                )));
            }
        }

        let source_dir = match self.source_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        Ok(CommandSpec {
            name: self.name,
            params: self.params,
            run_from: self.run_from,
            source_dir,
            verbose: self.verbose,
        })
    }
}
