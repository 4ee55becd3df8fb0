//! Per-invocation execution state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::shell::ShellOptions;

/// State for one command invocation.
///
/// The resolved working directory is carried here and threaded explicitly
/// into shell calls; the process working directory is never mutated. The
/// temp-directory guard (when the `TempDir` policy is active) is owned by
/// the context, so the directory is removed on every exit path, including
/// panics and cancellation.
#[derive(Debug)]
pub struct ExecutionContext {
    pub(crate) original_dir: PathBuf,
    pub(crate) dir: PathBuf,
    pub(crate) temp: Option<TempDir>,
    pub(crate) nested: bool,
    pub(crate) verbose: bool,
    pub(crate) env: HashMap<String, String>,
}

impl ExecutionContext {
    /// The directory this command runs in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The caller's working directory at invocation start.
    pub fn original_dir(&self) -> &Path {
        &self.original_dir
    }

    /// The temp directory created for the `TempDir` policy, if any.
    pub fn temp_dir(&self) -> Option<&Path> {
        self.temp.as_ref().map(TempDir::path)
    }

    /// Whether this invocation was started from inside another command.
    ///
    /// Nested invocations skip entry marking; top-level argument mapping
    /// uses this to avoid re-parsing process arguments.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Whether lifecycle reporting is enabled for this invocation.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Environment variables merged from workspace `.env` files.
    pub fn env(&self) -> &HashMap<String, String> {
        &self.env
    }

    /// Shell options pre-filled with this context's directory and env.
    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            working_dir: Some(self.dir.clone()),
            env: self.env.clone(),
            ..ShellOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(dir: &Path) -> ExecutionContext {
        ExecutionContext {
            original_dir: dir.to_path_buf(),
            dir: dir.to_path_buf(),
            temp: None,
            nested: false,
            verbose: true,
            env: HashMap::from([("KEY".to_string(), "value".to_string())]),
        }
    }

    #[test]
    fn shell_options_carry_dir_and_env() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = context(dir.path());

        let options = ctx.shell_options();
        assert_eq!(options.working_dir.as_deref(), Some(dir.path()));
        assert_eq!(options.env.get("KEY").map(String::as_str), Some("value"));
        assert!(options.capture_output);
    }

    #[test]
    fn accessors_expose_state() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = context(dir.path());
        assert_eq!(ctx.dir(), dir.path());
        assert_eq!(ctx.original_dir(), dir.path());
        assert!(!ctx.is_nested());
        assert!(ctx.is_verbose());
    }
}
