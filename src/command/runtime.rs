//! Command invocation.
//!
//! [`Runtime::invoke`] wraps a command body with working-directory
//! resolution, env-file merging, reentrancy tracking, and lifecycle
//! reporting. Errors from the body are reported (when verbose) and always
//! re-raised, so a chain of commands calling each other aborts the whole
//! chain on user cancellation.

use std::collections::HashMap;

use crate::command::context::ExecutionContext;
use crate::command::spec::{CommandSpec, RunFrom};
use crate::error::{Result, SherpaError};
use crate::shell::CANCEL_MARKER;
use crate::ui::Reporter;
use crate::workspace;

/// Executes command bodies under their declared [`CommandSpec`].
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    reporter: Reporter,
}

impl Runtime {
    /// Create a runtime with the default reporter.
    pub fn new() -> Self {
        Self {
            reporter: Reporter::new(),
        }
    }

    /// Create a runtime with a custom reporter.
    pub fn with_reporter(reporter: Reporter) -> Self {
        Self { reporter }
    }

    /// Invoke `body` under `spec`.
    ///
    /// Pass the current context as `parent` when one command invokes another
    /// programmatically; the child then runs with the reentrancy flag set.
    ///
    /// The resolved directory is handed to the body via
    /// [`ExecutionContext::dir`]; the process working directory is left
    /// untouched. A temp directory created for the `TempDir` policy is
    /// removed when this call returns, on every path.
    pub fn invoke<T, F>(
        &self,
        spec: &CommandSpec,
        parent: Option<&ExecutionContext>,
        body: F,
    ) -> Result<T>
    where
        F: FnOnce(&ExecutionContext) -> Result<T>,
    {
        let original_dir = std::env::current_dir()?;

        let mut temp = None;
        let dir = match &spec.run_from {
            RunFrom::RepoRoot => workspace::find_repo_root(&spec.source_dir)?,
            RunFrom::CommandFile => spec.source_dir.clone(),
            RunFrom::CurrentDir => original_dir.clone(),
            RunFrom::TempDir => {
                let guard = tempfile::tempdir()?;
                let path = guard.path().to_path_buf();
                temp = Some(guard);
                path
            }
            RunFrom::Path(path) => {
                // Never created implicitly; metadata() surfaces NotFound.
                let meta = std::fs::metadata(path)?;
                if !meta.is_dir() {
                    return Err(SherpaError::validation(format!(
                        "run_from path is not a directory: {}",
                        path.display()
                    )));
                }
                path.clone()
            }
        };

        let env = match workspace::find_repo_root(&spec.source_dir) {
            Ok(root) => workspace::merged_env(&root),
            // Best effort: commands outside a repository still run, the
            // RepoRoot policy already failed above if it needed the root.
            Err(_) => HashMap::new(),
        };

        let nested = parent.is_some();
        let ctx = ExecutionContext {
            original_dir,
            dir,
            temp,
            nested,
            verbose: spec.verbose,
            env,
        };

        if spec.verbose && !nested {
            tracing::debug!(command = %spec.name, dir = %ctx.dir().display(), "entering command");
        }

        let result = body(&ctx);

        match &result {
            Ok(_) => {
                if spec.verbose {
                    self.reporter
                        .success(&format!("Command '{}' succeeded", spec.name));
                }
            }
            Err(SherpaError::Cancelled) => {
                // The marker line lets an outer task-runner process classify
                // this invocation's exit as cancellation, not failure.
                if spec.verbose {
                    self.reporter.error(CANCEL_MARKER);
                }
            }
            Err(_) => {
                if spec.verbose {
                    self.reporter
                        .error(&format!("Command '{}' failed", spec.name));
                }
            }
        }

        // ctx (and the temp-dir guard) drops here; removal is best effort.
        result
    }
}
