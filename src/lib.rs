//! Sherpa - write project task commands in Rust.
//!
//! Sherpa replaces ad-hoc `bin/` scripts with plain Rust functions run
//! under a declared [`CommandSpec`]: each command controls its working
//! directory, declares parameter defaults, and falls back to interactive
//! prompts when arguments are omitted.
//!
//! # Modules
//!
//! - [`command`] - Command declarations, execution context, and the runtime
//! - [`error`] - Error types and result aliases
//! - [`select`] - Interactive selection (fuzzy picker with built-in fallback)
//! - [`shell`] - Shell command composition and streaming execution
//! - [`ui`] - Terminal output
//! - [`workspace`] - Repository discovery and env-file loading
//!
//! # Example
//!
//! ```no_run
//! use sherpa::{CommandSpec, ParamSpec, Runtime, RunFrom, SelectRequest, Selector, Shell};
//!
//! fn main() -> sherpa::Result<()> {
//!     let spec = CommandSpec::builder("deploy")
//!         .param(ParamSpec::string("env").default("staging"))
//!         .run_from(RunFrom::RepoRoot)
//!         .build()?;
//!
//!     Runtime::new().invoke(&spec, None, |ctx| {
//!         let selector = Selector::new();
//!         let env = selector.select(&SelectRequest::new(
//!             "Deploy to which environment?",
//!             ["staging", "production"],
//!         ))?;
//!
//!         let shell = Shell::new();
//!         shell.run(&format!("./deploy.sh {env}"), &ctx.shell_options())?;
//!         Ok(())
//!     })
//! }
//! ```

pub mod command;
pub mod error;
pub mod select;
pub mod shell;
pub mod ui;
pub mod workspace;

pub use command::{
    CommandSpec, CommandSpecBuilder, ExecutionContext, ParamKind, ParamSpec, ParamValue, RunFrom,
    Runtime,
};
pub use error::{Result, SherpaError};
pub use select::{
    AutocompleteRequest, Choice, ConfirmRequest, InputRequest, MultiSelectRequest, PathRequest,
    SelectRequest, Selector,
};
pub use shell::{Shell, ShellOptions, CANCEL_MARKER};
pub use ui::Reporter;
