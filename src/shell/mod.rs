//! Shell command composition and execution.

pub mod compose;
pub mod executor;
pub mod format;

pub use executor::{Shell, ShellOptions};

/// Text that marks a subprocess exit as user cancellation rather than
/// failure. The runtime prints this line when a command is interrupted, so
/// a nested task-runner invocation propagates cancellation to its parent
/// through the captured output.
pub const CANCEL_MARKER: &str = "Interrupted by user";
