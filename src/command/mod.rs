//! Command declaration and invocation.

pub mod context;
pub mod runtime;
pub mod spec;

pub use context::ExecutionContext;
pub use runtime::Runtime;
pub use spec::{CommandSpec, CommandSpecBuilder, ParamKind, ParamSpec, ParamValue, RunFrom};
