//! Repository discovery and environment-file loading.

pub mod env_file;
pub mod root;

pub use env_file::{load_env_file, merged_env, parse_env};
pub use root::find_repo_root;
