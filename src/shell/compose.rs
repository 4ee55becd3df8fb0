//! Composition of the final shell script.

use crate::shell::executor::ShellOptions;
use crate::ui::dedent;

/// Build the `set -…; ` prefix from the enabled safety flags.
///
/// Flag order is fixed (e, u, x) so composed scripts are stable.
pub(crate) fn safety_prefix(options: &ShellOptions) -> String {
    let mut flags = String::new();
    for (flag, enabled) in [
        ('e', options.abort_on_failure),
        ('u', options.abort_on_unset_variable),
        ('x', options.trace_execution),
    ] {
        if enabled {
            flags.push(flag);
        }
    }

    if flags.is_empty() {
        String::new()
    } else {
        format!("set -{}; ", flags)
    }
}

/// Compose the script handed to `sh -c`.
///
/// The user command is dedented so indented raw string literals compose
/// cleanly. Output-stream merging happens at spawn time, not here, so the
/// shell's own parse diagnostics are merged too.
pub(crate) fn compose(command: &str, options: &ShellOptions) -> String {
    let body = dedent(command);
    format!("{}{}", safety_prefix(options), body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_is_eu() {
        let options = ShellOptions::default();
        assert_eq!(safety_prefix(&options), "set -eu; ");
    }

    #[test]
    fn all_flags_keep_fixed_order() {
        let options = ShellOptions {
            trace_execution: true,
            ..ShellOptions::default()
        };
        assert_eq!(safety_prefix(&options), "set -eux; ");
    }

    #[test]
    fn no_flags_means_no_prefix() {
        let options = ShellOptions {
            abort_on_failure: false,
            abort_on_unset_variable: false,
            ..ShellOptions::default()
        };
        assert_eq!(safety_prefix(&options), "");
    }

    #[test]
    fn compose_prefixes_flags_and_dedents() {
        let options = ShellOptions::default();
        let script = compose("\n            echo one\n            echo two\n        ", &options);
        assert_eq!(script, "set -eu; echo one\necho two");
    }
}
