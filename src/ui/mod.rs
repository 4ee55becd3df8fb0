//! Terminal output.
//!
//! [`Reporter`] is the single seam through which the runtime, the shell
//! executor, and the selection engine talk to the terminal. It is stateless:
//! every method takes `&self` and emits one formatted line (or block).

pub mod theme;

pub use theme::SherpaTheme;

/// Stateless emitter for success/error/informational terminal lines.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    theme: SherpaTheme,
}

impl Reporter {
    /// Create a reporter with the default colored theme.
    pub fn new() -> Self {
        Self {
            theme: SherpaTheme::new(),
        }
    }

    /// Create a reporter that never emits color codes.
    pub fn plain() -> Self {
        Self {
            theme: SherpaTheme::plain(),
        }
    }

    /// Emit a success line: `✓ <msg>`.
    pub fn success(&self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    /// Emit an error line: `✗ <msg>`.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Emit an informational block. The message is dedented so callers can
    /// use indented raw string literals.
    pub fn info(&self, msg: &str) {
        println!("{}", self.theme.format_info(dedent(msg).trim()));
    }

    /// Emit a shell command echo block.
    pub fn command(&self, msg: &str) {
        println!("{}", self.theme.format_command(msg));
    }

    /// Emit the separator printed after a successfully shown command.
    pub fn separator(&self) {
        println!("{}", self.theme.format_dim(&"—".repeat(80)));
    }
}

/// Strip the longest common leading indentation (spaces and tabs) from
/// every non-blank line.
pub(crate) fn dedent(text: &str) -> String {
    let indent_width = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();

    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(indent_width)
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| {
            if indent_width(line) >= margin {
                &line[margin..]
            } else {
                line.trim_start_matches([' ', '\t'])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
