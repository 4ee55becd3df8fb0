//! Environment-file parsing and merging.
//!
//! Commands run with the variables from `.env` files found at the repository
//! root and its parent. Loading is best effort: a missing file contributes
//! nothing, and a root-level entry wins over a parent-level one.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

/// Parse `KEY=value` content into a map.
///
/// Supports comments (`#`), blank lines, whitespace around `=`, quoted
/// values, and values containing `=`.
pub fn parse_env(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    vars
}

/// Load and parse an env file, returning an empty map if it doesn't exist.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_env(&content))
}

/// Merge `.env` files from the repository root's parent and the root itself.
///
/// Root entries override parent entries. Unreadable files are skipped with a
/// warning rather than failing the command.
pub fn merged_env(root: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    let mut sources = Vec::new();
    if let Some(parent) = root.parent() {
        sources.push(parent.join(".env"));
    }
    sources.push(root.join(".env"));

    for path in sources {
        match load_env_file(&path) {
            Ok(loaded) => vars.extend(loaded),
            Err(e) => tracing::warn!("Skipping unreadable env file {}: {}", path.display(), e),
        }
    }

    vars
}

fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_simple_pairs() {
        let vars = parse_env("A=1\nB=two");
        assert_eq!(vars.get("A"), Some(&"1".to_string()));
        assert_eq!(vars.get("B"), Some(&"two".to_string()));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let vars = parse_env("# comment\n\nA=1");
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn strips_quotes_and_whitespace() {
        let vars = parse_env("A = \"quoted value\"\nB = 'single'");
        assert_eq!(vars.get("A"), Some(&"quoted value".to_string()));
        assert_eq!(vars.get("B"), Some(&"single".to_string()));
    }

    #[test]
    fn keeps_equals_in_values() {
        let vars = parse_env("URL=https://example.com?a=b");
        assert_eq!(vars.get("URL"), Some(&"https://example.com?a=b".to_string()));
    }

    #[test]
    fn empty_value_is_kept() {
        let vars = parse_env("EMPTY=");
        assert_eq!(vars.get("EMPTY"), Some(&String::new()));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let vars = load_env_file(&dir.path().join(".env")).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn root_entries_override_parent_entries() {
        let parent = tempfile::TempDir::new().unwrap();
        let root = parent.path().join("project");
        fs::create_dir(&root).unwrap();
        fs::write(parent.path().join(".env"), "SHARED=parent\nONLY_PARENT=1").unwrap();
        fs::write(root.join(".env"), "SHARED=root").unwrap();

        let vars = merged_env(&root);
        assert_eq!(vars.get("SHARED"), Some(&"root".to_string()));
        assert_eq!(vars.get("ONLY_PARENT"), Some(&"1".to_string()));
    }
}
