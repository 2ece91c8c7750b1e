use std::path::{Path, PathBuf};

use glob::Pattern;

/// Directory names that are never descended into.
const ALWAYS_SKIPPED_DIRS: &[&str] = &[".git"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths under the root.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiled `ignores` configuration.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Compile ignore entries relative to `root`.
    ///
    /// Glob patterns are matched against full paths; other entries are path
    /// prefixes relative to `root`.
    pub fn new(root: &Path, ignores: &[String]) -> Result<Self, glob::PatternError> {
        let mut rules = Self::default();
        for ignore in ignores {
            if is_glob_pattern(ignore) {
                rules.patterns.push(Pattern::new(ignore)?);
            } else {
                rules.literal_paths.push(root.join(ignore));
            }
        }
        Ok(rules)
    }

    pub fn is_ignored_file(&self, path: &Path) -> bool {
        self.is_under_literal(path) || self.patterns.iter().any(|p| p.matches_path(path))
    }

    pub fn is_ignored_dir(&self, dir: &Path) -> bool {
        let always_skipped = dir
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| ALWAYS_SKIPPED_DIRS.contains(&name));
        if always_skipped || self.is_under_literal(dir) {
            return true;
        }

        // `**/vendor/**` matches what is inside `vendor` but not `vendor`
        // itself, so also test a stand-in child path.
        let child = dir.join("_");
        self.patterns
            .iter()
            .any(|p| p.matches_path(dir) || p.matches_path(&child))
    }

    fn is_under_literal(&self, path: &Path) -> bool {
        self.literal_paths.iter().any(|ignored| path.starts_with(ignored))
    }
}
