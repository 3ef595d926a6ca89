//! Ignore-pattern filtering
//!
//! Decides which working-tree paths are eligible for staging. A matcher is
//! built once per repository from the default rules plus the optional
//! `.riftignore` file; patterns are append-only for the lifetime of the
//! matcher and a path is ignored if ANY pattern matches it.

pub mod pattern;

use crate::artifacts::core::RiftError;
use crate::artifacts::ignore::pattern::IgnorePattern;
use std::path::Path;

/// Rules applied to every repository regardless of `.riftignore`
const DEFAULT_PATTERNS: [&str; 4] = [".rift", ".rift/**", ".DS_Store", "Thumbs.db"];

/// Name of the optional per-repository ignore file
pub const IGNORE_FILE: &str = ".riftignore";

/// Compiled set of ignore rules for one repository
#[derive(Debug)]
pub struct IgnoreMatcher {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreMatcher {
    /// Build the matcher for a repository root.
    ///
    /// Fails only if the ignore file exists but cannot be read; a missing
    /// file simply yields the default rules. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn load(repo_path: &Path) -> anyhow::Result<Self> {
        let mut matcher = IgnoreMatcher {
            patterns: Vec::new(),
        };

        for pattern in DEFAULT_PATTERNS {
            matcher.add_pattern(pattern);
        }

        let ignore_file_path = repo_path.join(IGNORE_FILE);
        if ignore_file_path.exists() {
            let content =
                std::fs::read_to_string(&ignore_file_path).map_err(|source| RiftError::Io {
                    path: ignore_file_path.clone(),
                    source,
                })?;

            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                matcher.add_pattern(line);
            }
        }

        Ok(matcher)
    }

    fn add_pattern(&mut self, raw: &str) {
        if let Some(pattern) = IgnorePattern::compile(raw) {
            self.patterns.push(pattern);
        }
    }

    /// Decide whether a repository-relative path is excluded from staging.
    ///
    /// Pure and total: never fails. The result is invariant to platform
    /// path separators and to a leading `./` prefix.
    pub fn should_ignore(&self, path: impl AsRef<Path>) -> bool {
        let normalized = Self::normalize(path.as_ref());

        self.patterns
            .iter()
            .any(|pattern| pattern.matches(&normalized))
    }

    fn normalize(path: &Path) -> String {
        let normalized = path.to_string_lossy().replace('\\', "/");

        normalized
            .strip_prefix("./")
            .unwrap_or(&normalized)
            .to_string()
    }
}
