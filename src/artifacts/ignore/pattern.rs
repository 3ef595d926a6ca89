//! Single ignore-rule compilation
//!
//! Raw gitignore-style rules are rewritten into regular expressions once at
//! load time and cached. The translation is an explicit rule table, not
//! full gitignore fidelity: `*` and `**` are equivalent and there is no
//! character-class or negation support.

use regex::Regex;

/// An ignore rule compiled into a matchable predicate
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    matcher: Regex,
}

impl IgnorePattern {
    /// Compile a raw rule, or drop it.
    ///
    /// A rule whose translation is not a valid expression is discarded with
    /// a warning instead of rejecting the whole ignore set: one malformed
    /// line must not disable the rest of the file.
    pub fn compile(raw: &str) -> Option<Self> {
        let translated = Self::translate(raw);

        match Regex::new(&translated) {
            Ok(matcher) => Some(IgnorePattern {
                raw: raw.to_string(),
                matcher,
            }),
            Err(error) => {
                tracing::warn!(pattern = raw, %error, "dropping unmatchable ignore pattern");
                None
            }
        }
    }

    // Translation table:
    //   `.`           -> `\.`  (literal dot)
    //   `*`           -> `.*`  (any run of characters)
    //   `?`           -> `.`   (exactly one character)
    //   trailing `/`  -> directory prefix, everything beneath it matches
    //   leading `/`   -> anchored to the repository root
    //   otherwise     -> may match starting at any path segment
    // Every pattern also matches paths nested below the literal match, so
    // matching a directory ignores its entire subtree.
    fn translate(raw: &str) -> String {
        let mut pattern = raw.replace('.', r"\.").replace('*', ".*").replace('?', ".");

        if pattern.ends_with('/') {
            pattern.push_str(".*");
        }

        let mut pattern = match pattern.strip_prefix('/') {
            Some(anchored) => format!("^{anchored}"),
            None => format!("(^|.*/){pattern}"),
        };
        pattern.push_str("(/.*)?$");

        pattern
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Match against an already normalized path
    pub fn matches(&self, normalized_path: &str) -> bool {
        self.matcher.is_match(normalized_path)
    }
}
