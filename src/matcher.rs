//! Shell-glob matching of relative paths against an [`IgnoreList`].
//!
//! Patterns are anchored to the whole path and case-sensitive. `*` and `?`
//! never cross a path separator, `[...]` matches a character class and `\`
//! escapes the next character. Braces are literal and a run of `*` is a single
//! `*`, so no pattern reaches into nested directories. A pattern that fails to
//! compile never matches.

use crate::ignore_list::IgnoreList;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Rewrites `pattern` into the subset of `globset` syntax that behaves like a
/// plain shell glob: `{` and `}` outside a class become `[{]` and `[}]`, and
/// `**` collapses to `*`. Classes and escaped characters are copied untouched.
fn shell_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            _ if in_class => {
                out.push(c);
                if c == ']' {
                    in_class = false;
                }
            }
            '[' => {
                out.push(c);
                in_class = true;
                // A leading `]` (after an optional negation) is a member, not the end.
                if matches!(chars.peek(), Some('!' | '^')) {
                    out.extend(chars.next());
                }
                if chars.peek() == Some(&']') {
                    out.extend(chars.next());
                }
            }
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '*' => {
                out.push('*');
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Compiled form of an [`IgnoreList`]. Any single match is enough to ignore a path.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
    skipped: Vec<String>,
}
impl IgnoreMatcher {
    pub fn new(list: &IgnoreList) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut skipped = Vec::new();
        for pattern in list.patterns() {
            let glob = GlobBuilder::new(&shell_glob(pattern))
                .literal_separator(true)
                .case_insensitive(false)
                .backslash_escape(true)
                .build();
            match glob {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping malformed ignore pattern '{}': {}", pattern, _e);
                    skipped.push(pattern.clone());
                }
            }
        }
        // Every glob already compiled on its own, so building the set only fails on
        // regex size limits. Treat that the same as malformed input.
        let set = builder.build().unwrap_or_else(|_e| {
            #[cfg(feature = "logging")]
            tracing::warn!("Ignore patterns could not be combined, nothing will be ignored: {}", _e);
            GlobSet::empty()
        });
        Self { set, skipped }
    }
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
            skipped: Vec::new(),
        }
    }
    /// Whether `relative_path` matches at least one usable pattern.
    pub fn is_match(&self, relative_path: impl AsRef<Path>) -> bool {
        self.set.is_match(relative_path.as_ref())
    }
    /// Patterns dropped because they failed to compile.
    pub fn skipped_patterns(&self) -> &[String] {
        &self.skipped
    }
}

/// One-shot form of [`IgnoreMatcher::is_match`].
pub fn matches(relative_path: impl AsRef<Path>, list: &IgnoreList) -> bool {
    IgnoreMatcher::new(list).is_match(relative_path)
}

#[cfg(test)]
mod tests {
    use super::shell_glob;

    #[test]
    fn rewrites_only_outside_classes() {
        assert_eq!(shell_glob("{a,b}.md"), "[{]a,b[}].md");
        assert_eq!(shell_glob("**/*.log"), "*/*.log");
        assert_eq!(shell_glob("[{*]x"), "[{*]x");
        assert_eq!(shell_glob("[]{]"), "[]{]");
        assert_eq!(shell_glob("\\{x\\*\\*"), "\\{x\\*\\*");
    }
}
