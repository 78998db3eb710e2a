//! Ignore-style pattern compilation.
//!
//! Raw manifest patterns use gitignore anchoring conventions: a trailing
//! `/` marks a directory-only pattern, a leading `/` anchors to the root of
//! the matching scope, and anything else matches at any depth. A pattern
//! that matches a directory also matches everything nested under it.
//! Normalization rewrites the raw string into that explicit form and hands
//! it to `globset`, where `**` spans any number of path segments.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::PatternError;

/// A raw pattern bound to its compiled matcher.
///
/// Compilation never panics: an invalid pattern is carried as the error it
/// produced and reported on the first match attempt against it.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    raw: String,
    matcher: Result<GlobSet, PatternError>,
}

impl CompiledPattern {
    /// Compile a raw ignore-style pattern.
    ///
    /// `case_insensitive` is decided by the manifest format the pattern
    /// came from (ignore files match case-insensitively, registry
    /// manifests do not).
    pub fn compile(raw: &str, case_insensitive: bool) -> Self {
        let normalized = normalize(raw);
        Self {
            raw: raw.to_string(),
            matcher: build_matcher(raw, &normalized, case_insensitive),
        }
    }

    /// The original pattern string this matcher was compiled from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Test a forward-slash-normalized relative path against the pattern.
    ///
    /// Returns the compile failure, if any, instead of a match result:
    /// callers convert that into an invalid-pattern decision.
    pub fn matches(&self, path: &str) -> Result<bool, PatternError> {
        match &self.matcher {
            Ok(set) => Ok(set.is_match(path)),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Rewrite a raw pattern into its explicit `**`-anchored form.
///
/// Applied in this fixed order:
/// 1. a trailing `/` is dropped (the suffix added in step 4 restores the
///    directory-and-descendants meaning);
/// 2. a leading `/` anchors the pattern: it is stripped and no `**/`
///    prefix is added;
/// 3. otherwise the pattern is unanchored: `**/` is prepended unless
///    already present;
/// 4. `/**` is appended unless already present.
fn normalize(raw: &str) -> String {
    let mut pattern = raw.strip_suffix('/').unwrap_or(raw).to_string();
    if let Some(anchored) = pattern.strip_prefix('/') {
        pattern = anchored.to_string();
    } else if !pattern.starts_with("**/") {
        pattern = format!("**/{pattern}");
    }
    if !pattern.ends_with("/**") {
        pattern.push_str("/**");
    }
    pattern
}

/// Build the glob set for a normalized pattern.
///
/// The normalized form always ends in `/**`, and that suffix has to mean
/// "zero or more trailing segments": `.git/` matches `.git` itself as
/// well as `.git/message/file`. `globset` requires at least one segment
/// after `/**`, so the set holds two globs: the stem (suffix removed)
/// and the full normalized pattern.
fn build_matcher(
    raw: &str,
    normalized: &str,
    case_insensitive: bool,
) -> Result<GlobSet, PatternError> {
    let invalid = |source: globset::Error| PatternError::InvalidGlob {
        pattern: raw.to_string(),
        source,
    };

    let stem = normalized
        .strip_suffix("/**")
        .unwrap_or(normalized);

    let mut builder = GlobSetBuilder::new();
    for glob in [stem, normalized] {
        builder.add(
            GlobBuilder::new(glob)
                .literal_separator(true)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(invalid)?,
        );
    }
    builder.build().map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(pattern: &str) -> CompiledPattern {
        CompiledPattern::compile(pattern, false)
    }

    fn matches(pattern: &str, path: &str) -> bool {
        compiled(pattern).matches(path).unwrap()
    }

    #[test]
    fn unanchored_matches_at_any_depth() {
        assert!(matches(".git", ".git/message"));
        assert!(!matches(".git", ".github/message"));

        assert!(matches("node_modules", "node_modules/x/message.ts"));
        assert!(matches("message", ".git/message"));
    }

    #[test]
    fn explicit_recursive_prefix() {
        assert!(matches("**/.git", ".git/message"));
        assert!(!matches("**/.git", ".github/message"));
    }

    #[test]
    fn leading_slash_anchors_to_root() {
        assert!(matches("/.git", ".git/message"));
        assert!(!matches("/.git", ".github/message"));

        assert!(!matches("/message", ".git/message"));
        assert!(!matches("/message", ".git/message/file"));
        assert!(matches("/message", "message"));
        assert!(matches("/message", "message/file"));
    }

    #[test]
    fn trailing_slash_covers_directory_and_descendants() {
        assert!(matches(".git/", ".git/message"));
        assert!(matches(".git/", ".git/message/file"));
        assert!(matches(".git/", ".git"));
        assert!(!matches(".git/", ".github/message"));
        assert!(!matches(".git/", ".github/message/file"));
        assert!(!matches(".git/", ".github"));
    }

    #[test]
    fn glob_metacharacters_stay_within_one_segment() {
        assert!(matches("*.log", "npm-debug.log"));
        assert!(matches("*.log", "logs/npm-debug.log"));
        assert!(matches(".wafpickle-*", ".wafpickle-7"));
        assert!(!matches("*.log", "debug.log.d"));
    }

    #[test]
    fn case_sensitivity_is_a_compile_option() {
        let sensitive = CompiledPattern::compile("README*", false);
        let insensitive = CompiledPattern::compile("README*", true);
        assert!(!sensitive.matches("readme.md").unwrap());
        assert!(insensitive.matches("readme.md").unwrap());
        assert!(sensitive.matches("README.md").unwrap());
    }

    #[test]
    fn compilation_is_idempotent() {
        let paths = [".git", ".git/message", ".github/message", "message/file"];
        let first = compiled(".git/");
        let second = compiled(".git/");
        for path in paths {
            assert_eq!(
                first.matches(path).unwrap(),
                second.matches(path).unwrap(),
                "divergent result for {path}"
            );
        }
    }

    #[test]
    fn invalid_pattern_reports_on_match() {
        let bad = compiled("dist[");
        let err = bad.matches("dist/app.js").unwrap_err();
        assert_eq!(err.pattern(), "dist[");
    }
}
