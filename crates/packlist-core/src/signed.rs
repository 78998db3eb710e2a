//! Signed pattern groups: ordered pattern lists tagged with their meaning.

use crate::error::PatternError;
use crate::pattern::CompiledPattern;

/// An ordered set of patterns tagged with whether a match excludes or
/// includes the path.
///
/// Both built-in (internal) rules and manifest-derived (external) rules are
/// represented this way. Order within a group is evaluation order: the
/// first matching pattern wins. Precedence between groups comes from the
/// match engine, not from position.
#[derive(Debug, Clone, Default)]
pub struct SignedPatternGroup {
    patterns: Vec<String>,
    excludes: bool,
    compiled: Option<Vec<CompiledPattern>>,
}

impl SignedPatternGroup {
    /// Create an empty group. `excludes` decides what a match means.
    pub fn new(excludes: bool) -> Self {
        Self {
            patterns: Vec::new(),
            excludes,
            compiled: None,
        }
    }

    /// Create a group from a fixed pattern list.
    pub fn from_patterns<I, S>(patterns: I, excludes: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            excludes,
            compiled: None,
        }
    }

    /// Append a raw pattern. Invalidates any previous compilation.
    pub fn push(&mut self, pattern: &str) {
        self.patterns.push(pattern.to_string());
        self.compiled = None;
    }

    /// Whether a match in this group means "exclude".
    pub fn excludes(&self) -> bool {
        self.excludes
    }

    /// Raw patterns, in evaluation order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True when the group holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compile every pattern in the group.
    ///
    /// Compilation is explicit and idempotent; whichever component finishes
    /// constructing the group triggers it. Uncompiled groups never match.
    pub fn compile(&mut self, case_insensitive: bool) {
        if self.compiled.is_some() {
            return;
        }
        self.compiled = Some(
            self.patterns
                .iter()
                .map(|p| CompiledPattern::compile(p, case_insensitive))
                .collect(),
        );
    }

    /// Find the first compiled pattern matching `path`.
    ///
    /// Returns the raw pattern string of the winner, `None` when nothing
    /// matched or the group was never compiled, or the compile failure of
    /// the pattern the test stumbled over.
    pub fn first_match(&self, path: &str) -> Result<Option<&str>, PatternError> {
        let Some(compiled) = &self.compiled else {
            return Ok(None);
        };
        for pattern in compiled {
            if pattern.matches(path)? {
                return Ok(Some(pattern.raw()));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins_within_a_group() {
        let mut group = SignedPatternGroup::from_patterns(["dist", "dist/**"], true);
        group.compile(false);
        assert_eq!(group.first_match("dist/app.js").unwrap(), Some("dist"));
    }

    #[test]
    fn uncompiled_group_never_matches() {
        let group = SignedPatternGroup::from_patterns(["dist"], true);
        assert_eq!(group.first_match("dist/app.js").unwrap(), None);
    }

    #[test]
    fn invalid_member_surfaces_as_error() {
        let mut group = SignedPatternGroup::from_patterns(["ok", "bad["], true);
        group.compile(false);
        let err = group.first_match("something").unwrap_err();
        assert_eq!(err.pattern(), "bad[");
    }

    #[test]
    fn recompilation_is_a_no_op() {
        let mut group = SignedPatternGroup::from_patterns(["src"], false);
        group.compile(false);
        group.compile(true);
        assert_eq!(group.first_match("SRC/lib.rs").unwrap(), None);
        assert_eq!(group.first_match("src/lib.rs").unwrap(), Some("src"));
    }
}
