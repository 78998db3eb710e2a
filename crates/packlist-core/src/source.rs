//! Resolved manifest state for one directory.

use crate::error::ExtractError;
use crate::signed::SignedPatternGroup;

/// The patterns extracted from one manifest file.
///
/// `groups` is ordered: an extractor may append more than one group and
/// earlier groups take priority within their sign (explicit per-entry
/// negation before the blanket rule). `inverted` marks allow-list
/// ecosystems (a package manifest's explicit file list), where unmatched
/// paths default to excluded; deny-list ecosystems (ignore files) leave it
/// false and default to included.
#[derive(Debug, Default)]
pub struct Source {
    /// Manifest file name, e.g. `.gitignore`.
    pub name: String,
    /// Manifest path relative to the scan root.
    pub path: String,
    /// Ordered signed pattern groups extracted from the file.
    pub groups: Vec<SignedPatternGroup>,
    /// True for allow-list manifests.
    pub inverted: bool,
    /// Read or parse failure. A source carrying an error is "broken" and
    /// must never be used for matching; its subtree fails closed.
    pub error: Option<ExtractError>,
}

impl Source {
    /// Create an empty source for a manifest located at `path`.
    pub fn new(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            ..Self::default()
        }
    }

    /// True when the manifest could not be read or parsed.
    pub fn is_broken(&self) -> bool {
        self.error.is_some()
    }
}

/// Route a negatable manifest entry into the right group.
///
/// A leading `!` flips the entry to the opposite sign and is stripped.
/// `invert` swaps the destinations up front: in an allow-list manifest a
/// plain entry is an include and a `!` entry an exclude.
pub fn push_negatable<'g>(
    pattern: &str,
    invert: bool,
    include: &'g mut SignedPatternGroup,
    exclude: &'g mut SignedPatternGroup,
) {
    let (include, exclude) = if invert {
        (exclude, include)
    } else {
        (include, exclude)
    };
    match pattern.strip_prefix('!') {
        Some(negated) => include.push(negated),
        None => exclude.push(pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> (SignedPatternGroup, SignedPatternGroup) {
        (SignedPatternGroup::new(false), SignedPatternGroup::new(true))
    }

    #[test]
    fn plain_entries_exclude_in_deny_lists() {
        let (mut include, mut exclude) = groups();
        push_negatable("build/", false, &mut include, &mut exclude);
        push_negatable("!build/keep.txt", false, &mut include, &mut exclude);
        assert_eq!(exclude.patterns(), ["build/"]);
        assert_eq!(include.patterns(), ["build/keep.txt"]);
    }

    #[test]
    fn plain_entries_include_in_allow_lists() {
        let (mut include, mut exclude) = groups();
        push_negatable("dist/**", true, &mut include, &mut exclude);
        push_negatable("!dist/tmp", true, &mut include, &mut exclude);
        assert_eq!(include.patterns(), ["dist/**"]);
        assert_eq!(exclude.patterns(), ["dist/tmp"]);
    }

    #[test]
    fn source_name_is_the_basename() {
        assert_eq!(Source::new(".gitignore").name, ".gitignore");
        assert_eq!(Source::new(".git/info/exclude").name, "exclude");
    }
}
