//! Target configuration: the per-ecosystem data the engine runs on.

use crate::extract::Extract;
use crate::signed::SignedPatternGroup;

/// One manifest file an ecosystem reads, and how to parse it.
pub struct Extractor {
    /// Path of the manifest relative to the directory being probed,
    /// e.g. `.gitignore` or `.git/info/exclude`.
    pub path: &'static str,
    /// The format implementation.
    pub format: &'static (dyn Extract + Sync),
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor").field("path", &self.path).finish()
    }
}

/// Immutable description of one supported ecosystem.
///
/// Constructed by a target table and passed by reference into the scan;
/// the engine itself is ecosystem-agnostic. `extractors` are tried
/// most-specific-first per directory. `internal` holds the built-in rules
/// that no manifest inside the scanned tree can override.
#[derive(Debug)]
pub struct Target {
    /// Short ecosystem name, e.g. `git` or `npm`.
    pub name: &'static str,
    /// The real command that verifies a listing, e.g.
    /// `git ls-tree -r <branch> --name-only`. Display-only.
    pub hint: &'static str,
    /// Manifest chain, in resolution priority order.
    pub extractors: Vec<Extractor>,
    /// Built-in pattern groups. Compiled by the target table.
    pub internal: Vec<SignedPatternGroup>,
}
