//! Git: what `git ls-tree` would track.

use packlist_core::extract::LINE_IGNORE;
use packlist_core::{Extractor, Target};

use crate::internal;

/// The git target: `.gitignore` per directory, plus the repository-local
/// `.git/info/exclude`.
pub fn target() -> Target {
    Target {
        name: "git",
        hint: "git ls-tree -r <branch> --name-only",
        extractors: vec![
            Extractor {
                path: ".gitignore",
                format: &LINE_IGNORE,
            },
            Extractor {
                path: ".git/info/exclude",
                format: &LINE_IGNORE,
            },
        ],
        internal: internal(&[".git", ".DS_Store"], &[]),
    }
}
