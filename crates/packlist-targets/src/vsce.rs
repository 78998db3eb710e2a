//! VS Code extensions: what `vsce package` would ship.

use packlist_core::extract::{LINE_IGNORE, PACKAGE_JSON_FILES};
use packlist_core::{Extractor, Target};

use crate::internal;

/// The vsce target: the extension manifest's `files` list when present,
/// `.vscodeignore` otherwise, `.gitignore` as the final fallback.
pub fn target() -> Target {
    Target {
        name: "vsce",
        hint: "vsce ls",
        extractors: vec![
            Extractor {
                path: "package.json",
                format: &PACKAGE_JSON_FILES,
            },
            Extractor {
                path: ".vscodeignore",
                format: &LINE_IGNORE,
            },
            Extractor {
                path: ".gitignore",
                format: &LINE_IGNORE,
            },
        ],
        internal: internal(&[".git", ".DS_Store"], &[]),
    }
}
