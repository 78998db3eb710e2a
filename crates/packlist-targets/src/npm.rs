//! npm: what `npm pack` would ship.

use packlist_core::extract::{LINE_IGNORE, PACKAGE_JSON_FILES};
use packlist_core::{Extractor, Target};

use crate::{internal, NPM_INTERNAL_EXCLUDE, NPM_INTERNAL_INCLUDE};

/// The npm target: the `files` allow-list when present, `.npmignore`
/// otherwise, `.gitignore` as the final fallback.
pub fn target() -> Target {
    Target {
        name: "npm",
        hint: "npm pack --dry-run",
        extractors: vec![
            Extractor {
                path: "package.json",
                format: &PACKAGE_JSON_FILES,
            },
            Extractor {
                path: ".npmignore",
                format: &LINE_IGNORE,
            },
            Extractor {
                path: ".gitignore",
                format: &LINE_IGNORE,
            },
        ],
        internal: internal(NPM_INTERNAL_EXCLUDE, NPM_INTERNAL_INCLUDE),
    }
}
