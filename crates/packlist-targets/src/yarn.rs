//! Yarn (berry): what `yarn pack` would ship.

use packlist_core::extract::{LINE_IGNORE, PACKAGE_JSON_FILES};
use packlist_core::{Extractor, Target};

use crate::{internal, NPM_INTERNAL_EXCLUDE, NPM_INTERNAL_INCLUDE};

/// The yarn target: npm's chain with `.yarnignore` taking priority over
/// `.npmignore`, and yarn's own config files always excluded.
pub fn target() -> Target {
    let mut exclude: Vec<&str> = NPM_INTERNAL_EXCLUDE.to_vec();
    exclude.extend([".yarnignore", ".yarnrc"]);

    Target {
        name: "yarn",
        hint: "yarn pack --dry-run",
        extractors: vec![
            Extractor {
                path: "package.json",
                format: &PACKAGE_JSON_FILES,
            },
            Extractor {
                path: ".yarnignore",
                format: &LINE_IGNORE,
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
        internal: internal(&exclude, NPM_INTERNAL_INCLUDE),
    }
}
