//! Yarn classic (1.x): what its `yarn pack` would ship.

use packlist_core::extract::{LINE_IGNORE, PACKAGE_JSON_FILES};
use packlist_core::{Extractor, Target};

use crate::internal;

/// The yarn classic target. Classic's pack list differs from berry's: it
/// enumerates the wafpickle files individually, excludes its own
/// lockfile, and force-includes a root-anchored set of well-known
/// artifact files.
pub fn target() -> Target {
    Target {
        name: "yarn-classic",
        hint: "yarn pack --dry-run (yarn 1.x)",
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
        internal: internal(
            &[
                ".git",
                "CVS",
                ".svn",
                ".hg",
                "node_modules",
                "yarn.lock",
                ".lock-wscript",
                ".wafpickle-0",
                ".wafpickle-1",
                ".wafpickle-2",
                ".wafpickle-3",
                ".wafpickle-4",
                ".wafpickle-5",
                ".wafpickle-6",
                ".wafpickle-7",
                ".wafpickle-8",
                ".wafpickle-9",
                "*.swp",
                "._*",
                "npm-debug.log",
                "yarn-error.log",
                ".npmrc",
                ".yarnrc",
                ".yarnrc.yml",
                ".npmignore",
                ".gitignore",
                ".DS_Store",
            ],
            &[
                "/package.json",
                "/readme*",
                "/license*",
                "/licence*",
                "/changes*",
                "/changelog*",
                "/history*",
            ],
        ),
    }
}
