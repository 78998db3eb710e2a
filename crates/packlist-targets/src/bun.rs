//! Bun: what `bun pm pack` would ship.

use packlist_core::extract::{LINE_IGNORE, PACKAGE_JSON_FILES};
use packlist_core::{Extractor, Target};

use crate::internal;

/// The bun target. Bun follows npm's pack behavior with its own lockfiles
/// and config files added to the excluded set; npm would include
/// `bun.lock`, `.env.production` and `bunfig.toml`, bun does not.
pub fn target() -> Target {
    Target {
        name: "bun",
        hint: "bun pm pack --dry-run",
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
        internal: internal(
            &[
                "package-lock.json",
                "yarn.lock",
                "pnpm-lock.yaml",
                "bun.lockb",
                "bun.lock",
                ".*.swp",
                "._*",
                ".DS_Store",
                ".git",
                ".gitignore",
                ".hg",
                ".npmignore",
                ".npmrc",
                ".lock-wscript",
                ".svn",
                "wafpickle-*",
                "CVS",
                "npm-debug.log",
                ".env.production",
                "bunfig.toml",
                "node_modules",
            ],
            &[
                "package.json",
                "LICENSE",
                "LICENSE.*",
                "LICENCE",
                "LICENCE.*",
                "README",
                "README.*",
            ],
        ),
    }
}
