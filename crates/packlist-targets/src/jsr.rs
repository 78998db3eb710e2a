//! JSR / Deno: what `jsr publish` would ship.

use packlist_core::extract::{REGISTRY_JSON, REGISTRY_JSONC};
use packlist_core::{Extractor, Target};

use crate::internal;

/// The jsr target: `deno.json(c)` before `jsr.json(c)`, each carrying
/// `include`/`exclude` lists with an optional `publish` override section.
pub fn target() -> Target {
    Target {
        name: "jsr",
        hint: "jsr publish --dry-run",
        extractors: vec![
            Extractor {
                path: "deno.json",
                format: &REGISTRY_JSON,
            },
            Extractor {
                path: "deno.jsonc",
                format: &REGISTRY_JSONC,
            },
            Extractor {
                path: "jsr.json",
                format: &REGISTRY_JSON,
            },
            Extractor {
                path: "jsr.jsonc",
                format: &REGISTRY_JSONC,
            },
        ],
        internal: internal(&[".git", ".DS_Store"], &[]),
    }
}
