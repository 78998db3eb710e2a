//! Registry-style manifests: `deno.json`, `deno.jsonc`, `jsr.json`,
//! `jsr.jsonc`.

use serde::Deserialize;

use crate::error::ExtractError;
use crate::extract::{jsonc::strip_json_comments, Extract, Outcome};
use crate::signed::SignedPatternGroup;
use crate::source::Source;

#[derive(Debug, Deserialize)]
struct RegistryDoc {
    exclude: Option<Vec<String>>,
    include: Option<Vec<String>>,
    publish: Option<PublishSection>,
}

/// The `publish` override section. When present, its lists replace the
/// top-level ones entirely; they are not merged.
#[derive(Debug, Deserialize)]
struct PublishSection {
    exclude: Option<Vec<String>>,
    include: Option<Vec<String>>,
}

/// Extractor for registry manifests carrying `include`/`exclude` lists.
///
/// Patterns match case-sensitively. The `.jsonc` variant strips `//` and
/// `/* */` comments before parsing. Malformed JSON is a hard error.
#[derive(Debug)]
pub struct RegistryManifest {
    strip_comments: bool,
}

impl RegistryManifest {
    /// Plain JSON variant.
    pub const fn json() -> Self {
        Self {
            strip_comments: false,
        }
    }

    /// JSON-with-comments variant.
    pub const fn jsonc() -> Self {
        Self {
            strip_comments: true,
        }
    }
}

impl Extract for RegistryManifest {
    fn extract(&self, source: &mut Source, bytes: &[u8]) -> Outcome {
        let stripped;
        let payload = if self.strip_comments {
            stripped = strip_json_comments(bytes);
            stripped.as_slice()
        } else {
            bytes
        };

        let doc: RegistryDoc = match serde_json::from_slice(payload) {
            Ok(doc) => doc,
            Err(err) => {
                source.error = Some(ExtractError::Json {
                    path: source.path.clone(),
                    source: err,
                });
                return Outcome::Stop;
            }
        };

        let (exclude_list, include_list) = match doc.publish {
            Some(publish) => (publish.exclude, publish.include),
            None => (doc.exclude, doc.include),
        };

        let mut include = SignedPatternGroup::new(false);
        let mut exclude = SignedPatternGroup::new(true);
        for pattern in exclude_list.unwrap_or_default() {
            exclude.push(&pattern);
        }
        for pattern in include_list.unwrap_or_default() {
            include.push(&pattern);
        }
        include.compile(false);
        exclude.compile(false);
        source.groups.push(include);
        source.groups.push(exclude);
        Outcome::Stop
    }
}
