//! `package.json` `files` allow-list extraction.

use serde::Deserialize;

use crate::error::ExtractError;
use crate::extract::{Extract, Outcome};
use crate::signed::SignedPatternGroup;
use crate::source::{push_negatable, Source};

/// The slice of a node package manifest the engine cares about.
#[derive(Debug, Deserialize)]
struct NodeManifest {
    files: Option<Vec<String>>,
}

/// Extractor for the `files` field of `package.json`.
///
/// The field is an allow-list: the source is marked inverted, plain
/// entries include and `!` entries exclude. A manifest without the field
/// does not constitute a ruling and falls through; malformed JSON is a
/// hard error and breaks the source.
#[derive(Debug)]
pub struct PackageJsonFiles;

impl Extract for PackageJsonFiles {
    fn extract(&self, source: &mut Source, bytes: &[u8]) -> Outcome {
        source.inverted = true;

        let manifest: NodeManifest = match serde_json::from_slice(bytes) {
            Ok(manifest) => manifest,
            Err(err) => {
                source.error = Some(ExtractError::Json {
                    path: source.path.clone(),
                    source: err,
                });
                return Outcome::Stop;
            }
        };

        let Some(files) = manifest.files else {
            return Outcome::Continue;
        };

        let mut include = SignedPatternGroup::new(false);
        let mut exclude = SignedPatternGroup::new(true);
        for pattern in &files {
            push_negatable(pattern, true, &mut include, &mut exclude);
        }
        include.compile(true);
        exclude.compile(true);
        source.groups.push(include);
        source.groups.push(exclude);
        Outcome::Stop
    }
}
