//! Line-oriented ignore files (`.gitignore`, `.npmignore`, `.vscodeignore`,
//! and friends).

use crate::extract::{Extract, Outcome};
use crate::signed::SignedPatternGroup;
use crate::source::{push_negatable, Source};

/// Extractor for the `.gitignore` line format.
///
/// Blank lines and `#` comment lines are skipped, trailing inline comments
/// are stripped, and a leading `!` negates the entry. Patterns match
/// case-insensitively, the way the reference tools treat ignore files.
#[derive(Debug)]
pub struct LineIgnore;

impl Extract for LineIgnore {
    fn extract(&self, source: &mut Source, bytes: &[u8]) -> Outcome {
        let mut include = SignedPatternGroup::new(false);
        let mut exclude = SignedPatternGroup::new(true);

        let content = String::from_utf8_lossy(bytes);
        for raw_line in content.split('\n') {
            let mut line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(idx) = line.find('#') {
                line = line[..idx].trim_end();
            }
            push_negatable(line, false, &mut include, &mut exclude);
        }

        include.compile(true);
        exclude.compile(true);
        source.groups.push(include);
        source.groups.push(exclude);
        Outcome::Stop
    }
}
