//! Source resolution: find the nearest manifest governing a directory.

use std::io;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::context::{MatcherContext, SourceSlot};
use crate::error::ExtractError;
use crate::extract::Outcome;
use crate::fs::ScanFs;
use crate::paths::{join, parent_dir};
use crate::source::Source;
use crate::target::Target;

/// Resolve the manifest source governing `dir`, caching along the way.
///
/// Walks from `dir` toward the scan root, probing the target's extractors
/// at each ancestor. The search stops at the first ancestor that rules:
/// a usable manifest, or a broken one (read/parse failure). Every
/// directory visited is then cached with the same answer, so later
/// lookups anywhere on the walked chain are O(1) and each directory is
/// probed at most once per scan.
pub fn resolve_source(
    fs: &dyn ScanFs,
    target: &Target,
    ctx: &mut MatcherContext,
    dir: &str,
) -> SourceSlot {
    if let Some(slot) = ctx.external.get(dir) {
        return slot.clone();
    }

    let mut pending: Vec<String> = Vec::new();
    let mut cursor = dir.to_string();
    let mut answer: Option<SourceSlot> = None;

    loop {
        pending.push(cursor.clone());

        if let Some(source) = probe_dir(fs, target, &cursor) {
            if source.is_broken() {
                warn!(dir = %cursor, manifest = %source.path, "broken manifest source");
                ctx.failed = true;
            } else {
                debug!(dir = %cursor, manifest = %source.path, "resolved manifest source");
            }
            let source = Arc::new(source);
            if source.is_broken() {
                ctx.failed_sources.push(Arc::clone(&source));
            }
            answer = Some(SourceSlot::Found(source));
            break;
        }

        if cursor == "." {
            break;
        }
        let parent = parent_dir(&cursor).to_string();
        if let Some(slot) = ctx.external.get(&parent) {
            answer = Some(slot.clone());
            break;
        }
        cursor = parent;
    }

    // Nothing found all the way up: a valid resolved value, not an error.
    let answer = answer.unwrap_or(SourceSlot::None);
    for visited in pending {
        ctx.external.insert(visited, answer.clone());
    }
    answer
}

/// Probe one directory with the target's extractor chain.
///
/// The first manifest file that exists decides: existence, not content
/// validity, selects the extractor. Returns `None` when no file exists or
/// every existing one signalled fall-through.
fn probe_dir(fs: &dyn ScanFs, target: &Target, dir: &str) -> Option<Source> {
    for extractor in &target.extractors {
        let manifest_path = join(dir, extractor.path);
        let mut source = Source::new(&manifest_path);

        let bytes = match fs.read(&manifest_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                // Unreadable manifests rule the directory as broken.
                source.error = Some(ExtractError::Read {
                    path: manifest_path,
                    source: err,
                });
                return Some(source);
            }
        };

        match extractor.format.extract(&mut source, &bytes) {
            _ if source.is_broken() => return Some(source),
            Outcome::Stop => return Some(source),
            Outcome::Continue => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::extract::{LINE_IGNORE, PACKAGE_JSON_FILES};
    use crate::fs::DirEntry;
    use crate::target::Extractor;

    /// In-memory fs that counts reads per path.
    struct CountingFs {
        files: HashMap<String, Vec<u8>>,
        reads: RefCell<HashMap<String, usize>>,
    }

    impl CountingFs {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(path, content)| (path.to_string(), content.as_bytes().to_vec()))
                    .collect(),
                reads: RefCell::new(HashMap::new()),
            }
        }

        fn reads_of(&self, path: &str) -> usize {
            self.reads.borrow().get(path).copied().unwrap_or(0)
        }

        fn total_reads(&self) -> usize {
            self.reads.borrow().values().sum()
        }
    }

    impl ScanFs for CountingFs {
        fn read(&self, path: &str) -> io::Result<Vec<u8>> {
            *self.reads.borrow_mut().entry(path.to_string()).or_default() += 1;
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn read_dir(&self, _path: &str) -> io::Result<Vec<DirEntry>> {
            Ok(Vec::new())
        }
    }

    fn ignore_target() -> Target {
        Target {
            name: "test",
            hint: "",
            extractors: vec![Extractor {
                path: ".gitignore",
                format: &LINE_IGNORE,
            }],
            internal: Vec::new(),
        }
    }

    #[test]
    fn nearest_ancestor_with_manifest_wins() {
        let fs = CountingFs::new(&[(".gitignore", "root\n"), ("a/.gitignore", "nested\n")]);
        let mut ctx = MatcherContext::new();
        let target = ignore_target();

        let slot = resolve_source(&fs, &target, &mut ctx, "a/b/c");
        let source = slot.source().unwrap();
        assert_eq!(source.path, "a/.gitignore");
    }

    #[test]
    fn path_compression_populates_every_visited_dir() {
        let fs = CountingFs::new(&[]);
        let mut ctx = MatcherContext::new();
        let target = ignore_target();

        let slot = resolve_source(&fs, &target, &mut ctx, "a/b/c/d");
        assert!(matches!(slot, SourceSlot::None));
        for dir in ["a/b/c/d", "a/b/c", "a/b", "a", "."] {
            assert!(
                matches!(ctx.external.get(dir), Some(SourceSlot::None)),
                "missing cache entry for {dir}"
            );
        }

        // A second resolution anywhere on the chain performs no reads.
        let before = fs.total_reads();
        resolve_source(&fs, &target, &mut ctx, "a/b");
        resolve_source(&fs, &target, &mut ctx, "a/b/c/d");
        assert_eq!(fs.total_reads(), before);
    }

    #[test]
    fn sibling_resolution_reuses_the_ancestor_cache() {
        let fs = CountingFs::new(&[(".gitignore", "root\n")]);
        let mut ctx = MatcherContext::new();
        let target = ignore_target();

        resolve_source(&fs, &target, &mut ctx, "a/b");
        assert_eq!(fs.reads_of(".gitignore"), 1);

        // The sibling walk stops at the cached root answer.
        let slot = resolve_source(&fs, &target, &mut ctx, "c/d");
        assert_eq!(slot.source().unwrap().path, ".gitignore");
        assert_eq!(fs.reads_of(".gitignore"), 1);
    }

    #[test]
    fn broken_manifest_stops_the_search() {
        let fs = CountingFs::new(&[
            ("pkg/package.json", "{ not json"),
            (".gitignore", "root\n"),
        ]);
        let mut ctx = MatcherContext::new();
        let target = Target {
            name: "test",
            hint: "",
            extractors: vec![
                Extractor {
                    path: "package.json",
                    format: &PACKAGE_JSON_FILES,
                },
                Extractor {
                    path: ".gitignore",
                    format: &LINE_IGNORE,
                },
            ],
            internal: Vec::new(),
        };

        let slot = resolve_source(&fs, &target, &mut ctx, "pkg");
        assert!(slot.source().unwrap().is_broken());
        assert!(ctx.failed);
        assert_eq!(ctx.failed_sources.len(), 1);
        // The ancestor .gitignore was never consulted.
        assert_eq!(fs.reads_of(".gitignore"), 0);
    }

    #[test]
    fn manifest_without_ruling_falls_through() {
        let fs = CountingFs::new(&[
            ("pkg/package.json", r#"{"name": "pkg"}"#),
            (".gitignore", "root\n"),
        ]);
        let mut ctx = MatcherContext::new();
        let target = Target {
            name: "test",
            hint: "",
            extractors: vec![
                Extractor {
                    path: "package.json",
                    format: &PACKAGE_JSON_FILES,
                },
                Extractor {
                    path: ".gitignore",
                    format: &LINE_IGNORE,
                },
            ],
            internal: Vec::new(),
        };

        let slot = resolve_source(&fs, &target, &mut ctx, "pkg");
        assert_eq!(slot.source().unwrap().path, ".gitignore");
    }
}
