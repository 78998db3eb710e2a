//! Core engine for deciding which files a packaging ecosystem ships.
//!
//! Given a directory tree and a [`Target`] (an ecosystem's manifest chain and
//! built-in rules), the engine reproduces the include/exclude decision the
//! real tool would make for every entry, without invoking that tool. The
//! pipeline, leaves first: [`pattern`] compiles ignore-style patterns into
//! glob matchers, [`extract`] parses manifest files into signed pattern
//! groups, [`resolve`] finds and caches the nearest manifest per directory,
//! [`matcher`] applies the fixed precedence algorithm, and [`walk`] drives
//! the traversal and accumulates results in a [`MatcherContext`].

pub mod cancel;
pub mod context;
pub mod error;
pub mod extract;
pub mod fs;
pub mod matcher;
pub mod paths;
pub mod pattern;
pub mod resolve;
pub mod signed;
pub mod source;
pub mod target;
pub mod walk;

pub use cancel::{Cancellable, CancellationToken};
pub use context::{MatcherContext, SourceSlot};
pub use error::{ExtractError, PatternError};
pub use extract::{Extract, Outcome};
pub use fs::{DirEntry, RealFs, ScanFs};
pub use matcher::{decide, MatchDecision};
pub use pattern::CompiledPattern;
pub use signed::SignedPatternGroup;
pub use source::Source;
pub use target::{Extractor, Target};
pub use walk::{scan, ScanOptions};
