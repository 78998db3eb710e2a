//! Per-scan mutable state and the consumer-facing result shape.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::matcher::MatchDecision;
use crate::source::Source;

/// A directory's resolved manifest state in the cache.
///
/// `None` is an explicit "no manifest found anywhere above here" marker,
/// distinct from the directory simply not having been resolved yet, which
/// is the absence of a cache entry.
#[derive(Debug, Clone, Default)]
pub enum SourceSlot {
    /// No ancestor (inclusive) carries a usable manifest.
    #[default]
    None,
    /// The nearest manifest, shared by every directory it governs.
    Found(Arc<Source>),
}

impl SourceSlot {
    /// The source, if one was found.
    pub fn source(&self) -> Option<&Arc<Source>> {
        match self {
            SourceSlot::None => None,
            SourceSlot::Found(source) => Some(source),
        }
    }
}

/// Accumulated results and statistics of one scan.
///
/// Created fresh per scan, mutated only by the resolver (cache) and the
/// walker (paths and totals), discarded when the scan ends. Not shareable
/// across concurrent scans.
#[derive(Debug, Default)]
pub struct MatcherContext {
    /// Included paths and the decision that admitted each. Directories
    /// carry a trailing `/`.
    pub paths: BTreeMap<String, MatchDecision>,

    /// Directory path → resolved source, with path compression: every
    /// directory visited during an ancestor search ends up mapped to the
    /// same slot.
    pub external: HashMap<String, SourceSlot>,

    /// Truncated ancestor directory → number of included files collapsed
    /// beneath it by the depth limit.
    pub depth_paths: HashMap<String, usize>,

    /// Set when a fatal extraction or pattern failure occurred. Once set,
    /// the scan stops producing further results (fail-closed).
    pub failed: bool,

    /// Every broken source encountered, for diagnostics.
    pub failed_sources: Vec<Arc<Source>>,

    /// Total number of files visited.
    pub total_files: usize,

    /// Total number of directories visited.
    pub total_dirs: usize,

    /// Total number of files the target matched (included).
    pub total_matched_files: usize,
}

impl MatcherContext {
    /// Fresh context for a new scan.
    pub fn new() -> Self {
        Self::default()
    }
}
