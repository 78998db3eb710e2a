//! The match engine: one candidate path against internal and external
//! pattern sets.

use std::sync::Arc;

use tracing::trace;

use crate::context::{MatcherContext, SourceSlot};
use crate::error::PatternError;
use crate::fs::ScanFs;
use crate::paths::parent_dir;
use crate::resolve::resolve_source;
use crate::signed::SignedPatternGroup;
use crate::source::Source;
use crate::target::Target;

/// The outcome of deciding one entry.
///
/// Tagged by how the decision was reached; fields are only present on the
/// kinds they belong to.
#[derive(Debug, Clone)]
pub enum MatchDecision {
    /// No ancestor could be resolved at all. Permissive default: the
    /// entry is not ignored.
    MissingSource,
    /// The resolved source carries an error. Fail-closed: ignored.
    BrokenSource {
        /// The broken source, for diagnostics.
        source: Arc<Source>,
    },
    /// A built-in pattern failed to compile. Fatal.
    InvalidInternalPattern {
        /// The compile failure.
        error: PatternError,
    },
    /// A manifest pattern failed to compile. Fatal.
    InvalidPattern {
        /// The source owning the bad pattern.
        source: Arc<Source>,
        /// The compile failure.
        error: PatternError,
    },
    /// Decided by the target's built-in rules.
    Internal {
        /// The winning pattern.
        pattern: String,
        /// Whether the entry is ignored.
        ignored: bool,
    },
    /// Decided by manifest-derived rules.
    External {
        /// The winning pattern.
        pattern: String,
        /// The manifest that ruled.
        source: Arc<Source>,
        /// Whether the entry is ignored.
        ignored: bool,
    },
    /// Neither ruled; the source's default applied.
    NoMatch {
        /// `source.inverted`: allow-list ecosystems exclude by default.
        ignored: bool,
    },
}

impl MatchDecision {
    /// Whether the entry is ignored under this decision.
    ///
    /// Fatal kinds report ignored: broken or invalid state fails closed.
    pub fn ignored(&self) -> bool {
        match self {
            MatchDecision::MissingSource => false,
            MatchDecision::BrokenSource { .. } => true,
            MatchDecision::InvalidInternalPattern { .. } => true,
            MatchDecision::InvalidPattern { .. } => true,
            MatchDecision::Internal { ignored, .. } => *ignored,
            MatchDecision::External { ignored, .. } => *ignored,
            MatchDecision::NoMatch { ignored } => *ignored,
        }
    }

    /// True for decisions made by built-in rules. The walker may skip
    /// descending into directories excluded this way, since nothing
    /// inside the subtree can override an internal rule.
    pub fn is_internal(&self) -> bool {
        matches!(self, MatchDecision::Internal { .. })
    }
}

/// Evaluate signed groups in two passes over the given sign order.
///
/// Within a pass, groups keep their insertion order and the first
/// matching pattern wins. Returns the winning raw pattern and whether the
/// matching group excludes.
fn match_groups<'g>(
    groups: &'g [SignedPatternGroup],
    path: &str,
    excludes_first: bool,
) -> Result<Option<(&'g str, bool)>, PatternError> {
    for sign in [excludes_first, !excludes_first] {
        for group in groups.iter().filter(|g| g.excludes() == sign) {
            if let Some(pattern) = group.first_match(path)? {
                return Ok(Some((pattern, group.excludes())));
            }
        }
    }
    Ok(None)
}

/// Decide whether `entry` is ignored by `target`.
///
/// Fixed precedence, first decisive hit wins:
/// 1. internal exclude patterns;
/// 2. internal include patterns;
/// 3. resolve the parent directory's source (cached);
/// 4. a broken source ignores the entry;
/// 5. external patterns: include before exclude for deny-list sources,
///    exclude before include for allow-list (inverted) sources;
/// 6. no match: the source's default (`inverted`).
///
/// Internal rules run before resolution on purpose: an entry they decide
/// never causes manifest reads under it.
pub fn decide(
    fs: &dyn ScanFs,
    target: &Target,
    ctx: &mut MatcherContext,
    entry: &str,
) -> MatchDecision {
    let decision = decide_inner(fs, target, ctx, entry);
    trace!(entry, ?decision, "match decision");
    decision
}

fn decide_inner(
    fs: &dyn ScanFs,
    target: &Target,
    ctx: &mut MatcherContext,
    entry: &str,
) -> MatchDecision {
    // Steps 1–2: built-in rules, exclude pass first.
    match match_groups(&target.internal, entry, true) {
        Ok(Some((pattern, ignored))) => {
            return MatchDecision::Internal {
                pattern: pattern.to_string(),
                ignored,
            };
        }
        Ok(None) => {}
        Err(error) => {
            ctx.failed = true;
            return MatchDecision::InvalidInternalPattern { error };
        }
    }

    // Step 3: the parent directory's manifest.
    let slot = resolve_source(fs, target, ctx, parent_dir(entry));
    let source = match &slot {
        SourceSlot::None => return MatchDecision::MissingSource,
        SourceSlot::Found(source) => Arc::clone(source),
    };

    // Step 4: broken sources rule their whole subtree out.
    if source.is_broken() {
        return MatchDecision::BrokenSource { source };
    }

    // Steps 5–6: manifest rules; evaluation order and the no-match
    // default both follow the source's polarity.
    match match_groups(&source.groups, entry, source.inverted) {
        Ok(Some((pattern, ignored))) => MatchDecision::External {
            pattern: pattern.to_string(),
            source,
            ignored,
        },
        Ok(None) => MatchDecision::NoMatch {
            ignored: source.inverted,
        },
        Err(error) => {
            ctx.failed = true;
            ctx.failed_sources.push(Arc::clone(&source));
            MatchDecision::InvalidPattern { source, error }
        }
    }
}
