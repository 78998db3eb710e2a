//! Directory walker: drives the traversal and accumulates results.

use tracing::{debug, warn};

use crate::cancel::{Cancellable, CancellationToken};
use crate::context::MatcherContext;
use crate::fs::ScanFs;
use crate::matcher::decide;
use crate::paths::{depth_of, join};
use crate::target::Target;

/// Scan configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Maximum recorded depth. Depth 0 shows children of the scan root;
    /// entries deeper than this are collapsed into per-directory counts.
    /// `None` means unlimited.
    pub depth: Option<usize>,

    /// Flip every decision's polarity: list what the target ignores
    /// instead of what it ships. Applied after the precedence algorithm.
    pub invert: bool,

    /// Beyond the depth limit, stop auditing a directory after its first
    /// included file. Exact membership at or below the limit, approximate
    /// totals beyond it.
    pub fast_depth: bool,

    /// Skip descending into directories excluded by an internal rule.
    /// Safe because internal rules are ecosystem-fixed and cannot be
    /// overridden by content inside the excluded subtree; their manifest
    /// files are then never read.
    pub fast_internal: bool,

    /// Cooperative cancellation. A cancelled scan returns the partial
    /// context accumulated so far.
    pub cancel: Option<CancellationToken>,
}

/// Control flow signal bubbling out of the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Cancellation or a fatal decision: unwind the whole walk.
    Abort,
}

/// Scan the tree rooted at the filesystem view.
///
/// Pre-order traversal; the root itself is not an entry. Included
/// directories are recorded with a trailing `/`, included files as-is;
/// entries beyond the depth limit increment their truncated ancestor's
/// count instead. A fatal decision (broken source, invalid pattern)
/// aborts the remainder of the walk with `failed` set.
pub fn scan(fs: &dyn ScanFs, target: &Target, options: &ScanOptions) -> MatcherContext {
    let mut ctx = MatcherContext::new();
    debug!(target = target.name, "scan start");
    walk_dir(fs, target, options, &mut ctx, ".");
    debug!(
        target = target.name,
        files = ctx.total_files,
        dirs = ctx.total_dirs,
        matched = ctx.total_matched_files,
        failed = ctx.failed,
        "scan done"
    );
    ctx
}

fn walk_dir(
    fs: &dyn ScanFs,
    target: &Target,
    options: &ScanOptions,
    ctx: &mut MatcherContext,
    dir: &str,
) -> Flow {
    let max_depth = options.depth.unwrap_or(usize::MAX);

    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            // Enumeration failure is local: skip the directory.
            warn!(dir, %err, "cannot list directory");
            return Flow::Continue;
        }
    };

    for entry in entries {
        if let Some(cancel) = &options.cancel {
            if cancel.is_cancelled() {
                return Flow::Abort;
            }
        }

        let path = join(dir, &entry.name);
        if entry.is_dir {
            ctx.total_dirs += 1;
        } else {
            ctx.total_files += 1;
        }

        let (depth, cut) = depth_of(&path, max_depth);

        if options.fast_depth {
            if let Some(cut) = cut {
                let decision = decide(fs, target, ctx, &path);
                if ctx.failed {
                    return Flow::Abort;
                }
                let ignored = decision.ignored() != options.invert;

                if ignored {
                    if entry.is_dir {
                        if options.fast_internal && decision.is_internal() {
                            continue;
                        }
                        if walk_dir(fs, target, options, ctx, &path) == Flow::Abort {
                            return Flow::Abort;
                        }
                    }
                    continue;
                }

                if entry.is_dir {
                    // Beyond-depth directories are not recorded; keep
                    // descending to find their first included file.
                    if walk_dir(fs, target, options, ctx, &path) == Flow::Abort {
                        return Flow::Abort;
                    }
                    continue;
                }

                ctx.total_matched_files += 1;
                *ctx.depth_paths.entry(path[..cut].to_string()).or_default() += 1;
                // One file is enough for the collapsed count: skip the
                // rest of this directory.
                break;
            }
        }

        let decision = decide(fs, target, ctx, &path);
        if ctx.failed {
            return Flow::Abort;
        }
        let ignored = decision.ignored() != options.invert;

        if ignored {
            if entry.is_dir {
                if options.fast_internal && decision.is_internal() {
                    continue;
                }
                // Descend anyway: a negation below may re-include
                // children of an ignored directory.
                if walk_dir(fs, target, options, ctx, &path) == Flow::Abort {
                    return Flow::Abort;
                }
            }
            continue;
        }

        if entry.is_dir {
            if depth <= max_depth {
                ctx.paths.insert(format!("{path}/"), decision);
            }
            if walk_dir(fs, target, options, ctx, &path) == Flow::Abort {
                return Flow::Abort;
            }
            continue;
        }

        ctx.total_matched_files += 1;
        match cut {
            Some(cut) => {
                *ctx.depth_paths.entry(path[..cut].to_string()).or_default() += 1;
            }
            None => {
                ctx.paths.insert(path, decision);
            }
        }
    }

    Flow::Continue
}
