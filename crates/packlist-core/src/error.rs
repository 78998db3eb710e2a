//! Error types for the engine.
//! One enum per concern, `thiserror` only.

use thiserror::Error;

/// A pattern that could not be turned into a usable glob matcher.
///
/// Surfaces lazily: compilation records the failure and the first match
/// attempt against the pattern reports it, so a single bad line in a
/// manifest does not panic the scan.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// The normalized pattern was rejected by the glob compiler.
    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidGlob {
        /// The original pattern string, before normalization.
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl PatternError {
    /// The raw pattern string that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::InvalidGlob { pattern, .. } => pattern,
        }
    }
}

/// A manifest file that existed but could not be used.
///
/// Recorded on the owning [`Source`](crate::Source); a source carrying one
/// of these is "broken" and its subtree is treated as excluded.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The manifest exists but reading it failed.
    #[error("failed to read `{path}`: {source}")]
    Read {
        /// Relative path of the manifest file.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest content is not valid JSON.
    #[error("invalid JSON in `{path}`: {source}")]
    Json {
        /// Relative path of the manifest file.
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
