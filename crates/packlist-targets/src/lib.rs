//! Target tables: the per-ecosystem configuration the engine runs on.
//!
//! Each module builds one immutable [`Target`]: the ordered manifest chain
//! the ecosystem reads, and the built-in rules it applies regardless of
//! manifest content. The tables are data; all matching semantics live in
//! `packlist-core`.

pub mod bun;
pub mod git;
pub mod jsr;
pub mod npm;
pub mod vsce;
pub mod yarn;
pub mod yarn_classic;

use std::fmt;
use std::str::FromStr;

use packlist_core::{SignedPatternGroup, Target};
use thiserror::Error;

/// A supported ecosystem, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetName {
    /// `git ls-tree` membership.
    Git,
    /// `npm pack` contents.
    Npm,
    /// `yarn pack` (berry) contents.
    Yarn,
    /// `yarn pack` (classic) contents.
    YarnClassic,
    /// `bun pm pack` contents.
    Bun,
    /// `vsce package` contents.
    Vsce,
    /// `jsr publish` / `deno publish` contents.
    Jsr,
}

impl TargetName {
    /// Every supported target, in display order.
    pub const ALL: [TargetName; 7] = [
        TargetName::Git,
        TargetName::Npm,
        TargetName::Yarn,
        TargetName::YarnClassic,
        TargetName::Bun,
        TargetName::Vsce,
        TargetName::Jsr,
    ];

    /// Build the target's configuration.
    pub fn target(self) -> Target {
        match self {
            TargetName::Git => git::target(),
            TargetName::Npm => npm::target(),
            TargetName::Yarn => yarn::target(),
            TargetName::YarnClassic => yarn_classic::target(),
            TargetName::Bun => bun::target(),
            TargetName::Vsce => vsce::target(),
            TargetName::Jsr => jsr::target(),
        }
    }

    /// The CLI-facing name.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetName::Git => "git",
            TargetName::Npm => "npm",
            TargetName::Yarn => "yarn",
            TargetName::YarnClassic => "yarn-classic",
            TargetName::Bun => "bun",
            TargetName::Vsce => "vsce",
            TargetName::Jsr => "jsr",
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized target name.
#[derive(Debug, Clone, Error)]
#[error("unsupported target `{0}`, expected one of: git, npm, yarn, yarn-classic, bun, vsce, jsr")]
pub struct UnknownTarget(String);

impl FromStr for TargetName {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}

/// Build the compiled internal groups of a target table.
///
/// Internal rules match case-insensitively: the ecosystems' forced
/// artifact files (`README*`, `LICENSE*`) are recognized in any casing.
fn internal(exclude: &[&str], include: &[&str]) -> Vec<SignedPatternGroup> {
    let mut groups = Vec::new();
    let mut exclude = SignedPatternGroup::from_patterns(exclude.iter().copied(), true);
    exclude.compile(true);
    groups.push(exclude);
    if !include.is_empty() {
        let mut include = SignedPatternGroup::from_patterns(include.iter().copied(), false);
        include.compile(true);
        groups.push(include);
    }
    groups
}

/// The npm always-excluded entries, shared by the npm-family targets.
const NPM_INTERNAL_EXCLUDE: &[&str] = &[
    ".git",
    ".DS_Store",
    "node_modules",
    ".*.swp",
    "._*",
    ".gitignore",
    ".hg",
    ".npmignore",
    ".npmrc",
    ".lock-wscript",
    ".svn",
    ".wafpickle-*",
    "config.gypi",
    "CVS",
    "npm-debug.log",
];

/// The npm always-included artifact files.
const NPM_INTERNAL_INCLUDE: &[&str] = &[
    "bin",
    "package.json",
    "README*",
    "LICENSE*",
    "LICENCE*",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in TargetName::ALL {
            assert_eq!(name.as_str().parse::<TargetName>().unwrap(), name);
        }
        assert!("cargo".parse::<TargetName>().is_err());
    }

    #[test]
    fn every_target_builds() {
        for name in TargetName::ALL {
            let target = name.target();
            assert_eq!(target.name, name.as_str());
            assert!(!target.extractors.is_empty());
            assert!(!target.internal.is_empty());
        }
    }
}
