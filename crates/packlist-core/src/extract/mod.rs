//! Manifest extractors: per-format parsers turning raw file bytes into the
//! signed pattern groups of a [`Source`](crate::Source).

mod jsonc;
mod line;
mod package_json;
mod registry_json;

pub use jsonc::strip_json_comments;
pub use line::LineIgnore;
pub use package_json::PackageJsonFiles;
pub use registry_json::RegistryManifest;

use crate::source::Source;

/// What the resolver should do after an extractor ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest ruled: use this source, try nothing further for this
    /// directory.
    Stop,
    /// The manifest exists but does not constitute a ruling (e.g. a
    /// `package.json` without a files list): fall through to the next
    /// extractor, then the next ancestor.
    Continue,
}

/// One manifest format.
///
/// `extract` populates `source` from the raw bytes of an existing file.
/// Hard failures (malformed content) are recorded on `source.error`
/// together with `Outcome::Stop`: a broken manifest is a ruling, not a
/// fall-through. Extractors compile the groups they append.
pub trait Extract {
    fn extract(&self, source: &mut Source, bytes: &[u8]) -> Outcome;
}

/// Shared extractor instances for target tables.
pub static LINE_IGNORE: LineIgnore = LineIgnore;
/// `package.json` with an optional `files` allow-list.
pub static PACKAGE_JSON_FILES: PackageJsonFiles = PackageJsonFiles;
/// `deno.json` / `jsr.json` include/exclude manifest.
pub static REGISTRY_JSON: RegistryManifest = RegistryManifest::json();
/// `.jsonc` variant of the registry manifest.
pub static REGISTRY_JSONC: RegistryManifest = RegistryManifest::jsonc();
