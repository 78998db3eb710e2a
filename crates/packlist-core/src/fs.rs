//! Filesystem abstraction consumed by the resolver and walker.
//!
//! The engine only ever reads: manifest contents through [`ScanFs::read`]
//! and directory listings through [`ScanFs::read_dir`]. Keeping the seam
//! this narrow lets tests count reads and lets embedders supply virtual
//! trees.

use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File or directory name, no separators.
    pub name: String,
    /// True for directories. Symlinks are reported as files and never
    /// followed.
    pub is_dir: bool,
}

/// Read-only filesystem view rooted at the scan root.
///
/// Paths are forward-slash relative, with `.` naming the root itself.
pub trait ScanFs {
    /// Read the full contents of a file.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// List a directory. Implementations return entries in a stable order
    /// so traversal (and truncated-count approximations) are deterministic.
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>>;
}

/// [`ScanFs`] over the real filesystem.
#[derive(Debug, Clone)]
pub struct RealFs {
    root: PathBuf,
}

impl RealFs {
    /// Create a view rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path == "." {
            self.root.clone()
        } else {
            path.split('/').fold(self.root.clone(), |acc, seg| acc.join(seg))
        }
    }

    /// The directory this view is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ScanFs for RealFs {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(path))
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_sorted_and_typed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.txt"), b"").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"").unwrap();

        let fs = RealFs::new(dir.path());
        let entries = fs.read_dir(".").unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "sub"]);
        assert!(entries[2].is_dir);
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn read_uses_slash_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/file"), b"content").unwrap();

        let fs = RealFs::new(dir.path());
        assert_eq!(fs.read("sub/file").unwrap(), b"content");
        assert_eq!(
            fs.read("sub/missing").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
