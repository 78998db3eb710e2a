//! Display ordering: directories before files, segment by segment.

use std::cmp::Ordering;

/// Compare two listing paths so that, at every level, directories come
/// before files and names sort alphabetically within each kind. Recorded
/// directory paths carry a trailing `/`.
pub fn folders_first(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (mut rest_a, mut rest_b) = (a, b);
    loop {
        let (seg_a, next_a, last_a) = shift(rest_a);
        let (seg_b, next_b, last_b) = shift(rest_b);
        rest_a = next_a;
        rest_b = next_b;

        if last_a == last_b {
            let ordering = seg_a.cmp(seg_b);
            if last_a || ordering != Ordering::Equal {
                return ordering;
            }
            continue;
        }

        // An exhausted directory path sorts before its own children.
        if seg_a.is_empty() {
            return Ordering::Less;
        }
        if seg_b.is_empty() {
            return Ordering::Greater;
        }
        // One side ends in a file here, the other continues into a
        // directory: the directory wins.
        return if last_b {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
}

/// Pop the leading segment: `"path/to/x"` → `("path", "to/x", false)`,
/// `"file"` → `("file", "file", true)`, `"dir/"` → `("dir", "", false)`.
fn shift(path: &str) -> (&str, &str, bool) {
    match path.find('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..], false),
        None => (path, path, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut paths: Vec<&str>) -> Vec<&str> {
        paths.sort_by(|a, b| folders_first(a, b));
        paths
    }

    #[test]
    fn directories_sort_before_files_at_each_level() {
        assert_eq!(
            sorted(vec!["README.md", "src/", "src/lib.rs", "zz/", "a.txt"]),
            ["src/", "src/lib.rs", "zz/", "README.md", "a.txt"]
        );
    }

    #[test]
    fn a_directory_precedes_its_children() {
        assert_eq!(
            sorted(vec!["src/sub/", "src/", "src/a.rs"]),
            ["src/", "src/sub/", "src/a.rs"]
        );
    }

    #[test]
    fn nesting_is_compared_per_segment() {
        assert_eq!(
            sorted(vec!["a/b/c.txt", "a/b/", "a/", "a/z.txt", "a/b/d/"]),
            ["a/", "a/b/", "a/b/d/", "a/b/c.txt", "a/z.txt"]
        );
    }
}
