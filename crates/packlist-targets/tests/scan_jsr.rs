//! End-to-end jsr/deno scans over on-disk fixtures.

use std::fs;
use std::path::Path;

use packlist_core::{scan, MatcherContext, RealFs, ScanOptions};
use packlist_targets::TargetName;

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

fn included(ctx: &MatcherContext) -> Vec<&str> {
    ctx.paths.keys().map(String::as_str).collect()
}

fn scan_jsr(root: &Path) -> MatcherContext {
    let fs = RealFs::new(root);
    scan(&fs, &TargetName::Jsr.target(), &ScanOptions::default())
}

#[test]
fn exclude_list_is_a_deny_list() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "deno.json", r#"{"exclude": ["testdata"]}"#);
    write(root, "mod.ts", "");
    write(root, "testdata/big.bin", "");

    let ctx = scan_jsr(root);
    // Unlike a package files list, exclude-only manifests default to
    // including the unmatched rest.
    assert_eq!(included(&ctx), ["deno.json", "mod.ts"]);
}

#[test]
fn publish_override_replaces_top_level_lists() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "deno.json",
        r#"{
            "exclude": ["src"],
            "publish": {"exclude": ["bench"]}
        }"#,
    );
    write(root, "bench/suite.ts", "");
    write(root, "src/mod.ts", "");

    let ctx = scan_jsr(root);
    // The top-level exclusion of src/ does not apply to publishing.
    assert_eq!(included(&ctx), ["deno.json", "src/", "src/mod.ts"]);
}

#[test]
fn jsonc_manifest_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "deno.jsonc",
        "{\n  // build output\n  \"exclude\": [\"dist\"] /* generated */\n}",
    );
    write(root, "dist/mod.js", "");
    write(root, "mod.ts", "");

    let ctx = scan_jsr(root);
    assert_eq!(included(&ctx), ["deno.jsonc", "mod.ts"]);
}

#[test]
fn registry_matching_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "jsr.json", r#"{"exclude": ["Docs"]}"#);
    write(root, "Docs/page.md", "");
    write(root, "docs/page.md", "");

    let ctx = scan_jsr(root);
    assert_eq!(included(&ctx), ["docs/", "docs/page.md", "jsr.json"]);
}

#[test]
fn malformed_jsonc_breaks_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "deno.jsonc", "// half a manifest\n{\"exclude\": [");
    write(root, "mod.ts", "");

    let ctx = scan_jsr(root);
    assert!(ctx.failed);
    assert_eq!(ctx.failed_sources.len(), 1);
    assert_eq!(ctx.failed_sources[0].name, "deno.jsonc");
}
