//! Source scanning helpers for layering contracts.

use std::fs;
use std::path::{Path, PathBuf};

/// `(file relative to the crate root, 1-based line, line text)`
pub type Hit = (String, usize, String);

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn display_path(path: &Path) -> String {
    let root = crate_root();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("cannot read entry in {}: {e}", dir.display()))
            .path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Every `.rs` file under `dir`, sorted.
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(&crate_root().join(dir), &mut files);
    files.sort();
    files
}

/// Lines of every source file under `dir` that satisfy `keep`.
fn scan(dir: &str, keep: impl Fn(&Path, &str) -> bool) -> Vec<Hit> {
    rust_sources(dir)
        .into_iter()
        .flat_map(|file| {
            let text = fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", file.display()));
            text.lines()
                .enumerate()
                .filter(|(_, line)| keep(&file, *line))
                .map(|(i, line)| (display_path(&file), i + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn find_lines_containing(dir: &str, patterns: &[&str]) -> Vec<Hit> {
    scan(dir, |_, line| patterns.iter().any(|p| line.contains(p)))
}

pub fn find_lines_containing_except_files(
    dir: &str,
    patterns: &[&str],
    allowed_files: &[&str],
) -> Vec<Hit> {
    find_lines_containing(dir, patterns)
        .into_iter()
        .filter(|(path, _, _)| !allowed_files.contains(&path.as_str()))
        .collect()
}

/// Lines in `mod.rs` files that are anything but docs, comments, module
/// declarations or `cfg` attributes.
pub fn find_non_export_lines_in_mod_files(dir: &str) -> Vec<Hit> {
    scan(dir, |file, line| {
        if file.file_name().and_then(|n| n.to_str()) != Some("mod.rs") {
            return false;
        }
        let line = line.trim();
        !(line.is_empty()
            || line.starts_with("//")
            || line.starts_with("pub mod ")
            || line.starts_with("mod ")
            || line.starts_with("#[cfg"))
    })
}
