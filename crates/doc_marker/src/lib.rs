// crates/doc_marker/src/lib.rs

//! Fixed conventions shared by the file finder and the doc extractor.

/// Triple-slash marker that opens a documentation line.
pub const DOC_MARKER: &str = "///";

/// Only files whose name ends with this suffix are scanned.
pub const SOURCE_SUFFIX: &str = ".go";

/// Directory names that are never descended into, at any depth.
pub const IGNORED_DIRS: [&str; 2] = ["vendor", ".git"];

/// Upper bound on frontier iterations during a deep walk.
pub const MAX_WALK_ITERATIONS: usize = 1_000_000;

/// Returns true if a directory with this name must be skipped.
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Returns true if a file with this name should be scanned for docs.
pub fn is_source_file(name: &str) -> bool {
    name.ends_with(SOURCE_SUFFIX)
}
