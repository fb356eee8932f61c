// crates/extract_docs/src/extractor.rs

use std::fs;
use std::path::{Path, PathBuf};

use find_source_files::find_source_files;

use crate::error::{DocError, ExtractError};
use crate::scanner::append_marked_lines;

/// Knobs for a [`DocExtractor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Descend into subdirectories instead of reading only the root.
    pub deep: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { deep: true }
    }
}

/// Gathers triple-slash documentation from every source file under a folder.
///
/// Holds no state between calls, so one extractor can be reused freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocExtractor {
    options: ExtractOptions,
}

impl DocExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Returns the concatenated documentation found under `path`.
    ///
    /// Files are read in byte-wise path order and lines top to bottom. Every
    /// extracted line ends with `\n`. On failure nothing is returned but the
    /// error, wrapped together with `path` and the deep flag.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractError> {
        let path = path.as_ref();
        self.run(path)
            .map_err(|source| ExtractError::new(path, self.options.deep, source))
    }

    fn run(&self, path: &Path) -> Result<String, DocError> {
        let root = resolve_root(path)?;
        log::debug!("extracting docs from {} (deep: {})", root.display(), self.options.deep);

        let files = find_source_files(&root, self.options.deep)?;
        if files.is_empty() {
            return Err(DocError::NoFilesFound { root });
        }

        let mut doc = String::new();
        for file in &files {
            let content = fs::read(file).map_err(|source| DocError::FileRead {
                path: file.clone(),
                source,
            })?;
            let appended = append_marked_lines(&content, &mut doc);
            log::debug!("{}: {} doc line(s)", file.display(), appended);
        }
        Ok(doc)
    }
}

/// Shorthand for a one-off extraction.
pub fn extract_docs<P: AsRef<Path>>(path: P, deep: bool) -> Result<String, ExtractError> {
    DocExtractor::new(ExtractOptions { deep }).extract(path)
}

/// Makes `path` absolute and checks that it names an existing folder.
fn resolve_root(path: &Path) -> Result<PathBuf, DocError> {
    let root = std::path::absolute(path).map_err(|source| DocError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = fs::metadata(&root).map_err(|source| DocError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DocError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(root)
}
