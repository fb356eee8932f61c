// crates/extract_docs/src/error.rs

use std::io;
use std::path::{Path, PathBuf};

use doc_marker::SOURCE_SUFFIX;
use find_source_files::FindError;
use thiserror::Error;

/// The reasons an extraction can fail. Each one ends the call immediately.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("cannot get absolute path of `{}`", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot find `{}`", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("is not a folder: `{}`", .path.display())]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    DirectoryRead(#[from] FindError),

    #[error("cannot find any `{}` files in `{}`", SOURCE_SUFFIX, .root.display())]
    NoFilesFound { root: PathBuf },

    #[error("cannot read file content: `{}`", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A failed extraction, carrying the arguments it was called with.
#[derive(Debug, Error)]
#[error("error with input data: `{}` (deep: {deep})", .path.display())]
pub struct ExtractError {
    path: PathBuf,
    deep: bool,
    #[source]
    source: DocError,
}

impl ExtractError {
    pub(crate) fn new(path: &Path, deep: bool, source: DocError) -> Self {
        Self {
            path: path.to_path_buf(),
            deep,
            source,
        }
    }

    /// The path exactly as the caller passed it.
    pub fn input_path(&self) -> &Path {
        &self.path
    }

    pub fn deep(&self) -> bool {
        self.deep
    }

    /// The underlying failure.
    pub fn kind(&self) -> &DocError {
        &self.source
    }

    pub fn into_kind(self) -> DocError {
        self.source
    }
}
