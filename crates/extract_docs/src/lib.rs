// crates/extract_docs/src/lib.rs

//! Pulls triple-slash (`///`) documentation out of Go sources.
//!
//! ```no_run
//! let doc = extract_docs::extract_docs(".", true)?;
//! print!("{doc}");
//! # Ok::<(), extract_docs::ExtractError>(())
//! ```

mod error;
mod extractor;
mod scanner;

pub use error::{DocError, ExtractError};
pub use extractor::{extract_docs, DocExtractor, ExtractOptions};
pub use find_source_files::{find_source_files, FindError};
pub use scanner::{append_marked_lines, extract_marked_lines, marked_text};
