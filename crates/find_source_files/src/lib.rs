// crates/find_source_files/src/lib.rs

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use doc_marker::{is_ignored_dir, is_source_file, MAX_WALK_ITERATIONS};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised while enumerating source files.
#[derive(Debug, Error)]
pub enum FindError {
    /// A directory on the frontier could not be listed.
    #[error("cannot read dir `{}`", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Collects every source file under `root`.
///
/// With `deep` set, the walk descends through all subdirectories except the
/// ignored ones. Without it, only files directly inside `root` are returned;
/// subdirectories are discovered but never read.
///
/// The result is sorted byte-wise by full path, so `a.go` always comes
/// before `a_test.go`. An empty result is not an error here.
pub fn find_source_files<P: AsRef<Path>>(root: P, deep: bool) -> Result<Vec<PathBuf>, FindError> {
    SourceFileFinder::new(deep).find(root.as_ref())
}

/// Orders two paths by their raw bytes rather than by components.
pub fn cmp_path_bytes(a: &Path, b: &Path) -> Ordering {
    a.as_os_str()
        .as_encoded_bytes()
        .cmp(b.as_os_str().as_encoded_bytes())
}

// === Private Implementation === //

struct SourceFileFinder {
    deep: bool,
    max_iterations: usize,
}

impl SourceFileFinder {
    fn new(deep: bool) -> Self {
        Self {
            deep,
            max_iterations: MAX_WALK_ITERATIONS,
        }
    }

    fn find(&self, root: &Path) -> Result<Vec<PathBuf>, FindError> {
        let mut files = Vec::new();
        let mut frontier = vec![root.to_path_buf()];

        for iteration in 0..self.max_iterations {
            let mut discovered = Vec::new();
            for folder in &frontier {
                self.scan_folder(folder, &mut discovered, &mut files)?;
            }
            log::debug!(
                "walk iteration {}: {} folder(s) scanned, {} subfolder(s) found, {} file(s) so far",
                iteration,
                frontier.len(),
                discovered.len(),
                files.len()
            );

            frontier = discovered;
            if !self.deep || frontier.is_empty() {
                break;
            }
            if iteration + 1 == self.max_iterations {
                log::warn!(
                    "stopped walking {} after {} iterations",
                    root.display(),
                    self.max_iterations
                );
            }
        }

        files.sort_by(|a, b| cmp_path_bytes(a, b));
        Ok(files)
    }

    /// Lists the immediate entries of `folder`, queueing subfolders and
    /// recording source files.
    fn scan_folder(
        &self,
        folder: &Path,
        subfolders: &mut Vec<PathBuf>,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), FindError> {
        let entries = WalkDir::new(folder).min_depth(1).max_depth(1);
        for entry in entries {
            let entry = entry.map_err(|source| FindError::ReadDir {
                dir: folder.to_path_buf(),
                source,
            })?;

            let (ignored, is_source) = {
                let name = entry.file_name().to_string_lossy();
                (is_ignored_dir(&name), is_source_file(&name))
            };

            if entry.file_type().is_dir() {
                if ignored {
                    log::trace!("skipping ignored dir {}", entry.path().display());
                    continue;
                }
                subfolders.push(entry.into_path());
            } else if is_source {
                log::debug!("found source file {}", entry.path().display());
                files.push(entry.into_path());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_path_bytes_base_file_before_test_file() {
        let base = Path::new("/src/complex.go");
        let test = Path::new("/src/complex_test.go");
        assert_eq!(cmp_path_bytes(base, test), Ordering::Less);
    }

    #[test]
    fn test_cmp_path_bytes_differs_from_component_order() {
        // '.' (0x2E) sorts before '/' (0x2F), so the file wins over the folder.
        let file = PathBuf::from("/r/a.go");
        let nested = PathBuf::from("/r/a/x.go");
        assert_eq!(cmp_path_bytes(&file, &nested), Ordering::Less);
        assert_eq!(nested.cmp(&file), Ordering::Less);
    }

    #[test]
    fn test_shallow_finder_stops_after_first_iteration() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("inner")).unwrap();
        std::fs::write(dir.path().join("inner").join("deep.go"), "/// deep\n").unwrap();

        let finder = SourceFileFinder::new(false);
        let files = finder.find(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_iteration_cap_bounds_deep_walk() {
        let dir = tempfile::tempdir().unwrap();
        let level1 = dir.path().join("one");
        let level2 = level1.join("two");
        std::fs::create_dir_all(&level2).unwrap();
        std::fs::write(dir.path().join("root.go"), "").unwrap();
        std::fs::write(level1.join("one.go"), "").unwrap();
        std::fs::write(level2.join("two.go"), "").unwrap();

        let finder = SourceFileFinder {
            deep: true,
            max_iterations: 2,
        };
        let files = finder.find(dir.path()).unwrap();
        assert_eq!(files, vec![level1.join("one.go"), dir.path().join("root.go")]);
    }
}
