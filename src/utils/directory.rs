use crate::models::error::{Result, ScanError};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate subdirectories of `dir`. Files directly under `dir` and anything
/// deeper are ignored. Order follows the filesystem and is not sorted.
pub fn get_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // depth 0 means the root itself could not be listed
            Err(cause) if cause.depth() == 0 => {
                return Err(ScanError::DirectoryRead {
                    path: dir.to_path_buf(),
                    cause,
                })
            }
            Err(cause) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), cause);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        folders.push(entry.into_path());
    }
    Ok(folders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_only_immediate_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("100__A")).unwrap();
        fs::create_dir_all(temp_dir.path().join("200__B").join("nested")).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a plate").unwrap();

        let mut folders = get_subdirectories(temp_dir.path()).unwrap();
        folders.sort();

        assert_eq!(
            folders,
            vec![
                temp_dir.path().join("100__A"),
                temp_dir.path().join("200__B"),
            ]
        );
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(get_subdirectories(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_error_on_missing_root() {
        match get_subdirectories(Path::new("/this/does/not/exist")) {
            Err(ScanError::DirectoryRead { .. }) => {}
            other => panic!("Expected DirectoryRead error, got {:?}", other),
        }
    }
}
