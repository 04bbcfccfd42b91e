use std::{ffi::OsString, fs, path::Path};

use snafu::ResultExt;
use tracing::debug;

use crate::dumper::{DumpError, dumper::ListSnafu};
use crate::ext::BestEffortPathExt;

/// Snapshots the names directly inside `root`, in the order the filesystem
/// yields them. Subdirectories are included as plain names.
pub fn list_entries(root: &Path) -> Result<Vec<OsString>, DumpError> {
    debug!("Listing entries of {}", root.best_effort_path_display());

    let context = || ListSnafu {
        path: root.to_path_buf(),
    };

    fs::read_dir(root)
        .with_context(|_| context())?
        .map(|entry| entry.map(|entry| entry.file_name()).with_context(|_| context()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_entries_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let entries = list_entries(temp_dir.path()).expect("Failed to list entries");

        assert!(entries.is_empty());
    }

    #[test]
    fn test_list_entries_is_not_recursive() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").expect("Failed to write a.txt");
        fs::create_dir(temp_dir.path().join("sub")).expect("Failed to create sub");
        fs::write(temp_dir.path().join("sub").join("nested.txt"), "n")
            .expect("Failed to write nested.txt");

        let mut entries = list_entries(temp_dir.path()).expect("Failed to list entries");
        entries.sort();

        assert_eq!(entries, vec![OsString::from("a.txt"), OsString::from("sub")]);
    }

    #[test]
    fn test_list_entries_matches_read_dir_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for name in ["zeta", "alpha", "mid", "beta"] {
            fs::write(temp_dir.path().join(name), name).expect("Failed to write file");
        }

        let expected: Vec<OsString> = fs::read_dir(temp_dir.path())
            .expect("Failed to read dir")
            .map(|entry| entry.expect("Failed to read entry").file_name())
            .collect();
        let entries = list_entries(temp_dir.path()).expect("Failed to list entries");

        assert_eq!(entries, expected);
    }

    #[test]
    fn test_list_entries_missing_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing");

        let result = list_entries(&missing);

        match result {
            Err(DumpError::ListError { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected ListError, got {other:?}"),
        }
    }
}
