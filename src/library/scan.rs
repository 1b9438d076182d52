use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{FlattenError, Result};

use super::Track;
use super::parse_record;

/// List the entries directly inside `dir`, ordered by file name.
///
/// Nothing is filtered out: hidden files, subdirectories and files with
/// unexpected extensions are all returned.
pub fn list_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let list_err = |source: io::Error| FlattenError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    // WalkDir quietly yields nothing below a plain file, so check the root first.
    let meta = fs::metadata(dir).map_err(list_err)?;
    if !meta.is_dir() {
        return Err(list_err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| list_err(e.into()))
}

/// Parse every entry of `dir` as a record file.
///
/// A single unreadable entry fails the whole collection.
pub fn read_collection(dir: &Path) -> Result<Vec<Track>> {
    let entries = list_entries(dir)?;
    debug!(dir = %dir.display(), entries = entries.len(), "reading collection");

    entries
        .iter()
        .map(|entry| parse_record(entry.path()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_record(dir: &Path, name: &str, title: &str) {
        fs::write(
            dir.join(name),
            format!("Title,Album,Artist,Duration,Rating,Play Count,Removed\n{title},Al,Ar,1,,,No\n"),
        )
        .unwrap();
    }

    #[test]
    fn list_entries_is_name_ordered_and_unfiltered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), b"").unwrap();
        fs::write(dir.path().join(".hidden"), b"").unwrap();
        fs::write(dir.path().join("a.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let names: Vec<String> = list_entries(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![".hidden", "a.txt", "b.csv", "sub"]);
    }

    #[test]
    fn list_entries_does_not_descend() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.csv"), b"").unwrap();

        assert_eq!(list_entries(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn list_entries_rejects_missing_and_plain_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.csv");
        fs::write(&file, b"").unwrap();

        assert!(matches!(
            list_entries(&dir.path().join("missing")),
            Err(FlattenError::ListDir { .. })
        ));
        assert!(matches!(list_entries(&file), Err(FlattenError::ListDir { .. })));
    }

    #[test]
    fn read_collection_parses_every_entry() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "one.csv", "One");
        write_record(dir.path(), "two", "Two");

        let tracks = read_collection(dir.path()).unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn read_collection_of_empty_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(read_collection(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn one_bad_entry_fails_the_collection() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "good.csv", "Good");
        fs::create_dir(dir.path().join("not-a-record")).unwrap();

        assert!(read_collection(dir.path()).is_err());
    }
}
