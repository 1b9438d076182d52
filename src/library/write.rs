use std::fs;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use tracing::debug;

use crate::error::{FlattenError, Result};

use super::Track;

const HEADER: [&str; 5] = ["Title", "Album", "Artist", "Duration", "Index"];

/// Output projection of a [`Track`]; field order must match `HEADER`.
#[derive(Serialize)]
struct Row<'a> {
    title: &'a str,
    album: &'a str,
    artist: &'a str,
    duration: i64,
    index: i64,
}

impl<'a> From<&'a Track> for Row<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            title: &track.title,
            album: &track.album,
            artist: &track.artist,
            duration: track.duration,
            index: track.index,
        }
    }
}

/// Write `tracks` to `path` as CSV, skipping removed ones.
///
/// Parent directories are created as needed. The header is always written,
/// so an empty collection still produces a file. Returns the number of data
/// rows written.
pub fn write_collection(path: &Path, tracks: &[Track]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FlattenError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source: csv::Error| FlattenError::WriteRow {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|source| FlattenError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    writer.write_record(HEADER).map_err(write_err)?;

    let mut written = 0;
    for track in tracks.iter().filter(|t| !t.removed) {
        writer.serialize(Row::from(track)).map_err(write_err)?;
        written += 1;
    }

    writer.flush().map_err(|source| FlattenError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        written,
        skipped = tracks.len() - written,
        "wrote collection"
    );
    Ok(written)
}
