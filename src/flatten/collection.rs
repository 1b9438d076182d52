use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::LayoutSettings;
use crate::error::Result;
use crate::library::{read_collection, sort_collection, write_collection};

const OUTPUT_SUFFIX: &str = ".csv";

/// What one `flatten_collection` run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    /// Record files parsed, removed tracks included.
    pub read: usize,
    /// Data rows in the output file.
    pub written: usize,
}

/// Read, sort and write one collection.
///
/// Record files are read from `source/<tracks_dir>`, or from `source` itself
/// for the Thumbs Up playlist. The output goes to `dest` with `.csv`
/// appended.
pub fn flatten_collection(
    name: &str,
    source: &Path,
    dest: &Path,
    layout: &LayoutSettings,
) -> Result<CollectionSummary> {
    println!("Flattening {name}");

    let source = effective_source(name, source, layout);
    let dest = output_path(dest);
    debug!(
        collection = name,
        source = %source.display(),
        dest = %dest.display(),
        "flattening collection"
    );

    let mut tracks = read_collection(&source)?;
    sort_collection(&mut tracks);
    let written = write_collection(&dest, &tracks)?;

    Ok(CollectionSummary {
        name: name.to_string(),
        read: tracks.len(),
        written,
    })
}

fn effective_source(name: &str, source: &Path, layout: &LayoutSettings) -> PathBuf {
    if name == layout.thumbs_up {
        source.to_path_buf()
    } else {
        source.join(&layout.tracks_dir)
    }
}

/// Append the suffix rather than replace an extension: "Vol. 2" must become
/// "Vol. 2.csv", not "Vol.csv".
fn output_path(dest: &Path) -> PathBuf {
    let mut s = OsString::from(dest.as_os_str());
    s.push(OUTPUT_SUFFIX);
    PathBuf::from(s)
}
