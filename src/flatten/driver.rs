use std::path::Path;

use tracing::debug;

use crate::config::LayoutSettings;
use crate::error::Result;
use crate::library::list_entries;

use super::{CollectionSummary, flatten_collection};

/// Progress name of the library collection.
const LIBRARY_NAME: &str = "main library";

/// Flatten the library and every playlist of a Takeout export.
///
/// Writes `<dest>/<library_file>.csv` and
/// `<dest>/<playlists_dir>/<playlist>.csv`. Stops at the first error; files
/// already written are left in place.
pub fn flatten_export(
    source: &Path,
    dest: &Path,
    layout: &LayoutSettings,
) -> Result<Vec<CollectionSummary>> {
    let mut summaries = vec![flatten_collection(
        LIBRARY_NAME,
        source,
        &dest.join(&layout.library_file),
        layout,
    )?];

    let playlists = source.join(&layout.playlists_dir);
    let dest_playlists = dest.join(&layout.playlists_dir);
    for entry in list_entries(&playlists)? {
        let name = entry.file_name().to_string_lossy();
        let summary = flatten_collection(
            &name,
            entry.path(),
            &dest_playlists.join(entry.file_name()),
            layout,
        )?;
        summaries.push(summary);
    }

    for s in &summaries {
        debug!(
            collection = %s.name,
            read = s.read,
            written = s.written,
            removed = s.read - s.written,
            "collection done"
        );
    }
    Ok(summaries)
}
