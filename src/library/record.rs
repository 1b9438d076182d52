use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::{FlattenError, Result};

use super::Track;

const TITLE: usize = 0;
const ALBUM: usize = 1;
const ARTIST: usize = 2;
const DURATION: usize = 3;
// Columns 4 and 5 (rating, play count) are not interpreted.
const REMOVED: usize = 6;
const INDEX: usize = 7;

/// Fewest fields a data row may have and still carry the removed flag.
const MIN_FIELDS: usize = REMOVED + 1;

const REMOVED_MARKER: &str = "Yes";

/// Parse one Takeout record file (a header row followed by one data row).
///
/// Numeric fields that fail to parse become 0 and invalid UTF-8 in text
/// fields is replaced lossily; anything that stops the data row from being
/// read at all is an error.
pub fn parse_record(path: &Path) -> Result<Track> {
    let read_err = |source: csv::Error| FlattenError::ReadRecord {
        path: path.to_path_buf(),
        source,
    };

    // The reader owns the file handle and drops it on every return below.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;

    let record = match reader.byte_records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(read_err(e)),
        None => {
            return Err(FlattenError::MissingDataRow {
                path: path.to_path_buf(),
            });
        }
    };

    if record.len() < MIN_FIELDS {
        return Err(FlattenError::ShortRecord {
            path: path.to_path_buf(),
            expected: MIN_FIELDS,
            found: record.len(),
        });
    }

    Ok(track_from_record(&record))
}

/// Map a data row of at least `MIN_FIELDS` fields onto a [`Track`].
fn track_from_record(record: &ByteRecord) -> Track {
    let field = |i: usize| record.get(i).unwrap_or_default();
    let text = |i: usize| String::from_utf8_lossy(field(i)).into_owned();

    Track {
        title: text(TITLE),
        album: text(ALBUM),
        artist: text(ARTIST),
        duration: parse_or_zero(field(DURATION)),
        removed: field(REMOVED) == REMOVED_MARKER.as_bytes(),
        index: record.get(INDEX).map(parse_or_zero).unwrap_or(0),
    }
}

fn parse_or_zero(field: &[u8]) -> i64 {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
