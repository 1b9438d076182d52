//! Error types for the flatten pipeline.
//!
//! Every operation that touches the filesystem returns [`Result`]. Field-level
//! parse problems (a non-numeric duration, say) are not errors at all; they
//! default to zero inside the record parser.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    /// A collection or playlists directory could not be listed.
    #[error("cannot read from {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record file could not be opened or parsed as CSV.
    #[error("cannot read from {}: {source}", path.display())]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record file had a header but no data row.
    #[error("cannot read from {}: missing data row", path.display())]
    MissingDataRow { path: PathBuf },

    /// The data row is too short to carry the removed flag.
    #[error("cannot read from {}: expected at least {expected} fields, found {found}", path.display())]
    ShortRecord {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create file at {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot write to {}: {source}", path.display())]
    WriteRow {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot write to {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
