//! Track records: parsing, directory reading, ordering and CSV output.
//!
//! A collection goes through `read_collection` -> `sort_collection` ->
//! `write_collection`; the `flatten` module wires those together.

mod model;
mod record;
mod scan;
mod sort;
mod write;

pub use model::Track;
pub use record::parse_record;
pub use scan::{list_entries, read_collection};
pub use sort::sort_collection;
pub use write::write_collection;
