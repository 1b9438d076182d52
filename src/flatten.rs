//! Per-collection pipeline and the export-wide driver built on it.
//!
//! `flatten_collection` handles one library or playlist; `flatten_export`
//! runs it for the library and then for every playlist directory.

mod collection;
mod driver;

pub use collection::{CollectionSummary, flatten_collection};
pub use driver::flatten_export;
