//! Configuration loader and schema types.
//!
//! Settings are optional: the export layout names and the default log filter
//! can be overridden from a TOML file or the environment.

mod load;
mod schema;

pub use schema::*;
