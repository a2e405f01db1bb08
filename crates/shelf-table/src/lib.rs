//! Table parsing and column mapping for shelf.
//!
//! This crate turns pipe-delimited table text into row records and resolves
//! logical book fields against those records through a user-supplied column
//! mapping.

pub mod mapping;
pub mod table;

pub use mapping::{load_mapping, ColumnMapping, Field, Lookup, MappingError, DEFAULT_CONFIG_PATH};
pub use table::{parse_table, RowRecord};
