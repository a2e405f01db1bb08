//! Column mapping configuration and field resolution.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::table::RowRecord;

/// Default location of the mapping file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "column_mapping.json";

/// Association from logical field names to source column names.
///
/// Entries keep the order in which they appear in the JSON document, so
/// substring lookups are deterministic: the first matching entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: IndexMap<String, String>,
}

/// Mapping file structure (column_mapping.json).
#[derive(Debug, Deserialize)]
struct MappingFile {
    #[serde(default)]
    column_mapping: ColumnMapping,
}

/// A logical field rendered into every content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Index,
    FinishedDate,
    ReleaseYear,
    Rating,
    Description,
}

/// How a field finds its source column in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// First mapping value containing this text, ignoring case
    ColumnContains(&'static str),
    /// Value mapped at exactly this logical name
    Key(&'static str),
}

impl Field {
    /// Lookup rule used to find this field's column.
    pub fn lookup(self) -> Lookup {
        match self {
            Field::Title => Lookup::ColumnContains("title"),
            Field::Index => Lookup::ColumnContains("index"),
            Field::FinishedDate => Lookup::Key("finished_date"),
            Field::ReleaseYear => Lookup::Key("release_year"),
            Field::Rating => Lookup::Key("rating"),
            Field::Description => Lookup::Key("description"),
        }
    }

    /// Value used when the field cannot be resolved for a row.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::Title => "Untitled",
            Field::Index => "No Index",
            Field::Rating => "No rating available",
            Field::Description => "No description available",
            Field::FinishedDate | Field::ReleaseYear => "UNKNOWN",
        }
    }
}

impl ColumnMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a mapping document. A missing `column_mapping` key yields an
    /// empty mapping.
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        let file: MappingFile = serde_json::from_str(source)?;
        Ok(file.column_mapping)
    }

    /// Add or replace an entry. A replaced key keeps its original position.
    pub fn insert(&mut self, field: impl Into<String>, column: impl Into<String>) {
        self.entries.insert(field.into(), column.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First column name that contains `needle`, compared case-insensitively.
    pub fn column_containing(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.entries
            .values()
            .find(|column| column.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// Column name mapped at exactly `key`.
    pub fn column_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Source column for `field`, if the mapping names one.
    pub fn column(&self, field: Field) -> Option<&str> {
        match field.lookup() {
            Lookup::ColumnContains(needle) => self.column_containing(needle),
            Lookup::Key(key) => self.column_for(key),
        }
    }

    /// Resolve `field` against a row, falling back to the field's default when
    /// the mapping has no column for it or the row lacks that column.
    pub fn resolve<'a>(&'a self, record: &'a RowRecord, field: Field) -> &'a str {
        self.column(field)
            .and_then(|column| record.get(column))
            .unwrap_or_else(|| field.default_value())
    }
}

/// Load the column mapping from a JSON file.
pub fn load_mapping(path: &Path) -> Result<ColumnMapping, MappingError> {
    let content = fs::read_to_string(path).map_err(|source| MappingError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = ColumnMapping::parse(&content).map_err(|source| MappingError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded {} column mappings from {}",
        mapping.len(),
        path.display()
    );

    Ok(mapping)
}

/// Errors that can occur when loading a column mapping.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::table::parse_table;

    const BOOKS_MAPPING: &str = r#"{
  "column_mapping": {
    "title": "Title",
    "index": "Index",
    "finished_date": "finished_date",
    "release_year": "release_year",
    "rating": "rating",
    "description": "description"
  }
}"#;

    #[test]
    fn parses_column_mapping() {
        let mapping = ColumnMapping::parse(BOOKS_MAPPING).unwrap();

        assert_eq!(mapping.len(), 6);
        assert_eq!(mapping.column_for("title"), Some("Title"));
    }

    #[test]
    fn keeps_document_order() {
        let mapping =
            ColumnMapping::parse(r#"{"column_mapping": {"b": "Subtitle", "a": "Title"}}"#)
                .unwrap();

        assert_eq!(mapping.column(Field::Title), Some("Subtitle"));
    }

    #[test]
    fn missing_key_yields_empty_mapping() {
        let mapping = ColumnMapping::parse(r#"{"other": 1}"#).unwrap();

        assert!(mapping.is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(ColumnMapping::parse("{ not json").is_err());
    }

    #[test]
    fn substring_lookup_ignores_case_and_takes_first() {
        let mut mapping = ColumnMapping::new();
        mapping.insert("name", "Book TITLE");
        mapping.insert("alt", "Original title");

        assert_eq!(mapping.column_containing("title"), Some("Book TITLE"));
        assert_eq!(mapping.column(Field::Title), Some("Book TITLE"));
        assert_eq!(mapping.column(Field::Index), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut mapping = ColumnMapping::new();
        mapping.insert("first", "Title");
        mapping.insert("second", "Original title");
        mapping.insert("first", "Index");

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.column_for("first"), Some("Index"));
        assert_eq!(mapping.column(Field::Index), Some("Index"));
        assert_eq!(mapping.column(Field::Title), Some("Original title"));
    }

    #[test]
    fn resolves_mapped_values() {
        let mapping = ColumnMapping::parse(BOOKS_MAPPING).unwrap();
        let rows = parse_table("Title|Index|rating\nDune|3|4 stars");

        assert_eq!(mapping.resolve(&rows[0], Field::Title), "Dune");
        assert_eq!(mapping.resolve(&rows[0], Field::Index), "3");
        assert_eq!(mapping.resolve(&rows[0], Field::Rating), "4 stars");
    }

    #[test]
    fn falls_back_to_defaults() {
        let mapping = ColumnMapping::parse(BOOKS_MAPPING).unwrap();
        let rows = parse_table("Title|Index\nDune");

        // Column mapped but absent from the row
        assert_eq!(mapping.resolve(&rows[0], Field::Index), "No Index");
        assert_eq!(mapping.resolve(&rows[0], Field::ReleaseYear), "UNKNOWN");

        // No mapping at all
        let empty = ColumnMapping::new();
        assert_eq!(empty.resolve(&rows[0], Field::Title), "Untitled");
        assert_eq!(empty.resolve(&rows[0], Field::FinishedDate), "UNKNOWN");
        assert_eq!(
            empty.resolve(&rows[0], Field::Rating),
            "No rating available"
        );
        assert_eq!(
            empty.resolve(&rows[0], Field::Description),
            "No description available"
        );
    }

    #[test]
    fn loads_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("column_mapping.json");
        fs::write(&path, BOOKS_MAPPING).unwrap();

        let mapping = load_mapping(&path).unwrap();

        assert_eq!(mapping.column(Field::Description), Some("description"));
    }

    #[test]
    fn errors_on_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.json");

        let err = load_mapping(&path).unwrap_err();

        assert!(matches!(err, MappingError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn errors_on_invalid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{\"column_mapping\": ").unwrap();

        let err = load_mapping(&path).unwrap_err();

        assert!(matches!(err, MappingError::Parse { .. }));
    }
}
