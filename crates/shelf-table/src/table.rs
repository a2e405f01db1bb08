//! Pipe-delimited table parser.

use std::collections::HashMap;

/// One data row, keyed by header column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    cells: HashMap<String, String>,
}

impl RowRecord {
    /// Build a record by zipping header names against row values.
    ///
    /// Pairs stop at the shorter of the two sequences. A repeated header name
    /// keeps the value of its last occurrence.
    pub fn from_pairs<'a, H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let cells = headers
            .into_iter()
            .zip(values)
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect();

        Self { cells }
    }

    /// Look up the cell stored under `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Number of cells in this record.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the record holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parse table text into one record per data line.
///
/// The text is trimmed, then split on newlines. The first line is the header;
/// every following line becomes a record, blank ones included. Rows that are
/// shorter than the header simply lack the trailing columns, and extra fields
/// are dropped.
pub fn parse_table(source: &str) -> Vec<RowRecord> {
    let mut lines = source.trim().split('\n');

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.trim().split('|').collect();

    let rows: Vec<RowRecord> = lines
        .map(|line| RowRecord::from_pairs(headers.iter().copied(), line.trim().split('|')))
        .collect();

    tracing::debug!(
        "Parsed table with {} columns and {} rows",
        headers.len(),
        rows.len()
    );

    rows
}
