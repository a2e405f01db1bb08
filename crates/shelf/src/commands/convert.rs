//! Table conversion command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use shelf_content::{convert, ContentWriter, WriteConfig};
use shelf_table::load_mapping;

/// Run the conversion: read the table, load the mapping, write one file per row.
pub fn run(input: &Path, config: &Path) -> Result<()> {
    let table = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mapping = load_mapping(config).context("Failed to load column mapping")?;
    tracing::info!("Loaded column mapping from {}", config.display());

    let entries = convert(&table, &mapping);

    let result = ContentWriter::new(WriteConfig::default())
        .write_all(&entries)
        .context("Failed to write content files")?;

    tracing::info!(
        "Wrote {} content files in {}ms",
        result.files,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
