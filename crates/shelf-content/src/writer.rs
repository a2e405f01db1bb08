//! Content file output.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::entry::RenderedEntry;

/// Directory content files are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "hugo_content";

/// Configuration for writing content files.
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Result of a write operation.
#[derive(Debug)]
pub struct WriteResult {
    /// Number of files written, overwrites included
    pub files: usize,

    /// Output directory
    pub output_dir: PathBuf,

    /// Total write time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur while writing content files.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes rendered entries into the output directory.
pub struct ContentWriter {
    config: WriteConfig,
}

impl ContentWriter {
    /// Create a new content writer.
    pub fn new(config: WriteConfig) -> Self {
        Self { config }
    }

    /// Ensure the output directory exists. Safe to call repeatedly.
    pub fn prepare(&self) -> Result<(), WriteError> {
        fs::create_dir_all(&self.config.output_dir).map_err(|source| WriteError::CreateDir {
            path: self.config.output_dir.clone(),
            source,
        })
    }

    /// Write one entry, replacing any existing file with the same name.
    pub fn write(&self, entry: &RenderedEntry) -> Result<PathBuf, WriteError> {
        let path = self.config.output_dir.join(entry.file_name());

        fs::write(&path, &entry.content).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {}", path.display());

        Ok(path)
    }

    /// Write all entries in order.
    ///
    /// A slug seen earlier in the same run is overwritten, matching what a
    /// second run over the same table does. Files written before a failure
    /// stay on disk.
    pub fn write_all(&self, entries: &[RenderedEntry]) -> Result<WriteResult, WriteError> {
        let start = Instant::now();

        self.prepare()?;

        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.slug.as_str()) {
                tracing::warn!(
                    "Slug '{}' produced more than once, overwriting {}",
                    entry.slug,
                    entry.file_name()
                );
            }
            self.write(entry)?;
        }

        Ok(WriteResult {
            files: entries.len(),
            output_dir: self.config.output_dir.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
