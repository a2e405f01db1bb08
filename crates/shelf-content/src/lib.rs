//! Content generation for shelf.
//!
//! Turns resolved table rows into static-site content files: a `+++`
//! delimited front matter block followed by a short Markdown body, one file
//! per book, named after the book's slug.

pub mod entry;
pub mod title;
pub mod writer;

pub use entry::{convert, BookEntry, RenderedEntry, FRONT_MATTER_DELIMITER};
pub use title::{clean_title, extract_cover, slugify, ProcessedTitle};
pub use writer::{ContentWriter, WriteConfig, WriteError, WriteResult, DEFAULT_OUTPUT_DIR};
