//! Front matter and body rendering for one book.

use shelf_table::{parse_table, ColumnMapping, Field, RowRecord};

use crate::title::ProcessedTitle;

/// Front matter block delimiter.
pub const FRONT_MATTER_DELIMITER: &str = "+++";

/// Resolved fields for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    /// Position of the book in the reading list
    pub index: String,

    /// Processed title, slug and cover
    pub title: ProcessedTitle,

    /// Date the book was finished
    pub finished_date: String,

    /// Year the book was published
    pub release_year: String,

    /// Free-form rating text
    pub rating: String,

    /// Link target for the reading notes
    pub description: String,
}

/// A rendered content file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// File stem
    pub slug: String,

    /// Full file content
    pub content: String,
}

impl RenderedEntry {
    /// Output file name for this entry.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

impl BookEntry {
    /// Resolve every field of a row through the column mapping.
    pub fn from_record(record: &RowRecord, mapping: &ColumnMapping) -> Self {
        let field = |f: Field| mapping.resolve(record, f).to_string();

        Self {
            index: field(Field::Index),
            title: ProcessedTitle::from_raw(mapping.resolve(record, Field::Title)),
            finished_date: field(Field::FinishedDate),
            release_year: field(Field::ReleaseYear),
            rating: field(Field::Rating),
            description: field(Field::Description),
        }
    }

    /// Render the content file. Values are inserted verbatim.
    pub fn render(&self) -> RenderedEntry {
        let content = format!(
            "{delim}
date: {date}
title: \"(Book #{index}) {title}\"
frontpage: true
cover: {cover}
tags: ['books']
{delim}

Release year: {year}

{rating}

Read [the notes I wrote]({notes}) from this book.
",
            delim = FRONT_MATTER_DELIMITER,
            date = self.finished_date,
            index = self.index,
            title = self.title.clean,
            cover = self.title.cover.as_deref().unwrap_or_default(),
            year = self.release_year,
            rating = self.rating,
            notes = self.description,
        );

        RenderedEntry {
            slug: self.title.slug.clone(),
            content,
        }
    }
}

/// Render every row of a table, in input order.
pub fn convert(table: &str, mapping: &ColumnMapping) -> Vec<RenderedEntry> {
    parse_table(table)
        .iter()
        .map(|record| {
            let entry = BookEntry::from_record(record, mapping);
            tracing::info!("{}", entry.title.clean);
            entry.render()
        })
        .collect()
}
