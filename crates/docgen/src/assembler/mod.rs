//! Content assembly
//!
//! Builds the complete documentation as a `doc_model::Document`: the cover,
//! the table of contents and eight chapters, styled by [`theme`]. The
//! content is fixed, so two calls always produce equal documents.

mod builders;
mod chapters;
pub mod theme;

use chrono::{TimeZone, Utc};
use doc_model::{Document, DocumentMetadata};

/// Core properties of the generated package
pub fn default_metadata() -> DocumentMetadata {
    DocumentMetadata {
        title: Some(theme::RUNNING_TITLE.to_string()),
        subject: Some("Documentação Técnica Completa".to_string()),
        author: Some("Credits Brasil".to_string()),
        created: Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).single(),
    }
}

/// Assemble the full document tree in reading order
pub fn assemble() -> Document {
    let mut doc = Document::new(theme::style_sheet(), theme::numbering(), theme::section())
        .with_metadata(default_metadata());

    doc.extend(chapters::cover());
    doc.extend(chapters::contents());
    doc.extend(chapters::overview());
    doc.extend(chapters::medallion());
    doc.extend(chapters::data_flow());
    doc.extend(chapters::repository());
    doc.extend(chapters::deployment());
    doc.extend(chapters::automation());
    doc.extend(chapters::next_steps());
    doc.extend(chapters::contacts());
    doc
}
