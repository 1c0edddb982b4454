//! Public API for DOCX export and read-back
//!
//! This module provides the main entry points for working with DOCX packages.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::outline_reader::outline_from_document_xml;
use crate::docx::parts;
use crate::docx::reader::DocxReader;
use crate::docx::writer::DocxWriter;
use doc_model::{Document, DocumentOutline};
use std::io::Cursor;
use tracing::{debug, instrument};

/// Export a Document to DOCX bytes in memory
///
/// The document is validated first; a violated format constraint is
/// reported as `DocxError::Format` and nothing is produced.
///
/// # Example
///
/// ```ignore
/// use store::docx::export_docx_bytes;
///
/// let bytes = export_docx_bytes(&document)?;
/// ```
#[instrument(level = "debug", skip_all, fields(blocks = doc.blocks().len()))]
pub fn export_docx_bytes(doc: &Document) -> DocxResult<Vec<u8>> {
    doc.validate()?;

    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(doc)?;
    let bytes = cursor.into_inner();

    debug!(bytes = bytes.len(), "serialized document");
    Ok(bytes)
}

/// Export a Document on the blocking thread pool
///
/// Serialization is CPU-bound, so async callers hand the document over
/// instead of stalling the runtime.
pub async fn export_docx_bytes_async(doc: Document) -> DocxResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || export_docx_bytes(&doc)).await?
}

/// Read the structural outline back from DOCX bytes
pub fn read_outline(bytes: &[u8]) -> DocxResult<DocumentOutline> {
    let document_xml = read_part(bytes, parts::DOCUMENT)?;
    outline_from_document_xml(&document_xml)
}

/// Read one part of a DOCX package as text
pub fn read_part(bytes: &[u8], name: &str) -> DocxResult<String> {
    let mut reader = DocxReader::new(Cursor::new(bytes))?;
    if !reader.is_valid_docx() {
        return Err(DocxError::InvalidStructure(
            "missing content types or package relationships".into(),
        ));
    }
    reader.read_file_as_string(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{
        ContentBlock, DocModelError, Paragraph, StyleSheet, TableBlock, TableCell, TableRow,
    };

    #[test]
    fn test_export_rejects_unknown_style() {
        let mut doc = Document::default();
        doc.push(ContentBlock::Paragraph(Paragraph::text("x").with_style("Missing")));

        match export_docx_bytes(&doc) {
            Err(DocxError::Format(DocModelError::UnknownStyle { block, style })) => {
                assert_eq!(block, 0);
                assert_eq!(style, "Missing");
            }
            other => panic!("expected format error, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_export_rejects_ragged_table() {
        let table = TableBlock::new(vec![72.0, 72.0])
            .row(TableRow::new(vec![TableCell::text("a"), TableCell::text("b")]))
            .row(TableRow::new(vec![TableCell::text("c")]));
        let mut doc = Document::default();
        doc.push(ContentBlock::Table(table));

        assert!(matches!(
            export_docx_bytes(&doc),
            Err(DocxError::Format(DocModelError::RaggedTable { row: 1, .. }))
        ));
    }

    #[test]
    fn test_read_part_missing() {
        let bytes = export_docx_bytes(&Document::default()).unwrap();
        assert!(matches!(read_part(&bytes, "word/missing.xml"), Err(DocxError::MissingPart(_))));
        assert!(read_part(&bytes, parts::STYLES).unwrap().contains(StyleSheet::NORMAL));
    }

    #[test]
    fn test_read_part_rejects_garbage() {
        assert!(matches!(read_part(b"not a zip", parts::DOCUMENT), Err(DocxError::Zip(_))));
    }

    #[tokio::test]
    async fn test_async_export_matches_sync() {
        let mut doc = Document::default();
        doc.push(ContentBlock::Paragraph(Paragraph::text("Git")));

        let sync = export_docx_bytes(&doc).unwrap();
        let async_bytes = export_docx_bytes_async(doc).await.unwrap();
        assert_eq!(sync, async_bytes);
    }
}
