//! DOCX Writer Infrastructure
//!
//! Creates ZIP archives with correct DOCX structure. Parts are written in a
//! fixed order with a fixed timestamp, so equal documents give equal bytes.

use crate::docx::content_types::ContentTypes;
use crate::docx::document_writer::{DocumentWriter, SectionRefs};
use crate::docx::error::DocxResult;
use crate::docx::header_footer_writer::{write_header_footer, HeaderFooterKind};
use crate::docx::numbering_writer::{NumberingPlan, NumberingWriter};
use crate::docx::properties_writer::{write_app_properties, write_core_properties, write_settings};
use crate::docx::relationships::{create_document_rels, create_root_rels, Relationships};
use crate::docx::styles_writer::StylesWriter;
use crate::docx::{content_type_values, parts, relationship_types};
use doc_model::{ContentBlock, Document};
use std::io::{Seek, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: ContentTypes::new(),
            root_rels: create_root_rels(),
            doc_rels: create_document_rels(),
        }
    }

    /// Write a complete DOCX package and hand back the underlying writer.
    ///
    /// The document is expected to be valid; see `Document::validate`.
    pub fn write(mut self, doc: &Document) -> DocxResult<W> {
        let plan = NumberingPlan::build(doc);

        // Collect the parts first so [Content_Types].xml can lead the archive
        let mut word_parts: Vec<(&'static str, String)> = Vec::new();

        self.register(parts::DOCUMENT, content_type_values::DOCUMENT);
        self.register(parts::CORE, content_type_values::CORE_PROPERTIES);
        self.register(parts::APP, content_type_values::EXTENDED_PROPERTIES);
        self.register(parts::STYLES, content_type_values::STYLES);
        self.register(parts::SETTINGS, content_type_values::SETTINGS);

        word_parts.push((parts::STYLES, StylesWriter::new().write(&doc.styles)));

        let has_toc = doc
            .blocks()
            .iter()
            .any(|block| matches!(block, ContentBlock::TableOfContents(_)));
        word_parts.push((parts::SETTINGS, write_settings(has_toc)));

        if !doc.numbering.is_empty() {
            self.doc_rels.add(relationship_types::NUMBERING, "numbering.xml");
            self.register(parts::NUMBERING, content_type_values::NUMBERING);
            word_parts.push((parts::NUMBERING, NumberingWriter::new(&plan).write(doc)));
        }

        let mut section_refs = SectionRefs::default();
        if let Some(ref header) = doc.section.header {
            section_refs.header = Some(self.doc_rels.add(relationship_types::HEADER, "header1.xml"));
            self.register(parts::HEADER, content_type_values::HEADER);
            word_parts.push((parts::HEADER, write_header_footer(HeaderFooterKind::Header, header)));
        }
        if let Some(ref footer) = doc.section.footer {
            section_refs.footer = Some(self.doc_rels.add(relationship_types::FOOTER, "footer1.xml"));
            self.register(parts::FOOTER, content_type_values::FOOTER);
            word_parts.push((parts::FOOTER, write_header_footer(HeaderFooterKind::Footer, footer)));
        }

        let document_xml = DocumentWriter::new(&plan, section_refs).write(doc);

        let content_types_xml = self.content_types.to_xml();
        self.write_file(parts::CONTENT_TYPES, &content_types_xml)?;

        let root_rels_xml = self.root_rels.to_xml();
        self.write_file(parts::ROOT_RELS, &root_rels_xml)?;

        self.write_file(parts::CORE, &write_core_properties(&doc.metadata))?;
        self.write_file(parts::APP, &write_app_properties())?;
        self.write_file(parts::DOCUMENT, &document_xml)?;

        for (path, content) in &word_parts {
            self.write_file(path, content)?;
        }

        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file(parts::DOCUMENT_RELS, &doc_rels_xml)?;

        Ok(self.zip.finish()?)
    }

    fn register(&mut self, part: &str, content_type: &str) {
        self.content_types.add_override(part, content_type);
    }

    /// Write a file to the ZIP archive
    pub fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        debug!(part = path, bytes = content.len(), "writing package part");

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::reader::DocxReader;
    use doc_model::{HeaderFooter, Paragraph, SectionProperties, StyleSheet};
    use std::io::Cursor;

    fn write(doc: &Document) -> Vec<u8> {
        DocxWriter::new(Cursor::new(Vec::new()))
            .write(doc)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn test_minimal_package() {
        let mut doc = Document::default();
        doc.push(ContentBlock::Paragraph(Paragraph::text("Git")));
        let bytes = write(&doc);

        let reader = DocxReader::new(Cursor::new(bytes)).unwrap();
        assert!(reader.is_valid_docx());
        assert_eq!(reader.file_names()[0], parts::CONTENT_TYPES);
        assert!(reader.file_exists(parts::DOCUMENT));
        assert!(reader.file_exists(parts::STYLES));
        assert!(!reader.file_exists(parts::NUMBERING));
        assert!(!reader.file_exists(parts::HEADER));
    }

    #[test]
    fn test_header_footer_parts_are_related() {
        let section = SectionProperties::default()
            .with_header(HeaderFooter::new(vec![Paragraph::text("Header")]))
            .with_footer(HeaderFooter::new(vec![Paragraph::text("Footer")]));
        let doc = Document::new(StyleSheet::default(), Default::default(), section);
        let bytes = write(&doc);

        let mut reader = DocxReader::new(Cursor::new(bytes)).unwrap();
        let rels = Relationships::parse(&reader.read_file_as_string(parts::DOCUMENT_RELS).unwrap()).unwrap();
        let header = rels.get_by_type(relationship_types::HEADER).unwrap();
        assert_eq!(header.target, "header1.xml");

        let document = reader.read_file_as_string(parts::DOCUMENT).unwrap();
        assert!(document.contains(&format!(r#"r:id="{}""#, header.id)));

        let content_types = ContentTypes::parse(&reader.read_file_as_string(parts::CONTENT_TYPES).unwrap()).unwrap();
        assert_eq!(
            content_types.get_content_type(parts::FOOTER).map(String::as_str),
            Some(content_type_values::FOOTER)
        );
    }

    #[test]
    fn test_identical_bytes() {
        let mut doc = Document::default();
        doc.push(ContentBlock::Paragraph(Paragraph::text("Git")));
        assert_eq!(write(&doc), write(&doc));
    }
}
