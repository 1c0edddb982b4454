//! DOCX Export Module
//!
//! Serializes a `doc_model::Document` into a Microsoft Word DOCX package
//! and reads the structure of a package back for verification.
//! DOCX is based on the Office Open XML (OOXML) format defined in ECMA-376.
//!
//! ## Structure
//!
//! A DOCX file is a ZIP archive containing XML files:
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `docProps/core.xml`, `docProps/app.xml` - Package metadata
//! - `word/document.xml` - Main document content
//! - `word/styles.xml` - Style definitions
//! - `word/numbering.xml` - List/numbering definitions
//! - `word/settings.xml` - Document settings
//! - `word/header1.xml`, `word/footer1.xml` - Default header and footer
//! - `word/_rels/document.xml.rels` - Document relationships
//!
//! Output is deterministic: the same document always yields the same bytes.

mod error;
mod xml;
mod reader;
mod content_types;
mod relationships;
mod writer;
mod document_writer;
mod paragraph_writer;
mod fields_writer;
mod styles_writer;
mod tables_writer;
mod numbering_writer;
mod header_footer_writer;
mod properties_writer;
mod outline_reader;
mod api;

pub use error::{DocxError, DocxResult};
pub use api::{export_docx_bytes, export_docx_bytes_async, read_outline, read_part};
pub use writer::DocxWriter;

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    /// Core properties namespace
    pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    /// Extended (application) properties namespace
    pub const EP: &str = "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
    /// Dublin Core namespaces
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str = "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const SETTINGS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    pub const HEADER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    pub const FOOTER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const NUMBERING: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    pub const SETTINGS: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const HEADER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
    pub const FOOTER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
}

/// Part names inside the package
pub mod parts {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const CORE: &str = "docProps/core.xml";
    pub const APP: &str = "docProps/app.xml";
    pub const DOCUMENT: &str = "word/document.xml";
    pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
    pub const STYLES: &str = "word/styles.xml";
    pub const NUMBERING: &str = "word/numbering.xml";
    pub const SETTINGS: &str = "word/settings.xml";
    pub const HEADER: &str = "word/header1.xml";
    pub const FOOTER: &str = "word/footer1.xml";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_names_match_relationship_targets() {
        assert!(parts::HEADER.ends_with("header1.xml"));
        assert!(namespaces::W.contains("wordprocessingml"));
        assert!(relationship_types::HEADER.ends_with("/header"));
    }
}
