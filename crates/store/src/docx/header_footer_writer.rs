//! Header and footer part writers

use crate::docx::namespaces;
use crate::docx::paragraph_writer::ParagraphWriter;
use crate::docx::xml::DECLARATION;
use doc_model::{HeaderFooter, Paragraph};

/// Which kind of part to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

impl HeaderFooterKind {
    fn root(&self) -> &'static str {
        match self {
            HeaderFooterKind::Header => "w:hdr",
            HeaderFooterKind::Footer => "w:ftr",
        }
    }
}

/// Generate header1.xml or footer1.xml content
pub fn write_header_footer(kind: HeaderFooterKind, content: &HeaderFooter) -> String {
    let mut xml = String::new();
    xml.push_str(DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<{} xmlns:w="{}" xmlns:r="{}">"#,
        kind.root(),
        namespaces::W,
        namespaces::R
    ));

    // The part must hold at least one paragraph
    if content.paragraphs.is_empty() {
        ParagraphWriter::write_paragraph(&mut xml, &Paragraph::new(), None, None);
    }
    for para in &content.paragraphs {
        ParagraphWriter::write_paragraph(&mut xml, para, para.style_id.as_ref(), None);
    }

    xml.push_str(&format!("</{}>", kind.root()));
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{PageField, TextRun};

    #[test]
    fn test_header() {
        let header = HeaderFooter::new(vec![Paragraph::text("Data Warehouse Credits Brasil")]);
        let xml = write_header_footer(HeaderFooterKind::Header, &header);
        assert!(xml.contains("<w:hdr xmlns:w="));
        assert!(xml.ends_with("</w:hdr>"));
        assert!(xml.contains("Data Warehouse Credits Brasil"));
    }

    #[test]
    fn test_footer_with_fields() {
        let footer = HeaderFooter::new(vec![Paragraph::new()
            .run(TextRun::new("Página "))
            .run(TextRun::field(PageField::CurrentPage))
            .run(TextRun::new(" de "))
            .run(TextRun::field(PageField::TotalPages))]);
        let xml = write_header_footer(HeaderFooterKind::Footer, &footer);
        assert!(xml.contains("<w:ftr "));
        assert!(xml.contains("> PAGE </w:instrText>"));
        assert!(xml.contains("> NUMPAGES </w:instrText>"));
    }

    #[test]
    fn test_empty_footer_has_paragraph() {
        let xml = write_header_footer(HeaderFooterKind::Footer, &HeaderFooter::default());
        assert!(xml.contains("<w:p></w:p>"));
    }
}
