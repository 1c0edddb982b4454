//! Document.xml writer
//!
//! Converts the content blocks of a `Document` to the body of document.xml,
//! followed by the section properties.

use crate::docx::fields_writer::{FieldSpec, FieldWriter};
use crate::docx::namespaces;
use crate::docx::numbering_writer::NumberingPlan;
use crate::docx::paragraph_writer::ParagraphWriter;
use crate::docx::tables_writer::TableWriter;
use crate::docx::xml::{twips, DECLARATION};
use doc_model::{
    CharacterProperties, ContentBlock, Document, Paragraph, SectionProperties, StyleId, StyleSheet,
    TableOfContents,
};

/// Relationship IDs of the header and footer parts
#[derive(Debug, Clone, Default)]
pub struct SectionRefs {
    pub header: Option<String>,
    pub footer: Option<String>,
}

/// Writer for document.xml
pub struct DocumentWriter<'a> {
    numbering: &'a NumberingPlan,
    section_refs: SectionRefs,
}

impl<'a> DocumentWriter<'a> {
    /// Create a new document writer
    pub fn new(numbering: &'a NumberingPlan, section_refs: SectionRefs) -> Self {
        Self {
            numbering,
            section_refs,
        }
    }

    /// Generate document.xml content
    pub fn write(&self, doc: &Document) -> String {
        let mut xml = String::new();
        xml.push_str(DECLARATION);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for (index, block) in doc.blocks().iter().enumerate() {
            self.write_block(&mut xml, doc, index, block);
        }

        self.write_section_properties(&mut xml, &doc.section);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        xml
    }

    /// Write a body-level block
    fn write_block(&self, xml: &mut String, doc: &Document, index: usize, block: &ContentBlock) {
        match block {
            ContentBlock::Title(para) | ContentBlock::Heading { paragraph: para, .. } => {
                ParagraphWriter::write_paragraph(xml, para, block.style_id().as_ref(), None);
            }
            ContentBlock::Paragraph(para) => {
                ParagraphWriter::write_paragraph(xml, para, para.style_id.as_ref(), None);
            }
            ContentBlock::ListItem(item) => {
                ParagraphWriter::write_paragraph(
                    xml,
                    &item.paragraph,
                    item.paragraph.style_id.as_ref(),
                    self.numbering.reference(index),
                );
            }
            ContentBlock::Table(table) => TableWriter::new().write_table(xml, table),
            ContentBlock::PageBreak => ParagraphWriter::write_page_break(xml),
            ContentBlock::TableOfContents(toc) => self.write_table_of_contents(xml, doc, toc),
        }
    }

    /// Write the table of contents as a content control wrapping a TOC field.
    ///
    /// The field is marked dirty and left without entries; Word builds them
    /// from the heading outline levels when fields are updated.
    fn write_table_of_contents(&self, xml: &mut String, doc: &Document, toc: &TableOfContents) {
        xml.push_str("<w:sdt>");
        xml.push_str("<w:sdtPr>");
        xml.push_str(r#"<w:docPartObj><w:docPartGallery w:val="Table of Contents"/><w:docPartUnique/></w:docPartObj>"#);
        xml.push_str("</w:sdtPr>");
        xml.push_str("<w:sdtContent>");

        let heading_style = StyleId::new(StyleSheet::TOC_HEADING);
        let title_style = doc.styles.contains(&heading_style).then_some(&heading_style);
        ParagraphWriter::write_paragraph(xml, &Paragraph::text(toc.title.as_str()), title_style, None);

        xml.push_str("<w:p>");
        let field = FieldSpec::new(toc.instruction()).dirty();
        FieldWriter::write_field(xml, &field, &CharacterProperties::default());
        xml.push_str("</w:p>");

        xml.push_str("</w:sdtContent>");
        xml.push_str("</w:sdt>");
    }

    /// Write the final section properties
    fn write_section_properties(&self, xml: &mut String, section: &SectionProperties) {
        xml.push_str("<w:sectPr>");

        if let Some(ref id) = self.section_refs.header {
            xml.push_str(&format!(r#"<w:headerReference w:type="default" r:id="{}"/>"#, id));
        }
        if let Some(ref id) = self.section_refs.footer {
            xml.push_str(&format!(r#"<w:footerReference w:type="default" r:id="{}"/>"#, id));
        }

        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            twips(section.page_size.width),
            twips(section.page_size.height)
        ));

        let margins = &section.margins;
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            twips(margins.top),
            twips(margins.right),
            twips(margins.bottom),
            twips(margins.left),
            twips(margins.header),
            twips(margins.footer)
        ));

        xml.push_str("</w:sectPr>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{
        HeadingLevel, ListItem, ListLevel, ListStyle, NumberingDefinition, NumberingRegistry, Style,
    };

    fn document() -> Document {
        let styles = StyleSheet::default()
            .with_style(Style::paragraph(StyleSheet::TITLE, "Title"))
            .with_style(Style::paragraph(StyleSheet::HEADING_1, "Heading 1"))
            .with_style(Style::paragraph(StyleSheet::TOC_HEADING, "TOC Heading"));
        let numbering = NumberingRegistry::new().with_definition(NumberingDefinition::new(
            ListStyle::Bullet,
            vec![ListLevel::bullet(0, "•", 36.0, 18.0)],
        ));
        let mut doc = Document::new(styles, numbering, SectionProperties::default());
        doc.push(ContentBlock::title(Paragraph::text("Data Warehouse Credits Brasil")));
        doc.push(ContentBlock::TableOfContents(TableOfContents::new("Sumário")));
        doc.push(ContentBlock::PageBreak);
        doc.push(ContentBlock::heading(HeadingLevel::H1, "1. Visão Geral do Projeto"));
        doc.push(ContentBlock::ListItem(ListItem::new(ListStyle::Bullet, Paragraph::text("Git"))));
        doc
    }

    fn render(doc: &Document, refs: SectionRefs) -> String {
        let plan = NumberingPlan::build(doc);
        DocumentWriter::new(&plan, refs).write(doc)
    }

    #[test]
    fn test_block_styles() {
        let xml = render(&document(), SectionRefs::default());
        assert!(xml.contains(r#"<w:pStyle w:val="Title"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#));
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
    }

    #[test]
    fn test_table_of_contents() {
        let xml = render(&document(), SectionRefs::default());
        assert!(xml.contains(r#"<w:docPartGallery w:val="Table of Contents"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="TOCHeading"/>"#));
        assert!(xml.contains("Sumário"));
        assert!(xml.contains(r#"w:dirty="true""#));
        assert!(xml.contains(r#"TOC \o &quot;1-3&quot; \h \z \u"#));
    }

    #[test]
    fn test_section_properties() {
        let refs = SectionRefs {
            header: Some("rId4".into()),
            footer: Some("rId5".into()),
        };
        let xml = render(&document(), refs);

        let sect = &xml[xml.find("<w:sectPr>").unwrap()..];
        assert!(sect.starts_with(r#"<w:sectPr><w:headerReference w:type="default" r:id="rId4"/><w:footerReference"#));
        assert!(sect.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
        assert!(sect.contains(r#"w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720""#));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }
}
