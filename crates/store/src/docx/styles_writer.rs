//! Styles.xml writer
//!
//! Writes the document defaults and every style of the sheet in definition order.

use crate::docx::namespaces;
use crate::docx::paragraph_writer::ParagraphWriter;
use crate::docx::xml::{escape_xml, DECLARATION};
use doc_model::{Style, StyleSheet, StyleType};

/// Writer for styles.xml
pub struct StylesWriter;

impl StylesWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self, sheet: &StyleSheet) -> String {
        let mut xml = String::new();
        xml.push_str(DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, namespaces::W));

        xml.push_str("<w:docDefaults>");
        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        ParagraphWriter::write_run_formatting(&mut xml, &sheet.default_run);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");
        xml.push_str("<w:pPrDefault/>");
        xml.push_str("</w:docDefaults>");

        for style in sheet.styles() {
            self.write_style(&mut xml, style);
        }

        xml.push_str("</w:styles>");
        xml
    }

    fn write_style(&self, xml: &mut String, style: &Style) {
        let style_type = match style.style_type {
            StyleType::Paragraph => "paragraph",
            StyleType::Character => "character",
        };
        let default = if style.id.as_str() == StyleSheet::NORMAL { r#" w:default="1""# } else { "" };

        xml.push_str(&format!(
            r#"<w:style w:type="{}"{} w:styleId="{}">"#,
            style_type,
            default,
            escape_xml(style.id.as_str())
        ));
        xml.push_str(&format!(r#"<w:name w:val="{}"/>"#, escape_xml(&style.name)));

        if let Some(ref based_on) = style.based_on {
            xml.push_str(&format!(r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on.as_str())));
        }
        if let Some(ref next) = style.next_style {
            xml.push_str(&format!(r#"<w:next w:val="{}"/>"#, escape_xml(next.as_str())));
        }
        if style.quick_format {
            xml.push_str("<w:qFormat/>");
        }

        if style.style_type == StyleType::Paragraph && !style.paragraph_props.is_empty() {
            xml.push_str("<w:pPr>");
            ParagraphWriter::write_paragraph_layout(xml, &style.paragraph_props);
            xml.push_str("</w:pPr>");
        }

        ParagraphWriter::write_run_properties(xml, &style.character_props);

        xml.push_str("</w:style>");
    }
}

impl Default for StylesWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Alignment, CharacterProperties, ParagraphProperties};

    fn sheet() -> StyleSheet {
        StyleSheet::new(CharacterProperties::new().font("Arial").size(12.0)).with_style(
            Style::paragraph(StyleSheet::HEADING_1, "Heading 1")
                .next(StyleSheet::NORMAL)
                .quick_format()
                .with_run(CharacterProperties::new().size(16.0).bold().color("1F4E78"))
                .with_paragraph(
                    ParagraphProperties::new()
                        .spacing(Some(18.0), Some(6.0))
                        .aligned(Alignment::Left)
                        .outline(0),
                ),
        )
    }

    #[test]
    fn test_doc_defaults() {
        let xml = StylesWriter::new().write(&sheet());
        assert!(xml.contains(r#"<w:rPrDefault><w:rPr><w:rFonts w:ascii="Arial""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn test_normal_is_default() {
        let xml = StylesWriter::new().write(&sheet());
        assert!(xml.contains(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#));
    }

    #[test]
    fn test_heading_style() {
        let xml = StylesWriter::new().write(&sheet());
        let start = xml.find(r#"w:styleId="Heading1""#).unwrap();
        let heading = &xml[start..];

        assert!(heading.contains(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#));
        assert!(heading.contains(r#"<w:spacing w:before="360" w:after="120"/>"#));
        assert!(heading.contains(r#"<w:outlineLvl w:val="0"/>"#));
        assert!(heading.contains(r#"<w:color w:val="1F4E78"/><w:sz w:val="32"/>"#));
        assert!(heading.find("</w:pPr>").unwrap() < heading.find("<w:rPr>").unwrap());
    }
}
