//! Paragraph, run and property writers shared by every part that holds text

use crate::docx::fields_writer::{FieldSpec, FieldWriter};
use crate::docx::xml::{escape_xml, half_points, hex_color, twips};
use doc_model::{Alignment, CharacterProperties, Paragraph, ParagraphProperties, RunContent, StyleId, TextRun};

/// Numbering reference of a list paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    pub num_id: u32,
    pub level: u8,
}

/// Writer for `w:p` elements and their properties
pub struct ParagraphWriter;

impl ParagraphWriter {
    /// Write a paragraph with an effective style and optional list numbering
    pub fn write_paragraph(
        xml: &mut String,
        para: &Paragraph,
        style: Option<&StyleId>,
        numbering: Option<NumberingRef>,
    ) {
        xml.push_str("<w:p>");
        Self::write_paragraph_properties(xml, style, numbering, &para.formatting);

        for run in &para.runs {
            Self::write_run(xml, run);
        }

        xml.push_str("</w:p>");
    }

    /// Write a paragraph holding only a page break
    pub fn write_page_break(xml: &mut String) {
        xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
    }

    /// Write `w:pPr` in schema order; nothing is written when empty
    pub fn write_paragraph_properties(
        xml: &mut String,
        style: Option<&StyleId>,
        numbering: Option<NumberingRef>,
        props: &ParagraphProperties,
    ) {
        if style.is_none() && numbering.is_none() && props.is_empty() {
            return;
        }

        xml.push_str("<w:pPr>");

        if let Some(style) = style {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, escape_xml(style.as_str())));
        }

        if let Some(num) = numbering {
            xml.push_str(&format!(
                r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
                num.level, num.num_id
            ));
        }

        Self::write_paragraph_layout(xml, props);
        xml.push_str("</w:pPr>");
    }

    /// Spacing, indentation, alignment and outline level, without the `w:pPr` wrapper
    pub fn write_paragraph_layout(xml: &mut String, props: &ParagraphProperties) {
        if props.space_before.is_some() || props.space_after.is_some() {
            xml.push_str("<w:spacing");
            if let Some(before) = props.space_before {
                xml.push_str(&format!(r#" w:before="{}""#, twips(before)));
            }
            if let Some(after) = props.space_after {
                xml.push_str(&format!(r#" w:after="{}""#, twips(after)));
            }
            xml.push_str("/>");
        }

        if props.indent_left.is_some() || props.indent_hanging.is_some() {
            xml.push_str("<w:ind");
            if let Some(left) = props.indent_left {
                xml.push_str(&format!(r#" w:left="{}""#, twips(left)));
            }
            if let Some(hanging) = props.indent_hanging {
                xml.push_str(&format!(r#" w:hanging="{}""#, twips(hanging)));
            }
            xml.push_str("/>");
        }

        if let Some(alignment) = props.alignment {
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment_value(alignment)));
        }

        if let Some(level) = props.outline_level {
            xml.push_str(&format!(r#"<w:outlineLvl w:val="{}"/>"#, level));
        }
    }

    /// Write a run; field runs expand to the complex field sequence
    pub fn write_run(xml: &mut String, run: &TextRun) {
        match &run.content {
            RunContent::Field(field) => {
                FieldWriter::write_field(xml, &FieldSpec::page(*field), &run.formatting);
            }
            RunContent::Text(text) => {
                xml.push_str("<w:r>");
                Self::write_run_properties(xml, &run.formatting);
                Self::write_text(xml, text);
                xml.push_str("</w:r>");
            }
        }
    }

    fn write_text(xml: &mut String, text: &str) {
        let lines: Vec<&str> = text.split('\n').collect();
        for (i, line) in lines.iter().enumerate() {
            let segments: Vec<&str> = line.split('\t').collect();
            for (j, segment) in segments.iter().enumerate() {
                if !segment.is_empty() {
                    if needs_preserve(segment) {
                        xml.push_str(r#"<w:t xml:space="preserve">"#);
                    } else {
                        xml.push_str("<w:t>");
                    }
                    xml.push_str(&escape_xml(segment));
                    xml.push_str("</w:t>");
                }
                if j + 1 < segments.len() {
                    xml.push_str("<w:tab/>");
                }
            }
            if i + 1 < lines.len() {
                xml.push_str("<w:br/>");
            }
        }
    }

    /// Write `w:rPr` in schema order; nothing is written when empty
    pub fn write_run_properties(xml: &mut String, props: &CharacterProperties) {
        if props.is_empty() {
            return;
        }
        xml.push_str("<w:rPr>");
        Self::write_run_formatting(xml, props);
        xml.push_str("</w:rPr>");
    }

    /// Run formatting elements without the `w:rPr` wrapper
    pub fn write_run_formatting(xml: &mut String, props: &CharacterProperties) {
        if let Some(ref font) = props.font_family {
            let font = escape_xml(font);
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                font
            ));
        }

        if let Some(bold) = props.bold {
            xml.push_str(if bold { "<w:b/><w:bCs/>" } else { r#"<w:b w:val="0"/><w:bCs w:val="0"/>"# });
        }

        if let Some(italic) = props.italic {
            xml.push_str(if italic { "<w:i/><w:iCs/>" } else { r#"<w:i w:val="0"/><w:iCs w:val="0"/>"# });
        }

        if let Some(ref color) = props.color {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, hex_color(color)));
        }

        if let Some(size) = props.font_size {
            let half_pts = half_points(size);
            xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
            xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        }

        if let Some(underline) = props.underline {
            let val = if underline { "single" } else { "none" };
            xml.push_str(&format!(r#"<w:u w:val="{}"/>"#, val));
        }
    }
}

fn alignment_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

/// Leading, trailing or repeated spaces are dropped by Word unless preserved
fn needs_preserve(segment: &str) -> bool {
    segment.starts_with(' ') || segment.ends_with(' ') || segment.contains("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::PageField;

    fn render(para: &Paragraph, style: Option<&StyleId>, numbering: Option<NumberingRef>) -> String {
        let mut xml = String::new();
        ParagraphWriter::write_paragraph(&mut xml, para, style, numbering);
        xml
    }

    #[test]
    fn test_plain_paragraph_has_no_properties() {
        let xml = render(&Paragraph::text("Git"), None, None);
        assert_eq!(xml, "<w:p><w:r><w:t>Git</w:t></w:r></w:p>");
    }

    #[test]
    fn test_property_order() {
        let para = Paragraph::text("x").with_formatting(
            ParagraphProperties::new()
                .aligned(Alignment::Center)
                .spacing(Some(6.0), Some(24.0))
                .indent(18.0),
        );
        let style = StyleId::new("CodeBlock");
        let xml = render(&para, Some(&style), Some(NumberingRef { num_id: 2, level: 0 }));

        let order = ["<w:pStyle", "<w:numPr>", "<w:spacing", "<w:ind", "<w:jc"];
        let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", xml);
        assert!(xml.contains(r#"<w:spacing w:before="120" w:after="480"/>"#));
        assert!(xml.contains(r#"<w:ind w:left="360"/>"#));
    }

    #[test]
    fn test_run_properties() {
        let props = CharacterProperties::new()
            .font("Courier New")
            .size(11.0)
            .bold()
            .italic()
            .color("FFFFFF");
        let mut xml = String::new();
        ParagraphWriter::write_run_properties(&mut xml, &props);

        assert!(xml.starts_with("<w:rPr><w:rFonts"));
        assert!(xml.find("<w:b/>").unwrap() < xml.find("<w:i/>").unwrap());
        assert!(xml.find("<w:color").unwrap() < xml.find("<w:sz ").unwrap());
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
    }

    #[test]
    fn test_code_line_spacing_is_preserved() {
        let xml = render(&Paragraph::text("│   ├── bronze/              # DDL"), None, None);
        assert!(xml.contains(r#"<w:t xml:space="preserve">│   ├── bronze/"#));
    }

    #[test]
    fn test_empty_paragraph() {
        let xml = render(&Paragraph::text(""), None, None);
        assert_eq!(xml, "<w:p><w:r></w:r></w:p>");
    }

    #[test]
    fn test_field_run() {
        let para = Paragraph::new()
            .run(TextRun::new("Página "))
            .run(TextRun::field(PageField::CurrentPage));
        let xml = render(&para, None, None);
        assert!(xml.contains(r#"<w:t xml:space="preserve">Página </w:t>"#));
        assert!(xml.contains("> PAGE </w:instrText>"));
    }

    #[test]
    fn test_page_break() {
        let mut xml = String::new();
        ParagraphWriter::write_page_break(&mut xml);
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
    }
}
