//! Complex field writer
//!
//! Fields are written as the begin / instruction / separate / result / end
//! run sequence. Word recomputes the result when the field is updated.

use crate::docx::paragraph_writer::ParagraphWriter;
use crate::docx::xml::escape_xml;
use doc_model::{CharacterProperties, PageField};

/// A field ready to be written
#[derive(Debug, Clone)]
pub struct FieldSpec<'a> {
    /// Instruction text, e.g. `PAGE` or `TOC \o "1-3"`
    pub instruction: String,
    /// Cached result shown until the field is updated
    pub cached_text: Option<&'a str>,
    /// Ask Word to refresh the field when the document opens
    pub dirty: bool,
}

impl<'a> FieldSpec<'a> {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            cached_text: None,
            dirty: false,
        }
    }

    /// Field for a page number run
    pub fn page(field: PageField) -> Self {
        let cached = match field {
            PageField::CurrentPage | PageField::TotalPages => "1",
        };
        Self::new(field.instruction()).cached(cached)
    }

    pub fn cached(mut self, text: &'a str) -> Self {
        self.cached_text = Some(text);
        self
    }

    pub fn dirty(mut self) -> Self {
        self.dirty = true;
        self
    }
}

/// Writer for complex fields
pub struct FieldWriter;

impl FieldWriter {
    /// Write a field; every run of the sequence carries `formatting`
    pub fn write_field(xml: &mut String, field: &FieldSpec<'_>, formatting: &CharacterProperties) {
        let dirty = if field.dirty { r#" w:dirty="true""# } else { "" };

        Self::open_run(xml, formatting);
        xml.push_str(&format!(r#"<w:fldChar w:fldCharType="begin"{}/>"#, dirty));
        xml.push_str("</w:r>");

        Self::open_run(xml, formatting);
        xml.push_str(r#"<w:instrText xml:space="preserve"> "#);
        xml.push_str(&escape_xml(&field.instruction));
        xml.push_str(" </w:instrText>");
        xml.push_str("</w:r>");

        Self::open_run(xml, formatting);
        xml.push_str(r#"<w:fldChar w:fldCharType="separate"/>"#);
        xml.push_str("</w:r>");

        if let Some(text) = field.cached_text {
            Self::open_run(xml, formatting);
            xml.push_str("<w:t>");
            xml.push_str(&escape_xml(text));
            xml.push_str("</w:t>");
            xml.push_str("</w:r>");
        }

        Self::open_run(xml, formatting);
        xml.push_str(r#"<w:fldChar w:fldCharType="end"/>"#);
        xml.push_str("</w:r>");
    }

    fn open_run(xml: &mut String, formatting: &CharacterProperties) {
        xml.push_str("<w:r>");
        ParagraphWriter::write_run_properties(xml, formatting);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_field_sequence() {
        let mut xml = String::new();
        FieldWriter::write_field(&mut xml, &FieldSpec::page(PageField::CurrentPage), &CharacterProperties::default());

        let begin = xml.find(r#"w:fldCharType="begin""#).unwrap();
        let instr = xml.find("> PAGE </w:instrText>").unwrap();
        let separate = xml.find(r#"w:fldCharType="separate""#).unwrap();
        let end = xml.find(r#"w:fldCharType="end""#).unwrap();
        assert!(begin < instr && instr < separate && separate < end);
        assert_eq!(xml.matches("<w:r>").count(), 5);
    }

    #[test]
    fn test_formatting_on_every_run() {
        let mut xml = String::new();
        let formatting = CharacterProperties::new().size(10.0);
        FieldWriter::write_field(&mut xml, &FieldSpec::page(PageField::TotalPages), &formatting);

        assert!(xml.contains("NUMPAGES"));
        assert_eq!(xml.matches(r#"<w:sz w:val="20"/>"#).count(), 5);
    }

    #[test]
    fn test_dirty_field_escapes_instruction() {
        let mut xml = String::new();
        let field = FieldSpec::new(r#"TOC \o "1-3" \h"#).dirty();
        FieldWriter::write_field(&mut xml, &field, &CharacterProperties::default());

        assert!(xml.contains(r#"w:fldCharType="begin" w:dirty="true""#));
        assert!(xml.contains(r#"TOC \o &quot;1-3&quot; \h"#));
        // No cached result: begin, instr, separate, end
        assert_eq!(xml.matches("<w:r>").count(), 4);
    }
}
