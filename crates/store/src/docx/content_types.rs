//! [Content_Types].xml parsing and generation
//!
//! This file defines the content types for all parts in the DOCX package.
//! Entries are kept sorted so the generated XML is stable.

use crate::docx::content_type_values;
use crate::docx::error::{DocxError, DocxResult};
use crate::docx::reader::XmlParser;
use quick_xml::events::Event;
use std::collections::BTreeMap;

/// Represents the content types in a DOCX package
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypes {
    /// Default content types by extension (e.g., "xml" -> "application/xml")
    pub defaults: BTreeMap<String, String>,
    /// Override content types by part name (e.g., "/word/document.xml" -> "...")
    pub overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Create a new ContentTypes with default DOCX settings
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.defaults.insert("rels".to_string(), content_type_values::RELATIONSHIPS.to_string());
        ct.defaults.insert("xml".to_string(), content_type_values::XML.to_string());
        ct
    }

    /// Parse [Content_Types].xml from its content
    pub fn parse(content: &str) -> DocxResult<Self> {
        let mut result = Self::default();
        let mut reader = XmlParser::from_string(content);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    if XmlParser::matches_element(name.as_ref(), "Default") {
                        if let (Some(ext), Some(ct)) = (
                            XmlParser::get_attribute(e, b"Extension"),
                            XmlParser::get_attribute(e, b"ContentType"),
                        ) {
                            result.defaults.insert(ext, ct);
                        }
                    } else if XmlParser::matches_element(name.as_ref(), "Override") {
                        if let (Some(part), Some(ct)) = (
                            XmlParser::get_attribute(e, b"PartName"),
                            XmlParser::get_attribute(e, b"ContentType"),
                        ) {
                            result.overrides.insert(part, ct);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::from(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(result)
    }

    /// Get the content type for a given path
    pub fn get_content_type(&self, path: &str) -> Option<&String> {
        if let Some(ct) = self.overrides.get(&normalize(path)) {
            return Some(ct);
        }

        path.rsplit('.').next().and_then(|ext| self.defaults.get(ext))
    }

    /// Add an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        self.overrides.insert(normalize(part_name), content_type.to_string());
    }

    /// Generate XML content for [Content_Types].xml
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(crate::docx::xml::DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, crate::docx::namespaces::CT));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, ct
            ));
        }

        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, ct
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

fn normalize(part_name: &str) -> String {
    if part_name.starts_with('/') {
        part_name.to_string()
    } else {
        format!("/{}", part_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_creation() {
        let ct = ContentTypes::new();
        assert!(ct.defaults.contains_key("rels"));
        assert!(ct.defaults.contains_key("xml"));
    }

    #[test]
    fn test_content_types_parsing() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

        let ct = ContentTypes::parse(xml).unwrap();
        assert_eq!(ct.defaults.get("xml"), Some(&"application/xml".to_string()));
        assert!(ct.overrides.contains_key("/word/document.xml"));
    }

    #[test]
    fn test_get_content_type() {
        let mut ct = ContentTypes::new();
        ct.add_override("word/header1.xml", content_type_values::HEADER);

        assert_eq!(
            ct.get_content_type("/word/header1.xml").map(String::as_str),
            Some(content_type_values::HEADER)
        );
        assert_eq!(
            ct.get_content_type("word/styles.xml").map(String::as_str),
            Some(content_type_values::XML)
        );
    }

    #[test]
    fn test_to_xml_roundtrip_is_stable() {
        let mut original = ContentTypes::new();
        original.add_override("/word/styles.xml", content_type_values::STYLES);
        original.add_override("/word/document.xml", content_type_values::DOCUMENT);

        let xml = original.to_xml();
        assert_eq!(ContentTypes::parse(&xml).unwrap(), original);
        // Sorted output: document.xml before styles.xml
        assert!(xml.find("/word/document.xml").unwrap() < xml.find("/word/styles.xml").unwrap());
    }
}
