//! Structural read-back of document.xml
//!
//! Recovers the `DocumentOutline` of a serialized package from paragraph
//! styles, numbering references, page breaks, tables and the table of
//! contents control. Only body-level content is counted; paragraphs inside
//! table cells are ignored.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::reader::XmlParser;
use doc_model::{DocumentOutline, HeadingLevel, StyleSheet};
use quick_xml::events::{BytesStart, Event};

/// Per-paragraph state collected between `<w:p>` and `</w:p>`
#[derive(Debug, Default)]
struct ParagraphState {
    style: Option<String>,
    numbered: bool,
    page_break: bool,
}

/// Outline of a document.xml body
pub fn outline_from_document_xml(content: &str) -> DocxResult<DocumentOutline> {
    let mut outline = DocumentOutline::default();
    let mut reader = XmlParser::from_string(content);
    let mut buf = Vec::new();

    let mut table_depth = 0usize;
    let mut paragraph: Option<ParagraphState> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let name = name.as_ref();
                if XmlParser::matches_element(name, "tbl") {
                    if table_depth == 0 {
                        outline.tables += 1;
                    }
                    table_depth += 1;
                } else if XmlParser::matches_element(name, "tr") {
                    if table_depth == 1 {
                        outline.table_rows += 1;
                    }
                } else if XmlParser::matches_element(name, "p") {
                    if table_depth == 0 {
                        paragraph = Some(ParagraphState::default());
                    }
                } else {
                    inspect_element(e, table_depth, &mut paragraph, &mut outline);
                }
            }
            Ok(Event::Empty(ref e)) => {
                inspect_element(e, table_depth, &mut paragraph, &mut outline);
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let name = name.as_ref();
                if XmlParser::matches_element(name, "tbl") {
                    table_depth = table_depth.checked_sub(1).ok_or_else(|| {
                        DocxError::InvalidStructure("unbalanced table element".into())
                    })?;
                } else if XmlParser::matches_element(name, "p") {
                    if let Some(state) = paragraph.take() {
                        record_paragraph(&state, &mut outline);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::from(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(outline)
}

/// Handle elements that matter inside a body paragraph or at body level
fn inspect_element(
    e: &BytesStart,
    table_depth: usize,
    paragraph: &mut Option<ParagraphState>,
    outline: &mut DocumentOutline,
) {
    if table_depth > 0 {
        return;
    }
    let name = e.name();
    let name = name.as_ref();

    if XmlParser::matches_element(name, "docPartGallery") {
        if XmlParser::get_w_attribute(e, "val").as_deref() == Some("Table of Contents") {
            outline.tables_of_contents += 1;
        }
        return;
    }

    let Some(state) = paragraph.as_mut() else {
        return;
    };

    if XmlParser::matches_element(name, "pStyle") {
        state.style = XmlParser::get_w_attribute(e, "val");
    } else if XmlParser::matches_element(name, "numPr") {
        state.numbered = true;
    } else if XmlParser::matches_element(name, "br") {
        if XmlParser::get_w_attribute(e, "type").as_deref() == Some("page") {
            state.page_break = true;
        }
    }
}

fn record_paragraph(state: &ParagraphState, outline: &mut DocumentOutline) {
    if let Some(style) = state.style.as_deref() {
        if style == StyleSheet::TITLE {
            outline.titles += 1;
        } else if let Some(level) = HeadingLevel::from_style(style) {
            outline.record_heading(level.number());
        }
    }
    if state.numbered {
        outline.list_items += 1;
    }
    if state.page_break {
        outline.page_breaks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_body_structure() {
        let xml = r#"<w:document xmlns:w="w"><w:body>
            <w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>T</w:t></w:r></w:p>
            <w:p><w:r><w:br w:type="page"/></w:r></w:p>
            <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr></w:p>
            <w:p><w:pPr><w:pStyle w:val="Heading3"/></w:pPr></w:p>
            <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr></w:p>
            <w:tbl><w:tr><w:tc><w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr></w:p></w:tc></w:tr><w:tr/></w:tbl>
        </w:body></w:document>"#;

        let outline = outline_from_document_xml(xml).unwrap();
        assert_eq!(outline.titles, 1);
        assert_eq!(outline.page_breaks, 1);
        assert_eq!(outline.headings, [1, 0, 1]);
        assert_eq!(outline.sections, 1);
        assert_eq!(outline.list_items, 1);
        assert_eq!(outline.tables, 1);
        // The empty <w:tr/> is not a Start event
        assert_eq!(outline.table_rows, 1);
    }

    #[test]
    fn test_table_of_contents_control() {
        let xml = r#"<w:body xmlns:w="w"><w:sdt><w:sdtPr><w:docPartObj>
            <w:docPartGallery w:val="Table of Contents"/></w:docPartObj></w:sdtPr>
            <w:sdtContent><w:p><w:pPr><w:pStyle w:val="TOCHeading"/></w:pPr></w:p></w:sdtContent></w:sdt></w:body>"#;

        let outline = outline_from_document_xml(xml).unwrap();
        assert_eq!(outline.tables_of_contents, 1);
        assert_eq!(outline.total_headings(), 0);
    }

    #[test]
    fn test_nested_tables_count_once() {
        let xml = r#"<w:body xmlns:w="w"><w:tbl><w:tr><w:tc>
            <w:tbl><w:tr><w:tc><w:p/></w:tc></w:tr></w:tbl><w:p/>
        </w:tc></w:tr></w:tbl></w:body>"#;

        let outline = outline_from_document_xml(xml).unwrap();
        assert_eq!(outline.tables, 1);
        assert_eq!(outline.table_rows, 1);
    }
}
