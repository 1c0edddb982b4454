//! Package metadata and document settings parts

use crate::docx::namespaces;
use crate::docx::xml::{escape_xml, DECLARATION};
use chrono::SecondsFormat;
use doc_model::DocumentMetadata;

const APPLICATION: &str = concat!("store ", env!("CARGO_PKG_VERSION"));

/// Default tab stop, half an inch in twips
const DEFAULT_TAB_STOP: u32 = 720;

/// Generate docProps/core.xml
///
/// Timestamps are written only when the metadata carries one, so the part
/// never depends on the clock.
pub fn write_core_properties(metadata: &DocumentMetadata) -> String {
    let mut xml = String::new();
    xml.push_str(DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
        namespaces::CP,
        namespaces::DC,
        namespaces::DCTERMS,
        namespaces::XSI
    ));

    if let Some(ref title) = metadata.title {
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    if let Some(ref subject) = metadata.subject {
        xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape_xml(subject)));
    }
    if let Some(ref author) = metadata.author {
        let author = escape_xml(author);
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", author));
        xml.push_str(&format!("<cp:lastModifiedBy>{}</cp:lastModifiedBy>", author));
    }
    if let Some(created) = metadata.created {
        let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
        xml.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            stamp
        ));
        xml.push_str(&format!(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            stamp
        ));
    }

    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate docProps/app.xml
pub fn write_app_properties() -> String {
    let mut xml = String::new();
    xml.push_str(DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<Properties xmlns="{}">"#, namespaces::EP));
    xml.push_str(&format!("<Application>{}</Application>", APPLICATION));
    xml.push_str("<DocSecurity>0</DocSecurity>");
    xml.push_str("</Properties>");
    xml
}

/// Generate word/settings.xml
///
/// `update_fields` asks Word to refresh fields such as the table of
/// contents when the document is opened.
pub fn write_settings(update_fields: bool) -> String {
    let mut xml = String::new();
    xml.push_str(DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:settings xmlns:w="{}">"#, namespaces::W));
    xml.push_str(&format!(r#"<w:defaultTabStop w:val="{}"/>"#, DEFAULT_TAB_STOP));
    if update_fields {
        xml.push_str(r#"<w:updateFields w:val="true"/>"#);
    }
    xml.push_str("<w:compat>");
    xml.push_str(r#"<w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>"#);
    xml.push_str("</w:compat>");
    xml.push_str("</w:settings>");
    xml
}
