//! Numbering.xml writer
//!
//! Each numbering definition becomes one `w:abstractNum`, identified by its
//! position in the registry, and one `w:num` instance allocated on first
//! use. Every list item of a definition shares that instance, so numbered
//! items count on across the whole document.

use crate::docx::namespaces;
use crate::docx::paragraph_writer::NumberingRef;
use crate::docx::xml::{escape_xml, twips, DECLARATION};
use doc_model::{Alignment, ContentBlock, Document, ListLevel, NumberingDefinition};

/// A `w:num` instance
#[derive(Debug, Clone, PartialEq)]
pub struct NumInstance {
    pub num_id: u32,
    pub abstract_id: usize,
}

/// Assignment of `w:num` instances to the list items of a document
#[derive(Debug, Clone, Default)]
pub struct NumberingPlan {
    instances: Vec<NumInstance>,
    /// Indexed by body block position
    references: Vec<Option<NumberingRef>>,
}

impl NumberingPlan {
    /// Walk the body and allocate instances in order of first use
    pub fn build(doc: &Document) -> Self {
        let mut plan = Self::default();

        for block in doc.blocks() {
            let reference = match block {
                ContentBlock::ListItem(item) => {
                    doc.numbering.index_of(item.style).map(|abstract_id| NumberingRef {
                        num_id: plan.instance_for(abstract_id),
                        level: item.level,
                    })
                }
                _ => None,
            };
            plan.references.push(reference);
        }

        plan
    }

    fn instance_for(&mut self, abstract_id: usize) -> u32 {
        if let Some(instance) = self.instances.iter().find(|i| i.abstract_id == abstract_id) {
            return instance.num_id;
        }
        let num_id = self.instances.len() as u32 + 1;
        self.instances.push(NumInstance {
            num_id,
            abstract_id,
        });
        num_id
    }

    /// Numbering reference of the block at `index`
    pub fn reference(&self, index: usize) -> Option<NumberingRef> {
        self.references.get(index).copied().flatten()
    }

    pub fn instances(&self) -> &[NumInstance] {
        &self.instances
    }
}

/// Writer for numbering.xml
pub struct NumberingWriter<'a> {
    plan: &'a NumberingPlan,
}

impl<'a> NumberingWriter<'a> {
    pub fn new(plan: &'a NumberingPlan) -> Self {
        Self { plan }
    }

    /// Generate numbering.xml content
    pub fn write(&self, doc: &Document) -> String {
        let mut xml = String::new();
        xml.push_str(DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<w:numbering xmlns:w="{}">"#, namespaces::W));

        let definitions: Vec<&NumberingDefinition> = doc.numbering.definitions().collect();

        for (abstract_id, definition) in definitions.iter().enumerate() {
            self.write_abstract_num(&mut xml, abstract_id, definition);
        }

        for instance in self.plan.instances() {
            self.write_num(&mut xml, instance);
        }

        xml.push_str("</w:numbering>");
        xml
    }

    fn write_abstract_num(&self, xml: &mut String, abstract_id: usize, definition: &NumberingDefinition) {
        xml.push_str(&format!(r#"<w:abstractNum w:abstractNumId="{}">"#, abstract_id));

        let multi_level = if definition.levels.len() > 1 { "hybridMultilevel" } else { "singleLevel" };
        xml.push_str(&format!(r#"<w:multiLevelType w:val="{}"/>"#, multi_level));

        for level in &definition.levels {
            self.write_level(xml, level);
        }

        xml.push_str("</w:abstractNum>");
    }

    fn write_level(&self, xml: &mut String, level: &ListLevel) {
        xml.push_str(&format!(r#"<w:lvl w:ilvl="{}">"#, level.level));
        xml.push_str(&format!(r#"<w:start w:val="{}"/>"#, level.start));
        xml.push_str(&format!(r#"<w:numFmt w:val="{}"/>"#, level.format.ooxml_name()));
        xml.push_str(&format!(r#"<w:lvlText w:val="{}"/>"#, escape_xml(&level.text)));

        let jc = match level.alignment {
            Alignment::Left | Alignment::Justify => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        xml.push_str(&format!(r#"<w:lvlJc w:val="{}"/>"#, jc));

        xml.push_str(&format!(
            r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
            twips(level.indent),
            twips(level.hanging)
        ));
        xml.push_str("</w:lvl>");
    }

    fn write_num(&self, xml: &mut String, instance: &NumInstance) {
        xml.push_str(&format!(
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            instance.num_id, instance.abstract_id
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{
        ListItem, ListStyle, NumberFormat, NumberingRegistry, Paragraph, SectionProperties,
        StyleSheet,
    };

    fn registry() -> NumberingRegistry {
        NumberingRegistry::new()
            .with_definition(NumberingDefinition::new(
                ListStyle::Bullet,
                vec![ListLevel::bullet(0, "•", 36.0, 18.0)],
            ))
            .with_definition(NumberingDefinition::new(
                ListStyle::Numbered,
                vec![ListLevel::numbered(0, NumberFormat::Decimal, "%1.", 36.0, 18.0)],
            ))
    }

    fn item(style: ListStyle) -> ContentBlock {
        ContentBlock::ListItem(ListItem::new(style, Paragraph::text("item")))
    }

    fn document(blocks: Vec<ContentBlock>) -> Document {
        let mut doc = Document::new(StyleSheet::default(), registry(), SectionProperties::default());
        doc.extend(blocks);
        doc
    }

    #[test]
    fn test_bullets_share_one_instance() {
        let doc = document(vec![
            item(ListStyle::Bullet),
            ContentBlock::heading(doc_model::HeadingLevel::H2, "x"),
            item(ListStyle::Bullet),
        ]);
        let plan = NumberingPlan::build(&doc);

        assert_eq!(plan.instances().len(), 1);
        assert_eq!(plan.reference(0), plan.reference(2));
        assert_eq!(plan.reference(1), None);
    }

    #[test]
    fn test_numbered_items_count_on_across_sections() {
        let doc = document(vec![
            item(ListStyle::Numbered),
            item(ListStyle::Numbered),
            ContentBlock::heading(doc_model::HeadingLevel::H2, "x"),
            item(ListStyle::Bullet),
            item(ListStyle::Numbered),
        ]);
        let plan = NumberingPlan::build(&doc);

        assert_eq!(plan.reference(0), plan.reference(1));
        assert_eq!(plan.reference(1), plan.reference(4));
        assert_ne!(plan.reference(3), plan.reference(4));
        assert_eq!(plan.instances().len(), 2);

        let xml = NumberingWriter::new(&plan).write(&doc);
        assert_eq!(xml.matches("<w:num ").count(), 2);
        assert!(!xml.contains("w:startOverride"));
    }

    #[test]
    fn test_numbering_xml() {
        let doc = document(vec![item(ListStyle::Bullet), item(ListStyle::Numbered)]);
        let plan = NumberingPlan::build(&doc);
        let xml = NumberingWriter::new(&plan).write(&doc);

        assert!(xml.contains(r#"<w:abstractNum w:abstractNumId="0">"#));
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/><w:lvlText w:val="•"/>"#));
        assert!(xml.contains(r#"<w:lvlText w:val="%1."/>"#));
        assert!(xml.contains(r#"<w:ind w:left="720" w:hanging="360"/>"#));
        assert!(xml.contains(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#));
        assert!(xml.contains(r#"<w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>"#));
        // Abstract definitions precede instances
        assert!(xml.rfind("<w:abstractNum ").unwrap() < xml.find("<w:num ").unwrap());
    }
}
