//! Document root - the content tree plus everything needed to render it

use crate::{
    ContentBlock, DocModelError, DocumentOutline, HeadingLevel, NumberingRegistry, Paragraph,
    Result, SectionProperties, StyleSheet, TableBlock,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document metadata written to the package core properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    /// Fixed creation time so regenerated files are identical
    pub created: Option<DateTime<Utc>>,
}

/// A complete document: ordered blocks, styles, numbering and page setup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub styles: StyleSheet,
    pub numbering: NumberingRegistry,
    pub section: SectionProperties,
    blocks: Vec<ContentBlock>,
}

impl Document {
    pub fn new(styles: StyleSheet, numbering: NumberingRegistry, section: SectionProperties) -> Self {
        Self {
            metadata: DocumentMetadata::default(),
            styles,
            numbering,
            section,
            blocks: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Append a block at the end of the body
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = ContentBlock>) {
        self.blocks.extend(blocks);
    }

    /// Body blocks in rendering order
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Structural summary of the body
    ///
    /// Titles and headings are recognized by the effective paragraph style
    /// of each block, the same key a serialized package exposes.
    pub fn outline(&self) -> DocumentOutline {
        let mut outline = DocumentOutline::default();
        for block in &self.blocks {
            if let Some(style) = block.style_id() {
                if style.as_str() == StyleSheet::TITLE {
                    outline.titles += 1;
                } else if let Some(level) = HeadingLevel::from_style(style.as_str()) {
                    outline.record_heading(level.number());
                }
            }
            match block {
                ContentBlock::ListItem(_) => outline.list_items += 1,
                ContentBlock::Table(table) => {
                    outline.tables += 1;
                    outline.table_rows += table.row_count();
                }
                ContentBlock::PageBreak => outline.page_breaks += 1,
                ContentBlock::TableOfContents(_) => outline.tables_of_contents += 1,
                ContentBlock::Title(_) | ContentBlock::Heading { .. } | ContentBlock::Paragraph(_) => {}
            }
        }
        outline
    }

    /// Check the structural constraints the DOCX format relies on.
    ///
    /// Every style reference must resolve, every list item must point at a
    /// defined numbering level, and every table must be non-empty with one
    /// cell per grid column in each row. Reports the first violation.
    pub fn validate(&self) -> Result<()> {
        for (index, block) in self.blocks.iter().enumerate() {
            if let Some(style) = block.style_id() {
                if !self.styles.contains(&style) {
                    return Err(DocModelError::UnknownStyle {
                        block: index,
                        style: style.to_string(),
                    });
                }
            }

            match block {
                ContentBlock::ListItem(item) => {
                    let defined = self
                        .numbering
                        .get(item.style)
                        .and_then(|def| def.level(item.level))
                        .is_some();
                    if !defined {
                        return Err(DocModelError::UnknownNumbering {
                            block: index,
                            reference: item.style.reference().to_string(),
                            level: item.level,
                        });
                    }
                }
                ContentBlock::Table(table) => {
                    self.validate_table(index, table)?;
                }
                _ => {}
            }
        }

        for paragraph in self.header_footer_paragraphs() {
            if let Some(style) = &paragraph.style_id {
                if !self.styles.contains(style) {
                    return Err(DocModelError::UnknownStyle {
                        block: self.blocks.len(),
                        style: style.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_table(&self, index: usize, table: &TableBlock) -> Result<()> {
        if table.column_count() == 0 || table.row_count() == 0 {
            return Err(DocModelError::EmptyTable { block: index });
        }
        if let Some((row, found)) = table.first_ragged_row() {
            return Err(DocModelError::RaggedTable {
                block: index,
                row,
                expected: table.column_count(),
                found,
            });
        }
        for row in &table.rows {
            for paragraph in row.cells.iter().flat_map(|c| &c.paragraphs) {
                if let Some(style) = &paragraph.style_id {
                    if !self.styles.contains(style) {
                        return Err(DocModelError::UnknownStyle {
                            block: index,
                            style: style.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn header_footer_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.section
            .header
            .iter()
            .chain(self.section.footer.iter())
            .flat_map(|hf| hf.paragraphs.iter())
    }
}
