//! Content blocks - the body-level units of a document, in rendering order

use crate::{ListItem, Paragraph, StyleId, StyleSheet, TableBlock};
use serde::{Deserialize, Serialize};

/// Heading depth, limited to the three levels the style sheet defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// 1-based level number
    pub fn number(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    pub fn from_number(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Paragraph style used to render headings of this level
    pub fn style_id(&self) -> StyleId {
        match self {
            HeadingLevel::H1 => StyleId::new(StyleSheet::HEADING_1),
            HeadingLevel::H2 => StyleId::new(StyleSheet::HEADING_2),
            HeadingLevel::H3 => StyleId::new(StyleSheet::HEADING_3),
        }
    }

    /// Heading level rendered by a paragraph style, if any
    pub fn from_style(style: &str) -> Option<Self> {
        match style {
            StyleSheet::HEADING_1 => Some(HeadingLevel::H1),
            StyleSheet::HEADING_2 => Some(HeadingLevel::H2),
            StyleSheet::HEADING_3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

/// Table of contents placeholder; the reader fills it from heading styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOfContents {
    /// Title paragraph shown above the entries
    pub title: String,
    /// Entries link to their headings
    pub hyperlink: bool,
    /// Inclusive range of heading levels collected
    pub heading_range: (u8, u8),
}

impl TableOfContents {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hyperlink: true,
            heading_range: (1, 3),
        }
    }

    pub fn with_heading_range(mut self, from: u8, to: u8) -> Self {
        self.heading_range = (from, to);
        self
    }

    /// Field instruction, e.g. `TOC \o "1-3" \h \z \u`
    pub fn instruction(&self) -> String {
        let mut instr = format!(r#"TOC \o "{}-{}""#, self.heading_range.0, self.heading_range.1);
        if self.hyperlink {
            instr.push_str(r" \h");
        }
        instr.push_str(r" \z \u");
        instr
    }
}

/// One body-level unit of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentBlock {
    Title(Paragraph),
    Heading {
        level: HeadingLevel,
        paragraph: Paragraph,
    },
    Paragraph(Paragraph),
    ListItem(ListItem),
    Table(TableBlock),
    PageBreak,
    TableOfContents(TableOfContents),
}

impl ContentBlock {
    pub fn title(paragraph: Paragraph) -> Self {
        ContentBlock::Title(paragraph)
    }

    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level,
            paragraph: Paragraph::text(text),
        }
    }

    /// Effective paragraph style of paragraph-like blocks
    pub fn style_id(&self) -> Option<StyleId> {
        match self {
            ContentBlock::Title(p) => Some(p.style_id.clone().unwrap_or_else(|| StyleId::new(StyleSheet::TITLE))),
            ContentBlock::Heading { level, .. } => Some(level.style_id()),
            ContentBlock::Paragraph(p) => p.style_id.clone(),
            ContentBlock::ListItem(item) => item.paragraph.style_id.clone(),
            ContentBlock::Table(_) | ContentBlock::PageBreak | ContentBlock::TableOfContents(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_round_trip() {
        for n in 1..=3 {
            assert_eq!(HeadingLevel::from_number(n).unwrap().number(), n);
        }
        assert!(HeadingLevel::from_number(4).is_none());
        assert_eq!(HeadingLevel::H2.style_id().as_str(), "Heading2");
        assert_eq!(HeadingLevel::from_style("Heading3"), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_style("Title"), None);
    }

    #[test]
    fn test_toc_instruction() {
        let toc = TableOfContents::new("Sumário");
        assert_eq!(toc.instruction(), r#"TOC \o "1-3" \h \z \u"#);

        let mut plain = TableOfContents::new("Index").with_heading_range(1, 2);
        plain.hyperlink = false;
        assert_eq!(plain.instruction(), r#"TOC \o "1-2" \z \u"#);
    }

    #[test]
    fn test_title_defaults_to_title_style() {
        let block = ContentBlock::title(Paragraph::text("Data Warehouse"));
        assert_eq!(block.style_id().unwrap().as_str(), "Title");
        assert!(ContentBlock::PageBreak.style_id().is_none());
    }
}
