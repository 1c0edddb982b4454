//! List and numbering definitions
//!
//! A numbering definition is a named template (`bullet-list`,
//! `numbered-list-1`) with one entry per indentation level. List items
//! reference a definition by its list style and pick a level.

use crate::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

// =============================================================================
// Number Format
// =============================================================================

/// Number format types for list items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NumberFormat {
    /// Decimal numbers: 1, 2, 3, ...
    #[default]
    Decimal,
    /// Bullet character (uses the level text)
    Bullet,
}

impl NumberFormat {
    /// Check if this format is a bullet (non-numbering) format
    pub fn is_bullet(&self) -> bool {
        matches!(self, NumberFormat::Bullet)
    }

    /// Format a number according to this format
    pub fn format(&self, value: u32) -> String {
        match self {
            NumberFormat::Decimal => value.to_string(),
            NumberFormat::Bullet => String::new(),
        }
    }

    /// OOXML `w:numFmt` value
    pub fn ooxml_name(&self) -> &'static str {
        match self {
            NumberFormat::Decimal => "decimal",
            NumberFormat::Bullet => "bullet",
        }
    }
}

// =============================================================================
// Definitions
// =============================================================================

/// One indentation level of a numbering definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListLevel {
    /// Level index (0-8)
    pub level: u8,
    pub format: NumberFormat,
    /// Level text: the bullet glyph or a pattern such as "%1."
    pub text: String,
    pub alignment: Alignment,
    /// Left indent in points
    pub indent: f32,
    /// Hanging indent in points
    pub hanging: f32,
    /// Start value for numbered formats
    pub start: u32,
}

impl ListLevel {
    pub fn bullet(level: u8, glyph: impl Into<String>, indent: f32, hanging: f32) -> Self {
        Self {
            level,
            format: NumberFormat::Bullet,
            text: glyph.into(),
            alignment: Alignment::Left,
            indent,
            hanging,
            start: 1,
        }
    }

    pub fn numbered(level: u8, format: NumberFormat, pattern: impl Into<String>, indent: f32, hanging: f32) -> Self {
        Self {
            level,
            format,
            text: pattern.into(),
            alignment: Alignment::Left,
            indent,
            hanging,
            start: 1,
        }
    }

    /// Render the marker for the n-th item (1-based)
    pub fn marker(&self, value: u32) -> String {
        if self.format.is_bullet() {
            self.text.clone()
        } else {
            self.text.replace(&format!("%{}", self.level + 1), &self.format.format(value))
        }
    }
}

/// The two kinds of lists the content model knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListStyle {
    Bullet,
    Numbered,
}

impl ListStyle {
    /// Reference name of the numbering definition backing this style
    pub fn reference(&self) -> &'static str {
        match self {
            ListStyle::Bullet => "bullet-list",
            ListStyle::Numbered => "numbered-list-1",
        }
    }
}

/// A named numbering template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingDefinition {
    pub style: ListStyle,
    pub levels: Vec<ListLevel>,
}

impl NumberingDefinition {
    pub fn new(style: ListStyle, levels: Vec<ListLevel>) -> Self {
        Self { style, levels }
    }

    pub fn reference(&self) -> &'static str {
        self.style.reference()
    }

    pub fn level(&self, level: u8) -> Option<&ListLevel> {
        self.levels.iter().find(|l| l.level == level)
    }
}

/// All numbering definitions of a document, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingRegistry {
    definitions: Vec<NumberingDefinition>,
}

impl NumberingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, definition: NumberingDefinition) -> Self {
        self.definitions.retain(|d| d.style != definition.style);
        self.definitions.push(definition);
        self
    }

    pub fn get(&self, style: ListStyle) -> Option<&NumberingDefinition> {
        self.definitions.iter().find(|d| d.style == style)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &NumberingDefinition> {
        self.definitions.iter()
    }

    /// Position of a definition, used as its abstract numbering ID
    pub fn index_of(&self, style: ListStyle) -> Option<usize> {
        self.definitions.iter().position(|d| d.style == style)
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// =============================================================================
// List Item
// =============================================================================

/// A paragraph that belongs to a bulleted or numbered list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub style: ListStyle,
    /// Indentation level (0-based)
    pub level: u8,
    pub paragraph: Paragraph,
}

impl ListItem {
    pub fn new(style: ListStyle, paragraph: Paragraph) -> Self {
        Self {
            style,
            level: 0,
            paragraph,
        }
    }

    pub fn at_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker() {
        let decimal = ListLevel::numbered(0, NumberFormat::Decimal, "%1.", 36.0, 18.0);
        assert_eq!(decimal.marker(3), "3.");

        let bullet = ListLevel::bullet(0, "•", 36.0, 18.0);
        assert_eq!(bullet.marker(7), "•");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = NumberingRegistry::new()
            .with_definition(NumberingDefinition::new(
                ListStyle::Bullet,
                vec![ListLevel::bullet(0, "•", 36.0, 18.0)],
            ))
            .with_definition(NumberingDefinition::new(
                ListStyle::Numbered,
                vec![ListLevel::numbered(0, NumberFormat::Decimal, "%1.", 36.0, 18.0)],
            ));

        assert_eq!(registry.index_of(ListStyle::Numbered), Some(1));
        assert!(registry.get(ListStyle::Bullet).unwrap().level(0).is_some());
        assert!(registry.get(ListStyle::Bullet).unwrap().level(1).is_none());
        assert_eq!(ListStyle::Numbered.reference(), "numbered-list-1");
    }
}
