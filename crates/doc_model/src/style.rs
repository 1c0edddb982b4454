//! Style system - named style definitions and the document style sheet
//!
//! Styles are referenced by ID from paragraphs. The sheet is built once,
//! alongside the content, and never changes afterwards.

use crate::Alignment;
use serde::{Deserialize, Serialize};

// =============================================================================
// Style Identifier
// =============================================================================

/// Unique identifier for a style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StyleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Character Properties
// =============================================================================

/// Character formatting properties
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CharacterProperties {
    /// Font family name
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size: Option<f32>,
    /// Bold formatting
    pub bold: Option<bool>,
    /// Italic formatting
    pub italic: Option<bool>,
    /// Underline formatting
    pub underline: Option<bool>,
    /// Text color as hex RGB ("1F4E78")
    pub color: Option<String>,
}

impl CharacterProperties {
    /// Create new empty character properties
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    /// Check if all properties are None
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.color.is_none()
    }
}

// =============================================================================
// Paragraph Properties
// =============================================================================

/// Paragraph formatting properties. Lengths are in points.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParagraphProperties {
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Left indent in points
    pub indent_left: Option<f32>,
    /// Hanging indent in points
    pub indent_hanging: Option<f32>,
    /// Space before paragraph in points
    pub space_before: Option<f32>,
    /// Space after paragraph in points
    pub space_after: Option<f32>,
    /// Outline level (0-based) used by the table of contents
    pub outline_level: Option<u8>,
}

impl ParagraphProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn spacing(mut self, before: Option<f32>, after: Option<f32>) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn indent(mut self, left: f32) -> Self {
        self.indent_left = Some(left);
        self
    }

    pub fn outline(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }

    /// Check if all properties are None
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.indent_left.is_none()
            && self.indent_hanging.is_none()
            && self.space_before.is_none()
            && self.space_after.is_none()
            && self.outline_level.is_none()
    }
}

// =============================================================================
// Style Definition
// =============================================================================

/// The type of style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleType {
    /// Paragraph style - applied to entire paragraphs
    Paragraph,
    /// Character style - applied to text runs
    Character,
}

/// A named style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: StyleId,
    /// Display name ("Heading 1")
    pub name: String,
    pub style_type: StyleType,
    pub based_on: Option<StyleId>,
    pub next_style: Option<StyleId>,
    /// Show in the quick style gallery
    pub quick_format: bool,
    pub paragraph_props: ParagraphProperties,
    pub character_props: CharacterProperties,
}

impl Style {
    /// A paragraph style based on `Normal`
    pub fn paragraph(id: impl Into<StyleId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            style_type: StyleType::Paragraph,
            based_on: Some(StyleId::new(StyleSheet::NORMAL)),
            next_style: None,
            quick_format: false,
            paragraph_props: ParagraphProperties::default(),
            character_props: CharacterProperties::default(),
        }
    }

    pub fn next(mut self, id: impl Into<StyleId>) -> Self {
        self.next_style = Some(id.into());
        self
    }

    pub fn quick_format(mut self) -> Self {
        self.quick_format = true;
        self
    }

    pub fn with_run(mut self, props: CharacterProperties) -> Self {
        self.character_props = props;
        self
    }

    pub fn with_paragraph(mut self, props: ParagraphProperties) -> Self {
        self.paragraph_props = props;
        self
    }
}

// =============================================================================
// Style Sheet
// =============================================================================

/// Document-wide style definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Run properties every paragraph starts from
    pub default_run: CharacterProperties,
    styles: Vec<Style>,
}

impl StyleSheet {
    pub const NORMAL: &'static str = "Normal";
    pub const TITLE: &'static str = "Title";
    pub const HEADING_1: &'static str = "Heading1";
    pub const HEADING_2: &'static str = "Heading2";
    pub const HEADING_3: &'static str = "Heading3";
    pub const CODE_BLOCK: &'static str = "CodeBlock";
    pub const TOC_HEADING: &'static str = "TOCHeading";

    /// Create a sheet with the given default run properties and only `Normal` defined
    pub fn new(default_run: CharacterProperties) -> Self {
        let normal = Style {
            id: StyleId::new(Self::NORMAL),
            name: Self::NORMAL.to_string(),
            style_type: StyleType::Paragraph,
            based_on: None,
            next_style: None,
            quick_format: true,
            paragraph_props: ParagraphProperties::default(),
            character_props: CharacterProperties::default(),
        };
        Self {
            default_run,
            styles: vec![normal],
        }
    }

    /// Add a style; a style with the same ID replaces the earlier one
    pub fn with_style(mut self, style: Style) -> Self {
        if let Some(existing) = self.styles.iter_mut().find(|s| s.id == style.id) {
            *existing = style;
        } else {
            self.styles.push(style);
        }
        self
    }

    pub fn get(&self, id: &StyleId) -> Option<&Style> {
        self.styles.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StyleId) -> bool {
        self.get(id).is_some()
    }

    /// All styles in definition order
    pub fn styles(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new(CharacterProperties::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_sheet_replaces_same_id() {
        let sheet = StyleSheet::default()
            .with_style(Style::paragraph("Title", "Title"))
            .with_style(Style::paragraph("Title", "Document Title"));

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(&"Title".into()).unwrap().name, "Document Title");
    }

    #[test]
    fn test_normal_always_defined() {
        let sheet = StyleSheet::default();
        assert!(sheet.contains(&StyleId::new(StyleSheet::NORMAL)));
        assert!(!sheet.contains(&StyleId::new("Missing")));
    }
}
