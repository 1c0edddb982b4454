//! Paragraph - a block of runs sharing paragraph formatting

use crate::{CharacterProperties, ParagraphProperties, StyleId, TextRun};
use serde::{Deserialize, Serialize};

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A paragraph containing text runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style ID reference; `None` means `Normal`
    pub style_id: Option<StyleId>,
    /// Direct formatting overrides
    #[serde(default)]
    pub formatting: ParagraphProperties,
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph holding a single plain run
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().run(TextRun::new(text))
    }

    /// A paragraph holding a single formatted run
    pub fn styled_text(text: impl Into<String>, formatting: CharacterProperties) -> Self {
        Self::new().run(TextRun::styled(text, formatting))
    }

    pub fn with_style(mut self, style_id: impl Into<StyleId>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    pub fn with_formatting(mut self, formatting: ParagraphProperties) -> Self {
        self.formatting = formatting;
        self
    }

    /// Append a run
    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Concatenated literal text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().filter_map(TextRun::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageField;

    #[test]
    fn test_plain_text_skips_fields() {
        let para = Paragraph::new()
            .run(TextRun::new("Página "))
            .run(TextRun::field(PageField::CurrentPage))
            .run(TextRun::new(" de "))
            .run(TextRun::field(PageField::TotalPages));

        assert_eq!(para.plain_text(), "Página  de ");
        assert_eq!(para.runs.len(), 4);
    }

    #[test]
    fn test_default_has_no_style() {
        let para = Paragraph::text("O ");
        assert!(para.style_id.is_none());
        assert!(para.formatting.is_empty());
    }
}
