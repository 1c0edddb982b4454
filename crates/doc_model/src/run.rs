//! Text run - an atomic span of text with consistent formatting

use crate::CharacterProperties;
use serde::{Deserialize, Serialize};

/// Page number fields that can stand in for literal text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageField {
    /// Number of the page being rendered (PAGE)
    CurrentPage,
    /// Total number of pages (NUMPAGES)
    TotalPages,
}

impl PageField {
    /// Field instruction code
    pub fn instruction(&self) -> &'static str {
        match self {
            PageField::CurrentPage => "PAGE",
            PageField::TotalPages => "NUMPAGES",
        }
    }
}

/// What a run renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunContent {
    Text(String),
    Field(PageField),
}

/// A text run - contiguous text with consistent formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: RunContent,
    /// Direct formatting on top of the paragraph style
    #[serde(default)]
    pub formatting: CharacterProperties,
}

impl TextRun {
    /// Create a plain run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            formatting: CharacterProperties::default(),
        }
    }

    /// Create a run with direct formatting
    pub fn styled(text: impl Into<String>, formatting: CharacterProperties) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            formatting,
        }
    }

    /// Shorthand for a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, CharacterProperties::new().bold())
    }

    /// A page number field run
    pub fn field(field: PageField) -> Self {
        Self {
            content: RunContent::Field(field),
            formatting: CharacterProperties::default(),
        }
    }

    pub fn with_formatting(mut self, formatting: CharacterProperties) -> Self {
        self.formatting = formatting;
        self
    }

    /// Literal text of this run, `None` for fields
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            RunContent::Field(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_run() {
        let run = TextRun::bold("Objetivo: ");
        assert_eq!(run.text(), Some("Objetivo: "));
        assert_eq!(run.formatting.bold, Some(true));
        assert!(run.formatting.italic.is_none());
    }

    #[test]
    fn test_field_run_has_no_text() {
        let run = TextRun::field(PageField::TotalPages);
        assert!(run.text().is_none());
        assert_eq!(PageField::TotalPages.instruction(), "NUMPAGES");
    }
}
