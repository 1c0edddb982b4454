//! Section properties - page geometry, header and footer

use crate::Paragraph;
use serde::{Deserialize, Serialize};

// =============================================================================
// Page Size
// =============================================================================

/// Page size configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl PageSize {
    /// Create a custom page size
    pub fn custom(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a Letter-sized page
    pub fn letter() -> Self {
        Self::custom(612.0, 792.0)
    }

    /// Create an A4-sized page (11906 x 16838 twips)
    pub fn a4() -> Self {
        Self::custom(595.3, 841.9)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

// =============================================================================
// Page Margins
// =============================================================================

/// Page margin configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin in points
    pub top: f32,
    /// Bottom margin in points
    pub bottom: f32,
    /// Left margin in points
    pub left: f32,
    /// Right margin in points
    pub right: f32,
    /// Distance from page edge to header content
    pub header: f32,
    /// Distance from page edge to footer content
    pub footer: f32,
}

impl PageMargins {
    /// Create normal margins (1 inch all around)
    pub fn normal() -> Self {
        Self {
            top: 72.0,
            bottom: 72.0,
            left: 72.0,
            right: 72.0,
            header: 36.0,
            footer: 36.0,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::normal()
    }
}

// =============================================================================
// Header / Footer
// =============================================================================

/// Content repeated at the top or bottom of every page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderFooter {
    pub paragraphs: Vec<Paragraph>,
}

impl HeaderFooter {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn has_content(&self) -> bool {
        !self.paragraphs.is_empty()
    }
}

// =============================================================================
// Section
// =============================================================================

/// Page setup of the document's single section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub page_size: PageSize,
    pub margins: PageMargins,
    /// Default header shown on every page
    pub header: Option<HeaderFooter>,
    /// Default footer shown on every page
    pub footer: Option<HeaderFooter>,
}

impl SectionProperties {
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_header(mut self, header: HeaderFooter) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, footer: HeaderFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Width available to body content in points
    pub fn content_width(&self) -> f32 {
        self.page_size.width - self.margins.left - self.margins.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width() {
        let section = SectionProperties::default();
        assert!((section.content_width() - 451.3).abs() < 0.01);
    }

    #[test]
    fn test_header_footer_content() {
        assert!(!HeaderFooter::default().has_content());
        assert!(HeaderFooter::new(vec![Paragraph::text("x")]).has_content());
    }
}
