//! Styles, list numbering and page setup of the documentation

use doc_model::{
    Alignment, CharacterProperties, HeaderFooter, ListLevel, ListStyle, NumberFormat,
    NumberingDefinition, NumberingRegistry, PageField, PageMargins, PageSize, Paragraph,
    ParagraphProperties, SectionProperties, Style, StyleSheet, TextRun,
};

pub const BODY_FONT: &str = "Arial";
pub const CODE_FONT: &str = "Courier New";

/// Dark blue used by the title and level 1 headings
pub const PRIMARY_BLUE: &str = "1F4E78";
pub const SECONDARY_BLUE: &str = "2E5C8A";
pub const ACCENT_BLUE: &str = "4472C4";
pub const MUTED_GRAY: &str = "666666";

/// Text shown in the running header
pub const RUNNING_TITLE: &str = "Data Warehouse Credits Brasil";

/// List indentation: 0.5in with a 0.25in hanging marker
const LIST_INDENT: f32 = 36.0;
const LIST_HANGING: f32 = 18.0;

pub fn style_sheet() -> StyleSheet {
    let heading = |size: f32, color: &str| {
        CharacterProperties::new()
            .font(BODY_FONT)
            .size(size)
            .bold()
            .color(color)
    };

    StyleSheet::new(CharacterProperties::new().font(BODY_FONT).size(12.0))
        .with_style(
            Style::paragraph(StyleSheet::TITLE, "Title")
                .with_run(heading(28.0, PRIMARY_BLUE))
                .with_paragraph(
                    ParagraphProperties::new()
                        .spacing(Some(12.0), Some(12.0))
                        .aligned(Alignment::Center),
                ),
        )
        .with_style(
            Style::paragraph(StyleSheet::HEADING_1, "Heading 1")
                .next(StyleSheet::NORMAL)
                .quick_format()
                .with_run(heading(16.0, PRIMARY_BLUE))
                .with_paragraph(ParagraphProperties::new().spacing(Some(18.0), Some(6.0)).outline(0)),
        )
        .with_style(
            Style::paragraph(StyleSheet::HEADING_2, "Heading 2")
                .next(StyleSheet::NORMAL)
                .quick_format()
                .with_run(heading(14.0, SECONDARY_BLUE))
                .with_paragraph(ParagraphProperties::new().spacing(Some(12.0), Some(6.0)).outline(1)),
        )
        .with_style(
            Style::paragraph(StyleSheet::HEADING_3, "Heading 3")
                .next(StyleSheet::NORMAL)
                .quick_format()
                .with_run(heading(13.0, ACCENT_BLUE))
                .with_paragraph(ParagraphProperties::new().spacing(Some(9.0), Some(5.0)).outline(2)),
        )
        .with_style(
            Style::paragraph(StyleSheet::CODE_BLOCK, "Code Block")
                .with_run(CharacterProperties::new().font(CODE_FONT).size(10.0).color("000000"))
                .with_paragraph(ParagraphProperties::new().spacing(Some(6.0), Some(6.0)).indent(18.0)),
        )
        // No outline level, so the contents title never lists itself
        .with_style(
            Style::paragraph(StyleSheet::TOC_HEADING, "TOC Heading")
                .next(StyleSheet::NORMAL)
                .with_run(heading(16.0, PRIMARY_BLUE))
                .with_paragraph(ParagraphProperties::new().spacing(Some(18.0), Some(6.0))),
        )
}

pub fn numbering() -> NumberingRegistry {
    NumberingRegistry::new()
        .with_definition(NumberingDefinition::new(
            ListStyle::Bullet,
            vec![ListLevel::bullet(0, "•", LIST_INDENT, LIST_HANGING)],
        ))
        .with_definition(NumberingDefinition::new(
            ListStyle::Numbered,
            vec![ListLevel::numbered(0, NumberFormat::Decimal, "%1.", LIST_INDENT, LIST_HANGING)],
        ))
}

/// A4 with 1in margins, a right-aligned running title and a centered page counter
pub fn section() -> SectionProperties {
    let small = CharacterProperties::new().size(10.0);

    let header = HeaderFooter::new(vec![Paragraph::styled_text(
        RUNNING_TITLE,
        small.clone().color(MUTED_GRAY),
    )
    .with_formatting(ParagraphProperties::new().aligned(Alignment::Right))]);

    let footer = HeaderFooter::new(vec![Paragraph::new()
        .with_formatting(ParagraphProperties::new().aligned(Alignment::Center))
        .run(TextRun::styled("Página ", small.clone()))
        .run(TextRun::field(PageField::CurrentPage))
        .run(TextRun::styled(" de ", small))
        .run(TextRun::field(PageField::TotalPages))]);

    SectionProperties {
        page_size: PageSize::a4(),
        margins: PageMargins {
            header: 35.4,
            footer: 35.4,
            ..PageMargins::normal()
        },
        header: Some(header),
        footer: Some(footer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::StyleId;

    #[test]
    fn test_heading_outline_levels() {
        let sheet = style_sheet();
        for (id, level) in [
            (StyleSheet::HEADING_1, 0),
            (StyleSheet::HEADING_2, 1),
            (StyleSheet::HEADING_3, 2),
        ] {
            let style = sheet.get(&StyleId::new(id)).unwrap();
            assert_eq!(style.paragraph_props.outline_level, Some(level));
            assert_eq!(style.character_props.bold, Some(true));
        }

        let toc = sheet.get(&StyleId::new(StyleSheet::TOC_HEADING)).unwrap();
        assert_eq!(toc.paragraph_props.outline_level, None);
    }

    #[test]
    fn test_code_block_style() {
        let sheet = style_sheet();
        let code = sheet.get(&StyleId::new(StyleSheet::CODE_BLOCK)).unwrap();
        assert_eq!(code.character_props.font_family.as_deref(), Some(CODE_FONT));
        assert_eq!(code.character_props.font_size, Some(10.0));
        assert_eq!(code.paragraph_props.indent_left, Some(18.0));
    }

    #[test]
    fn test_numbering_references() {
        let registry = numbering();
        assert_eq!(registry.get(ListStyle::Bullet).unwrap().reference(), "bullet-list");
        assert_eq!(registry.get(ListStyle::Numbered).unwrap().reference(), "numbered-list-1");
        assert_eq!(registry.get(ListStyle::Numbered).unwrap().level(0).unwrap().marker(3), "3.");
    }

    #[test]
    fn test_section_has_running_header_and_page_counter() {
        let section = section();
        assert_eq!(section.margins.left, 72.0);

        let header = section.header.unwrap();
        assert_eq!(header.paragraphs[0].plain_text(), RUNNING_TITLE);

        let footer = section.footer.unwrap();
        assert_eq!(footer.paragraphs[0].plain_text(), "Página  de ");
        assert_eq!(footer.paragraphs[0].runs.len(), 4);
    }
}
