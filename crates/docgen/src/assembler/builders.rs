//! Small constructors for the recurring shapes of the documentation

use doc_model::{
    Alignment, BorderStyle, CellBorders, CellMargins, CharacterProperties, ContentBlock,
    HeadingLevel, ListItem, ListStyle, Paragraph, ParagraphProperties, StyleSheet, TableBlock,
    TableCell, TableRow, TextRun,
};

/// Space after ordinary body paragraphs
pub const AFTER_BODY: f32 = 6.0;
/// Space after a label that introduces the following list
pub const AFTER_LABEL: f32 = 3.0;

const CELL_BORDER_COLOR: &str = "CCCCCC";
const CELL_BORDER_WIDTH: f32 = 0.125;
const HEADER_TEXT_SIZE: f32 = 11.0;

pub fn h1(text: &str) -> ContentBlock {
    ContentBlock::heading(HeadingLevel::H1, text)
}

pub fn h2(text: &str) -> ContentBlock {
    ContentBlock::heading(HeadingLevel::H2, text)
}

pub fn h3(text: &str) -> ContentBlock {
    ContentBlock::heading(HeadingLevel::H3, text)
}

/// A body paragraph with explicit space after it
pub fn spaced(after: f32, runs: Vec<TextRun>) -> ContentBlock {
    let paragraph = runs.into_iter().fold(
        Paragraph::new().with_formatting(ParagraphProperties::new().spacing(None, Some(after))),
        Paragraph::run,
    );
    ContentBlock::Paragraph(paragraph)
}

/// Plain introductory paragraph
pub fn body(text: &str) -> ContentBlock {
    spaced(AFTER_BODY, vec![TextRun::new(text)])
}

/// Bold label on its own line, e.g. "Características:"
pub fn label(text: &str, after: f32) -> ContentBlock {
    spaced(after, vec![TextRun::bold(text)])
}

/// Bold lead-in followed by regular text on the same line
pub fn lead(lead: &str, text: &str) -> ContentBlock {
    spaced(AFTER_LABEL, vec![TextRun::bold(lead), TextRun::new(text)])
}

pub fn bullet(text: &str) -> ContentBlock {
    bullet_run(TextRun::new(text))
}

pub fn bullet_run(run: TextRun) -> ContentBlock {
    ContentBlock::ListItem(ListItem::new(ListStyle::Bullet, Paragraph::new().run(run)))
}

pub fn bullets<'a>(items: &'a [&'a str]) -> impl Iterator<Item = ContentBlock> + 'a {
    items.iter().map(|item| bullet(item))
}

pub fn numbered(text: &str) -> ContentBlock {
    ContentBlock::ListItem(ListItem::new(ListStyle::Numbered, Paragraph::text(text)))
}

/// Numbered step with a bold label, e.g. "Extração: ..."
pub fn numbered_step(step: &str, text: &str) -> ContentBlock {
    ContentBlock::ListItem(ListItem::new(
        ListStyle::Numbered,
        Paragraph::new().run(TextRun::bold(step)).run(TextRun::new(text)),
    ))
}

/// One `CodeBlock` paragraph per line; empty lines stay as empty paragraphs
pub fn code<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = ContentBlock> + 'a {
    lines
        .iter()
        .map(|line| ContentBlock::Paragraph(Paragraph::text(*line).with_style(StyleSheet::CODE_BLOCK)))
}

/// Header row coloring of a data table
#[derive(Debug, Clone, Copy)]
pub struct HeaderTheme {
    pub fill: &'static str,
    /// `None` keeps the default text color
    pub text_color: Option<&'static str>,
}

impl HeaderTheme {
    /// Colored fill with white text
    pub const fn inverted(fill: &'static str) -> Self {
        Self {
            fill,
            text_color: Some("FFFFFF"),
        }
    }

    /// Light fill with default text
    pub const fn light(fill: &'static str) -> Self {
        Self {
            fill,
            text_color: None,
        }
    }
}

/// A bordered table with a repeating header row
#[derive(Debug, Clone)]
pub struct DataTable {
    widths: Vec<f32>,
    theme: HeaderTheme,
    headers: Vec<&'static str>,
    rows: Vec<Vec<&'static str>>,
    bold_first_column: bool,
}

impl DataTable {
    /// `widths` are column widths in points
    pub fn new(widths: &[f32], theme: HeaderTheme, headers: &[&'static str]) -> Self {
        Self {
            widths: widths.to_vec(),
            theme,
            headers: headers.to_vec(),
            rows: Vec::new(),
            bold_first_column: false,
        }
    }

    /// Emphasize the key column (table and view names)
    pub fn bold_first_column(mut self) -> Self {
        self.bold_first_column = true;
        self
    }

    pub fn row(mut self, cells: &[&'static str]) -> Self {
        self.rows.push(cells.to_vec());
        self
    }

    pub fn build(self) -> ContentBlock {
        let borders = CellBorders::all(BorderStyle::single(CELL_BORDER_WIDTH, CELL_BORDER_COLOR));

        let mut header_run = CharacterProperties::new().bold().size(HEADER_TEXT_SIZE);
        if let Some(color) = self.theme.text_color {
            header_run = header_run.color(color);
        }

        let header_cells = self
            .headers
            .iter()
            .map(|text| {
                let paragraph = Paragraph::styled_text(*text, header_run.clone())
                    .with_formatting(ParagraphProperties::new().aligned(Alignment::Center));
                TableCell::new(paragraph)
                    .with_shading(self.theme.fill)
                    .with_borders(borders.clone())
            })
            .collect();

        let mut table = TableBlock::new(self.widths)
            .with_cell_margins(CellMargins {
                top: 5.0,
                bottom: 5.0,
                left: 9.0,
                right: 9.0,
            })
            .row(TableRow::header(header_cells));

        for row in self.rows {
            let cells = row
                .into_iter()
                .enumerate()
                .map(|(column, text)| {
                    let run = if column == 0 && self.bold_first_column {
                        TextRun::bold(text)
                    } else {
                        TextRun::new(text)
                    };
                    TableCell::new(Paragraph::new().run(run)).with_borders(borders.clone())
                })
                .collect();
            table = table.row(TableRow::new(cells));
        }

        ContentBlock::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::RunContent;

    #[test]
    fn test_spaced_paragraph() {
        let ContentBlock::Paragraph(p) = lead("Objetivo: ", "Armazenar dados brutos") else {
            panic!("expected paragraph");
        };
        assert_eq!(p.formatting.space_after, Some(AFTER_LABEL));
        assert_eq!(p.runs[0].formatting.bold, Some(true));
        assert_eq!(p.plain_text(), "Objetivo: Armazenar dados brutos");
    }

    #[test]
    fn test_code_lines_keep_blank_lines() {
        let blocks: Vec<_> = code(&["cd docker", "", "docker-compose up -d"]).collect();
        assert_eq!(blocks.len(), 3);
        let ContentBlock::Paragraph(blank) = &blocks[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(blank.runs[0].content, RunContent::Text(String::new()));
        assert_eq!(blank.style_id.as_ref().map(|s| s.as_str()), Some(StyleSheet::CODE_BLOCK));
    }

    #[test]
    fn test_data_table_header() {
        let ContentBlock::Table(table) = DataTable::new(&[156.0, 312.0], HeaderTheme::light("C0C0C0"), &["Tabela", "Descrição"])
            .bold_first_column()
            .row(&["credits.clientes", "Tabela central de clientes"])
            .build()
        else {
            panic!("expected table");
        };

        assert!(table.rows[0].is_header);
        assert!(table.is_rectangular());
        let header_run = &table.rows[0].cells[0].paragraphs[0].runs[0];
        assert_eq!(header_run.formatting.color, None);
        assert_eq!(header_run.formatting.font_size, Some(11.0));
        assert_eq!(table.rows[1].cells[0].paragraphs[0].runs[0].formatting.bold, Some(true));
        assert_eq!(table.rows[1].cells[1].paragraphs[0].runs[0].formatting.bold, None);
        assert_eq!(table.rows[0].cells[0].shading.as_deref(), Some("C0C0C0"));
    }

    #[test]
    fn test_inverted_theme_uses_white_text() {
        let ContentBlock::Table(table) = DataTable::new(&[234.0, 234.0], HeaderTheme::inverted("CD7F32"), &["Tabela", "Fonte"])
            .row(&["bronze.onedrive_clientes", "OneDrive/Clientes.csv"])
            .build()
        else {
            panic!("expected table");
        };
        let header_run = &table.rows[0].cells[1].paragraphs[0].runs[0];
        assert_eq!(header_run.formatting.color.as_deref(), Some("FFFFFF"));
    }
}
