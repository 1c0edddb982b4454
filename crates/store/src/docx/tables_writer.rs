//! Table writer for DOCX files
//!
//! Generates w:tbl elements from content tables. Cell content goes through
//! the same paragraph writer as the body.

use crate::docx::paragraph_writer::ParagraphWriter;
use crate::docx::xml::{eighth_points, hex_color, twips};
use doc_model::{
    BorderStyle, BorderStyleType, CellBorders, CellMargins, Paragraph, TableBlock, TableCell,
    TableRow, TableWidth, WidthType,
};

/// Writer for table elements
pub struct TableWriter;

impl TableWriter {
    /// Create a new table writer
    pub fn new() -> Self {
        Self
    }

    /// Write a table element
    pub fn write_table(&self, xml: &mut String, table: &TableBlock) {
        xml.push_str("<w:tbl>");

        self.write_table_properties(xml, table);
        self.write_table_grid(xml, table);

        for row in &table.rows {
            self.write_table_row(xml, table, row);
        }

        xml.push_str("</w:tbl>");
    }

    /// Write table properties
    fn write_table_properties(&self, xml: &mut String, table: &TableBlock) {
        xml.push_str("<w:tblPr>");

        let (w, t) = format_table_width(&TableWidth::fixed(table.total_width()));
        xml.push_str(&format!(r#"<w:tblW w:w="{}" w:type="{}"/>"#, w, t));
        xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);

        if let Some(margins) = table.cell_margins {
            self.write_cell_margins(xml, &margins);
        }

        xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
        xml.push_str("</w:tblPr>");
    }

    fn write_cell_margins(&self, xml: &mut String, margins: &CellMargins) {
        xml.push_str("<w:tblCellMar>");
        for (side, value) in [
            ("top", margins.top),
            ("left", margins.left),
            ("bottom", margins.bottom),
            ("right", margins.right),
        ] {
            xml.push_str(&format!(r#"<w:{} w:w="{}" w:type="dxa"/>"#, side, twips(value)));
        }
        xml.push_str("</w:tblCellMar>");
    }

    /// Write the column grid
    fn write_table_grid(&self, xml: &mut String, table: &TableBlock) {
        xml.push_str("<w:tblGrid>");
        for width in &table.column_widths {
            xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, twips(*width)));
        }
        xml.push_str("</w:tblGrid>");
    }

    fn write_table_row(&self, xml: &mut String, table: &TableBlock, row: &TableRow) {
        xml.push_str("<w:tr>");

        // Header rows repeat at the top of each page
        if row.is_header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }

        for (column, cell) in row.cells.iter().enumerate() {
            let grid_width = table.column_widths.get(column).copied();
            self.write_table_cell(xml, cell, grid_width);
        }

        xml.push_str("</w:tr>");
    }

    fn write_table_cell(&self, xml: &mut String, cell: &TableCell, grid_width: Option<f32>) {
        xml.push_str("<w:tc>");
        self.write_cell_properties(xml, cell, grid_width);

        // A cell must end with a paragraph
        if cell.paragraphs.is_empty() {
            ParagraphWriter::write_paragraph(xml, &Paragraph::new(), None, None);
        }
        for para in &cell.paragraphs {
            ParagraphWriter::write_paragraph(xml, para, para.style_id.as_ref(), None);
        }

        xml.push_str("</w:tc>");
    }

    fn write_cell_properties(&self, xml: &mut String, cell: &TableCell, grid_width: Option<f32>) {
        xml.push_str("<w:tcPr>");

        let width = cell
            .width
            .or_else(|| grid_width.map(TableWidth::fixed))
            .unwrap_or_default();
        let (w, t) = format_table_width(&width);
        xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="{}"/>"#, w, t));

        if !cell.borders.is_empty() {
            self.write_cell_borders(xml, &cell.borders);
        }

        if let Some(ref fill) = cell.shading {
            xml.push_str(&format!(
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                hex_color(fill)
            ));
        }

        xml.push_str("</w:tcPr>");
    }

    fn write_cell_borders(&self, xml: &mut String, borders: &CellBorders) {
        xml.push_str("<w:tcBorders>");
        for (side, border) in [
            ("top", &borders.top),
            ("left", &borders.left),
            ("bottom", &borders.bottom),
            ("right", &borders.right),
        ] {
            if let Some(border) = border {
                write_border(xml, side, border);
            }
        }
        xml.push_str("</w:tcBorders>");
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_border(xml: &mut String, side: &str, border: &BorderStyle) {
    let val = match border.style {
        BorderStyleType::Single => "single",
    };
    xml.push_str(&format!(
        r#"<w:{} w:val="{}" w:sz="{}" w:space="0" w:color="{}"/>"#,
        side,
        val,
        eighth_points(border.width),
        hex_color(&border.color)
    ));
}

/// Format table width for XML output
fn format_table_width(width: &TableWidth) -> (i64, &'static str) {
    match width.width_type {
        WidthType::Auto => (0, "auto"),
        WidthType::Fixed => (twips(width.value), "dxa"),
    }
}
