//! Table model - rows of cells laid out on a fixed column grid
//!
//! Column widths are declared once on the table; every row is expected to
//! carry exactly one cell per column. The builder does not enforce this,
//! `TableBlock::is_rectangular` and `Document::validate` report it.

use crate::{Paragraph, TextRun};
use serde::{Deserialize, Serialize};

// =============================================================================
// Widths and Borders
// =============================================================================

/// How a width value is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthType {
    #[default]
    Auto,
    /// Absolute width in points
    Fixed,
}

/// A table or cell width
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TableWidth {
    pub value: f32,
    pub width_type: WidthType,
}

impl TableWidth {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn fixed(points: f32) -> Self {
        Self {
            value: points,
            width_type: WidthType::Fixed,
        }
    }
}

/// Border style types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyleType {
    Single,
}

/// A single cell edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    /// Border width in points
    pub width: f32,
    pub style: BorderStyleType,
    /// Hex RGB color
    pub color: String,
}

impl BorderStyle {
    pub fn single(width: f32, color: impl Into<String>) -> Self {
        Self {
            width,
            style: BorderStyleType::Single,
            color: color.into(),
        }
    }
}

/// Borders on the four edges of a cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBorders {
    pub top: Option<BorderStyle>,
    pub bottom: Option<BorderStyle>,
    pub left: Option<BorderStyle>,
    pub right: Option<BorderStyle>,
}

impl CellBorders {
    /// The same border on every edge
    pub fn all(border: BorderStyle) -> Self {
        Self {
            top: Some(border.clone()),
            bottom: Some(border.clone()),
            left: Some(border.clone()),
            right: Some(border),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Default inner padding of every cell, in points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellMargins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

// =============================================================================
// Cells and Rows
// =============================================================================

/// A table cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub width: Option<TableWidth>,
    /// Background fill as hex RGB
    pub shading: Option<String>,
    #[serde(default)]
    pub borders: CellBorders,
    /// Cell content; an empty list renders as one empty paragraph
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            ..Default::default()
        }
    }

    /// A cell with a single plain run
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Paragraph::new().run(TextRun::new(text)))
    }

    pub fn with_width(mut self, width: TableWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    pub fn with_borders(mut self, borders: CellBorders) -> Self {
        self.borders = borders;
        self
    }
}

/// A table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Repeat this row at the top of every page the table spans
    pub is_header: bool,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            is_header: false,
            cells,
        }
    }

    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            is_header: true,
            cells,
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// A table block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Column widths in points; defines the grid
    pub column_widths: Vec<f32>,
    pub cell_margins: Option<CellMargins>,
    pub rows: Vec<TableRow>,
}

impl TableBlock {
    pub fn new(column_widths: Vec<f32>) -> Self {
        Self {
            column_widths,
            cell_margins: None,
            rows: Vec::new(),
        }
    }

    pub fn with_cell_margins(mut self, margins: CellMargins) -> Self {
        self.cell_margins = Some(margins);
        self
    }

    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Number of declared grid columns
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total width of the grid in points
    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// True when every row has exactly one cell per declared column
    pub fn is_rectangular(&self) -> bool {
        self.first_ragged_row().is_none()
    }

    /// Index and cell count of the first row that does not match the grid
    pub fn first_ragged_row(&self) -> Option<(usize, usize)> {
        let expected = self.column_count();
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.cells.len() != expected)
            .map(|(index, row)| (index, row.cells.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table_with_rows(columns: usize, row_sizes: &[usize]) -> TableBlock {
        let mut table = TableBlock::new(vec![100.0; columns]);
        for &size in row_sizes {
            table = table.row(TableRow::new((0..size).map(|i| TableCell::text(i.to_string())).collect()));
        }
        table
    }

    #[test]
    fn test_rectangular_table() {
        let table = table_with_rows(2, &[2, 2]);
        assert!(table.is_rectangular());
        assert_eq!(table.total_width(), 200.0);
    }

    #[test]
    fn test_ragged_row_reported() {
        let table = table_with_rows(3, &[3, 2, 3]);
        assert_eq!(table.first_ragged_row(), Some((1, 2)));
    }

    #[test]
    fn test_cell_borders_all() {
        let borders = CellBorders::all(BorderStyle::single(0.125, "CCCCCC"));
        assert!(!borders.is_empty());
        assert_eq!(borders.left.unwrap().color, "CCCCCC");
    }

    proptest! {
        #[test]
        fn uniform_rows_are_rectangular(columns in 1usize..8, rows in 0usize..12) {
            let sizes = vec![columns; rows];
            prop_assert!(table_with_rows(columns, &sizes).is_rectangular());
        }

        #[test]
        fn any_short_row_breaks_the_grid(columns in 2usize..8, rows in 1usize..12, bad in 0usize..12) {
            let mut sizes = vec![columns; rows];
            let bad = bad % rows;
            sizes[bad] = columns - 1;
            prop_assert_eq!(table_with_rows(columns, &sizes).first_ragged_row(), Some((bad, columns - 1)));
        }
    }
}
