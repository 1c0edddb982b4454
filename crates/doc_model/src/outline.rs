//! Structural summary of a document
//!
//! The same summary is computed from a content tree and from a serialized
//! package, so the two can be compared after a round trip.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    pub titles: usize,
    /// Top-level sections, i.e. level 1 headings
    pub sections: usize,
    /// Headings per level, index 0 is level 1
    pub headings: [usize; 3],
    pub tables: usize,
    /// Rows across all tables
    pub table_rows: usize,
    pub list_items: usize,
    pub page_breaks: usize,
    pub tables_of_contents: usize,
}

impl DocumentOutline {
    pub fn record_heading(&mut self, level: u8) {
        if (1..=3).contains(&level) {
            self.headings[usize::from(level - 1)] += 1;
            if level == 1 {
                self.sections += 1;
            }
        }
    }

    pub fn total_headings(&self) -> usize {
        self.headings.iter().sum()
    }
}
