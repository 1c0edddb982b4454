//! Error types for document model validation

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DocModelError {
    #[error("Block {block}: unknown paragraph style '{style}'")]
    UnknownStyle { block: usize, style: String },

    #[error("Block {block}: no numbering definition '{reference}' at level {level}")]
    UnknownNumbering {
        block: usize,
        reference: String,
        level: u8,
    },

    #[error("Block {block}: table has no columns or no rows")]
    EmptyTable { block: usize },

    #[error("Block {block}: table row {row} has {found} cells, grid declares {expected}")]
    RaggedTable {
        block: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, DocModelError>;
