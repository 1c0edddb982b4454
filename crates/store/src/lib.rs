//! Store - DOCX serialization and output files
//!
//! This crate turns a `doc_model::Document` into DOCX bytes, reads the
//! structure of a package back for verification, and writes finished
//! packages to disk.

pub mod docx;
pub mod output;

pub use output::write_output;

// Re-export DOCX functionality
pub use docx::{
    export_docx_bytes, export_docx_bytes_async, read_outline, read_part, DocxError, DocxResult,
};
