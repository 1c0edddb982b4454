//! Error types for document generation

use std::io;
use std::path::PathBuf;
use store::DocxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] DocxError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
