//! Error types for DOCX operations

use thiserror::Error;

/// Errors that can occur while serializing or reading back a DOCX package
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// The content tree violates a constraint of the target format
    #[error("Format error: {0}")]
    Format(#[from] doc_model::DocModelError),

    /// Invalid DOCX structure
    #[error("Invalid DOCX structure: {0}")]
    InvalidStructure(String),

    /// Missing required part
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// The blocking serialization task did not complete
    #[error("Serialization task failed: {0}")]
    Join(String),
}

impl From<quick_xml::Error> for DocxError {
    fn from(err: quick_xml::Error) -> Self {
        DocxError::XmlParse(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DocxError {
    fn from(err: tokio::task::JoinError) -> Self {
        DocxError::Join(err.to_string())
    }
}

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
