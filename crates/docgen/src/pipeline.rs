//! Assemble, serialize and write in one pass

use crate::assembler::assemble;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use doc_model::DocumentOutline;
use std::path::PathBuf;
use store::{export_docx_bytes_async, write_output};
use tracing::{info, instrument};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub path: PathBuf,
    /// Size of the written package
    pub bytes: usize,
    pub outline: DocumentOutline,
}

/// Generate the documentation and write it to `config.output_path`.
///
/// Nothing is written when serialization fails. A missing parent directory
/// is reported as [`GenerateError::Io`]; it is never created.
#[instrument(skip_all, fields(path = %config.output_path.display()))]
pub async fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let doc = assemble().with_metadata(config.metadata.clone());
    let outline = doc.outline();
    info!(
        blocks = doc.blocks().len(),
        sections = outline.sections,
        tables = outline.tables,
        "assembled document"
    );

    let bytes = export_docx_bytes_async(doc).await?;

    write_output(&config.output_path, &bytes)
        .await
        .map_err(|source| GenerateError::Io {
            path: config.output_path.clone(),
            source,
        })?;

    info!(bytes = bytes.len(), "Document created successfully");

    Ok(GenerationReport {
        path: config.output_path.clone(),
        bytes: bytes.len(),
        outline,
    })
}
