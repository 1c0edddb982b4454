//! Generator configuration
//!
//! The binary takes no arguments and always runs with the defaults; the
//! struct exists so tests and embedders can redirect the output.

use crate::assembler::default_metadata;
use doc_model::DocumentMetadata;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the documentation is written by default
pub const DEFAULT_OUTPUT_PATH: &str =
    "/mnt/user-data/outputs/DW_Credits_Brasil_Documentacao_Completa.docx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Destination file; its parent directory must already exist
    pub output_path: PathBuf,
    /// Core properties written into the package
    pub metadata: DocumentMetadata,
}

impl GeneratorConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            metadata: default_metadata(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.metadata.author.as_deref(), Some("Credits Brasil"));
    }

    #[test]
    fn test_config_serialization() {
        let config = GeneratorConfig::default().with_output_path("/tmp/out.docx");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
