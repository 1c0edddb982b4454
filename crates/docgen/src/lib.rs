//! Generator for the "Data Warehouse Credits Brasil" technical documentation
//!
//! [`assembler`] builds the content tree, `store` serializes it to DOCX and
//! [`pipeline::generate`] writes the package to disk.

pub mod assembler;
pub mod config;
pub mod error;
pub mod pipeline;

pub use assembler::assemble;
pub use config::{GeneratorConfig, DEFAULT_OUTPUT_PATH};
pub use error::{GenerateError, Result};
pub use pipeline::{generate, GenerationReport};
