//! Reading flow documents and writing extracted modules

mod input;
mod writer;

pub use input::{collect_input_files, load_document};
pub use writer::{render_module, ModuleWriter};

use std::path::PathBuf;
use thiserror::Error;

/// Prefix of written module files; such files are never read back as input
pub const MODULE_PREFIX: &str = "module_";

/// Errors that can occur while loading a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for document loading
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while writing a module
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for module output
pub type WriteResult<T> = Result<T, WriteError>;
