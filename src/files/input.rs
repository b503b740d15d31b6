//! Input discovery and document loading

use super::{DocumentError, DocumentResult, MODULE_PREFIX};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the documents to process for an input path
///
/// A file is accepted when it has a `.json` extension. A directory is
/// listed non-recursively, in file name order, skipping non-JSON files and
/// previously written modules (`module_*`).
pub fn collect_input_files(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return if has_json_extension(input) {
            vec![input.to_path_buf()]
        } else {
            Vec::new()
        };
    }
    if !input.is_dir() {
        return Vec::new();
    }

    WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| has_json_extension(e.path()))
        .filter(|e| !e.file_name().to_string_lossy().starts_with(MODULE_PREFIX))
        .map(|e| e.into_path())
        .collect()
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().map(|ext| ext == "json").unwrap_or(false)
}

/// Read and parse one JSON document
pub fn load_document(path: &Path) -> DocumentResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
