//! Reading and writing level files

use crate::document::LevelDocument;
use crate::LevelError;
use serde_json::error::Category;
use std::path::Path;
use tracing::info;

/// Syntax errors stay JSON errors; a well-formed document with missing or
/// mistyped fields is malformed.
fn classify_json_error(err: serde_json::Error) -> LevelError {
    match err.classify() {
        Category::Data => LevelError::MalformedDocument(err.to_string()),
        Category::Io | Category::Syntax | Category::Eof => LevelError::Json(err),
    }
}

/// Parse a level document from a JSON string
pub fn load_level_from_str(json: &str) -> Result<LevelDocument, LevelError> {
    serde_json::from_str(json).map_err(classify_json_error)
}

/// Parse a level document from bytes
pub fn load_level_from_bytes(bytes: &[u8]) -> Result<LevelDocument, LevelError> {
    serde_json::from_slice(bytes).map_err(classify_json_error)
}

/// Read a level document from a file
pub fn load_level(path: &Path) -> Result<LevelDocument, LevelError> {
    let bytes = std::fs::read(path)?;
    let doc = load_level_from_bytes(&bytes)?;
    info!(
        "Loaded level {:?} ({}x{})",
        path, doc.level_info.rows, doc.level_info.cols
    );
    Ok(doc)
}

/// Serialize a level document as pretty-printed JSON
pub fn save_level_to_string(doc: &LevelDocument) -> Result<String, LevelError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write a level document to a file
pub fn save_level(path: &Path, doc: &LevelDocument) -> Result<(), LevelError> {
    let content = save_level_to_string(doc)?;
    std::fs::write(path, content)?;
    info!("Saved level {:?}", path);
    Ok(())
}
