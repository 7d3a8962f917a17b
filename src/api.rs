//! JSON-facing convenience wrappers for embedding hosts that want strings
//! in and strings out rather than the typed model.

use crate::error::ImportError;
use crate::export::export_script;
use crate::models::ScriptDocument;
use crate::parser::import_script;

/// Imports a script and returns the parsed document as JSON.
pub fn import_to_json(input: &str, file_name: Option<&str>) -> Result<String, ImportError> {
    let doc = import_script(input, file_name)?;
    Ok(serde_json::to_string(&doc).unwrap_or_else(|_| "{}".to_string()))
}

/// Serializes the interchange payload for a document as pretty JSON.
pub fn export_to_json(doc: &ScriptDocument) -> String {
    let payload = export_script(doc);
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
}
