use serde::{Deserialize, Serialize};

/// Interchange records consumed by the downstream production-bible tool.
/// Field names are an external contract and must not be renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub traits: Vec<String>,
    pub visuals: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub handle: String,
    pub visuals: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatRecord {
    pub beat_id: String,
    pub characters: Vec<String>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<String>,
    pub location: String,
    pub camera: String,
    pub lighting: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPayload {
    pub characters: Vec<CharacterRecord>,
    pub locations: Vec<LocationRecord>,
    pub beats: Vec<BeatRecord>,
    /// Full raw text of the script.
    pub script: String,
}

impl ExportPayload {
    pub fn new() -> Self {
        ExportPayload {
            characters: Vec::new(),
            locations: Vec::new(),
            beats: Vec::new(),
            script: String::new(),
        }
    }
}

impl Default for ExportPayload {
    fn default() -> Self {
        Self::new()
    }
}
