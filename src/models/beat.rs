use serde::{Deserialize, Serialize};

/// One externally-exported story unit, derived from a scene's action blocks.
/// Beats are produced on demand and never stored on the document itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beat {
    pub id: String,
    /// Handles of the characters present when the beat opened, plus any
    /// speakers heard before the next beat.
    pub characters: Vec<String>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<String>,
    pub location: String,
    pub camera: String,   // "Standard" or "Establishing"
    pub lighting: String, // "Interior" or "Natural"
}

impl Beat {
    pub fn new(id: String, action: String, location: String, camera: String, lighting: String) -> Self {
        Beat {
            id,
            characters: Vec::new(),
            action,
            dialogue: None,
            location,
            camera,
            lighting,
        }
    }

    pub fn add_character_handle(&mut self, handle: String) {
        if !self.characters.contains(&handle) {
            self.characters.push(handle);
        }
    }
}
