use crate::models::{
    Beat, BeatRecord, CharacterRecord, ExportPayload, LocationRecord, ScriptDocument,
};
use crate::utils::generate_handle;

use super::beat_extractor::extract_beats;

/// Assembles the interchange payload consumed by the production-bible tool.
/// Deterministic for a given document and beat list; only the beat ids vary
/// between export calls.
pub fn build_export(doc: &ScriptDocument, beats: &[Beat]) -> ExportPayload {
    let characters = doc
        .characters
        .iter()
        .map(|name| CharacterRecord {
            name: name.clone(),
            handle: generate_handle(name),
            role: None,
            traits: Vec::new(),
            visuals: format!("Character: {}", name),
        })
        .collect();

    let locations = doc
        .locations
        .iter()
        .map(|name| LocationRecord {
            name: name.clone(),
            handle: generate_handle(name),
            visuals: format!("Location: {}", name),
        })
        .collect();

    let beats = beats
        .iter()
        .map(|beat| BeatRecord {
            beat_id: beat.id.clone(),
            characters: beat.characters.clone(),
            action: beat.action.clone(),
            dialogue: beat.dialogue.clone(),
            location: beat.location.clone(),
            camera: beat.camera.clone(),
            lighting: beat.lighting.clone(),
        })
        .collect();

    ExportPayload {
        characters,
        locations,
        beats,
        script: doc.raw_text.clone(),
    }
}

/// Extracts beats and builds the payload in one step.
pub fn export_script(doc: &ScriptDocument) -> ExportPayload {
    let beats = extract_beats(doc);
    build_export(doc, &beats)
}
