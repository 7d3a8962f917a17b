use chrono::Utc;

use crate::models::{Beat, ElementKind, Scene, ScriptDocument};
use crate::utils::generate_handle;

/// Derives the flattened beat sequence from a document: one beat per action
/// block, or one establishing beat for a scene with no action at all. Beat
/// ids are unique within one extractor instance only; nothing about them is
/// stable across exports.
pub struct BeatExtractor {
    stamp: i64,
    counter: usize,
}

impl BeatExtractor {
    pub fn new() -> Self {
        BeatExtractor {
            stamp: Utc::now().timestamp_millis(),
            counter: 0,
        }
    }

    pub fn extract(&mut self, doc: &ScriptDocument) -> Vec<Beat> {
        let mut beats = Vec::new();
        for scene in &doc.scenes {
            self.extract_scene(scene, &mut beats);
        }
        beats
    }

    fn extract_scene(&mut self, scene: &Scene, beats: &mut Vec<Beat>) {
        let lighting = if scene.interior { "Interior" } else { "Natural" };
        // Character names seen so far in the scene, in cue order.
        let mut seen: Vec<String> = Vec::new();
        let mut open: Option<Beat> = None;
        let mut had_action = false;

        for el in &scene.content {
            match el.kind {
                ElementKind::Character => {
                    if let Some(name) = &el.character {
                        if !seen.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                            seen.push(name.clone());
                        }
                    }
                }
                ElementKind::Action => {
                    had_action = true;
                    if let Some(done) = open.take() {
                        beats.push(done);
                    }
                    let mut beat = Beat::new(
                        self.next_id(),
                        el.text.clone(),
                        scene.location.clone(),
                        "Standard".to_string(),
                        lighting.to_string(),
                    );
                    for name in &seen {
                        beat.add_character_handle(generate_handle(name));
                    }
                    open = Some(beat);
                }
                ElementKind::Dialogue => {
                    // Last dialogue before the next action wins.
                    if let Some(beat) = open.as_mut() {
                        beat.dialogue = Some(el.text.clone());
                        if let Some(name) = &el.character {
                            beat.add_character_handle(generate_handle(name));
                        }
                    }
                }
                ElementKind::Parenthetical | ElementKind::Transition => {}
            }
        }

        if let Some(done) = open.take() {
            beats.push(done);
        }

        // Scenes without any action still export one beat, framed as an
        // establishing shot of the heading.
        if !had_action {
            let mut beat = Beat::new(
                self.next_id(),
                scene.heading.clone(),
                scene.location.clone(),
                "Establishing".to_string(),
                lighting.to_string(),
            );
            for name in &seen {
                beat.add_character_handle(generate_handle(name));
            }
            beats.push(beat);
        }
    }

    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("beat-{}-{}", self.stamp, self.counter)
    }
}

impl Default for BeatExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience over a fresh extractor.
pub fn extract_beats(doc: &ScriptDocument) -> Vec<Beat> {
    BeatExtractor::new().extract(doc)
}
