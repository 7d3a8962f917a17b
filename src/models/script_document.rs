use serde::{Deserialize, Serialize};

use crate::models::scene::{ElementKind, Scene, SceneElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    Fountain,
    StructuredMarkup,
    Unknown,
}

/// Canonical parse result shared by both front-end parsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptDocument {
    pub title: String,
    pub authors: Vec<String>,
    /// Original input text, or a reconstruction when the source was markup.
    pub raw_text: String,
    pub scenes: Vec<Scene>,
    /// Distinct character names in first-seen order, upper-cased.
    pub characters: Vec<String>,
    /// Distinct scene locations in first-seen order, upper-cased.
    pub locations: Vec<String>,
    pub source_format: SourceFormat,
}

impl ScriptDocument {
    pub fn new(source_format: SourceFormat) -> Self {
        ScriptDocument {
            title: "Untitled Script".to_string(),
            authors: Vec::new(),
            raw_text: String::new(),
            scenes: Vec::new(),
            characters: Vec::new(),
            locations: Vec::new(),
            source_format,
        }
    }

    /// Records a character name, de-duplicating case-insensitively.
    pub fn add_character(&mut self, name: &str) {
        let upper = name.trim().to_uppercase();
        if upper.is_empty() {
            return;
        }
        if !self.characters.iter().any(|c| c.eq_ignore_ascii_case(&upper)) {
            self.characters.push(upper);
        }
    }

    pub fn add_location(&mut self, name: &str) {
        let upper = name.trim().to_uppercase();
        if upper.is_empty() {
            return;
        }
        if !self.locations.iter().any(|l| l.eq_ignore_ascii_case(&upper)) {
            self.locations.push(upper);
        }
    }

    /// Rebuilds a plain-text view from the scene list: heading per scene,
    /// cues and speech lines each on their own line, action blocks separated
    /// by blank lines.
    pub fn reconstruct_text(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        for scene in &self.scenes {
            if !out.is_empty() {
                out.push(String::new());
            }
            out.push(scene.heading.clone());
            let mut prev: Option<ElementKind> = None;
            for el in &scene.content {
                let block_break = match el.kind {
                    ElementKind::Action | ElementKind::Transition => true,
                    ElementKind::Character => true,
                    _ => false,
                };
                if block_break || prev.is_none() {
                    out.push(String::new());
                }
                out.push(el.text.clone());
                prev = Some(el.kind);
            }
        }
        out.join("\n")
    }

    pub fn element_count(&self) -> usize {
        self.scenes.iter().map(|s| s.content.len()).sum()
    }

    pub fn elements(&self) -> impl Iterator<Item = &SceneElement> {
        self.scenes.iter().flat_map(|s| s.content.iter())
    }
}
