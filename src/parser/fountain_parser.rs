use crate::models::{ElementKind, ScriptDocument, SourceFormat};
use crate::parser::document_builder::DocumentBuilder;
use crate::parser::line_classifier::{classify_line, is_scene_heading, LineClass};
use crate::utils::LINE_REGEX;

/// Maximum number of leading lines examined for title-page fields.
const TITLE_PAGE_SCAN_LIMIT: usize = 50;

/// Plain-text Fountain front-end. Never fails: structurally odd input
/// degrades to a single OPENING scene full of action elements.
pub struct FountainParser;

impl FountainParser {
    pub fn new() -> Self {
        FountainParser
    }

    pub fn parse(&self, script: &str) -> ScriptDocument {
        let mut builder = DocumentBuilder::new(SourceFormat::Fountain);
        let lines: Vec<&str> = script.lines().collect();

        let body_start = self.scan_title_page(&lines, &mut builder);

        // Previous emitted element kind, used for dialogue continuation.
        // A blank line ends the current dialogue run.
        let mut previous: Option<ElementKind> = None;

        for raw in &lines[body_start..] {
            let line = raw.trim();
            if line.is_empty() {
                previous = None;
                continue;
            }
            match classify_line(line, previous) {
                LineClass::SceneHeading(info) => {
                    builder.open_scene(line, info);
                    previous = None;
                }
                LineClass::Character(name) => {
                    builder.push_character(line, &name);
                    previous = Some(ElementKind::Character);
                }
                LineClass::Parenthetical => {
                    builder.push_parenthetical(line);
                    previous = Some(ElementKind::Parenthetical);
                }
                LineClass::Transition => {
                    builder.push_transition(line);
                    previous = Some(ElementKind::Transition);
                }
                LineClass::Dialogue { merge } => {
                    builder.push_dialogue(line, merge);
                    previous = Some(ElementKind::Dialogue);
                }
                LineClass::Action => {
                    builder.push_action(line);
                    previous = Some(ElementKind::Action);
                }
            }
        }

        let mut doc = builder.finish();
        doc.raw_text = script.to_string();
        doc
    }

    /// Recognizes `Title:` and `Author:`/`Authors:`/`Credit:` fields at the
    /// top of the document. Scanning stops at the first scene-heading-shaped
    /// line, the first non-blank line that is not a title field, or after 50
    /// lines. Returns the index of the first body line.
    fn scan_title_page(&self, lines: &[&str], builder: &mut DocumentBuilder) -> usize {
        for (i, raw) in lines.iter().enumerate() {
            if i >= TITLE_PAGE_SCAN_LIMIT {
                return i;
            }
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if is_scene_heading(line) {
                return i;
            }
            let caps = match LINE_REGEX["title_field"].captures(line) {
                Some(caps) => caps,
                None => return i,
            };
            let value = caps.get(2).map_or("", |m| m.as_str());
            match caps[1].to_lowercase().as_str() {
                "title" => builder.set_title(value),
                _ => builder.add_author(value),
            }
        }
        lines.len()
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}
