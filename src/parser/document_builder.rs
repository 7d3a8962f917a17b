use crate::models::{ElementKind, Scene, SceneElement, ScriptDocument, SourceFormat};
use crate::parser::line_classifier::HeadingInfo;

/// Scene-building accumulator shared by both parser front-ends. Lines fold
/// into it in document order; it owns scene numbering, the synthesized
/// OPENING scene, and the document-level character/location sets.
pub struct DocumentBuilder {
    doc: ScriptDocument,
}

impl DocumentBuilder {
    pub fn new(source_format: SourceFormat) -> Self {
        DocumentBuilder {
            doc: ScriptDocument::new(source_format),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        if !title.is_empty() {
            self.doc.title = title.to_string();
        }
    }

    pub fn add_author(&mut self, author: &str) {
        let author = author.trim();
        if !author.is_empty() {
            self.doc.authors.push(author.to_string());
        }
    }

    /// Closes the previous scene (if any) and opens the next one.
    pub fn open_scene(&mut self, heading: &str, info: HeadingInfo) {
        let number = self.doc.scenes.len() + 1;
        self.doc.add_location(&info.location);
        self.doc.scenes.push(Scene::new(
            number,
            heading.to_string(),
            info.location,
            info.time_of_day,
            info.interior,
        ));
    }

    /// Content arriving before any explicit heading lands in a synthesized
    /// scene 1 labelled OPENING.
    fn current_scene(&mut self) -> &mut Scene {
        if self.doc.scenes.is_empty() {
            self.open_scene(
                "OPENING",
                HeadingInfo {
                    location: "UNKNOWN".to_string(),
                    time_of_day: "DAY".to_string(),
                    interior: true,
                },
            );
        }
        self.doc.scenes.last_mut().unwrap()
    }

    pub fn push_action(&mut self, text: &str) {
        let scene = self.current_scene();
        scene
            .content
            .push(SceneElement::new(ElementKind::Action, text.to_string()));
    }

    pub fn push_character(&mut self, text: &str, name: &str) {
        let name = name.trim().to_uppercase();
        self.doc.add_character(&name);
        let scene = self.current_scene();
        scene.content.push(SceneElement::with_character(
            ElementKind::Character,
            text.to_string(),
            name,
        ));
    }

    /// Appends a dialogue element attributed to the nearest preceding
    /// character cue in the scene. With `merge` set and a dialogue element
    /// already last, the text is space-joined onto it instead.
    pub fn push_dialogue(&mut self, text: &str, merge: bool) {
        let scene = self.current_scene();
        if merge {
            if let Some(last) = scene.content.last_mut() {
                if last.kind == ElementKind::Dialogue {
                    last.text.push(' ');
                    last.text.push_str(text);
                    return;
                }
            }
        }
        let speaker = scene.last_character().map(str::to_string);
        let mut el = SceneElement::new(ElementKind::Dialogue, text.to_string());
        el.character = speaker;
        scene.content.push(el);
    }

    pub fn push_parenthetical(&mut self, text: &str) {
        let scene = self.current_scene();
        scene.content.push(SceneElement::new(
            ElementKind::Parenthetical,
            text.to_string(),
        ));
    }

    pub fn push_transition(&mut self, text: &str) {
        let scene = self.current_scene();
        scene
            .content
            .push(SceneElement::new(ElementKind::Transition, text.to_string()));
    }

    pub fn finish(self) -> ScriptDocument {
        self.doc
    }
}
