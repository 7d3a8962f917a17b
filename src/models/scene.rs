use serde::{Deserialize, Serialize};

/// Semantic role of a line or merged block inside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Action,
    Dialogue,
    Parenthetical,
    Transition,
    Character,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneElement {
    pub kind: ElementKind,
    pub text: String,
    /// Speaking character, set on character cues and dialogue only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

impl SceneElement {
    pub fn new(kind: ElementKind, text: String) -> Self {
        SceneElement {
            kind,
            text,
            character: None,
        }
    }

    pub fn with_character(kind: ElementKind, text: String, character: String) -> Self {
        SceneElement {
            kind,
            text,
            character: Some(character),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub scene_number: usize, // 1-based, strictly increasing in parse order
    pub heading: String,     // original heading text, or "OPENING" when synthesized
    pub location: String,
    pub time_of_day: String,
    pub interior: bool,
    pub content: Vec<SceneElement>,
}

impl Scene {
    pub fn new(
        scene_number: usize,
        heading: String,
        location: String,
        time_of_day: String,
        interior: bool,
    ) -> Self {
        Scene {
            scene_number,
            heading,
            location,
            time_of_day,
            interior,
            content: Vec::new(),
        }
    }

    /// Name of the most recent character cue emitted so far in this scene.
    pub fn last_character(&self) -> Option<&str> {
        self.content
            .iter()
            .rev()
            .find(|el| el.kind == ElementKind::Character)
            .and_then(|el| el.character.as_deref())
    }
}
