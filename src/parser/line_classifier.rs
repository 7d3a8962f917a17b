use crate::models::ElementKind;
use crate::utils::{LINE_REGEX, MAX_CUE_LENGTH, RESERVED_CUE_WORDS};

/// Fields extracted from a scene heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    pub location: String,
    pub time_of_day: String,
    pub interior: bool,
}

/// Classification of one trimmed physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    SceneHeading(HeadingInfo),
    /// Carries the character name with any trailing parenthetical stripped.
    Character(String),
    Parenthetical,
    Transition,
    /// `merge` is set when the line continues the previous dialogue element
    /// and should be space-joined onto it instead of emitted separately.
    Dialogue { merge: bool },
    Action,
}

/// True for `INT.` / `EXT.` / `INT/EXT.` / `I/E.` prefixes and for the
/// forced-heading convention of a leading bare `.` (but not `..`).
pub fn is_scene_heading(line: &str) -> bool {
    if LINE_REGEX["scene_heading"].is_match(line) {
        return true;
    }
    line.len() > 1 && line.starts_with('.') && !line.starts_with("..")
}

/// Splits a heading line into location and time of day. The remainder after
/// the prefix splits on the first spaced dash; time of day defaults to DAY.
pub fn split_heading(line: &str) -> HeadingInfo {
    let (prefix_len, interior) = match LINE_REGEX["scene_heading"].find(line) {
        Some(m) => {
            let prefix = m.as_str().to_uppercase();
            (m.end(), prefix.starts_with("INT") || prefix.starts_with("I/E"))
        }
        // Forced heading: a bare leading dot, exterior by convention.
        // Tagged-markup headings may carry no prefix at all.
        None if line.starts_with('.') => (1, false),
        None => (0, false),
    };

    let remainder = line[prefix_len..].trim();
    match LINE_REGEX["heading_split"].find(remainder) {
        Some(dash) => HeadingInfo {
            location: remainder[..dash.start()].trim().to_uppercase(),
            time_of_day: remainder[dash.end()..].trim().to_uppercase(),
            interior,
        },
        None => HeadingInfo {
            location: remainder.to_uppercase(),
            time_of_day: "DAY".to_string(),
            interior,
        },
    }
}

fn is_character_cue(line: &str) -> Option<String> {
    if line.chars().count() >= MAX_CUE_LENGTH || line.contains(':') {
        return None;
    }
    if !LINE_REGEX["character_cue"].is_match(line) {
        return None;
    }
    let name = LINE_REGEX["cue_extension"].replace(line, "").trim().to_string();
    if name.is_empty() {
        return None;
    }
    if RESERVED_CUE_WORDS.contains(&name.to_uppercase().as_str()) {
        return None;
    }
    Some(name)
}

/// Classifies one trimmed, non-empty line given the kind of the previous
/// emitted element in the current scene. The rule order below is the
/// compatibility contract; in particular the character-cue heuristic fires
/// before the transition rule, so short all-caps action lines and cue-shaped
/// transitions classify as cues. Do not reorder.
pub fn classify_line(line: &str, previous: Option<ElementKind>) -> LineClass {
    if is_scene_heading(line) {
        return LineClass::SceneHeading(split_heading(line));
    }
    if let Some(name) = is_character_cue(line) {
        return LineClass::Character(name);
    }
    if LINE_REGEX["parenthetical"].is_match(line) {
        return LineClass::Parenthetical;
    }
    if LINE_REGEX["transition"].is_match(line) {
        return LineClass::Transition;
    }
    match previous {
        Some(ElementKind::Character) | Some(ElementKind::Parenthetical) => {
            LineClass::Dialogue { merge: false }
        }
        Some(ElementKind::Dialogue) => LineClass::Dialogue { merge: true },
        _ => LineClass::Action,
    }
}
