use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Reserved words that disqualify an all-caps line from being a character
/// cue. Kept exactly as-is for compatibility with existing imports; note
/// that "FADE TO" and "SMASH CUT" are deliberately absent.
pub const RESERVED_CUE_WORDS: [&str; 6] =
    ["INT", "EXT", "CUT TO", "FADE IN", "FADE OUT", "DISSOLVE TO"];

/// A character cue must be shorter than this many characters.
pub const MAX_CUE_LENGTH: usize = 40;

lazy_static! {
    /// Line classification rules, looked up by name.
    pub static ref LINE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert(
            "scene_heading",
            Regex::new(r"(?i)^(int\./ext\.|int/ext\.|i/e\.|int\.|ext\.)").unwrap(),
        );
        // First spaced dash splits location from time of day.
        map.insert("heading_split", Regex::new(r"\s[-–—]\s").unwrap());
        // Upper-case-dominant: letters, spaces, periods, hyphens,
        // apostrophes, with an optional trailing parenthetical extension.
        map.insert(
            "character_cue",
            Regex::new(r"^[A-Z][A-Z .'\-]*(\(.*\))?$").unwrap(),
        );
        map.insert("parenthetical", Regex::new(r"^\(.*\)$").unwrap());
        map.insert(
            "transition",
            Regex::new(r"(?i)^(cut to|fade to|dissolve to|smash cut|fade in|fade out):?$").unwrap(),
        );
        map.insert(
            "title_field",
            Regex::new(r"(?i)^(title|author|authors|credit)\s*:\s*(.*)$").unwrap(),
        );
        map.insert("cue_extension", Regex::new(r"\s*\(.*\)\s*$").unwrap());
        map
    };
}
