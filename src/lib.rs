pub mod api;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod utils;

pub use models::{
    Beat,
    BeatRecord,
    CharacterRecord,
    ElementKind,
    ExportPayload,
    LocationRecord,
    Scene,
    SceneElement,
    ScriptDocument,
    SourceFormat
};

pub use parser::{
    detect_format,
    import_extracted_text,
    import_script,
    import_script_with,
    FountainParser,
    ImportOptions,
    MarkupParser
};

pub use export::{
    build_export,
    export_script,
    extract_beats,
    BeatExtractor
};

pub use api::{export_to_json, import_to_json};
pub use error::ImportError;
pub use utils::generate_handle;

/// Parses Fountain-format text.
///
/// # Arguments
///
/// * `script` - plain-text screenplay in Fountain markup
///
/// # Returns
///
/// The parsed document; this front-end never fails.
pub fn parse(script: &str) -> ScriptDocument {
    FountainParser::new().parse(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = parse("INT. ROOM - DAY\n\nHello, world!");
        assert!(!result.scenes.is_empty());
    }
}
