pub mod beat;
pub mod export;
pub mod scene;
pub mod script_document;

pub use beat::Beat;
pub use export::{BeatRecord, CharacterRecord, ExportPayload, LocationRecord};
pub use scene::{ElementKind, Scene, SceneElement};
pub use script_document::{ScriptDocument, SourceFormat};
