pub mod beat_extractor;
pub mod serializer;

pub use beat_extractor::{extract_beats, BeatExtractor};
pub use serializer::{build_export, export_script};
