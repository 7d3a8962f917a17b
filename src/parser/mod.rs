pub mod document_builder;
pub mod fountain_parser;
pub mod line_classifier;
pub mod markup_parser;

pub use document_builder::DocumentBuilder;
pub use fountain_parser::FountainParser;
pub use line_classifier::{classify_line, is_scene_heading, split_heading, HeadingInfo, LineClass};
pub use markup_parser::MarkupParser;

use crate::error::ImportError;
use crate::models::{ScriptDocument, SourceFormat};

#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Treat unrecognized input as Fountain (the most permissive reading).
    /// Disabling this makes detection failures surface as UnsupportedFormat.
    pub fountain_fallback: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            fountain_fallback: true,
        }
    }
}

/// Picks a parser from the file extension when one is given, otherwise
/// sniffs the content for an XML prolog or a FinalDraft root tag.
pub fn detect_format(input: &str, file_name: Option<&str>) -> SourceFormat {
    if let Some(ext) = file_name.and_then(extension_of) {
        match ext.as_str() {
            "fountain" | "txt" => return SourceFormat::Fountain,
            "fdx" | "xml" => return SourceFormat::StructuredMarkup,
            _ => {}
        }
    }
    let head = input.trim_start();
    if head.starts_with("<?xml") || head.starts_with("<FinalDraft") {
        return SourceFormat::StructuredMarkup;
    }
    SourceFormat::Unknown
}

fn extension_of(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}

/// Front door: detects the input format and runs the matching parser.
pub fn import_script(input: &str, file_name: Option<&str>) -> Result<ScriptDocument, ImportError> {
    import_script_with(input, file_name, ImportOptions::default())
}

pub fn import_script_with(
    input: &str,
    file_name: Option<&str>,
    options: ImportOptions,
) -> Result<ScriptDocument, ImportError> {
    match detect_format(input, file_name) {
        SourceFormat::Fountain => Ok(FountainParser::new().parse(input)),
        SourceFormat::StructuredMarkup => MarkupParser::new().parse(input),
        SourceFormat::Unknown => {
            if options.fountain_fallback {
                Ok(FountainParser::new().parse(input))
            } else {
                Err(ImportError::UnsupportedFormat(
                    file_name.unwrap_or("<unnamed input>").to_string(),
                ))
            }
        }
    }
}

/// PDF path: the surrounding application extracts plain text elsewhere and
/// hands it in here. Whitespace-only extractions are a caller-visible
/// failure, never an empty document.
pub fn import_extracted_text(text: &str) -> Result<ScriptDocument, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::ExtractionUnavailable);
    }
    Ok(FountainParser::new().parse(text))
}
