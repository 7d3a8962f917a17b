use thiserror::Error;

/// Import failures surfaced to the caller. The Fountain parser never fails;
/// these cover format selection, markup parsing, and the PDF text hand-off.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Input matched no known parser and the Fountain fallback was disabled.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Structured-markup input was not a well-formed tagged document.
    /// Fatal to the parse call; no partial document is returned.
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),

    /// Upstream PDF text extraction produced no usable text.
    #[error("text extraction produced no usable text")]
    ExtractionUnavailable,
}
