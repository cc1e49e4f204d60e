use thiserror::Error;

/// Whole-batch pipeline failures surfaced to the caller.
///
/// Per-line and per-field conditions (unclassifiable lines, failed
/// translations, malformed geometry) are absorbed inside the pipeline;
/// only these two reach the caller, which is expected to fall back to
/// cached or demo data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// OCR produced empty or whitespace-only text
    #[error("no text detected in the image")]
    NoText,
    /// Classification found no recognizable dish structure
    #[error("no menu items found in the text")]
    NoItems,
}
