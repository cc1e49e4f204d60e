use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::token::TextToken;

/// Raw OCR output for one page: the concatenated text plus the per-token
/// bounding boxes, when the backend provides them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OcrOutput {
    pub text: String,
    pub tokens: Vec<TextToken>,
}

impl OcrOutput {
    /// Text-only output from a backend without token geometry
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: Vec::new(),
        }
    }
}

/// OCR Engine trait - abstraction for different OCR implementations.
///
/// The image reference is opaque to the core; the enclosing app decides
/// whether it names a camera capture, a gallery pick or a file path.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Extract text and token geometry from an image reference
    async fn extract(&self, image_ref: &str) -> Result<OcrOutput, String>;

    /// Check if the OCR engine is available
    fn is_available(&self) -> bool;
}
