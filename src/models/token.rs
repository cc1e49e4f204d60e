use serde::{Deserialize, Serialize};

/// Estimated glyph width used when OCR vertices are missing or degenerate
const FALLBACK_CHAR_WIDTH: f64 = 12.0;

/// Estimated line height used when OCR vertices are missing or degenerate
const FALLBACK_LINE_HEIGHT: f64 = 20.0;

/// One OCR-detected word or phrase with its bounding geometry.
///
/// Coordinates are in image pixel space; `(x, y)` is the top-left corner
/// of the bounding box. Tokens are consumed once during layout
/// reconstruction and not retained afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextToken {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TextToken {
    /// Create a token from an explicit bounding box
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Build a token from OCR polygon vertices (typically 4 corner points).
    ///
    /// The bounding box is the min/max envelope of the vertices. Fewer than
    /// two vertices cannot describe an extent, so width and height fall back
    /// to an estimate derived from the text length. Never fails.
    pub fn from_vertices(text: impl Into<String>, vertices: &[(f64, f64)]) -> Self {
        let text = text.into();

        if vertices.is_empty() {
            let width = estimated_width(&text);
            return Self::new(text, 0.0, 0.0, width, FALLBACK_LINE_HEIGHT);
        }

        let min_x = vertices.iter().map(|v| v.0).fold(f64::INFINITY, f64::min);
        let max_x = vertices.iter().map(|v| v.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = vertices.iter().map(|v| v.1).fold(f64::INFINITY, f64::min);
        let max_y = vertices.iter().map(|v| v.1).fold(f64::NEG_INFINITY, f64::max);

        let mut width = max_x - min_x;
        let mut height = max_y - min_y;

        // A single vertex (or collinear duplicates) gives a zero extent
        if width <= 0.0 {
            width = estimated_width(&text);
        }
        if height <= 0.0 {
            height = FALLBACK_LINE_HEIGHT;
        }

        Self::new(text, min_x, min_y, width, height)
    }

    /// Right edge of the bounding box
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge of the bounding box
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the token carries any visible text
    pub fn is_usable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

fn estimated_width(text: &str) -> f64 {
    (text.chars().count().max(1) as f64) * FALLBACK_CHAR_WIDTH
}
