use serde::{Deserialize, Serialize};

/// One finished menu entry.
///
/// Records are emitted in discovery order with sequential 1-based ids and
/// are immutable afterwards; they are never merged or split. The
/// `translated_*` fields fall back to the original text when translation
/// of that field failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishRecord {
    pub id: u32,
    pub original_name: String,
    pub translated_name: String,
    /// Concatenated description fragments, empty string if none found
    pub description: String,
    pub translated_description: String,
    /// Normalized price with a single currency marker (e.g. "$12.95")
    pub price: Option<String>,
    /// Most recently seen category header, "Other" if none
    pub category: String,
}
