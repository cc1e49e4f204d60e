use serde::{Deserialize, Serialize};

/// Semantic role assigned to one line of menu text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    /// Section header naming a menu category (e.g. "APPETIZERS")
    Category,
    /// Phone number, email, URL or address fragment
    Contact,
    /// A bare price standing on its own line
    Price,
    /// A dish name, possibly with an embedded price
    Dish,
    /// Ingredient list or descriptive sentence belonging to a dish
    Description,
    /// Unrecognized; may still contribute a price or description later
    Other,
}

/// One line of plain text annotated with its classification.
///
/// `price` holds the unit-less numeric string extracted from the line
/// (e.g. "12.95"), regardless of role. A ParsedLine is never mutated
/// after classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedLine {
    pub text: String,
    pub role: LineRole,
    pub price: Option<String>,
}

impl ParsedLine {
    pub fn new(text: impl Into<String>, role: LineRole, price: Option<String>) -> Self {
        Self {
            text: text.into(),
            role,
            price,
        }
    }
}
