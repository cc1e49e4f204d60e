pub mod assembler;
pub mod classifier;
pub mod keywords;
pub mod price;
pub mod processor;
pub mod rules;

// Re-export main types
pub use assembler::{assemble_dishes, DishDraft, DEFAULT_CATEGORY};
pub use classifier::{classify_lines, split_lines};
pub use price::{extract_price, normalize_price, strip_prices};
pub use processor::MenuProcessor;
