pub mod config;
pub mod dish;
pub mod menu;
pub mod parsed_line;
pub mod token;

// Re-export main types
pub use config::{ClassifierConfig, LayoutConfig, MenuConfig};
pub use dish::DishRecord;
pub use menu::{group_by_category, CategoryGroup, ProcessedMenu};
pub use parsed_line::{LineRole, ParsedLine};
pub use token::TextToken;
