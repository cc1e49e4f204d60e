//! Menu Scanner core: reconstructs the reading order of a photographed
//! menu from OCR token geometry, classifies the text into categorized
//! dish entries, and translates each entry through an injected
//! translation backend.

pub mod error;
pub mod models;
pub mod services;

pub use error::MenuError;
pub use models::{
    group_by_category, CategoryGroup, ClassifierConfig, DishRecord, LayoutConfig, LineRole,
    MenuConfig, ParsedLine, ProcessedMenu, TextToken,
};
pub use services::config::ConfigManager;
pub use services::layout::{reconstruct_lines, LayoutReconstructor};
pub use services::menu::MenuProcessor;
pub use services::ocr::{DemoOcr, OcrEngine, OcrOutput, DEMO_MENU_TEXT};
pub use services::translation::{MockTranslator, Translator};
