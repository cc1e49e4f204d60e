pub mod demo;
pub mod engine;

// Re-export main types
pub use demo::{DemoOcr, DEMO_MENU_TEXT};
pub use engine::{OcrEngine, OcrOutput};
