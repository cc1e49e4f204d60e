pub mod config;
pub mod layout;
pub mod menu;
pub mod ocr;
pub mod translation;
