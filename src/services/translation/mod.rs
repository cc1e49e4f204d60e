pub mod mock;
pub mod translator;

// Re-export main types
pub use mock::MockTranslator;
pub use translator::Translator;
