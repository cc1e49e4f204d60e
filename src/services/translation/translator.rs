use async_trait::async_trait;

/// Translation collaborator - abstraction over whatever translation
/// backend the enclosing app wires in.
///
/// Implementations may fail per call; the pipeline always degrades to the
/// original text for the failed field and never drops a record.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language (BCP-47 style code)
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String>;
}
