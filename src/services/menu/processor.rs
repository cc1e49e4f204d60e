//! Pipeline entry points: raw OCR output in, translated dish records out.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::error::MenuError;
use crate::models::config::MenuConfig;
use crate::models::dish::DishRecord;
use crate::models::menu::{group_by_category, ProcessedMenu};
use crate::models::token::TextToken;
use crate::services::layout::LayoutReconstructor;
use crate::services::ocr::OcrOutput;
use crate::services::translation::Translator;

use super::assembler::{self, DishDraft};
use super::classifier;

/// Runs the classification pipeline and the translation fan-out.
///
/// Holds no state between calls: each call receives fresh input and
/// returns fresh output.
pub struct MenuProcessor {
    translator: Arc<dyn Translator>,
    config: MenuConfig,
}

impl MenuProcessor {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self::with_config(translator, MenuConfig::default())
    }

    pub fn with_config(translator: Arc<dyn Translator>, config: MenuConfig) -> Self {
        Self { translator, config }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Classify raw menu text and emit translated dish records.
    ///
    /// Records keep discovery order and carry sequential 1-based ids.
    /// Fails only on whole-batch conditions: empty text, or text in which
    /// no dish structure was recognized.
    pub async fn process_menu_text(&self, text: &str) -> Result<Vec<DishRecord>, MenuError> {
        if text.trim().is_empty() {
            return Err(MenuError::NoText);
        }

        let lines = classifier::split_lines(text);
        let parsed = classifier::classify_lines(&lines, &self.config.classifier);
        let drafts = assembler::assemble_dishes(&parsed, &self.config.classifier);

        if drafts.is_empty() {
            return Err(MenuError::NoItems);
        }

        info!(dishes = drafts.len(), "translating assembled menu items");
        Ok(self.translate_all(drafts).await)
    }

    /// Reconstruct reading order from token geometry, then classify.
    pub async fn process_tokens(&self, tokens: &[TextToken]) -> Result<Vec<DishRecord>, MenuError> {
        let lines =
            LayoutReconstructor::new(self.config.layout.clone()).reconstruct_lines(tokens);
        self.process_menu_text(&lines.join("\n")).await
    }

    /// Full pipeline for one OCR scan: reading-order reconstruction when
    /// token geometry is available, classification, translation, and
    /// stable grouping by category.
    pub async fn process_scan(&self, ocr: &OcrOutput) -> Result<ProcessedMenu, MenuError> {
        let text = if ocr.tokens.is_empty() {
            ocr.text.clone()
        } else {
            LayoutReconstructor::new(self.config.layout.clone())
                .reconstruct_lines(&ocr.tokens)
                .join("\n")
        };

        let records = self.process_menu_text(&text).await?;

        Ok(ProcessedMenu {
            extracted_text: text,
            total_items: records.len(),
            scanned_at: Utc::now(),
            categories: group_by_category(records),
        })
    }

    /// Fan out one translation task per dish and reassemble the results
    /// in discovery order, not completion order. Each task writes only
    /// its own record; no shared state, no locks.
    async fn translate_all(&self, drafts: Vec<DishDraft>) -> Vec<DishRecord> {
        let mut handles = Vec::with_capacity(drafts.len());
        for (i, draft) in drafts.iter().cloned().enumerate() {
            let translator = Arc::clone(&self.translator);
            let target = self.config.target_language.clone();
            let id = (i + 1) as u32;
            handles.push(tokio::spawn(async move {
                translate_record(translator, draft, id, target).await
            }));
        }

        let mut records = Vec::with_capacity(handles.len());
        for (i, (handle, draft)) in handles.into_iter().zip(drafts).enumerate() {
            let record = match handle.await {
                Ok(record) => record,
                Err(e) => {
                    // A crashed task must not drop the dish
                    warn!(error = %e, dish = %draft.name, "translation task failed");
                    untranslated_record(draft, (i + 1) as u32)
                }
            };
            records.push(record);
        }
        records
    }
}

/// Translate the name and the description of one dish.
///
/// Either field falls back to its original text on failure; the record is
/// always produced. Empty descriptions are not sent out.
async fn translate_record(
    translator: Arc<dyn Translator>,
    draft: DishDraft,
    id: u32,
    target: String,
) -> DishRecord {
    let translated_name = match translator.translate(&draft.name, &target).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(dish = %draft.name, error = %e, "name translation failed, keeping original");
            draft.name.clone()
        }
    };

    let translated_description = if draft.description.is_empty() {
        String::new()
    } else {
        match translator.translate(&draft.description, &target).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(dish = %draft.name, error = %e, "description translation failed, keeping original");
                draft.description.clone()
            }
        }
    };

    DishRecord {
        id,
        original_name: draft.name,
        translated_name,
        description: draft.description,
        translated_description,
        price: draft.price,
        category: draft.category,
    }
}

fn untranslated_record(draft: DishDraft, id: u32) -> DishRecord {
    DishRecord {
        id,
        translated_name: draft.name.clone(),
        translated_description: draft.description.clone(),
        original_name: draft.name,
        description: draft.description,
        price: draft.price,
        category: draft.category,
    }
}
