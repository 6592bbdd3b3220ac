// src/translate.rs
//! Translation seam.
//!
//! The pipeline is written against the trait so a real backend (an external
//! translation API) can be dropped in without touching callers. The default
//! implementation is an explicit pass-through: non-English text flows through
//! the analyses untranslated.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` (ISO code) into English.
    async fn translate_to_english(&self, text: &str, source_lang: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Default no-op backend: returns the input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate_to_english(&self, text: &str, source_lang: &str) -> Result<String> {
        if source_lang != "en" {
            debug!(source_lang, "passthrough translator: returning text unchanged");
        }
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_returns_input_unchanged() {
        let t = PassthroughTranslator;
        let out = t.translate_to_english("नमस्ते दुनिया", "hi").await.unwrap();
        assert_eq!(out, "नमस्ते दुनिया");
    }
}
