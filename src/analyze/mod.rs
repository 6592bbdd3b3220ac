// src/analyze/mod.rs
//! Analysis pipeline entry: runs extraction, sentiment, tone, leaning, and
//! reliability over one article and merges the results into a single report.

pub mod bias;
pub mod leaning;
pub mod tone;

use std::collections::BTreeMap;
use std::time::Instant;

use metrics::{counter, histogram};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::extract::{self, ArticleContent};
use crate::language::detect_language;
use crate::politics::{PoliticalEntities, PoliticalKeywords};
use crate::reliability::{ReliabilityEntry, ReliabilityTable};
use crate::sentiment::SentimentAnalyzer;
use crate::translate::{PassthroughTranslator, Translator};

// Re-export convenient types.
pub use bias::{classify, BiasLabel, BiasReport};
pub use tone::{tone_breakdown, SentenceTone, MAX_SENTENCES};
pub use leaning::detect_political_leaning;

/// Round to 3 decimal places; applied to every float at the report boundary.
pub(crate) fn round3(x: f32) -> f32 {
    (x * 1000.0).round() / 1000.0
}

/// The merged analysis result. Fields are independently omittable: each
/// sub-analysis is best-effort once article text is available.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub title: String,
    /// ISO language code of the source text.
    pub language: String,
    /// Extracted (untranslated) article text.
    pub text: String,
    /// Present only for non-English sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias_analysis: Option<BiasReport>,
    pub tone_breakdown: Vec<SentenceTone>,
    /// Entity → weighted average sentiment. Absent key means no mentions.
    pub political_leaning: BTreeMap<String, f32>,
    /// Present only for URL-based analyses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reliability: Option<ReliabilityEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// One immutable pipeline instance; shareable across concurrent requests.
/// The tables are read-only after construction and analyses hold no state.
pub struct BiasPipeline {
    sentiment: SentimentAnalyzer,
    keywords: PoliticalKeywords,
    entities: PoliticalEntities,
    reliability: ReliabilityTable,
    translator: Box<dyn Translator>,
    http: reqwest::Client,
}

impl Default for BiasPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl BiasPipeline {
    /// Pipeline with the built-in tables and the pass-through translator.
    pub fn new() -> Self {
        Self {
            sentiment: SentimentAnalyzer::new(),
            keywords: PoliticalKeywords::default_seed(),
            entities: PoliticalEntities::default_seed(),
            reliability: ReliabilityTable::default_seed(),
            translator: Box::new(PassthroughTranslator),
            http: extract::http_client(),
        }
    }

    /// Swap in a real translation backend.
    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Fetch a URL, extract its article, and analyze it.
    pub async fn analyze_url(&self, url: &str) -> Result<AnalysisReport, AnalysisError> {
        let article = extract::fetch_article(&self.http, url).await?;
        let reliability = self.reliability.lookup(url);
        info!(url, title = %article.title, "article extracted");
        Ok(self.analyze_article(article, Some(reliability)).await)
    }

    /// Analyze raw text (manual input or upstream file extraction).
    /// No fetch, no reliability lookup.
    pub async fn analyze_text(
        &self,
        text: &str,
        title: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::InsufficientContent { chars: 0 });
        }

        let article = ArticleContent {
            title: title.unwrap_or("Untitled").to_string(),
            language: detect_language(trimmed),
            body_text: trimmed.to_string(),
            source_url: None,
        };
        Ok(self.analyze_article(article, None).await)
    }

    /// Run the independent analyses over one extracted article.
    async fn analyze_article(
        &self,
        article: ArticleContent,
        source_reliability: Option<ReliabilityEntry>,
    ) -> AnalysisReport {
        let t0 = Instant::now();

        // Translation seam; pass-through by default. A failing backend falls
        // back to the untranslated text rather than aborting the analysis.
        let translated = if article.language != "en" {
            match self
                .translator
                .translate_to_english(&article.body_text, &article.language)
                .await
            {
                Ok(t) => Some(t),
                Err(err) => {
                    warn!(%err, backend = self.translator.name(), "translation failed");
                    None
                }
            }
        } else {
            None
        };
        let analyzed_text = translated.as_deref().unwrap_or(&article.body_text);

        // The three analyses are independent and each best-effort: a
        // degenerate whole-document score leaves the bias verdict empty
        // while tone and leaning still run.
        let bias_analysis = self.sentiment.score(analyzed_text).ok().map(classify);
        let tone = tone_breakdown(analyzed_text, &self.sentiment, &self.keywords);
        let political_leaning =
            detect_political_leaning(analyzed_text, &self.sentiment, &self.entities);

        counter!("analyses_total").increment(1);
        histogram!("analysis_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        AnalysisReport {
            title: article.title,
            language: article.language,
            text: article.body_text,
            translated_text: translated,
            bias_analysis,
            tone_breakdown: tone,
            political_leaning,
            source_reliability,
            source_url: article.source_url,
        }
    }
}
