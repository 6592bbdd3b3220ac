// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyze;
pub mod error;
pub mod extract;
pub mod language;
pub mod politics;
pub mod reliability;
pub mod sentiment;
pub mod translate;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{AnalysisReport, BiasLabel, BiasPipeline, BiasReport, SentenceTone};
pub use crate::error::AnalysisError;
pub use crate::extract::ArticleContent;
pub use crate::reliability::{ReliabilityEntry, ReliabilityScore};
pub use crate::sentiment::{SentimentAnalyzer, SentimentScore};
pub use crate::translate::{PassthroughTranslator, Translator};
