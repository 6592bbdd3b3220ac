// src/analyze/leaning.rs
//! Political-leaning aggregation: length-weighted average sentiment per
//! tracked entity.
//!
//! For each entity alias we pull every sentence-like span mentioning it
//! (word-boundary, case-insensitive, terminated by `.`, `!` or `?`). Spans
//! from different aliases of one entity are pooled, duplicates included.
//! Each span's polarity is weighted by `min(1.0, words / 20)` so one-liners
//! count for less, then averaged. An entity with no matched spans is left
//! out of the map entirely: absence means "no mentions", not zero.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use super::round3;
use crate::politics::PoliticalEntities;
use crate::sentiment::SentimentAnalyzer;

/// Sentences at or above this many words get full weight.
const FULL_WEIGHT_WORDS: f32 = 20.0;

/// Compute the per-entity weighted sentiment map.
pub fn detect_political_leaning(
    text: &str,
    analyzer: &SentimentAnalyzer,
    entities: &PoliticalEntities,
) -> BTreeMap<String, f32> {
    let mut results = BTreeMap::new();

    for entity in entities.iter() {
        let mut weighted: Vec<f32> = Vec::new();

        for alias in &entity.aliases {
            for span in alias_spans(text, alias) {
                // Collect-or-skip, same policy as the tone breakdown.
                let score = match analyzer.score(&span) {
                    Ok(s) => s,
                    Err(err) => {
                        debug!(%err, alias, "skipping unscorable span");
                        continue;
                    }
                };
                let words = span.split_whitespace().count() as f32;
                let weight = (words / FULL_WEIGHT_WORDS).min(1.0);
                weighted.push(score.polarity * weight);
            }
        }

        if !weighted.is_empty() {
            let mean = weighted.iter().sum::<f32>() / weighted.len() as f32;
            results.insert(entity.name.clone(), round3(mean));
        }
    }

    results
}

/// Sentence-like spans containing `alias` on a word boundary.
fn alias_spans(text: &str, alias: &str) -> Vec<String> {
    let pattern = format!(r"(?i)[^.!?]*\b{}\b[^.!?]*[.!?]", regex::escape(alias));
    let Ok(re) = Regex::new(&pattern) else {
        // Aliases come from a static table; a pattern that fails to compile
        // contributes no spans rather than failing the analysis.
        debug!(alias, "alias produced an invalid pattern");
        return Vec::new();
    };
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
