// src/sentiment.rs
//! Lexicon-backed sentiment engine.
//!
//! Wraps a bundled word table (word → polarity, subjectivity) behind a small
//! scoring API. Polarity lands in `[-1, 1]`, subjectivity in `[0, 1]`. The
//! table ships inside the binary; nothing is fetched or trained at runtime.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

static LEXICON: Lazy<HashMap<String, (f32, f32)>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    let table: HashMap<String, [f32; 2]> =
        serde_json::from_str(raw).expect("valid sentiment lexicon");
    table.into_iter().map(|(w, [p, s])| (w, (p, s))).collect()
});

/// Sentiment of one span of text. Derived, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (most negative) ..= 1.0 (most positive).
    pub polarity: f32,
    /// 0.0 (objective) ..= 1.0 (subjective).
    pub subjectivity: f32,
}

/// Input had no scorable tokens (empty string, punctuation only, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no scorable tokens in input")]
pub struct DegenerateInput;

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Lexicon entry for a word (`None` if the word carries no sentiment).
    #[inline]
    fn word_entry(&self, w: &str) -> Option<(f32, f32)> {
        LEXICON.get(w).copied()
    }

    /// Score a span of text.
    ///
    /// Polarity and subjectivity are the arithmetic mean over the lexicon
    /// words the span contains. A negator within the previous 1..=3 tokens
    /// inverts the sign of a word's polarity. A span with tokens but no
    /// lexicon hits scores neutral `(0.0, 0.0)`; a span with no tokens at
    /// all is degenerate and refuses to score.
    pub fn score(&self, text: &str) -> Result<SentimentScore, DegenerateInput> {
        let tokens: Vec<String> = tokenize(text).collect();
        if tokens.is_empty() {
            return Err(DegenerateInput);
        }

        let mut polarity_sum = 0.0f32;
        let mut subjectivity_sum = 0.0f32;
        let mut hits = 0usize;

        for i in 0..tokens.len() {
            let Some((base_polarity, subjectivity)) = self.word_entry(tokens[i].as_str()) else {
                continue;
            };

            // Negator in the previous 1..=3 tokens flips the polarity sign.
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            let polarity = if negated { -base_polarity } else { base_polarity };

            polarity_sum += polarity;
            subjectivity_sum += subjectivity;
            hits += 1;
        }

        if hits == 0 {
            return Ok(SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let n = hits as f32;
        Ok(SentimentScore {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        })
    }
}

/// Tokenization: alphanumeric runs, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "cannot"
            | "without"
            | "nothing"
            | "neither"
            | "nor"
    )
}
