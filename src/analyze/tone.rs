// src/analyze/tone.rs
//! Per-sentence tone breakdown with political-keyword tagging.
//!
//! Sentences come from splitting on terminator runs (`.`, `!`, `?`).
//! Very short candidates are skipped; analysis stops after the cap is
//! reached. A sentence whose sentiment cannot be computed is skipped via an
//! explicit collect-or-skip fold, never failing the whole breakdown.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::round3;
use crate::politics::PoliticalKeywords;
use crate::sentiment::SentimentAnalyzer;

/// Only the first 15 qualifying sentences are analyzed.
pub const MAX_SENTENCES: usize = 15;
/// Candidates at or under this length are skipped.
const MIN_SENTENCE_CHARS: usize = 20;

/// Runs of sentence terminators count as one boundary.
static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("terminator regex"));

/// Tone of one analyzed sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceTone {
    pub sentence: String,
    pub polarity: f32,
    pub subjectivity: f32,
    /// Distinct political keywords found (table casing), sorted.
    pub mentions: Vec<String>,
    pub word_count: usize,
}

/// Break text into per-sentence tone entries.
pub fn tone_breakdown(
    text: &str,
    analyzer: &SentimentAnalyzer,
    keywords: &PoliticalKeywords,
) -> Vec<SentenceTone> {
    let mut breakdown = Vec::new();

    for candidate in TERMINATORS.split(text) {
        if breakdown.len() >= MAX_SENTENCES {
            break;
        }

        let sentence = candidate.trim();
        if sentence.chars().count() < MIN_SENTENCE_CHARS {
            continue;
        }

        // Collect-or-skip: a sentence the engine cannot score is dropped,
        // the rest of the breakdown proceeds.
        let score = match analyzer.score(sentence) {
            Ok(s) => s,
            Err(err) => {
                debug!(%err, "skipping unscorable sentence");
                continue;
            }
        };

        breakdown.push(SentenceTone {
            sentence: sentence.to_string(),
            polarity: round3(score.polarity),
            subjectivity: round3(score.subjectivity),
            mentions: find_mentions(sentence, keywords),
            word_count: sentence.split_whitespace().count(),
        });
    }

    breakdown
}

/// Case-insensitive substring scan over the keyword table.
/// Returns the table's original casing, sorted and deduped.
fn find_mentions(sentence: &str, keywords: &PoliticalKeywords) -> Vec<String> {
    let sentence_lower = sentence.to_lowercase();
    let mut mentions: Vec<String> = keywords
        .all()
        .filter(|kw| sentence_lower.contains(&kw.to_lowercase()))
        .map(str::to_string)
        .collect();
    mentions.sort();
    mentions.dedup();
    mentions
}
