// src/analyze/bias.rs
//! Bias classifier: maps whole-document sentiment to a coarse label.
//!
//! Rule-based heuristic over (polarity, subjectivity) — not a validated
//! political-bias measure. Subjectivity 0.3 splits the two regimes; low
//! subjectivity uses the tighter ±0.2 polarity cut, high subjectivity the
//! looser ±0.3 cut.

use serde::{Deserialize, Serialize};

use super::round3;
use crate::sentiment::SentimentScore;

/// Coarse heuristic tone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLabel {
    Neutral,
    #[serde(rename = "Left-Leaning")]
    LeftLeaning,
    #[serde(rename = "Right-Leaning")]
    RightLeaning,
    Moderate,
    #[serde(rename = "Opinionated Neutral")]
    OpinionatedNeutral,
}

/// Document-level bias verdict. All floats rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub bias: BiasLabel,
    pub polarity: f32,
    pub subjectivity: f32,
    /// min(1.0, |polarity| + subjectivity).
    pub confidence: f32,
}

/// Classify a whole-document sentiment score.
pub fn classify(score: SentimentScore) -> BiasReport {
    let SentimentScore {
        polarity,
        subjectivity,
    } = score;

    let bias = if subjectivity < 0.3 {
        if polarity.abs() < 0.1 {
            BiasLabel::Neutral
        } else if polarity < -0.2 {
            BiasLabel::LeftLeaning
        } else if polarity > 0.2 {
            BiasLabel::RightLeaning
        } else {
            BiasLabel::Moderate
        }
    } else if polarity < -0.3 {
        BiasLabel::LeftLeaning
    } else if polarity > 0.3 {
        BiasLabel::RightLeaning
    } else if polarity.abs() < 0.1 {
        BiasLabel::OpinionatedNeutral
    } else {
        BiasLabel::Moderate
    };

    let confidence = (polarity.abs() + subjectivity).min(1.0);

    BiasReport {
        bias,
        polarity: round3(polarity),
        subjectivity: round3(subjectivity),
        confidence: round3(confidence),
    }
}
