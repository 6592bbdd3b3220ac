// src/reliability.rs
//! # Source reliability lookup
//!
//! Static domain → reputation table with exact and substring matching.
//!
//! - Normalizes the URL host: lowercase, leading `www.` stripped.
//! - Fallback order: exact match → substring match (first entry in table
//!   order whose key contains the host or is contained by it) → "not
//!   evaluated" sentinel.
//! - The table is an ordered `Vec`, not a map: the substring fallback is
//!   order-dependent and must stay deterministic.
//! - URL parse problems resolve to an "error" sentinel, never an `Err`.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use url::Url;

/// Either a 0–100 reputation score or the `"Unknown"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReliabilityScore {
    Rated(u8),
    Sentinel(UnknownScore),
}

/// Serializes as the literal string "Unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownScore {
    Unknown,
}

impl ReliabilityScore {
    pub const UNKNOWN: ReliabilityScore = ReliabilityScore::Sentinel(UnknownScore::Unknown);
}

/// Reputation verdict for one source domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityEntry {
    pub score: ReliabilityScore,
    pub label: String,
}

impl ReliabilityEntry {
    fn rated(score: u8, label: &str) -> Self {
        Self {
            score: ReliabilityScore::Rated(score),
            label: label.to_string(),
        }
    }

    /// No table entry matched the host.
    pub fn not_evaluated() -> Self {
        Self {
            score: ReliabilityScore::UNKNOWN,
            label: "Source Not Evaluated".to_string(),
        }
    }

    /// The URL could not be assessed at all (parse failure, no host).
    pub fn assessment_error() -> Self {
        Self {
            score: ReliabilityScore::UNKNOWN,
            label: "Error in Assessment".to_string(),
        }
    }
}

/// Ordered domain-reputation table.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ReliabilityTable {
    entries: Vec<TableRow>,
}

#[derive(Debug, Clone, Deserialize)]
struct TableRow {
    domain: String,
    score: u8,
    label: String,
}

impl ReliabilityTable {
    /// Load from a JSON array file (ordering preserved), falling back to
    /// `default_seed()` on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Look up the reliability entry for a source URL.
    pub fn lookup(&self, url: &str) -> ReliabilityEntry {
        let host = match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)) {
            Some(h) => h,
            None => return ReliabilityEntry::assessment_error(),
        };

        let domain = normalize_host(&host);
        if domain.is_empty() {
            return ReliabilityEntry::assessment_error();
        }

        // Exact match first.
        if let Some(row) = self.entries.iter().find(|r| r.domain == domain) {
            return ReliabilityEntry::rated(row.score, &row.label);
        }

        // Substring fallback: first table entry (declaration order) whose key
        // is contained in the host or contains the host. Known to be able to
        // false-positive on coincidental substrings; kept as-is.
        if let Some(row) = self
            .entries
            .iter()
            .find(|r| domain.contains(&r.domain) || r.domain.contains(&domain))
        {
            return ReliabilityEntry::rated(row.score, &row.label);
        }

        ReliabilityEntry::not_evaluated()
    }

    /// Built-in reputation seed: international, Indian, and mixed-reliability
    /// outlets. Order matters for the substring fallback.
    pub fn default_seed() -> Self {
        fn row(domain: &str, score: u8, label: &str) -> TableRow {
            TableRow {
                domain: domain.to_string(),
                score,
                label: label.to_string(),
            }
        }
        Self {
            entries: vec![
                // International news
                row("reuters.com", 92, "Highly Reliable"),
                row("ap.org", 90, "Highly Reliable"),
                row("bbc.com", 88, "Highly Reliable"),
                row("npr.org", 87, "Highly Reliable"),
                row("pbs.org", 86, "Highly Reliable"),
                // Indian news sources
                row("thehindu.com", 85, "Reliable"),
                row("indianexpress.com", 82, "Reliable"),
                row("livemint.com", 80, "Reliable"),
                row("business-standard.com", 79, "Reliable"),
                row("scroll.in", 78, "Reliable"),
                // Major international
                row("cnn.com", 75, "Generally Reliable"),
                row("nytimes.com", 83, "Reliable"),
                row("washingtonpost.com", 81, "Reliable"),
                row("theguardian.com", 80, "Reliable"),
                // Mixed / lower reliability
                row("foxnews.com", 65, "Mixed Reliability"),
                row("ndtv.com", 72, "Generally Reliable"),
                row("timesofindia.indiatimes.com", 70, "Generally Reliable"),
                row("hindustantimes.com", 73, "Generally Reliable"),
                row("india.com", 60, "Mixed Reliability"),
                row("republicworld.com", 55, "Mixed Reliability"),
                // Questionable
                row("opindia.com", 45, "Questionable"),
                row("altnews.in", 75, "Generally Reliable"),
            ],
        }
    }
}

/// Lowercase the host and strip one leading `www.`.
fn normalize_host(host: &str) -> String {
    let lower = host.to_ascii_lowercase();
    lower.strip_prefix("www.").unwrap_or(&lower).to_string()
}
