// src/politics.rs
//! # Political keyword & entity tables
//!
//! Two read-only tables drive the political analyses:
//!
//! - `PoliticalKeywords`: flat keyword lists (parties, leaders, generic
//!   terms) used by the per-sentence tone breakdown for mention tagging.
//! - `PoliticalEntities`: tracked entities with their keyword aliases, used
//!   by the leaning aggregator. Declaration order is preserved.
//!
//! Both ship with a built-in seed mirroring the outlets we track and can be
//! overridden from a JSON file; a bad or missing file falls back to the seed.

use serde::Deserialize;
use std::{fs, path::Path};

/// Keyword lists for sentence-level mention tagging.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliticalKeywords {
    #[serde(default)]
    pub parties: Vec<String>,
    #[serde(default)]
    pub leaders: Vec<String>,
    #[serde(default)]
    pub terms: Vec<String>,
}

impl PoliticalKeywords {
    /// Load from a JSON file, falling back to `default_seed()` on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// All keywords across categories, original casing, declaration order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.parties
            .iter()
            .chain(self.leaders.iter())
            .chain(self.terms.iter())
            .map(String::as_str)
    }

    pub fn default_seed() -> Self {
        fn owned(v: &[&str]) -> Vec<String> {
            v.iter().map(|s| s.to_string()).collect()
        }
        Self {
            parties: owned(&[
                "BJP",
                "Congress",
                "AAP",
                "Aam Aadmi Party",
                "NDA",
                "UPA",
                "RSS",
            ]),
            leaders: owned(&[
                "Modi",
                "Narendra Modi",
                "Rahul Gandhi",
                "Arvind Kejriwal",
                "Sonia Gandhi",
            ]),
            terms: owned(&[
                "government",
                "opposition",
                "politics",
                "election",
                "democracy",
                "parliament",
            ]),
        }
    }
}

/// One tracked entity and the aliases that count as a mention of it.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliticalEntity {
    pub name: String,
    pub aliases: Vec<String>,
}

/// Tracked entities in declaration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PoliticalEntities {
    entities: Vec<PoliticalEntity>,
}

impl PoliticalEntities {
    /// Load from a JSON array file, falling back to `default_seed()` on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoliticalEntity> {
        self.entities.iter()
    }

    pub fn default_seed() -> Self {
        fn entity(name: &str, aliases: &[&str]) -> PoliticalEntity {
            PoliticalEntity {
                name: name.to_string(),
                aliases: aliases.iter().map(|s| s.to_string()).collect(),
            }
        }
        Self {
            entities: vec![
                entity(
                    "BJP",
                    &[
                        "BJP",
                        "Bharatiya Janata Party",
                        "Modi",
                        "Narendra Modi",
                        "NDA",
                        "RSS",
                        "Amit Shah",
                    ],
                ),
                entity(
                    "Congress",
                    &[
                        "Congress",
                        "Indian National Congress",
                        "Rahul Gandhi",
                        "Sonia Gandhi",
                        "UPA",
                        "Priyanka Gandhi",
                    ],
                ),
                entity(
                    "AAP",
                    &["AAP", "Aam Aadmi Party", "Arvind Kejriwal", "Manish Sisodia"],
                ),
            ],
        }
    }
}
