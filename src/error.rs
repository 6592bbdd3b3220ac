// src/error.rs
//! Error taxonomy for the analysis pipeline.
//!
//! Only two failures abort an analysis: the article could not be fetched, or
//! too little text survived extraction. Everything downstream of extraction
//! is best-effort and degrades inside the report instead of erroring.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Network failure, timeout, or non-success HTTP status.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Extraction produced too little text to analyze.
    #[error("insufficient article content ({chars} chars)")]
    InsufficientContent { chars: usize },
}

impl AnalysisError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    pub fn is_insufficient_content(&self) -> bool {
        matches!(self, Self::InsufficientContent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_content_message_names_char_count() {
        let err = AnalysisError::InsufficientContent { chars: 42 };
        assert_eq!(
            err.to_string(),
            "insufficient article content (42 chars)"
        );
        assert!(err.is_insufficient_content());
        assert!(!err.is_fetch());
    }
}
