// src/extract.rs
//! Article content extraction.
//!
//! Given raw HTML, pick a best-guess title and body using ordered CSS
//! selector heuristics, then normalize whitespace and detect the language.
//! Chrome-ish user agent and a hard 10s timeout on the outbound fetch.
//!
//! `scraper` documents are immutable, so instead of decomposing non-content
//! elements (script/style/nav/footer/aside/header) we filter them out with
//! an ancestor check wherever text is collected.

use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::language::detect_language;

/// Title used when no selector yields a usable candidate.
pub const DEFAULT_TITLE: &str = "Extracted Article";

/// Paragraphs at or under this length are ignored as boilerplate.
const MIN_PARAGRAPH_CHARS: usize = 20;
/// A content container wins once its joined paragraphs exceed this.
const MIN_CONTAINER_CHARS: usize = 200;
/// Anything shorter than this after cleanup is an extraction failure.
const MIN_BODY_CHARS: usize = 100;
/// Title candidates must exceed this many characters.
const MIN_TITLE_CHARS: usize = 5;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Tags whose subtrees never contribute text.
const STRIP_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "aside", "header"];

/// Title candidates, in priority order.
static TITLE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "h1",
        ".headline",
        ".title",
        r#"[class*="headline"]"#,
        r#"[class*="title"]"#,
        "title",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("title selector"))
    .collect()
});

/// Content containers, in priority order.
static CONTENT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "article",
        ".article-content",
        ".content",
        ".post-content",
        ".story-body",
        r#"[class*="article"]"#,
        r#"[class*="content"]"#,
        r#"[class*="story"]"#,
        ".entry-content",
        "main",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("content selector"))
    .collect()
});

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("paragraph selector"));

/// Extracted article. Produced once; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    pub body_text: String,
    /// ISO language code of the body text.
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Shared HTTP client for article fetching.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .expect("reqwest client")
}

/// Fetch a URL and extract its article content.
///
/// Exactly one GET; no retry. Network errors, timeouts, and non-2xx statuses
/// all surface as [`AnalysisError::Fetch`], distinct from the
/// content-insufficiency failure raised by [`extract_from_html`].
pub async fn fetch_article(
    client: &reqwest::Client,
    url: &str,
) -> Result<ArticleContent, AnalysisError> {
    let t0 = Instant::now();

    let fetch_err = |source: reqwest::Error| {
        warn!(url, error = %source, "article fetch failed");
        counter!("article_fetch_errors_total").increment(1);
        AnalysisError::Fetch {
            url: url.to_string(),
            source,
        }
    };

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;
    let html = response.text().await.map_err(fetch_err)?;

    histogram!("article_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    counter!("article_fetch_total").increment(1);

    extract_from_html(&html, Some(url))
}

/// Extract title, body, and language from raw HTML.
///
/// Deterministic: the same document always yields the same result.
pub fn extract_from_html(
    html: &str,
    source_url: Option<&str>,
) -> Result<ArticleContent, AnalysisError> {
    let document = Html::parse_document(html);

    let title = resolve_title(&document);
    let body_text = resolve_body(&document);

    let chars = body_text.chars().count();
    if chars < MIN_BODY_CHARS {
        debug!(chars, "extracted body below minimum length");
        return Err(AnalysisError::InsufficientContent { chars });
    }

    let language = detect_language(&body_text);

    Ok(ArticleContent {
        title,
        body_text,
        language,
        source_url: source_url.map(str::to_string),
    })
}

/// First selector (in priority order) whose first clean match exceeds the
/// minimum length wins; otherwise the fixed placeholder.
fn resolve_title(document: &Html) -> String {
    for selector in TITLE_SELECTORS.iter() {
        let Some(element) = document.select(selector).find(|el| !in_stripped_region(*el)) else {
            continue;
        };
        let text = element_text(element);
        if text.chars().count() > MIN_TITLE_CHARS {
            return text;
        }
    }
    DEFAULT_TITLE.to_string()
}

/// First content container whose qualifying paragraphs join to something
/// substantial wins; otherwise fall back to every paragraph in the document.
fn resolve_body(document: &Html) -> String {
    for selector in CONTENT_SELECTORS.iter() {
        let Some(container) = document.select(selector).find(|el| !in_stripped_region(*el))
        else {
            continue;
        };
        let joined = joined_paragraphs(container.select(&PARAGRAPH));
        if joined.chars().count() > MIN_CONTAINER_CHARS {
            return joined;
        }
    }

    joined_paragraphs(document.select(&PARAGRAPH))
}

/// Join paragraph texts longer than the boilerplate cutoff with single spaces.
fn joined_paragraphs<'a>(paragraphs: impl Iterator<Item = ElementRef<'a>>) -> String {
    let texts: Vec<String> = paragraphs
        .filter(|p| !in_stripped_region(*p))
        .map(element_text)
        .filter(|t| t.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect();
    texts.join(" ")
}

/// True if the element sits inside a non-content subtree.
fn in_stripped_region(el: ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| STRIP_TAGS.contains(&a.value().name()))
}

/// All descendant text outside non-content subtrees, whitespace-collapsed.
fn element_text(el: ElementRef) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in el.descendants() {
        if let Some(text) = node.value().as_text() {
            let stripped = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| STRIP_TAGS.contains(&a.value().name()));
            if !stripped {
                parts.push(text);
            }
        }
    }
    collapse_whitespace(&parts.join(" "))
}

/// Collapse all whitespace runs (including newlines) to single spaces; trim.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_PARA: &str = "The committee met on Monday to review the proposed changes \
        to the national education framework and heard testimony from several experts.";
    const LONG_PARA_2: &str = "Officials said the review would continue for several weeks \
        before any final recommendation is made to the ministry for consideration.";

    fn article_page() -> String {
        format!(
            r#"<html><head><title>Site | Page Title</title></head><body>
            <header><h1>Site Banner Headline</h1></header>
            <nav><p>Home News Sports Weather Business Technology Entertainment</p></nav>
            <article>
              <h1>Education Framework Under Review</h1>
              <p>{LONG_PARA}</p>
              <p>{LONG_PARA_2}</p>
              <p>Short note.</p>
            </article>
            <footer><p>Copyright notice and a long list of legal boilerplate text here.</p></footer>
            </body></html>"#
        )
    }

    #[test]
    fn title_prefers_content_h1_over_header_banner() {
        let content = extract_from_html(&article_page(), None).unwrap();
        assert_eq!(content.title, "Education Framework Under Review");
    }

    #[test]
    fn body_comes_from_article_container_only() {
        let content = extract_from_html(&article_page(), None).unwrap();
        assert!(content.body_text.contains("committee met on Monday"));
        assert!(!content.body_text.contains("Copyright notice"));
        assert!(!content.body_text.contains("Home News Sports"));
        // Paragraphs at or under 20 chars are boilerplate.
        assert!(!content.body_text.contains("Short note."));
    }

    #[test]
    fn whitespace_is_collapsed() {
        let html = format!(
            "<html><body><article><h1>A\n  Spaced   Out\tTitle</h1><p>{LONG_PARA}</p>\
             <p>{LONG_PARA_2}</p></article></body></html>"
        );
        let content = extract_from_html(&html, None).unwrap();
        assert_eq!(content.title, "A Spaced Out Title");
        assert!(!content.body_text.contains("  "));
        assert!(!content.body_text.contains('\n'));
    }

    #[test]
    fn falls_back_to_document_paragraphs_without_container() {
        let html = format!(
            "<html><body><div><p>{LONG_PARA}</p><p>{LONG_PARA_2}</p></div></body></html>"
        );
        let content = extract_from_html(&html, None).unwrap();
        assert!(content.body_text.contains("committee met on Monday"));
        assert!(content.body_text.contains("final recommendation"));
    }

    #[test]
    fn document_title_used_when_no_heading_qualifies() {
        let html = format!(
            "<html><head><title>Only The Document Title</title></head>\
             <body><p>{LONG_PARA}</p><p>{LONG_PARA_2}</p></body></html>"
        );
        let content = extract_from_html(&html, None).unwrap();
        assert_eq!(content.title, "Only The Document Title");
    }

    #[test]
    fn placeholder_title_when_nothing_usable() {
        let html = format!(
            "<html><body><h1>Hi</h1><p>{LONG_PARA}</p><p>{LONG_PARA_2}</p></body></html>"
        );
        let content = extract_from_html(&html, None).unwrap();
        assert_eq!(content.title, DEFAULT_TITLE);
    }

    #[test]
    fn thin_page_is_insufficient_content() {
        let html = "<html><body><article><p>Far too little text to analyze here.</p>\
                    </article></body></html>";
        let err = extract_from_html(html, None).unwrap_err();
        assert!(err.is_insufficient_content(), "got {err:?}");
    }

    #[test]
    fn script_and_style_text_never_leaks() {
        let html = format!(
            "<html><body><article>\
             <script>var tracking = 'SCRIPT_MARKER_TEXT_SHOULD_NOT_APPEAR';</script>\
             <style>.x {{ color: red; }}</style>\
             <p>{LONG_PARA}</p><p>{LONG_PARA_2}</p></article></body></html>"
        );
        let content = extract_from_html(&html, None).unwrap();
        assert!(!content.body_text.contains("SCRIPT_MARKER"));
        assert!(!content.body_text.contains("color: red"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let html = article_page();
        let a = extract_from_html(&html, Some("https://example.com/a")).unwrap();
        let b = extract_from_html(&html, Some("https://example.com/a")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn language_detected_for_english_body() {
        let content = extract_from_html(&article_page(), None).unwrap();
        assert_eq!(content.language, "en");
    }

    #[test]
    fn class_substring_selectors_find_containers() {
        let html = format!(
            r#"<html><body><div class="main-story-wrap">
               <p>{LONG_PARA}</p><p>{LONG_PARA_2}</p></div></body></html>"#
        );
        let content = extract_from_html(&html, None).unwrap();
        assert!(content.body_text.contains("committee met on Monday"));
    }
}
