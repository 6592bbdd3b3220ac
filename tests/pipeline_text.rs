//! End-to-end pipeline behavior over manual text input.

use news_bias_analyzer::BiasPipeline;

const SAMPLE: &str = "Modi government announced new policy. \
    Critics say Congress opposed the plan for selfish reasons.";

#[tokio::test]
async fn sample_text_produces_full_report() {
    let pipeline = BiasPipeline::new();
    let report = pipeline
        .analyze_text(SAMPLE, Some("Policy Row"))
        .await
        .unwrap();

    assert_eq!(report.title, "Policy Row");
    assert_eq!(report.language, "en");
    assert!(report.bias_analysis.is_some());

    // Two qualifying sentences, in document order.
    assert_eq!(report.tone_breakdown.len(), 2);
    let first = &report.tone_breakdown[0];
    let second = &report.tone_breakdown[1];
    assert!(first.sentence.starts_with("Modi government"));
    assert!(first.mentions.contains(&"Modi".to_string()));
    assert!(first.mentions.contains(&"government".to_string()));
    assert!(second.mentions.contains(&"Congress".to_string()));

    // Both mentioned parties get a leaning entry; AAP is never mentioned.
    assert!(report.political_leaning.contains_key("BJP"));
    assert!(report.political_leaning.contains_key("Congress"));
    assert!(!report.political_leaning.contains_key("AAP"));
    // "selfish" drags the Congress sentence negative.
    assert!(report.political_leaning["Congress"] < 0.0);
}

#[tokio::test]
async fn report_is_deterministic_for_same_input() {
    let pipeline = BiasPipeline::new();
    let a = pipeline.analyze_text(SAMPLE, None).await.unwrap();
    let b = pipeline.analyze_text(SAMPLE, None).await.unwrap();

    let a = serde_json::to_value(&a).unwrap();
    let b = serde_json::to_value(&b).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn report_floats_are_rounded_to_three_decimals() {
    let pipeline = BiasPipeline::new();
    let report = pipeline.analyze_text(SAMPLE, None).await.unwrap();

    let round3 = |x: f32| (x * 1000.0).round() / 1000.0;
    if let Some(bias) = &report.bias_analysis {
        assert_eq!(bias.polarity, round3(bias.polarity));
        assert_eq!(bias.subjectivity, round3(bias.subjectivity));
        assert_eq!(bias.confidence, round3(bias.confidence));
    }
    for tone in &report.tone_breakdown {
        assert_eq!(tone.polarity, round3(tone.polarity));
        assert_eq!(tone.subjectivity, round3(tone.subjectivity));
    }
    for v in report.political_leaning.values() {
        assert_eq!(*v, round3(*v));
    }
}

#[tokio::test]
async fn text_without_political_content_still_reports() {
    let pipeline = BiasPipeline::new();
    let report = pipeline
        .analyze_text(
            "The harvest finished early this year after an unusually dry and warm season. \
             Local markets reported steady prices throughout the month.",
            None,
        )
        .await
        .unwrap();

    assert!(report.political_leaning.is_empty());
    assert!(report
        .tone_breakdown
        .iter()
        .all(|t| t.mentions.is_empty()));
}
