use super::*;
use crate::types::{CommunicationContext, Intensity};
use proptest::prelude::*;

fn score_of(results: &[SentimentResult], sentiment: Sentiment) -> Option<u8> {
    results
        .iter()
        .find(|r| r.sentiment == sentiment)
        .map(|r| r.score)
}

#[test]
fn blank_input_yields_nothing() {
    assert!(analyze("").is_empty());
    assert!(analyze("   \n\t ").is_empty());
    let report = SentimentAnalyzer::new().explain("  ");
    assert!(report.context.is_none());
    assert_eq!(report.fallback, FallbackTier::None);
}

#[test]
fn thank_you_for_your_time_is_appreciation() {
    let results = analyze("Thank you for your time");
    assert_eq!(results[0].sentiment, Sentiment::Appreciation);
    assert!(results[0].score >= 30);
    assert_eq!(results[0].category.as_deref(), Some("APPRECIATION"));
}

#[test]
fn shouting_raises_urgency() {
    let calm = score_of(&analyze("this is urgent"), Sentiment::Urgency).unwrap();
    let loud = score_of(&analyze("THIS IS URGENT!!!"), Sentiment::Urgency).unwrap();
    assert_eq!(calm, 48);
    assert_eq!(loud, 100);
    assert!(loud > calm);
}

#[test]
fn urgency_result_lists_term_contexts() {
    let results = analyze("this is urgent");
    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r.intensity, Some(Intensity::Medium));
    assert_eq!(
        r.context,
        Some(vec!["EMAIL".to_string(), "MEETING".to_string()])
    );
}

#[test]
fn word_fragment_before_window_is_not_a_negator() {
    let piano = analyze("the piano sounds gorgeous to us satisfied");
    let violin = analyze("the violin sounds gorgeous to us satisfied");
    assert_eq!(piano, violin);
    assert_eq!(score_of(&piano, Sentiment::Satisfaction), Some(35));
}

#[test]
fn negation_suppresses_satisfaction() {
    let plain = score_of(&analyze("I am satisfied with this"), Sentiment::Satisfaction);
    assert_eq!(plain, Some(35));

    let negated = analyze("I am not satisfied with this");
    assert_eq!(score_of(&negated, Sentiment::Satisfaction), None);
    assert_eq!(negated[0].sentiment, Sentiment::Neutrality);
}

#[test]
fn amplifier_raises_frustration() {
    let plain = score_of(&analyze("I am frustrated"), Sentiment::Frustration).unwrap();
    let very = score_of(&analyze("I am very frustrated"), Sentiment::Frustration).unwrap();
    assert_eq!(plain, 35);
    assert!(very > plain);
}

#[test]
fn email_wrapper_changes_concern() {
    let analyzer = SentimentAnalyzer::new();
    let wrapped = analyzer.explain("Dear team,\nI am concerned.\nRegards,");
    let bare = analyzer.explain("I am concerned");

    assert_eq!(
        wrapped.context.as_ref().map(|c| c.context),
        Some(CommunicationContext::Email)
    );
    assert_eq!(
        bare.context.as_ref().map(|c| c.context),
        Some(CommunicationContext::Meeting)
    );

    let wrapped_score = score_of(&wrapped.results, Sentiment::Concern).unwrap();
    let bare_score = score_of(&bare.results, Sentiment::Concern).unwrap();
    assert_eq!(wrapped_score, 85);
    // MEETING diminishes concern below the threshold; the stem sweep catches it.
    assert_eq!(bare.fallback, FallbackTier::Keyword);
    assert_eq!(bare_score, 40);
}

#[test]
fn equal_scores_follow_enum_order() {
    let results = analyze("THANK YOU. THIS IS URGENT!!!");
    let order: Vec<(Sentiment, u8)> = results.iter().map(|r| (r.sentiment, r.score)).collect();
    assert_eq!(
        order,
        vec![(Sentiment::Appreciation, 100), (Sentiment::Urgency, 100)]
    );
}

#[test]
fn threshold_is_configurable() {
    let strict = SentimentAnalyzer::with_config(AnalyzerConfig {
        report_threshold: 50,
    });
    let report = strict.explain("I am frustrated");
    assert_eq!(report.fallback, FallbackTier::Keyword);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].sentiment, Sentiment::Frustration);
    assert_eq!(report.results[0].score, 45);
}

#[test]
fn neutral_default_when_nothing_matches() {
    let results = analyze("The cat sat on the mat.");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].sentiment, Sentiment::Neutrality);
    assert_eq!(results[0].score, 100);
    assert_eq!(results[0].intensity, Some(Intensity::Medium));
}

#[test]
fn explain_traces_negated_matches() {
    let report = SentimentAnalyzer::new().explain("I am not satisfied with this");
    let trace = report
        .categories
        .iter()
        .find(|c| c.sentiment == Sentiment::Satisfaction)
        .unwrap();
    assert!(!trace.emitted);
    assert_eq!(trace.score, 0);
    assert!(trace.matches[0].negated);
    assert_eq!(report.fallback, FallbackTier::Neutral);
}

#[test]
fn explain_lists_fired_grammar_rules() {
    let report = SentimentAnalyzer::new().explain("THIS IS URGENT!!!");
    assert_eq!(report.grammar_rules, vec!["exclamation", "all_caps"]);
    assert!((report.grammar_multiplier - 2.4).abs() < 1e-9);
}

#[test]
fn results_serialize_as_json_list() {
    let json = serde_json::to_value(analyze("this is urgent")).unwrap();
    assert_eq!(json[0]["sentiment"], "urgency");
    assert_eq!(json[0]["score"], 48);
    assert_eq!(json[0]["intensity"], "medium");
}

const VOCAB: &[&str] = &[
    "i", "am", "not", "very", "somewhat", "thank", "you", "urgent", "frustrated", "dear",
    "regards", "concerned", "meeting", "project", "deadline", "proud", "confused", "!!!", "?",
    "ASAP", "team", "great", "job", "well", "done", "hardly", "extremely", "as", "soon",
    "possible", "\n-", "overwhelmed", "hopeful",
];

fn vocab_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..30).prop_map(|words| words.join(" "))
}

fn check_invariants(text: &str) -> Result<(), TestCaseError> {
    let results = analyze(text);
    if text.trim().is_empty() {
        prop_assert!(results.is_empty());
        return Ok(());
    }
    prop_assert!(!results.is_empty());
    for r in &results {
        prop_assert!(r.score <= 100);
    }
    for pair in results.windows(2) {
        prop_assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            prop_assert!(pair[0].sentiment < pair[1].sentiment);
        }
    }
    prop_assert_eq!(&results, &analyze(text));
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_for_arbitrary_text(text in "\\PC{0,200}") {
        check_invariants(&text)?;
    }

    #[test]
    fn invariants_hold_for_lexicon_text(text in vocab_text()) {
        check_invariants(&text)?;
    }
}
