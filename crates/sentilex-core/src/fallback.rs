//! Last-resort detection when no category clears the reporting threshold.

use crate::lexicon::CompiledFallback;
use crate::matcher::TermMatcher;
use crate::types::{Intensity, Sentiment, SentimentResult};
use serde::Serialize;

/// Which fallback stage produced the result, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    /// Regular scoring produced the results.
    None,
    /// A curated stem matched.
    Keyword,
    /// Nothing matched; synthetic neutrality.
    Neutral,
}

impl FallbackTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackTier::None => "none",
            FallbackTier::Keyword => "keyword",
            FallbackTier::Neutral => "neutral",
        }
    }
}

/// First entry, in list order, with a stem starting a word of `text` and no
/// negator in the window before it. `text` must be lower-cased.
pub fn keyword_sweep(
    text: &str,
    entries: &[CompiledFallback],
    matcher: &TermMatcher<'_>,
) -> Option<SentimentResult> {
    entries.iter().find_map(|fallback| {
        let live = fallback.stems.iter().any(|stem| {
            stem.find_iter(text)
                .any(|m| !matcher.is_negated(text, m.start()))
        });
        live.then(|| SentimentResult::new(fallback.entry.sentiment, fallback.entry.score))
    })
}

pub fn neutral_default() -> SentimentResult {
    SentimentResult::new(Sentiment::Neutrality, 100).with_intensity(Intensity::Medium)
}

/// Sweep, then the neutral default. Never empty.
pub fn detect(
    text: &str,
    entries: &[CompiledFallback],
    matcher: &TermMatcher<'_>,
) -> (SentimentResult, FallbackTier) {
    match keyword_sweep(text, entries, matcher) {
        Some(result) => {
            tracing::debug!(sentiment = %result.sentiment, "keyword fallback");
            (result, FallbackTier::Keyword)
        }
        None => {
            tracing::debug!("neutral fallback");
            (neutral_default(), FallbackTier::Neutral)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::CompiledLexicon;

    fn sweep(text: &str) -> (SentimentResult, FallbackTier) {
        detect(
            text,
            &CompiledLexicon::builtin().fallback,
            &TermMatcher::builtin(),
        )
    }

    #[test]
    fn stems_match_word_prefixes() {
        let (r, tier) = sweep("i am a bit worried");
        assert_eq!(tier, FallbackTier::Keyword);
        assert_eq!(r.sentiment, Sentiment::Concern);
        assert_eq!(r.score, 40);
    }

    #[test]
    fn list_order_decides() {
        // both "rush" (urgency) and "thank" (appreciation) are present
        let (r, _) = sweep("thanks, but rush it");
        assert_eq!(r.sentiment, Sentiment::Urgency);
        assert_eq!(r.score, 45);
    }

    #[test]
    fn negated_stems_are_skipped() {
        let (r, tier) = sweep("i am not satisfied with this");
        assert_eq!(tier, FallbackTier::Neutral);
        assert_eq!(r.sentiment, Sentiment::Neutrality);
    }

    #[test]
    fn neutral_default_is_medium() {
        let (r, tier) = sweep("the cat sat on the mat");
        assert_eq!(tier, FallbackTier::Neutral);
        assert_eq!(r.score, 100);
        assert_eq!(r.intensity, Some(Intensity::Medium));
        assert_eq!(r.category.as_deref(), Some("NEUTRALITY"));
    }
}
