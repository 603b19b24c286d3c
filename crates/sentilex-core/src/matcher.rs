//! Term matching with a local modifier window.
//!
//! Input text is expected to be lower-cased already. Each occurrence of a term
//! is weighted by the modifiers found in the last few words before it.

use crate::lexicon::{CompiledLexicon, CompiledModifier, CompiledTerm};
use crate::types::CommunicationContext;
use serde::Serialize;
use std::collections::BTreeMap;

/// Characters inspected before a match.
pub const WINDOW_CHARS: usize = 25;
/// Words kept from the character window.
pub const WINDOW_WORDS: usize = 5;
/// Applied once when any negator sits in the window.
pub const NEGATION_FACTOR: f64 = -0.5;
/// Applied first when the term is tagged with the active context.
pub const CONTEXT_BOOST: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermMatch {
    pub term: &'static str,
    /// Final adjusted weight of this occurrence.
    pub weight: f64,
    pub negated: bool,
    pub intensified: bool,
    pub diminished: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSet {
    pub total: f64,
    pub context_counts: BTreeMap<CommunicationContext, usize>,
    pub matches: Vec<TermMatch>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Contexts of the matched terms, most frequent first. Equal counts keep
    /// enumeration order.
    pub fn dominant_contexts(&self) -> Vec<String> {
        let mut counts: Vec<(CommunicationContext, usize)> =
            self.context_counts.iter().map(|(c, n)| (*c, *n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts.into_iter().map(|(c, _)| c.as_str().to_string()).collect()
    }

    fn push(&mut self, term: &CompiledTerm, found: TermMatch) {
        self.total += found.weight;
        for ctx in term.entry.contexts {
            *self.context_counts.entry(*ctx).or_insert(0) += 1;
        }
        self.matches.push(found);
    }
}

/// Finds lexicon terms and their modifiers in lower-cased text.
#[derive(Debug, Clone, Copy)]
pub struct TermMatcher<'a> {
    lexicon: &'a CompiledLexicon,
}

impl TermMatcher<'static> {
    pub fn builtin() -> Self {
        Self::new(CompiledLexicon::builtin())
    }
}

impl<'a> TermMatcher<'a> {
    pub fn new(lexicon: &'a CompiledLexicon) -> Self {
        Self { lexicon }
    }

    pub fn find_matches(
        &self,
        text: &str,
        terms: &[CompiledTerm],
        context: CommunicationContext,
    ) -> MatchSet {
        let mut set = MatchSet::default();
        for term in terms {
            for start in occurrences(text, term) {
                let found = self.weigh(text, start, term, context);
                tracing::trace!(
                    term = term.entry.term,
                    weight = found.weight,
                    negated = found.negated,
                    "term match"
                );
                set.push(term, found);
            }
        }
        set
    }

    /// True when a negator appears in the window before byte offset `start`.
    pub fn is_negated(&self, text: &str, start: usize) -> bool {
        let window = lookbehind(text, start);
        nearest(&self.lexicon.negators, &window).is_some()
    }

    fn weigh(
        &self,
        text: &str,
        start: usize,
        term: &CompiledTerm,
        context: CommunicationContext,
    ) -> TermMatch {
        let mut weight = f64::from(term.entry.weight);
        if term.entry.applies_to(context) {
            weight *= CONTEXT_BOOST;
        }

        let window = lookbehind(text, start);
        let negated = nearest(&self.lexicon.negators, &window).is_some();
        if negated {
            weight *= NEGATION_FACTOR;
        }
        let amplifier = nearest(&self.lexicon.amplifiers, &window);
        if let Some(m) = amplifier {
            weight *= m;
        }
        let diminisher = nearest(&self.lexicon.diminishers, &window);
        if let Some(m) = diminisher {
            weight *= m;
        }

        TermMatch {
            term: term.entry.term,
            weight,
            negated,
            intensified: amplifier.is_some(),
            diminished: diminisher.is_some(),
        }
    }
}

/// Byte offsets of every occurrence of `term` in `text`.
fn occurrences(text: &str, term: &CompiledTerm) -> Vec<usize> {
    match &term.pattern {
        Some(re) => re.find_iter(text).map(|m| m.start()).collect(),
        None => text.match_indices(term.entry.term).map(|(i, _)| i).collect(),
    }
}

/// The last `WINDOW_WORDS` whole words within the `WINDOW_CHARS` characters
/// before `start`, joined by single spaces. A word cut by the character limit
/// is left out.
pub(crate) fn lookbehind(text: &str, start: usize) -> String {
    let before = &text[..start];
    let cut = before
        .char_indices()
        .rev()
        .nth(WINDOW_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let tail = &before[cut..];
    let mut words: Vec<&str> = tail.split_whitespace().collect();
    let split_word = before[..cut]
        .chars()
        .next_back()
        .is_some_and(|c| !c.is_whitespace())
        && tail.chars().next().is_some_and(|c| !c.is_whitespace());
    if split_word && !words.is_empty() {
        words.remove(0);
    }
    let from = words.len().saturating_sub(WINDOW_WORDS);
    words[from..].join(" ")
}

/// Weight of the modifier whose match ends closest to the end of `window`.
fn nearest(modifiers: &[CompiledModifier], window: &str) -> Option<f64> {
    modifiers
        .iter()
        .filter_map(|m| {
            m.pattern
                .find_iter(window)
                .last()
                .map(|found| (found.end(), m.entry.weight))
        })
        .max_by_key(|(end, _)| *end)
        .map(|(_, weight)| weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    fn matches_for(text: &str, sentiment: Sentiment, context: CommunicationContext) -> MatchSet {
        let lex = CompiledLexicon::builtin();
        let cat = lex.category(sentiment).unwrap();
        TermMatcher::builtin().find_matches(text, &cat.terms, context)
    }

    #[test]
    fn window_keeps_last_five_words() {
        let text = "a b c d e f g target";
        let start = text.find("target").unwrap();
        assert_eq!(lookbehind(text, start), "c d e f g");
    }

    #[test]
    fn window_is_bounded_by_characters() {
        let text = "extremely long preamble that goes on and on target";
        let start = text.find("target").unwrap();
        let window = lookbehind(text, start);
        assert!(!window.contains("extremely"));
        assert!(window.chars().count() <= WINDOW_CHARS);
    }

    #[test]
    fn window_respects_char_boundaries() {
        let text = "très très très très très ému content";
        let start = text.find("content").unwrap();
        let window = lookbehind(text, start);
        assert!(window.ends_with("ému"));
    }

    #[test]
    fn window_drops_word_cut_by_limit() {
        let text = "the piano sounds gorgeous to us satisfied";
        let start = text.find("satisfied").unwrap();
        assert_eq!(lookbehind(text, start), "sounds gorgeous to us");

        let set = matches_for(text, Sentiment::Satisfaction, CommunicationContext::Networking);
        assert!(!set.matches[0].negated);
        assert!(set.total > 0.0);
    }

    #[test]
    fn window_ignores_negator_inside_cut_word() {
        let text = "a knot in the old red ropes satisfied";
        let start = text.find("satisfied").unwrap();
        assert_eq!(lookbehind(text, start), "in the old red ropes");
        assert!(!TermMatcher::builtin().is_negated(text, start));
    }

    #[test]
    fn window_keeps_word_starting_at_limit() {
        // The limit lands on the space after "zz", so no word is cut.
        let text = "zz very much so at the end satisfied";
        let start = text.find("satisfied").unwrap();
        assert_eq!(lookbehind(text, start), "much so at the end");
    }

    #[test]
    fn word_terms_count_every_occurrence() {
        let set = matches_for("urgent, urgent, urgent", Sentiment::Urgency, CommunicationContext::Networking);
        assert_eq!(set.matches.len(), 3);
        assert!((set.total - 24.0).abs() < 1e-9);
    }

    #[test]
    fn word_terms_respect_boundaries() {
        let set = matches_for("the resurgent market", Sentiment::Urgency, CommunicationContext::Networking);
        assert!(set.is_empty());
    }

    #[test]
    fn phrases_match_as_substrings() {
        let set = matches_for(
            "please send it as soon as possible",
            Sentiment::Urgency,
            CommunicationContext::Networking,
        );
        assert_eq!(set.matches.len(), 1);
        assert_eq!(set.matches[0].term, "as soon as possible");
    }

    #[test]
    fn context_boost_applies_to_tagged_terms() {
        let plain = matches_for("this is urgent", Sentiment::Urgency, CommunicationContext::Networking);
        let boosted = matches_for("this is urgent", Sentiment::Urgency, CommunicationContext::Email);
        assert!((plain.total - 8.0).abs() < 1e-9);
        assert!((boosted.total - 9.6).abs() < 1e-9);
    }

    #[test]
    fn negator_inverts_and_attenuates() {
        let set = matches_for("i am not satisfied", Sentiment::Satisfaction, CommunicationContext::Meeting);
        assert_eq!(set.matches.len(), 1);
        assert!(set.matches[0].negated);
        assert!((set.total + 3.5).abs() < 1e-9);
    }

    #[test]
    fn nearest_amplifier_wins() {
        let set = matches_for(
            "extremely and very frustrated",
            Sentiment::Frustration,
            CommunicationContext::Networking,
        );
        let m = &set.matches[0];
        assert!(m.intensified);
        assert!((m.weight - 7.0 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn modifiers_compose() {
        let set = matches_for(
            "not extremely somewhat frustrated",
            Sentiment::Frustration,
            CommunicationContext::Networking,
        );
        let m = &set.matches[0];
        assert!(m.negated && m.intensified && m.diminished);
        assert!((m.weight - 7.0 * -0.5 * 1.8 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn negator_does_not_match_inside_words() {
        let matcher = TermMatcher::builtin();
        let text = "you know i am satisfied";
        assert!(!matcher.is_negated(text, text.find("satisfied").unwrap()));
        let text = "i am not satisfied";
        assert!(matcher.is_negated(text, text.find("satisfied").unwrap()));
    }

    #[test]
    fn dominant_contexts_sorted_by_count() {
        let set = matches_for(
            "urgent deadline as soon as possible",
            Sentiment::Urgency,
            CommunicationContext::Networking,
        );
        let contexts = set.dominant_contexts();
        assert_eq!(contexts[0], "EMAIL");
        assert!(contexts.contains(&"PROJECT".to_string()));
    }
}
