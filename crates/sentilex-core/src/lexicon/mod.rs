//! Lexicon store: categories, modifier tables, grammar rules.
//!
//! The tables are compiled-in constants assembled once into a process-wide
//! [`Lexicon`]. Nothing here is mutated after initialization; the scoring path
//! reads it through [`Lexicon::builtin`] and [`CompiledLexicon::builtin`].

mod categories;
mod compiled;
mod grammar;
mod modifiers;
pub mod validation;

pub use compiled::{CompiledCategory, CompiledFallback, CompiledLexicon, CompiledModifier, CompiledRule, CompiledTerm};
pub use validation::{validate, LexiconIssue, LexiconReport};

use crate::types::{CommunicationContext, Sentiment};
use serde::Serialize;
use std::sync::LazyLock;

/// Weighted keyword or phrase belonging to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermEntry {
    pub term: &'static str,
    /// Base weight, 1..=9.
    pub weight: u8,
    /// Matched as a contiguous substring instead of a boundary-anchored token.
    pub is_phrase: bool,
    /// Contexts in which the term is boosted. Empty means context-neutral.
    #[serde(skip_serializing_if = "no_contexts")]
    pub contexts: &'static [CommunicationContext],
}

fn no_contexts(contexts: &&'static [CommunicationContext]) -> bool {
    contexts.is_empty()
}

impl TermEntry {
    pub const fn word(
        term: &'static str,
        weight: u8,
        contexts: &'static [CommunicationContext],
    ) -> Self {
        Self {
            term,
            weight,
            is_phrase: false,
            contexts,
        }
    }

    pub const fn phrase(
        term: &'static str,
        weight: u8,
        contexts: &'static [CommunicationContext],
    ) -> Self {
        Self {
            term,
            weight,
            is_phrase: true,
            contexts,
        }
    }

    pub fn applies_to(&self, context: CommunicationContext) -> bool {
        self.contexts.contains(&context)
    }
}

/// Illustrative exemplars per intensity bucket. Not consulted in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntensityLevels {
    pub low: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub high: &'static [&'static str],
}

/// One sentiment category and its terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub id: Sentiment,
    pub label: String,
    pub description: &'static str,
    pub terms: Vec<TermEntry>,
    pub intensity_levels: IntensityLevels,
    pub antonyms: &'static [&'static str],
}

impl CategoryEntry {
    pub fn new(id: Sentiment, description: &'static str) -> Self {
        Self {
            id,
            label: id.label(),
            description,
            terms: Vec::new(),
            intensity_levels: IntensityLevels::default(),
            antonyms: &[],
        }
    }

    pub fn terms(mut self, terms: Vec<TermEntry>) -> Self {
        self.terms = terms;
        self
    }

    pub fn intensity(
        mut self,
        low: &'static [&'static str],
        medium: &'static [&'static str],
        high: &'static [&'static str],
    ) -> Self {
        self.intensity_levels = IntensityLevels { low, medium, high };
        self
    }

    pub fn antonyms(mut self, antonyms: &'static [&'static str]) -> Self {
        self.antonyms = antonyms;
        self
    }
}

/// Kind of a modifier entry. Determines the valid weight range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    Amplifier,
    Diminisher,
    Negator,
}

/// Amplifier, diminisher or negator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifierEntry {
    pub term: &'static str,
    pub weight: f64,
    pub is_phrase: bool,
}

impl ModifierEntry {
    pub const fn word(term: &'static str, weight: f64) -> Self {
        Self {
            term,
            weight,
            is_phrase: false,
        }
    }

    pub const fn phrase(term: &'static str, weight: f64) -> Self {
        Self {
            term,
            weight,
            is_phrase: true,
        }
    }
}

/// Pattern over the raw text whose presence scales every category score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammaticalRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub multiplier: f64,
}

/// Per-context amplify/diminish sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextModifier {
    pub context: CommunicationContext,
    pub amplify: &'static [Sentiment],
    pub diminish: &'static [Sentiment],
}

/// Curated high-signal stems used when nothing clears the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackEntry {
    pub sentiment: Sentiment,
    pub stems: &'static [&'static str],
    pub score: u8,
}

/// The full lexicon.
#[derive(Debug, Clone, Serialize)]
pub struct Lexicon {
    pub categories: Vec<CategoryEntry>,
    pub amplifiers: Vec<ModifierEntry>,
    pub diminishers: Vec<ModifierEntry>,
    pub negators: Vec<ModifierEntry>,
    pub grammar: Vec<GrammaticalRule>,
    pub context_modifiers: Vec<ContextModifier>,
    pub fallback: Vec<FallbackEntry>,
}

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    categories: categories::default_categories(),
    amplifiers: modifiers::amplifiers(),
    diminishers: modifiers::diminishers(),
    negators: modifiers::negators(),
    grammar: grammar::default_rules(),
    context_modifiers: modifiers::context_modifiers(),
    fallback: modifiers::fallback_entries(),
});

impl Lexicon {
    /// The compiled-in lexicon, built on first access.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn category(&self, id: Sentiment) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn modifiers(&self, kind: ModifierKind) -> &[ModifierEntry] {
        match kind {
            ModifierKind::Amplifier => &self.amplifiers,
            ModifierKind::Diminisher => &self.diminishers,
            ModifierKind::Negator => &self.negators,
        }
    }

    pub fn context_modifier(&self, context: CommunicationContext) -> Option<&ContextModifier> {
        self.context_modifiers.iter().find(|m| m.context == context)
    }

    pub fn term_count(&self) -> usize {
        self.categories.iter().map(|c| c.terms.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_sentiment() {
        let lex = Lexicon::builtin();
        for s in Sentiment::ALL {
            let cat = lex.category(s).unwrap_or_else(|| panic!("missing {}", s));
            assert!(!cat.terms.is_empty(), "{} has no terms", s);
            assert_eq!(cat.label, s.label());
        }
    }

    #[test]
    fn builtin_has_modifier_tables() {
        let lex = Lexicon::builtin();
        assert!(lex.modifiers(ModifierKind::Amplifier).iter().any(|m| m.term == "very"));
        assert!(lex.modifiers(ModifierKind::Diminisher).iter().any(|m| m.term == "somewhat"));
        assert!(lex.modifiers(ModifierKind::Negator).iter().any(|m| m.term == "not"));
        assert!(lex.term_count() > 200);
    }

    #[test]
    fn context_modifier_lookup() {
        let lex = Lexicon::builtin();
        let email = lex.context_modifier(CommunicationContext::Email).unwrap();
        assert!(email.amplify.contains(&Sentiment::Urgency));
        assert!(email.diminish.contains(&Sentiment::Frustration));
        assert!(lex.context_modifier(CommunicationContext::Networking).is_none());
    }
}
