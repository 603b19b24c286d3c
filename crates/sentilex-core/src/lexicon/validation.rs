//! Offline consistency checks over a [`Lexicon`].
//!
//! The built-in tables are constants, so any issue here is an authoring defect.
//! A unit test keeps the built-in lexicon clean; `sentilex lexicon validate`
//! exposes the same pass on the command line.

use super::{Lexicon, ModifierEntry, ModifierKind};
use crate::context;
use crate::types::{CommunicationContext, Sentiment};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum LexiconIssue {
    #[error("sentiment '{sentiment}' has no category")]
    MissingCategory { sentiment: Sentiment },

    #[error("sentiment '{sentiment}' has {count} categories")]
    DuplicateCategory { sentiment: Sentiment, count: usize },

    #[error("{sentiment}: term '{term}' has weight {weight}, expected 1..=9")]
    WeightOutOfRange {
        sentiment: Sentiment,
        term: String,
        weight: u8,
    },

    #[error("{sentiment}: term '{term}' must be non-empty, trimmed and lower-case")]
    MalformedTerm { sentiment: Sentiment, term: String },

    #[error("{sentiment}: term '{term}' phrase flag does not match its whitespace")]
    PhraseFlagMismatch { sentiment: Sentiment, term: String },

    #[error("{sentiment}: duplicate term '{term}'")]
    DuplicateTerm { sentiment: Sentiment, term: String },

    #[error("{kind:?} '{term}' has weight {weight} outside its range")]
    ModifierWeightOutOfRange {
        kind: ModifierKind,
        term: String,
        weight: f64,
    },

    #[error("duplicate {kind:?} '{term}'")]
    DuplicateModifier { kind: ModifierKind, term: String },

    #[error("grammar rule '{name}' does not compile: {reason}")]
    InvalidGrammarPattern { name: String, reason: String },

    #[error("{table} marker '{marker}' does not compile: {reason}")]
    InvalidContextMarker {
        table: String,
        marker: String,
        reason: String,
    },

    #[error("context {context} lists '{sentiment}' more than once")]
    DuplicateContextSentiment {
        context: CommunicationContext,
        sentiment: Sentiment,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexiconReport {
    pub categories: usize,
    pub terms: usize,
    pub issues: Vec<LexiconIssue>,
}

impl LexiconReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn validate(lexicon: &Lexicon) -> LexiconReport {
    let mut issues = Vec::new();

    check_categories(lexicon, &mut issues);
    check_modifiers(ModifierKind::Amplifier, &lexicon.amplifiers, &mut issues);
    check_modifiers(ModifierKind::Diminisher, &lexicon.diminishers, &mut issues);
    check_modifiers(ModifierKind::Negator, &lexicon.negators, &mut issues);

    for rule in &lexicon.grammar {
        if let Err(e) = Regex::new(rule.pattern) {
            issues.push(LexiconIssue::InvalidGrammarPattern {
                name: rule.name.to_string(),
                reason: e.to_string(),
            });
        }
    }

    check_context_markers(&mut issues);

    for modifier in &lexicon.context_modifiers {
        let mut seen = HashSet::new();
        for &sentiment in modifier.amplify.iter().chain(modifier.diminish) {
            if !seen.insert(sentiment) {
                issues.push(LexiconIssue::DuplicateContextSentiment {
                    context: modifier.context,
                    sentiment,
                });
            }
        }
    }

    LexiconReport {
        categories: lexicon.categories.len(),
        terms: lexicon.term_count(),
        issues,
    }
}

/// The classifier's marker tables live beside the classifier, not in
/// [`Lexicon`], but they are authored the same way.
fn check_context_markers(issues: &mut Vec<LexiconIssue>) {
    for (table, marker) in context::marker_fragments() {
        if let Err(e) = context::marker_pattern(marker) {
            issues.push(LexiconIssue::InvalidContextMarker {
                table,
                marker: marker.to_string(),
                reason: e.to_string(),
            });
        }
    }
}

fn check_categories(lexicon: &Lexicon, issues: &mut Vec<LexiconIssue>) {
    for sentiment in Sentiment::ALL {
        let count = lexicon
            .categories
            .iter()
            .filter(|c| c.id == sentiment)
            .count();
        match count {
            0 => issues.push(LexiconIssue::MissingCategory { sentiment }),
            1 => {}
            count => issues.push(LexiconIssue::DuplicateCategory { sentiment, count }),
        }
    }

    for category in &lexicon.categories {
        let sentiment = category.id;
        let mut seen = HashSet::new();
        for entry in &category.terms {
            let term = entry.term;
            if !(1..=9).contains(&entry.weight) {
                issues.push(LexiconIssue::WeightOutOfRange {
                    sentiment,
                    term: term.to_string(),
                    weight: entry.weight,
                });
            }
            if term.is_empty() || term.trim() != term || term.to_lowercase() != term {
                issues.push(LexiconIssue::MalformedTerm {
                    sentiment,
                    term: term.to_string(),
                });
            }
            if entry.is_phrase != term.contains(char::is_whitespace) {
                issues.push(LexiconIssue::PhraseFlagMismatch {
                    sentiment,
                    term: term.to_string(),
                });
            }
            if !seen.insert(term) {
                issues.push(LexiconIssue::DuplicateTerm {
                    sentiment,
                    term: term.to_string(),
                });
            }
        }
    }
}

fn check_modifiers(kind: ModifierKind, entries: &[ModifierEntry], issues: &mut Vec<LexiconIssue>) {
    let mut seen = HashSet::new();
    for entry in entries {
        let in_range = match kind {
            ModifierKind::Amplifier => entry.weight > 1.0,
            ModifierKind::Diminisher => entry.weight > 0.0 && entry.weight < 1.0,
            ModifierKind::Negator => entry.weight < 0.0,
        };
        if !in_range {
            issues.push(LexiconIssue::ModifierWeightOutOfRange {
                kind,
                term: entry.term.to_string(),
                weight: entry.weight,
            });
        }
        if !seen.insert(entry.term) {
            issues.push(LexiconIssue::DuplicateModifier {
                kind,
                term: entry.term.to_string(),
            });
        }
    }
}
