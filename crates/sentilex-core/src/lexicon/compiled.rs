//! Regex forms of the lexicon, compiled once per process.

use super::{CategoryEntry, FallbackEntry, GrammaticalRule, Lexicon, ModifierEntry, TermEntry};
use crate::types::Sentiment;
use regex::Regex;
use std::sync::LazyLock;

/// A term plus its boundary-anchored pattern. Phrases carry no pattern; they
/// are located by substring search.
#[derive(Debug)]
pub struct CompiledTerm {
    pub entry: &'static TermEntry,
    pub pattern: Option<Regex>,
}

#[derive(Debug)]
pub struct CompiledCategory {
    pub id: Sentiment,
    pub terms: Vec<CompiledTerm>,
}

#[derive(Debug)]
pub struct CompiledModifier {
    pub entry: &'static ModifierEntry,
    pub pattern: Regex,
}

#[derive(Debug)]
pub struct CompiledRule {
    pub rule: &'static GrammaticalRule,
    pub pattern: Regex,
}

#[derive(Debug)]
pub struct CompiledFallback {
    pub entry: &'static FallbackEntry,
    pub stems: Vec<Regex>,
}

#[derive(Debug)]
pub struct CompiledLexicon {
    pub categories: Vec<CompiledCategory>,
    pub amplifiers: Vec<CompiledModifier>,
    pub diminishers: Vec<CompiledModifier>,
    pub negators: Vec<CompiledModifier>,
    pub grammar: Vec<CompiledRule>,
    pub fallback: Vec<CompiledFallback>,
}

static COMPILED: LazyLock<CompiledLexicon> =
    LazyLock::new(|| CompiledLexicon::compile(Lexicon::builtin()));

/// `\bterm\b` with metacharacters escaped.
pub(crate) fn word_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(term)))
}

/// `\bstem` with metacharacters escaped; matches any word starting with `stem`.
pub(crate) fn stem_pattern(stem: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}", regex::escape(stem)))
}

impl CompiledLexicon {
    pub fn builtin() -> &'static CompiledLexicon {
        &COMPILED
    }

    /// Compile every pattern of `lexicon`. Entries whose pattern fails to
    /// compile are logged and skipped.
    pub fn compile(lexicon: &'static Lexicon) -> Self {
        Self {
            categories: lexicon.categories.iter().map(compile_category).collect(),
            amplifiers: compile_modifiers(&lexicon.amplifiers),
            diminishers: compile_modifiers(&lexicon.diminishers),
            negators: compile_modifiers(&lexicon.negators),
            grammar: compile_rules(&lexicon.grammar),
            fallback: lexicon.fallback.iter().map(compile_fallback).collect(),
        }
    }

    pub fn category(&self, id: Sentiment) -> Option<&CompiledCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

fn compile_category(category: &'static CategoryEntry) -> CompiledCategory {
    let terms = category
        .terms
        .iter()
        .filter_map(|entry| {
            if entry.is_phrase {
                return Some(CompiledTerm {
                    entry,
                    pattern: None,
                });
            }
            match word_pattern(entry.term) {
                Ok(pattern) => Some(CompiledTerm {
                    entry,
                    pattern: Some(pattern),
                }),
                Err(e) => {
                    tracing::warn!(
                        "Failed to compile term '{}' in {}: {}",
                        entry.term,
                        category.id,
                        e
                    );
                    None
                }
            }
        })
        .collect();
    CompiledCategory {
        id: category.id,
        terms,
    }
}

fn compile_modifiers(entries: &'static [ModifierEntry]) -> Vec<CompiledModifier> {
    entries
        .iter()
        .filter_map(|entry| match word_pattern(entry.term) {
            Ok(pattern) => Some(CompiledModifier { entry, pattern }),
            Err(e) => {
                tracing::warn!("Failed to compile modifier '{}': {}", entry.term, e);
                None
            }
        })
        .collect()
}

fn compile_rules(rules: &'static [GrammaticalRule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter_map(|rule| match Regex::new(rule.pattern) {
            Ok(pattern) => Some(CompiledRule { rule, pattern }),
            Err(e) => {
                tracing::warn!("Failed to compile grammar rule '{}': {}", rule.name, e);
                None
            }
        })
        .collect()
}

fn compile_fallback(entry: &'static FallbackEntry) -> CompiledFallback {
    let stems = entry
        .stems
        .iter()
        .filter_map(|stem| match stem_pattern(stem) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("Failed to compile fallback stem '{}': {}", stem, e);
                None
            }
        })
        .collect();
    CompiledFallback { entry, stems }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_pattern_compiles() {
        let lex = Lexicon::builtin();
        let compiled = CompiledLexicon::builtin();
        assert_eq!(compiled.grammar.len(), lex.grammar.len());
        assert_eq!(compiled.negators.len(), lex.negators.len());
        for (raw, cat) in lex.categories.iter().zip(&compiled.categories) {
            assert_eq!(raw.terms.len(), cat.terms.len(), "{}", raw.id);
        }
    }

    #[test]
    fn word_pattern_escapes_metacharacters() {
        let re = word_pattern("time-sensitive").unwrap();
        assert!(re.is_match("this is time-sensitive work"));
        assert!(!re.is_match("timexsensitive"));
        let re = word_pattern("don't").unwrap();
        assert!(re.is_match("i don't know"));
    }

    #[test]
    fn stem_pattern_anchors_word_start() {
        let re = stem_pattern("concern").unwrap();
        assert!(re.is_match("concerning news"));
        assert!(!re.is_match("unconcerned"));
    }
}
