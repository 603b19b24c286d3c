//! Analysis pipeline: context, matching, scoring, fallback.
//!
//! ```text
//! text ─► classify ─► per category: find_matches ─► normalize ─► threshold
//!                                                                   │
//!                          results ◄── sort ◄───────────────────────┤
//!                                                                   └─► fallback (if empty)
//! ```

#[cfg(test)]
mod tests;

use crate::config::AnalyzerConfig;
use crate::context::{analyze_context, ContextAnalysis};
use crate::fallback::{self, FallbackTier};
use crate::lexicon::{CompiledLexicon, Lexicon};
use crate::matcher::{TermMatch, TermMatcher};
use crate::scoring;
use crate::types::{Sentiment, SentimentResult};
use serde::Serialize;

/// Per-category scoring trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTrace {
    pub sentiment: Sentiment,
    pub raw_total: f64,
    pub context_multiplier: f64,
    pub score: u8,
    pub emitted: bool,
    pub contexts: Vec<String>,
    pub matches: Vec<TermMatch>,
}

/// Everything the pipeline decided for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// `None` for blank input.
    pub context: Option<ContextAnalysis>,
    pub grammar_rules: Vec<&'static str>,
    pub grammar_multiplier: f64,
    pub categories: Vec<CategoryTrace>,
    pub fallback: FallbackTier,
    pub results: Vec<SentimentResult>,
}

impl AnalysisReport {
    fn blank() -> Self {
        Self {
            context: None,
            grammar_rules: Vec::new(),
            grammar_multiplier: 1.0,
            categories: Vec::new(),
            fallback: FallbackTier::None,
            results: Vec::new(),
        }
    }
}

/// Lexicon-backed analyzer. Holds only configuration; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    config: AnalyzerConfig,
    lexicon: &'static Lexicon,
    compiled: &'static CompiledLexicon,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            lexicon: Lexicon::builtin(),
            compiled: CompiledLexicon::builtin(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Ranked sentiments for `text`. Blank input gives an empty list; any other
    /// input gives at least one result.
    pub fn analyze(&self, text: &str) -> Vec<SentimentResult> {
        self.explain(text).results
    }

    pub fn explain(&self, text: &str) -> AnalysisReport {
        if text.trim().is_empty() {
            return AnalysisReport::blank();
        }

        let lower = text.to_lowercase();
        let context = analyze_context(text);
        let fired = scoring::fired_rules(&self.compiled.grammar, text);
        let grammar_multiplier = scoring::grammar_multiplier(&fired);
        let modifier = self.lexicon.context_modifier(context.context);
        let matcher = TermMatcher::new(self.compiled);

        let mut categories = Vec::new();
        let mut results = Vec::new();
        for category in &self.compiled.categories {
            let set = matcher.find_matches(&lower, &category.terms, context.context);
            if set.is_empty() {
                continue;
            }
            let context_multiplier = scoring::context_multiplier(modifier, category.id);
            let score = scoring::normalize(set.total, grammar_multiplier, context_multiplier);
            let emitted = score >= self.config.report_threshold;
            let contexts = set.dominant_contexts();
            if emitted {
                results.push(SentimentResult::new(category.id, score).with_contexts(contexts.clone()));
            }
            categories.push(CategoryTrace {
                sentiment: category.id,
                raw_total: set.total,
                context_multiplier,
                score,
                emitted,
                contexts,
                matches: set.matches,
            });
        }

        results.sort_by(|a, b| b.score.cmp(&a.score).then(a.sentiment.cmp(&b.sentiment)));

        let mut tier = FallbackTier::None;
        if results.is_empty() {
            let (result, used) = fallback::detect(&lower, &self.compiled.fallback, &matcher);
            results.push(result);
            tier = used;
        }

        tracing::debug!(
            context = %context.context,
            matched = categories.len(),
            emitted = results.len(),
            fallback = tier.as_str(),
            "analysis complete"
        );

        AnalysisReport {
            context: Some(context),
            grammar_rules: fired.iter().map(|r| r.rule.name).collect(),
            grammar_multiplier,
            categories,
            fallback: tier,
            results,
        }
    }
}

/// Analyze with the default configuration.
pub fn analyze(text: &str) -> Vec<SentimentResult> {
    SentimentAnalyzer::default().analyze(text)
}
