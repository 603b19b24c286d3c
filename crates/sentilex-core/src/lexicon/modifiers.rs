//! Modifier tables, per-context reweighting and the fallback stem list.

use super::{ContextModifier, FallbackEntry, ModifierEntry};
use crate::types::CommunicationContext;
use crate::types::Sentiment::*;

pub fn amplifiers() -> Vec<ModifierEntry> {
    vec![
        ModifierEntry::word("very", 1.5),
        ModifierEntry::word("extremely", 1.8),
        ModifierEntry::word("significantly", 1.7),
        ModifierEntry::word("substantially", 1.7),
        ModifierEntry::word("considerably", 1.6),
        ModifierEntry::word("highly", 1.7),
        ModifierEntry::word("greatly", 1.7),
        ModifierEntry::word("particularly", 1.6),
        ModifierEntry::word("exceptionally", 1.8),
        ModifierEntry::word("remarkably", 1.7),
        ModifierEntry::word("notably", 1.6),
        ModifierEntry::word("truly", 1.6),
        ModifierEntry::word("definitely", 1.6),
        ModifierEntry::word("absolutely", 1.8),
        ModifierEntry::word("thoroughly", 1.6),
        ModifierEntry::word("completely", 1.7),
        ModifierEntry::word("entirely", 1.7),
        ModifierEntry::word("especially", 1.6),
        ModifierEntry::word("really", 1.3),
    ]
}

pub fn diminishers() -> Vec<ModifierEntry> {
    vec![
        ModifierEntry::word("somewhat", 0.7),
        ModifierEntry::word("slightly", 0.6),
        ModifierEntry::word("partially", 0.7),
        ModifierEntry::phrase("to some extent", 0.7),
        ModifierEntry::phrase("to a degree", 0.7),
        ModifierEntry::word("moderately", 0.8),
        ModifierEntry::word("reasonably", 0.8),
        ModifierEntry::word("marginally", 0.5),
        ModifierEntry::word("relatively", 0.7),
        ModifierEntry::word("fairly", 0.8),
        ModifierEntry::word("rather", 0.8),
    ]
}

/// Negator weights are descriptive. Any negator in the window applies the
/// fixed attenuate-and-invert factor.
pub fn negators() -> Vec<ModifierEntry> {
    vec![
        ModifierEntry::word("not", -1.0),
        ModifierEntry::word("don't", -1.0),
        ModifierEntry::word("doesn't", -1.0),
        ModifierEntry::word("isn't", -1.0),
        ModifierEntry::word("aren't", -1.0),
        ModifierEntry::word("wasn't", -1.0),
        ModifierEntry::word("weren't", -1.0),
        ModifierEntry::word("didn't", -1.0),
        ModifierEntry::word("no", -1.0),
        ModifierEntry::word("never", -1.0),
        ModifierEntry::word("hardly", -0.8),
        ModifierEntry::word("rarely", -0.8),
        ModifierEntry::word("unlikely", -0.9),
        ModifierEntry::phrase("unable to", -1.0),
        ModifierEntry::phrase("failed to", -1.0),
    ]
}

pub fn context_modifiers() -> Vec<ContextModifier> {
    vec![
        ContextModifier {
            context: CommunicationContext::Email,
            amplify: &[Urgency, Appreciation, Concern, Formality],
            diminish: &[Enthusiasm, Frustration, Assertiveness],
        },
        ContextModifier {
            context: CommunicationContext::Meeting,
            amplify: &[Enthusiasm, Assertiveness, Determination, Inquiry],
            diminish: &[Formality, Concern],
        },
        ContextModifier {
            context: CommunicationContext::Interview,
            amplify: &[Confidence, Enthusiasm, Consideration, Formality],
            diminish: &[Concern, Frustration, Urgency],
        },
        ContextModifier {
            context: CommunicationContext::Feedback,
            amplify: &[Appreciation, Disappointment, Consideration, Neutrality],
            diminish: &[Urgency, Enthusiasm, Assertiveness],
        },
    ]
}

/// Checked top to bottom; the first entry with a live stem wins.
pub fn fallback_entries() -> Vec<FallbackEntry> {
    vec![
        FallbackEntry {
            sentiment: Urgency,
            stems: &["urgent", "asap", "hurry", "rush"],
            score: 45,
        },
        FallbackEntry {
            sentiment: Frustration,
            stems: &["frustrat", "annoy", "stuck", "blocker"],
            score: 45,
        },
        FallbackEntry {
            sentiment: Anxiety,
            stems: &["anxi", "nervous", "scared", "stress"],
            score: 45,
        },
        FallbackEntry {
            sentiment: Concern,
            stems: &["worr", "concern", "risk", "problem"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Disappointment,
            stems: &["disappoint", "bad", "poor", "sad"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Dissatisfaction,
            stems: &["unhappy", "terrible", "awful", "hate"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Confusion,
            stems: &["confus", "unclear", "huh"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Overwhelm,
            stems: &["overwhelm", "busy", "tired"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Appreciation,
            stems: &["thank", "thx", "appreciat", "cheers"],
            score: 45,
        },
        FallbackEntry {
            sentiment: Enthusiasm,
            stems: &["excit", "awesome", "love", "amazing", "wow"],
            score: 45,
        },
        FallbackEntry {
            sentiment: Satisfaction,
            stems: &["good", "great", "nice", "fine", "satisf"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Optimism,
            stems: &["hope", "optimis"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Relief,
            stems: &["relie", "phew"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Pride,
            stems: &["proud"],
            score: 40,
        },
        FallbackEntry {
            sentiment: Confidence,
            stems: &["sure", "confiden"],
            score: 35,
        },
        FallbackEntry {
            sentiment: Inquiry,
            stems: &["what", "how", "why", "when", "wonder"],
            score: 35,
        },
    ]
}
