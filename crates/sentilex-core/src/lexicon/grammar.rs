//! Grammatical-pattern rules over the raw text.
//!
//! Order matters only for tracing: the multipliers commute, but the fired list
//! in an analysis report follows this order.

use super::GrammaticalRule;

pub fn default_rules() -> Vec<GrammaticalRule> {
    vec![
        GrammaticalRule {
            name: "formal_closure",
            pattern: r"(?i)\b(?:best regards|sincerely|regards|thank you(?: in advance)?|respectfully|yours truly)\b",
            multiplier: 1.4,
        },
        GrammaticalRule {
            name: "salutation",
            pattern: r"(?i)\b(?:dear|hello|hi|greetings|good (?:morning|afternoon|evening))\b",
            multiplier: 1.3,
        },
        GrammaticalRule {
            name: "bullet_points",
            pattern: r"(?:\n\s*[•\-\*]\s+.+){2,}",
            multiplier: 1.3,
        },
        GrammaticalRule {
            name: "question_marks",
            pattern: r"\?+",
            multiplier: 1.4,
        },
        GrammaticalRule {
            name: "exclamation",
            pattern: r"!+",
            multiplier: 1.5,
        },
        GrammaticalRule {
            name: "all_caps",
            pattern: r"\b[A-Z]{3,}\b",
            multiplier: 1.6,
        },
    ]
}
