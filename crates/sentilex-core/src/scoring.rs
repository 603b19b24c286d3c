//! Raw match totals to 0-100 scores.

use crate::lexicon::{CompiledRule, ContextModifier};
use crate::types::Sentiment;

/// Raw total that maps to a score of 100 before multipliers.
pub const NORMALIZATION_BASE: f64 = 20.0;
pub const CONTEXT_AMPLIFY: f64 = 1.3;
pub const CONTEXT_DIMINISH: f64 = 0.7;

/// Grammar rules that match the raw text at least once, in rule order.
pub fn fired_rules<'a>(rules: &'a [CompiledRule], raw_text: &str) -> Vec<&'a CompiledRule> {
    rules
        .iter()
        .filter(|r| r.pattern.is_match(raw_text))
        .collect()
}

/// Ordered fold of the fired rule multipliers.
pub fn grammar_multiplier(fired: &[&CompiledRule]) -> f64 {
    fired.iter().fold(1.0, |acc, r| acc * r.rule.multiplier)
}

pub fn context_multiplier(modifier: Option<&ContextModifier>, sentiment: Sentiment) -> f64 {
    match modifier {
        Some(m) if m.amplify.contains(&sentiment) => CONTEXT_AMPLIFY,
        Some(m) if m.diminish.contains(&sentiment) => CONTEXT_DIMINISH,
        _ => 1.0,
    }
}

/// `raw / 20 * 100 * grammar * context`, clamped to [0, 100] and rounded.
pub fn normalize(raw_total: f64, grammar: f64, context: f64) -> u8 {
    let score = raw_total / NORMALIZATION_BASE * 100.0 * grammar * context;
    if score.is_nan() {
        return 0;
    }
    score.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{CompiledLexicon, Lexicon};
    use crate::types::CommunicationContext;

    fn fired_names(text: &str) -> Vec<&'static str> {
        fired_rules(&CompiledLexicon::builtin().grammar, text)
            .iter()
            .map(|r| r.rule.name)
            .collect()
    }

    #[test]
    fn normalize_scales_and_clamps() {
        assert_eq!(normalize(7.0, 1.0, 1.0), 35);
        assert_eq!(normalize(9.6, 1.0, 1.0), 48);
        assert_eq!(normalize(40.0, 1.0, 1.0), 100);
        assert_eq!(normalize(-3.5, 1.0, 1.0), 0);
        assert_eq!(normalize(f64::NAN, 1.0, 1.0), 0);
    }

    #[test]
    fn grammar_rules_fire_on_raw_text() {
        assert_eq!(fired_names("this is urgent"), Vec::<&str>::new());
        assert_eq!(fired_names("THIS IS URGENT!!!"), vec!["exclamation", "all_caps"]);
        assert_eq!(fired_names("Dear team,\nthanks.\nRegards,"), vec!["formal_closure", "salutation"]);
        assert_eq!(fired_names("any update?"), vec!["question_marks"]);
        assert_eq!(fired_names("Notes:\n- one\n- two"), vec!["bullet_points"]);
    }

    #[test]
    fn grammar_multiplier_is_product() {
        let fired = fired_rules(&CompiledLexicon::builtin().grammar, "WOW!");
        assert!((grammar_multiplier(&fired) - 1.5 * 1.6).abs() < 1e-9);
        assert_eq!(grammar_multiplier(&[]), 1.0);
    }

    #[test]
    fn context_multiplier_uses_sets() {
        let lex = Lexicon::builtin();
        let email = lex.context_modifier(CommunicationContext::Email);
        assert_eq!(context_multiplier(email, Sentiment::Urgency), CONTEXT_AMPLIFY);
        assert_eq!(context_multiplier(email, Sentiment::Frustration), CONTEXT_DIMINISH);
        assert_eq!(context_multiplier(email, Sentiment::Pride), 1.0);
        assert_eq!(context_multiplier(None, Sentiment::Urgency), 1.0);
    }
}
