//! `sentilex classify`

use anyhow::Result;
use sentilex_core::config::InputConfig;
use sentilex_core::{analyze_context, ContextAnalysis};

pub fn cmd_classify(text: Option<&str>, json: bool) -> Result<()> {
    let text = super::cap_input(super::read_text(text, None)?, &InputConfig::from_env());
    let analysis = analyze_context(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render(&analysis));
    }
    Ok(())
}

pub fn render(analysis: &ContextAnalysis) -> String {
    let mut lines = vec![format!(
        "context: {}{}",
        analysis.context,
        if analysis.heuristic { " (by text shape)" } else { "" }
    )];
    lines.push(format!(
        "words {}  sentences {}  avg word {:.1}  formality {:.1}",
        analysis.metrics.word_count,
        analysis.metrics.sentence_count,
        analysis.metrics.avg_word_length,
        analysis.metrics.formality
    ));
    if !analysis.patterns.is_empty() {
        let names: Vec<String> = analysis.patterns.iter().map(|p| format!("{:?}", p)).collect();
        lines.push(format!("patterns: {}", names.join(", ")));
    }
    let mut scores: Vec<_> = analysis.scores.iter().filter(|(_, s)| **s > 0.0).collect();
    scores.sort_by(|a, b| b.1.total_cmp(a.1).then(a.0.cmp(b.0)));
    for (ctx, score) in scores {
        lines.push(format!("  {:<13} {:>5.2}", ctx.as_str(), score));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_shows_winner_and_scores() {
        let analysis = analyze_context("Dear Ms. Lee,\nPlease find the report attached.\nBest regards");
        let out = render(&analysis);
        assert!(out.starts_with("context: EMAIL"));
        assert!(out.contains("RequestAction"));
        assert!(out.contains("  EMAIL"));
    }

    #[test]
    fn render_flags_heuristic_choice() {
        let out = render(&analyze_context("ok"));
        assert!(out.starts_with("context: MEETING (by text shape)"));
    }
}
