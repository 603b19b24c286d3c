//! `sentilex analyze`

use anyhow::Result;
use sentilex_core::config::{AnalyzerConfig, InputConfig};
use sentilex_core::{summarize, AnalysisReport, SentimentAnalyzer, SentimentResult};
use serde_json::json;

use crate::observability;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    pub json: bool,
    pub explain: bool,
    pub summary: bool,
}

pub fn cmd_analyze(text: Option<&str>, file: Option<&str>, opts: AnalyzeOptions) -> Result<()> {
    let limits = InputConfig::from_env();
    let text = super::cap_input(super::read_text(text, file)?, &limits);

    let analyzer = SentimentAnalyzer::with_config(AnalyzerConfig::from_env());
    let report = analyzer.explain(&text);
    observability::audit_analysis("analyze", &text, &report);

    println!("{}", render(&report, opts)?);
    Ok(())
}

/// Output for one report, in the requested shape.
pub fn render(report: &AnalysisReport, opts: AnalyzeOptions) -> Result<String> {
    if opts.explain {
        let mut value = serde_json::to_value(report)?;
        if opts.summary {
            value["summary"] = serde_json::to_value(summarize(&report.results))?;
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    if opts.json {
        let value = if opts.summary {
            json!({
                "results": report.results,
                "summary": summarize(&report.results),
            })
        } else {
            serde_json::to_value(&report.results)?
        };
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::new();
    if report.results.is_empty() {
        out.push_str("(no input)");
        return Ok(out);
    }
    if let Some(ctx) = &report.context {
        out.push_str(&format!("context: {}\n", ctx.context));
    }
    for r in &report.results {
        out.push_str(&plain_line(r));
        out.push('\n');
    }
    if opts.summary {
        let p = summarize(&report.results);
        out.push_str(&format!(
            "polarity: {:?}  valence {:+.2}  pleasure {:+.2}  arousal {:+.2}  dominance {:+.2}\n",
            p.polarity, p.valence, p.pleasure, p.arousal, p.dominance
        ));
    }
    Ok(out.trim_end().to_string())
}

fn plain_line(r: &SentimentResult) -> String {
    let intensity = r.intensity.map(|i| i.as_str()).unwrap_or("-");
    let contexts = r
        .context
        .as_ref()
        .map(|c| format!("  [{}]", c.join(", ")))
        .unwrap_or_default();
    format!("{:<16} {:>3}  {:<6}{}", r.sentiment.as_str(), r.score, intensity, contexts)
}
