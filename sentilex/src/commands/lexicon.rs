//! `sentilex lexicon validate|list|show|export`

use anyhow::{Context, Result};
use sentilex_core::lexicon::CategoryEntry;
use sentilex_core::{validate, Lexicon, LexiconReport, Sentiment};

use crate::cli::ExportFormat;

/// Returns false when issues were found so the caller can set the exit code.
pub fn cmd_validate(json: bool) -> Result<bool> {
    let report = validate(Lexicon::builtin());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(report.is_clean())
}

pub fn render_report(report: &LexiconReport) -> String {
    if report.is_clean() {
        return format!(
            "✅ lexicon ok: {} categories, {} terms",
            report.categories, report.terms
        );
    }
    let mut lines = vec![format!("❌ {} issue(s):", report.issues.len())];
    lines.extend(report.issues.iter().map(|i| format!("  - {}", i)));
    lines.join("\n")
}

pub fn cmd_list() -> Result<()> {
    println!("{}", render_list(Lexicon::builtin()));
    Ok(())
}

pub fn render_list(lexicon: &Lexicon) -> String {
    lexicon
        .categories
        .iter()
        .map(|c| {
            format!(
                "{:<16} {:>3} terms  {}",
                c.id.as_str(),
                c.terms.len(),
                c.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cmd_show(sentiment: &str, json: bool) -> Result<()> {
    let id: Sentiment = sentiment.parse()?;
    let category = Lexicon::builtin()
        .category(id)
        .with_context(|| format!("No category for {}", id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(category)?);
    } else {
        println!("{}", render_category(category));
    }
    Ok(())
}

pub fn render_category(category: &CategoryEntry) -> String {
    let mut lines = vec![
        format!("{}: {}", category.label, category.description),
        String::new(),
    ];
    for t in &category.terms {
        let kind = if t.is_phrase { "phrase" } else { "word" };
        let contexts: Vec<&str> = t.contexts.iter().map(|c| c.as_str()).collect();
        lines.push(format!(
            "  {:<32} {}  {:<6} {}",
            t.term,
            t.weight,
            kind,
            contexts.join(",")
        ));
    }
    let levels = &category.intensity_levels;
    lines.push(String::new());
    lines.push(format!("low:    {}", levels.low.join(", ")));
    lines.push(format!("medium: {}", levels.medium.join(", ")));
    lines.push(format!("high:   {}", levels.high.join(", ")));
    lines.push(format!("antonyms: {}", category.antonyms.join(", ")));
    if let Some(ring) = category.id.wheel_ring() {
        lines.push(format!("wheel:    {:?}", ring).to_lowercase());
    }
    if let Some((base, level)) = category.id.base_emotion() {
        lines.push(format!("base:     {:?} (level {})", base, level).to_lowercase());
    }
    lines.join("\n")
}

pub fn cmd_export(format: ExportFormat) -> Result<()> {
    println!("{}", export(Lexicon::builtin(), format)?);
    Ok(())
}

pub fn export(lexicon: &Lexicon, format: ExportFormat) -> Result<String> {
    let out = match format {
        ExportFormat::Json => serde_json::to_string_pretty(lexicon)?,
        ExportFormat::Yaml => serde_yaml::to_string(lexicon)?,
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_report_is_clean() {
        let out = render_report(&validate(Lexicon::builtin()));
        assert!(out.contains("lexicon ok"));
    }

    #[test]
    fn list_has_every_category() {
        let out = render_list(Lexicon::builtin());
        assert_eq!(out.lines().count(), Sentiment::ALL.len());
        assert!(out.lines().next().unwrap().starts_with("satisfaction"));
    }

    #[test]
    fn show_renders_terms() {
        let cat = Lexicon::builtin().category(Sentiment::Urgency).unwrap();
        let out = render_category(cat);
        assert!(out.starts_with("URGENCY"));
        assert!(out.contains("as soon as possible"));
        assert!(out.contains("antonyms:"));
        assert!(!out.contains("wheel:"));

        let concern = render_category(Lexicon::builtin().category(Sentiment::Concern).unwrap());
        assert!(concern.contains("wheel:    tertiary"));
        assert!(concern.contains("base:     fear (level 1)"));
    }

    #[test]
    fn show_rejects_unknown_sentiment() {
        assert!(cmd_show("joy", false).is_err());
    }

    #[test]
    fn export_formats_parse_back() {
        let lex = Lexicon::builtin();
        let json: serde_json::Value =
            serde_json::from_str(&export(lex, ExportFormat::Json).unwrap()).unwrap();
        assert_eq!(json["categories"].as_array().unwrap().len(), 21);
        assert_eq!(json["categories"][0]["id"], "satisfaction");

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&export(lex, ExportFormat::Yaml).unwrap()).unwrap();
        assert!(yaml["amplifiers"].as_sequence().unwrap().len() > 10);
    }
}
