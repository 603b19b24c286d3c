//! CLI command implementations.
//!
//!   analyze  - one text, ranked sentiments (plain, JSON or full trace)
//!   batch    - many texts in parallel, JSONL out
//!   classify - inferred communication context
//!   lexicon  - validate / list / show / export the built-in tables

pub mod analyze;
pub mod batch;
pub mod classify;
pub mod lexicon;

use anyhow::{Context, Result};
use sentilex_core::config::InputConfig;
use std::io::Read;

/// Resolve the text argument: a file, stdin ("-" or absent) or the literal.
pub fn read_text(text: Option<&str>, file: Option<&str>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path));
    }
    match text {
        Some(t) if t != "-" => Ok(t.to_string()),
        _ => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("Failed to read text from stdin")?;
            Ok(s)
        }
    }
}

/// Apply the configured input cap, warning when text is cut.
pub fn cap_input(text: String, limits: &InputConfig) -> String {
    let (kept, truncated) = limits.truncate(&text);
    if truncated {
        tracing::warn!(
            max_chars = limits.max_input_chars,
            "Input truncated to SENTILEX_MAX_INPUT_CHARS"
        );
        kept.to_string()
    } else {
        text
    }
}
