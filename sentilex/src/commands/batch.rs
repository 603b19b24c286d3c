//! `sentilex batch`: one text per line, analyzed on a rayon pool.
//!
//! Output order always matches input order.

use anyhow::{Context, Result};
use rayon::prelude::*;
use sentilex_core::config::{AnalyzerConfig, InputConfig};
use sentilex_core::{SentimentAnalyzer, SentimentResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, BufRead, BufReader, Write};

use crate::observability::AuditLog;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("line {line}: invalid JSONL record: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    id: Option<Value>,
    text: String,
}

/// One input item; `id` defaults to the 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub id: Value,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct BatchOutput {
    pub id: Value,
    pub results: Vec<SentimentResult>,
}

pub fn cmd_batch(input: Option<&str>, jsonl: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path).with_context(|| format!("Failed to open input: {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let items = parse_items(reader, jsonl)?;
    let limits = InputConfig::from_env();
    let analyzer = SentimentAnalyzer::with_config(AnalyzerConfig::from_env());

    tracing::info!(items = items.len(), threads = limits.batch_threads, "batch start");
    let outputs = run_batch(&analyzer, items, &limits, AuditLog::from_env())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for o in &outputs {
        writeln!(out, "{}", serde_json::to_string(o)?)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse input lines. Blank lines are skipped but still count toward line numbers.
pub fn parse_items<R: BufRead>(reader: R, jsonl: bool) -> Result<Vec<BatchItem>> {
    let mut items = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        if jsonl {
            let record: InputRecord = serde_json::from_str(&line)
                .map_err(|source| BatchError::InvalidRecord {
                    line: line_no,
                    source,
                })?;
            items.push(BatchItem {
                id: record.id.unwrap_or_else(|| Value::from(line_no)),
                text: record.text,
            });
        } else {
            items.push(BatchItem {
                id: Value::from(line_no),
                text: line,
            });
        }
    }
    Ok(items)
}

/// Analyze all items in parallel. `batch_threads == 0` uses rayon's default pool.
/// Each item gets one audit record when `audit` is set.
pub fn run_batch(
    analyzer: &SentimentAnalyzer,
    items: Vec<BatchItem>,
    limits: &InputConfig,
    audit: Option<&AuditLog>,
) -> Result<Vec<BatchOutput>> {
    let work = || -> Vec<BatchOutput> {
        items
            .into_par_iter()
            .map(|item| {
                let text = super::cap_input(item.text, limits);
                let report = analyzer.explain(&text);
                if let Some(log) = audit {
                    log.record_analysis("batch", &text, &report);
                }
                BatchOutput {
                    id: item.id,
                    results: report.results,
                }
            })
            .collect()
    };

    if limits.batch_threads == 0 {
        return Ok(work());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(limits.batch_threads)
        .build()
        .context("Failed to build batch thread pool")?;
    Ok(pool.install(work))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_lines_get_line_numbers() {
        let items = parse_items(Cursor::new("first\n\nthird\n"), false).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, Value::from(1));
        assert_eq!(items[1].id, Value::from(3));
        assert_eq!(items[1].text, "third");
    }

    #[test]
    fn jsonl_records_keep_ids() {
        let input = "{\"id\":\"a\",\"text\":\"this is urgent\"}\n{\"text\":\"hello\"}\n";
        let items = parse_items(Cursor::new(input), true).unwrap();
        assert_eq!(items[0].id, Value::from("a"));
        assert_eq!(items[1].id, Value::from(2));
    }

    #[test]
    fn invalid_jsonl_names_the_line() {
        let err = parse_items(Cursor::new("{\"text\":\"ok\"}\nnot json\n"), true).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn parallel_results_keep_input_order() {
        let texts = ["this is urgent", "I am frustrated", "Thank you for your time"];
        let items: Vec<BatchItem> = texts
            .iter()
            .cycle()
            .take(60)
            .enumerate()
            .map(|(i, t)| BatchItem {
                id: Value::from(i),
                text: t.to_string(),
            })
            .collect();
        let limits = InputConfig {
            max_input_chars: 1000,
            batch_threads: 4,
        };
        let outputs = run_batch(&SentimentAnalyzer::new(), items, &limits, None).unwrap();
        assert_eq!(outputs.len(), 60);
        for (i, o) in outputs.iter().enumerate() {
            assert_eq!(o.id, Value::from(i));
            let expected = sentilex_core::analyze(texts[i % 3]);
            assert_eq!(o.results, expected);
        }
    }

    #[test]
    fn parallel_audit_lines_stay_whole() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("audit.jsonl"));
        let items: Vec<BatchItem> = (0..2000)
            .map(|i| BatchItem {
                id: Value::from(i),
                text: format!("item {} is urgent, thank you for your time", i),
            })
            .collect();
        let limits = InputConfig {
            max_input_chars: 1000,
            batch_threads: 8,
        };
        run_batch(&SentimentAnalyzer::new(), items, &limits, Some(&log)).unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let records: Vec<Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2000);
        assert!(records.iter().all(|r| r["command"] == "batch"));
    }

    #[test]
    fn batch_reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "this is urgent\nI am frustrated\n").unwrap();
        let file = std::fs::File::open(&path).unwrap();
        let items = parse_items(BufReader::new(file), false).unwrap();
        assert_eq!(items.len(), 2);
    }
}
