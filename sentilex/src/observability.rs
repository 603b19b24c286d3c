//! Observability: tracing init and the analysis audit log.
//!
//! Uses config::ObservabilityConfig for SENTILEX_QUIET, LOG_LEVEL, LOG_JSON, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Utc;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing_subscriber::{prelude::*, EnvFilter};

use sentilex_core::config::ObservabilityConfig;
use sentilex_core::AnalysisReport;

/// Initialize tracing. Call at process startup. Logs go to stderr so stdout
/// stays machine-readable. RUST_LOG overrides the configured filter.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(cfg)));

    let json = cfg.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let plain = (!cfg.log_json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(!cfg.quiet)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .try_init();
}

/// SENTILEX_QUIET caps both crates at WARN whatever the configured level.
fn filter_directives(cfg: &ObservabilityConfig) -> String {
    if cfg.quiet {
        "sentilex=warn,sentilex_core=warn".to_string()
    } else {
        cfg.log_level.clone()
    }
}

/// Append-only JSONL file shared by the analysis paths, including batch
/// workers. Each record is one `write_all` of a complete line, made under a
/// lock, so concurrent callers never interleave.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// The log named by SENTILEX_AUDIT_LOG, opened once per process.
    pub fn from_env() -> Option<&'static AuditLog> {
        static AUDIT: OnceLock<Option<AuditLog>> = OnceLock::new();
        AUDIT
            .get_or_init(|| {
                ObservabilityConfig::from_env()
                    .audit_log
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .map(AuditLog::new)
            })
            .as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &serde_json::Value) -> io::Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        f.write_all(line.as_bytes())
    }

    /// Write one analysis record. Failures are logged, never returned.
    pub fn record_analysis(&self, command: &str, text: &str, report: &AnalysisReport) {
        if let Err(e) = self.append(&analysis_record(command, text, report)) {
            tracing::warn!(path = %self.path().display(), error = %e, "Failed to write audit record");
        }
    }
}

/// SHA-256 of the input, hex encoded. The audit log never stores the text.
pub fn input_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// One audit line describing an analysis.
pub fn analysis_record(command: &str, text: &str, report: &AnalysisReport) -> serde_json::Value {
    let top = report.results.first();
    json!({
        "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "event": "analysis",
        "command": command,
        "input_sha256": input_hash(text),
        "input_chars": text.chars().count(),
        "context": report.context.as_ref().map(|c| c.context.as_str()),
        "result_count": report.results.len(),
        "top_sentiment": top.map(|r| r.sentiment.as_str()),
        "top_score": top.map(|r| r.score),
        "fallback": report.fallback.as_str(),
    })
}

/// Audit: analysis (no-op unless SENTILEX_AUDIT_LOG is set)
pub fn audit_analysis(command: &str, text: &str, report: &AnalysisReport) {
    if let Some(log) = AuditLog::from_env() {
        log.record_analysis(command, text, report);
    }
}
