//! Structured configuration read from the environment.

use super::env_keys::{analyzer as an_keys, input as in_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or, env_parse};
use serde::Serialize;

pub const DEFAULT_REPORT_THRESHOLD: u8 = 30;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 100_000;

/// Scoring knobs. `Default` is the reference behavior used by `analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerConfig {
    /// Categories scoring below this are not reported.
    pub report_threshold: u8,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_threshold: DEFAULT_REPORT_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let report_threshold = env_parse(
            an_keys::SENTILEX_REPORT_THRESHOLD,
            &[],
            DEFAULT_REPORT_THRESHOLD,
        )
        .min(100);
        Self { report_threshold }
    }
}

/// Limits applied by the command-line host before text reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputConfig {
    pub max_input_chars: usize,
    /// 0 lets rayon size the pool.
    pub batch_threads: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            batch_threads: 0,
        }
    }
}

impl InputConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            max_input_chars: env_parse(
                in_keys::SENTILEX_MAX_INPUT_CHARS,
                in_keys::MAX_INPUT_CHARS_ALIASES,
                DEFAULT_MAX_INPUT_CHARS,
            ),
            batch_threads: env_parse(in_keys::SENTILEX_BATCH_THREADS, &[], 0),
        }
    }

    /// Cut `text` to at most `max_input_chars` characters. Returns the text and
    /// whether it was cut.
    pub fn truncate<'a>(&self, text: &'a str) -> (&'a str, bool) {
        match text.char_indices().nth(self.max_input_chars) {
            Some((idx, _)) => (&text[..idx], true),
            None => (text, false),
        }
    }
}

/// Logging and audit: quiet, log_level, log_json, audit_log
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            super::loader::load_dotenv();
            let quiet = env_bool(obv_keys::SENTILEX_QUIET, obv_keys::QUIET_ALIASES, false);
            let log_level = env_or(
                obv_keys::SENTILEX_LOG_LEVEL,
                obv_keys::LOG_LEVEL_ALIASES,
                || "sentilex=info,sentilex_core=warn".to_string(),
            );
            let log_json = env_bool(obv_keys::SENTILEX_LOG_JSON, obv_keys::LOG_JSON_ALIASES, false);
            let audit_log = env_optional(obv_keys::SENTILEX_AUDIT_LOG, obv_keys::AUDIT_LOG_ALIASES);
            Self {
                quiet,
                log_level,
                log_json,
                audit_log,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(AnalyzerConfig::default().report_threshold, 30);
        assert_eq!(InputConfig::default().max_input_chars, 100_000);
    }

    #[test]
    fn truncate_counts_characters() {
        let cfg = InputConfig {
            max_input_chars: 3,
            batch_threads: 0,
        };
        assert_eq!(cfg.truncate("héllo"), ("hél", true));
        assert_eq!(cfg.truncate("hé"), ("hé", false));
        assert_eq!(cfg.truncate("abc"), ("abc", false));
    }
}
