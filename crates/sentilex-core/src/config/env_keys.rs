//! Environment variable keys.
//!
//! Primary keys use the `SENTILEX_*` prefix. Generic `RUST_LOG` style aliases
//! are accepted where noted.

/// Scoring
pub mod analyzer {
    /// Minimum normalized score for a category to be reported. Default 30.
    pub const SENTILEX_REPORT_THRESHOLD: &str = "SENTILEX_REPORT_THRESHOLD";
}

/// CLI input handling
pub mod input {
    /// Maximum characters accepted per text. Longer input is truncated.
    pub const SENTILEX_MAX_INPUT_CHARS: &str = "SENTILEX_MAX_INPUT_CHARS";
    pub const MAX_INPUT_CHARS_ALIASES: &[&str] = &["SENTILEX_MAX_INPUT"];

    /// Worker threads for `batch`. 0 lets rayon decide.
    pub const SENTILEX_BATCH_THREADS: &str = "SENTILEX_BATCH_THREADS";
}

/// Logging and audit
pub mod observability {
    pub const SENTILEX_QUIET: &str = "SENTILEX_QUIET";
    pub const QUIET_ALIASES: &[&str] = &[];

    pub const SENTILEX_LOG_LEVEL: &str = "SENTILEX_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &[];

    pub const SENTILEX_LOG_JSON: &str = "SENTILEX_LOG_JSON";
    pub const LOG_JSON_ALIASES: &[&str] = &[];

    /// JSONL file receiving one record per CLI analysis.
    pub const SENTILEX_AUDIT_LOG: &str = "SENTILEX_AUDIT_LOG";
    pub const AUDIT_LOG_ALIASES: &[&str] = &[];
}
