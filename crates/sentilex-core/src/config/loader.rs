//! Environment loading helpers.
//!
//! Alias fallback chains are resolved here so callers never chain `or_else`.

use std::env;
use std::path::Path;
use std::str::FromStr;

/// Load `.env` from the current directory. Existing variables win. Runs once.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        load_dotenv_from_dir(&dir);
    });
}

/// Load `<dir>/.env` without overriding variables that are already set.
/// Returns the number of variables applied.
pub fn load_dotenv_from_dir(dir: &Path) -> usize {
    let Ok(content) = std::fs::read_to_string(dir.join(".env")) else {
        return 0;
    };
    let mut applied = 0;
    for (key, value) in parse_dotenv(&content) {
        if env::var(&key).is_err() {
            set_env_var(&key, &value);
            applied += 1;
        }
    }
    applied
}

/// `KEY=value` pairs from dotenv content. Blank lines and `#` comments are
/// skipped; surrounding quotes and unquoted inline comments are stripped.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let mut value = value.trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// First non-blank value among `primary` and its aliases, trimmed.
/// A blank primary does not hide a set alias.
fn lookup(primary: &str, aliases: &[&str]) -> Option<String> {
    std::iter::once(primary)
        .chain(aliases.iter().copied())
        .filter_map(|key| env::var(key).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    lookup(primary, aliases).unwrap_or_else(default)
}

pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    lookup(primary, aliases)
}

/// 0/false/no/off are false; any other value is true. Blank means `default`.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    lookup(primary, aliases).map_or(default, |v| {
        !matches!(v.to_lowercase().as_str(), "0" | "false" | "no" | "off")
    })
}

/// Parse a typed value. Unparseable values fall back to `default` with a warning.
pub fn env_parse<T>(primary: &str, aliases: &[&str], default: T) -> T
where
    T: FromStr,
{
    match lookup(primary, aliases) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value '{}' for {}", raw, primary);
            default
        }),
        None => default,
    }
}

#[allow(unsafe_code)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

#[allow(unsafe_code)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dotenv_handles_quotes_and_comments() {
        let pairs = parse_dotenv(
            "# comment\n\nSENTILEX_QUIET=1 # inline\nSENTILEX_LOG_LEVEL=\"debug\"\nBROKEN\nSENTILEX_AUDIT_LOG='/tmp/a#b'\n",
        );
        assert_eq!(
            pairs,
            vec![
                ("SENTILEX_QUIET".to_string(), "1".to_string()),
                ("SENTILEX_LOG_LEVEL".to_string(), "debug".to_string()),
                ("SENTILEX_AUDIT_LOG".to_string(), "/tmp/a#b".to_string()),
            ]
        );
    }

    #[test]
    fn env_helpers_read_aliases_and_defaults() {
        set_env_var("SENTILEX_TEST_ALIAS_ONLY", "42");
        assert_eq!(
            env_or("SENTILEX_TEST_MISSING", &["SENTILEX_TEST_ALIAS_ONLY"], || "x".into()),
            "42"
        );
        assert_eq!(env_parse("SENTILEX_TEST_MISSING", &["SENTILEX_TEST_ALIAS_ONLY"], 0u32), 42);
        assert_eq!(env_optional("SENTILEX_TEST_MISSING", &[]), None);
        remove_env_var("SENTILEX_TEST_ALIAS_ONLY");

        set_env_var("SENTILEX_TEST_BOOL", "off");
        assert!(!env_bool("SENTILEX_TEST_BOOL", &[], true));
        remove_env_var("SENTILEX_TEST_BOOL");
        assert!(env_bool("SENTILEX_TEST_BOOL", &[], true));

        set_env_var("SENTILEX_TEST_BLANK", "  ");
        set_env_var("SENTILEX_TEST_BLANK_ALIAS", " yes ");
        assert_eq!(
            env_optional("SENTILEX_TEST_BLANK", &["SENTILEX_TEST_BLANK_ALIAS"]).as_deref(),
            Some("yes")
        );
        assert!(!env_bool("SENTILEX_TEST_BLANK", &[], false));
        remove_env_var("SENTILEX_TEST_BLANK");
        remove_env_var("SENTILEX_TEST_BLANK_ALIAS");

        set_env_var("SENTILEX_TEST_BAD_NUM", "many");
        assert_eq!(env_parse("SENTILEX_TEST_BAD_NUM", &[], 7u8), 7);
        remove_env_var("SENTILEX_TEST_BAD_NUM");
    }
}
