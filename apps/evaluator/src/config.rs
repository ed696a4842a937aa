use std::path::PathBuf;

use anyhow::{Context, Result};

/// 10 MiB, the largest resume file accepted.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rust_log: String,
    pub max_upload_bytes: u64,
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            report_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{raw}'"))?,
            None => defaults.max_upload_bytes,
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes,
            report_dir: lookup("REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_upload_bytes, 10_485_760);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RUST_LOG", "debug"),
            ("MAX_UPLOAD_BYTES", " 2048 "),
            ("REPORT_DIR", "/tmp/reports"),
        ]))
        .unwrap();
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.report_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_invalid_upload_limit() {
        let err = Config::from_lookup(lookup_from(&[("MAX_UPLOAD_BYTES", "ten megs")]))
            .unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
    }
}
