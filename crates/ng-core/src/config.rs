//! Server configuration

use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings the server reads from the environment on top of the Leptos
/// options in `Cargo.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Refuse to start when the content has link defects
    pub strict_content: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            log_filter: "ng_site=info,ng_core=info,tower_http=info".to_string(),
            strict_content: true,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("NG_ASSETS_DIR") {
            if dir.trim().is_empty() {
                return Err(SiteError::Config("NG_ASSETS_DIR is empty".to_string()));
            }
            config.assets_dir = PathBuf::from(dir);
        }

        if let Some(filter) = lookup("NG_LOG_FILTER") {
            config.log_filter = filter;
        }

        if let Some(strict) = lookup("NG_STRICT_CONTENT") {
            config.strict_content = parse_flag(&strict).ok_or_else(|| {
                SiteError::Config(format!("NG_STRICT_CONTENT: expected a boolean, got '{}'", strict))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.strict_content);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_env_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("NG_ASSETS_DIR", "/srv/ng/assets"),
            ("NG_LOG_FILTER", "debug"),
            ("NG_STRICT_CONTENT", "off"),
        ]))
        .unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/ng/assets"));
        assert_eq!(config.log_filter, "debug");
        assert!(!config.strict_content);
    }

    #[test]
    fn test_invalid_values() {
        let err = SiteConfig::from_lookup(lookup(&[("NG_STRICT_CONTENT", "maybe")])).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        let err = SiteConfig::from_lookup(lookup(&[("NG_ASSETS_DIR", "  ")])).unwrap_err();
        assert!(err.to_string().contains("NG_ASSETS_DIR"));
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert_eq!(json["strict_content"], true);
        assert_eq!(json["assets_dir"], "assets");
    }
}
