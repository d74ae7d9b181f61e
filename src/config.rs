//! Deployment settings that are not part of the Leptos configuration.

use thiserror::Error;

pub const BASE_URL_ENV: &str = "PORTFOLIO_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public origin of the site, without a trailing slash.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(BASE_URL_ENV) {
            config.base_url = normalize_base_url(&value).ok_or(ConfigError::InvalidUrl {
                var: BASE_URL_ENV,
                value,
            })?;
        }
        Ok(config)
    }

    /// Absolute URL for a site-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))?;
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return None;
    }
    Some(trimmed.to_string())
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
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn strips_trailing_slash() {
        let config =
            SiteConfig::from_lookup(lookup(&[(BASE_URL_ENV, "https://ridho.example/ ")])).unwrap();
        assert_eq!(config.base_url, "https://ridho.example");
        assert_eq!(config.url("/rss.xml"), "https://ridho.example/rss.xml");
        assert_eq!(config.url("blog/a"), "https://ridho.example/blog/a");
    }

    #[test]
    fn rejects_non_http_urls() {
        for bad in ["ridho.example", "ftp://ridho.example", "https://", "http://a b"] {
            let err = SiteConfig::from_lookup(lookup(&[(BASE_URL_ENV, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { var: BASE_URL_ENV, .. }));
        }
    }
}
