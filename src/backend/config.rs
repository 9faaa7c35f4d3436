#![cfg(feature = "server")]
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GEN_TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the BI backend.
#[derive(Debug, Clone)]
pub struct BiApiConfig {
    pub base_url: Option<String>,
    pub cookie: Option<String>,
    pub timeout: Duration,
    /// Synchronous generation waits on the model, so it gets its own budget.
    pub gen_timeout: Duration,
}

impl BiApiConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|k| env::var(k).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |k: &str| get(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secs = |k: &str, default: u64| {
            non_empty(k)
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|s| *s > 0)
                .unwrap_or(default)
        };
        let timeout_secs = secs("BI_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let gen_timeout_secs = secs("BI_API_GEN_TIMEOUT_SECS", DEFAULT_GEN_TIMEOUT_SECS);
        Self {
            base_url: non_empty("BI_API_URL").map(|u| u.trim_end_matches('/').to_string()),
            cookie: non_empty("BI_API_COOKIE"),
            timeout: Duration::from_secs(timeout_secs),
            gen_timeout: Duration::from_secs(gen_timeout_secs),
        }
    }

    pub fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(|| anyhow!("BI_API_URL not set"))
    }
}

pub static CONFIG: Lazy<BiApiConfig> = Lazy::new(BiApiConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg(pairs: &[(&str, &str)]) -> BiApiConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BiApiConfig::from_vars(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = cfg(&[]);
        assert!(c.base_url().is_err());
        assert!(c.cookie.is_none());
        assert_eq!(c.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(c.gen_timeout, Duration::from_secs(DEFAULT_GEN_TIMEOUT_SECS));
    }

    #[test]
    fn trailing_slash_and_bad_timeout() {
        let c = cfg(&[
            ("BI_API_URL", "http://localhost:8101/"),
            ("BI_API_COOKIE", "SESSION=abc"),
            ("BI_API_TIMEOUT_SECS", "zero"),
        ]);
        assert_eq!(c.base_url().unwrap(), "http://localhost:8101");
        assert_eq!(c.cookie.as_deref(), Some("SESSION=abc"));
        assert_eq!(c.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn explicit_timeout() {
        let c = cfg(&[("BI_API_TIMEOUT_SECS", "30"), ("BI_API_GEN_TIMEOUT_SECS", "300")]);
        assert_eq!(c.timeout, Duration::from_secs(30));
        assert_eq!(c.gen_timeout, Duration::from_secs(300));
    }
}
