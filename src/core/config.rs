use std::env;
use std::time::Duration;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when unset or blank; reported per request rather than at startup.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub request_timeout: Option<Duration>,
    /// Total attempts per upstream call. 1 means no retry.
    pub max_attempts: u32,
    pub cors_allow_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            request_timeout: None,
            max_attempts: 1,
            cors_allow_origin: DEFAULT_CORS_ALLOW_ORIGIN.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source so tests never
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let request_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| format!("GEMINI_TIMEOUT_SECS: {}", e))?;
                if secs == 0 {
                    return Err("GEMINI_TIMEOUT_SECS: must be greater than zero".to_string());
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let max_attempts = match lookup("GEMINI_MAX_ATTEMPTS") {
            Some(raw) => {
                let attempts = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("GEMINI_MAX_ATTEMPTS: {}", e))?;
                if attempts == 0 {
                    return Err("GEMINI_MAX_ATTEMPTS: must be at least 1".to_string());
                }
                attempts
            }
            None => defaults.max_attempts,
        };

        Ok(Self {
            gemini_api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
            gemini_model: non_blank(lookup("GEMINI_MODEL")).unwrap_or(defaults.gemini_model),
            gemini_api_base: non_blank(lookup("GEMINI_API_BASE"))
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_base),
            request_timeout,
            max_attempts,
            cors_allow_origin: non_blank(lookup("CORS_ALLOW_ORIGIN"))
                .unwrap_or(defaults.cors_allow_origin),
        })
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.gemini_api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    /// The configured key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.max_attempts, 1);
        assert!(config.request_timeout.is_none());
        assert_eq!(config.cors_allow_origin, "*");
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")])).unwrap();
        assert!(config.api_key().is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("GEMINI_API_BASE", "http://localhost:9000/v1/"),
            ("GEMINI_TIMEOUT_SECS", "30"),
            ("GEMINI_MAX_ATTEMPTS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.gemini_api_base, "http://localhost:9000/v1");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = AppConfig::from_lookup(lookup_from(&[("GEMINI_MAX_ATTEMPTS", "lots")]))
            .unwrap_err();
        assert!(err.starts_with("GEMINI_MAX_ATTEMPTS"));

        let err = AppConfig::from_lookup(lookup_from(&[("GEMINI_MAX_ATTEMPTS", "0")]))
            .unwrap_err();
        assert!(err.contains("at least 1"));

        let err = AppConfig::from_lookup(lookup_from(&[("GEMINI_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(err.starts_with("GEMINI_TIMEOUT_SECS"));
    }

    #[test]
    fn with_api_key_ignores_blank() {
        let config = AppConfig::default().with_api_key("");
        assert!(config.api_key().is_none());
        let config = AppConfig::default().with_api_key("k");
        assert_eq!(config.api_key(), Some("k"));
    }
}
