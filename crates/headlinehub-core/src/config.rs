use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let telegram_token = require("TELEGRAM_TOKEN")?;

    let log_level = or_default("HLH_LOG_LEVEL", "info");
    let news_url = or_default("HLH_NEWS_URL", "https://www.bbc.com/news");
    let user_agent = or_default(
        "HLH_USER_AGENT",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    );
    let request_timeout_secs = parse_u64("HLH_REQUEST_TIMEOUT_SECS", "10")?;
    let headline_tag = or_default("HLH_HEADLINE_TAG", "h2");
    let headline_attr = or_default("HLH_HEADLINE_ATTR", "data-testid");
    let headline_attr_value = or_default("HLH_HEADLINE_ATTR_VALUE", "card-headline");
    let max_headlines = parse_usize("HLH_MAX_HEADLINES", "10")?;
    let native_lang = or_default("HLH_NATIVE_LANG", "en");
    let translate_base_url = or_default(
        "HLH_TRANSLATE_BASE_URL",
        "https://translate.googleapis.com",
    );
    let poll_timeout_secs = parse_u64("HLH_POLL_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        telegram_token,
        log_level,
        news_url,
        user_agent,
        request_timeout_secs,
        headline_tag,
        headline_attr,
        headline_attr_value,
        max_headlines,
        native_lang,
        translate_base_url,
        poll_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("TELEGRAM_TOKEN", "123456:test-token");
        m
    }

    #[test]
    fn build_app_config_fails_without_telegram_token() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TELEGRAM_TOKEN"),
            "expected MissingEnvVar(TELEGRAM_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.telegram_token, "123456:test-token");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.news_url, "https://www.bbc.com/news");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.headline_tag, "h2");
        assert_eq!(cfg.headline_attr, "data-testid");
        assert_eq!(cfg.headline_attr_value, "card-headline");
        assert_eq!(cfg.max_headlines, 10);
        assert_eq!(cfg.native_lang, "en");
        assert_eq!(cfg.translate_base_url, "https://translate.googleapis.com");
        assert_eq!(cfg.poll_timeout_secs, 30);
    }

    #[test]
    fn news_url_override() {
        let mut map = full_env();
        map.insert("HLH_NEWS_URL", "http://localhost:9000/news");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.news_url, "http://localhost:9000/news");
    }

    #[test]
    fn headline_selector_override() {
        let mut map = full_env();
        map.insert("HLH_HEADLINE_TAG", "h3");
        map.insert("HLH_HEADLINE_ATTR", "class");
        map.insert("HLH_HEADLINE_ATTR_VALUE", "story-title");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.headline_tag, "h3");
        assert_eq!(cfg.headline_attr, "class");
        assert_eq!(cfg.headline_attr_value, "story-title");
    }

    #[test]
    fn max_headlines_override() {
        let mut map = full_env();
        map.insert("HLH_MAX_HEADLINES", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_headlines, 5);
    }

    #[test]
    fn max_headlines_invalid() {
        let mut map = full_env();
        map.insert("HLH_MAX_HEADLINES", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HLH_MAX_HEADLINES"),
            "expected InvalidEnvVar(HLH_MAX_HEADLINES), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_secs_invalid() {
        let mut map = full_env();
        map.insert("HLH_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HLH_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(HLH_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_telegram_token() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-token"), "token leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
