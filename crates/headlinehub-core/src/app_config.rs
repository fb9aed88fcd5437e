/// Application configuration, read once at startup and treated as read-only
/// afterwards.
#[derive(Clone)]
pub struct AppConfig {
    /// Telegram bot token. Never logged.
    pub telegram_token: String,
    pub log_level: String,
    /// News page the pipeline scrapes.
    pub news_url: String,
    /// Browser-like identification header sent with the page fetch.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Structural signature of a headline card: tag plus one attribute/value
    /// pair. Swappable so an upstream markup change is a config edit, not a
    /// code change.
    pub headline_tag: String,
    pub headline_attr: String,
    pub headline_attr_value: String,
    pub max_headlines: usize,
    /// Language code that means "no translation".
    pub native_lang: String,
    pub translate_base_url: String,
    /// Long-poll timeout for Telegram `getUpdates`.
    pub poll_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("telegram_token", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("news_url", &self.news_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("headline_tag", &self.headline_tag)
            .field("headline_attr", &self.headline_attr)
            .field("headline_attr_value", &self.headline_attr_value)
            .field("max_headlines", &self.max_headlines)
            .field("native_lang", &self.native_lang)
            .field("translate_base_url", &self.translate_base_url)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .finish()
    }
}
