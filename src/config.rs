use std::time::Duration;

pub const TARGET_URL: &str = "https://transit.yahoo.co.jp/diainfo/area/4";
pub const BASE_URL: &str = "https://transit.yahoo.co.jp";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "ja,en-US;q=0.7,en;q=0.3";

/// Everything a run needs to know about where and how to scrape.
#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub listing_url: String,
    pub base_url: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub listing_timeout: Duration,
    pub detail_timeout: Duration,
    pub max_attempts: u32,
    pub retry_backoff: Duration,
    /// Minimum spacing between two detail page fetches.
    pub pacing: Duration,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            listing_url: TARGET_URL.to_string(),
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
            listing_timeout: Duration::from_secs(15),
            detail_timeout: Duration::from_secs(10),
            max_attempts: 3,
            retry_backoff: Duration::from_secs(1),
            pacing: Duration::from_millis(300),
        }
    }
}

impl ScrapingConfig {
    pub fn with_listing_url(mut self, url: impl Into<String>) -> Self {
        self.listing_url = url.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}
