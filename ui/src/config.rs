use std::time::Duration;

/// Terminal client settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub search_url: String,
    pub page_size: u64,
    pub debounce: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: "http://localhost:5001".to_string(),
            page_size: 10,
            debounce: Duration::from_millis(300),
            request_timeout: Duration::from_millis(8000),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let search_url = lookup("SEARCH_URL").unwrap_or(defaults.search_url);
        let page_size: u64 = match lookup("PAGE_SIZE") {
            Some(raw) => raw.parse()?,
            None => defaults.page_size,
        };
        anyhow::ensure!(page_size > 0, "PAGE_SIZE must be positive");

        let debounce = match lookup("DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(raw.parse()?),
            None => defaults.debounce,
        };
        let request_timeout = match lookup("REQUEST_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(raw.parse()?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            search_url: search_url.trim_end_matches('/').to_string(),
            page_size,
            debounce,
            request_timeout,
        })
    }
}
