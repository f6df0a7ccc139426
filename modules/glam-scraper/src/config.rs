use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Client identities presented to Instagram, one chosen at random per
/// session so repeated scrapes don't all look like the same browser.
pub const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.159 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36",
    "Mozilla/5.0 (iPhone14,3; U; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/602.1.50 (KHTML, like Gecko) Version/10.0 Mobile/19A346 Safari/602.1",
];

/// How long the extractor waits for photo links to appear in the DOM.
const ELEMENT_WAIT: Duration = Duration::from_secs(10);
/// Interval between DOM probes while waiting.
const POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Timeout for individual CDP requests to the browser.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ScraperConfigError {
    #[error("{0} is not found in system's PATH")]
    ChromeNotFound(String),
}

/// Launch and timing configuration for scrape sessions.
///
/// Built once at startup; the browser binary is resolved eagerly so a
/// missing Chromium is a boot failure rather than a per-request surprise.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub chrome_bin: PathBuf,
    pub user_agents: Vec<String>,
    pub element_wait: Duration,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl ScraperConfig {
    /// Resolve the browser named by `CHROME_BIN` (default `chromium`)
    /// through the executable search path.
    pub fn from_env() -> Result<Self, ScraperConfigError> {
        let name = env::var("CHROME_BIN").unwrap_or_else(|_| "chromium".to_string());
        let chrome_bin =
            which::which(&name).map_err(|_| ScraperConfigError::ChromeNotFound(name))?;
        Ok(Self::new(chrome_bin))
    }

    pub fn new(chrome_bin: PathBuf) -> Self {
        Self {
            chrome_bin,
            user_agents: USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
            element_wait: ELEMENT_WAIT,
            poll_interval: POLL_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}
