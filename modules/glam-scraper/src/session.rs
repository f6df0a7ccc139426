//! One Chromium process per scrape call.

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use rand::seq::IndexedRandom;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// A live headless browser plus the task pumping its CDP event stream.
///
/// The session is exclusively owned by the scrape call that launched it.
/// [`BrowserSession::close`] consumes the session, so teardown can only
/// happen once.
pub(crate) struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch headless Chromium with the anti-automation launch flags and a
    /// client identity drawn at random from the configured pool.
    pub(crate) async fn launch(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let mut builder = BrowserConfig::builder()
            .chrome_executable(&config.chrome_bin)
            .no_sandbox()
            .request_timeout(config.request_timeout)
            .arg("--disable-dev-shm-usage")
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--start-maximized");
        if let Some(user_agent) = config.user_agents.choose(&mut rand::rng()) {
            debug!(user_agent, "session client identity");
            builder = builder.arg(format!("--user-agent={user_agent}"));
        }

        let browser_config = builder.build().map_err(ScrapeError::Launch)?;
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("browser session launched");
        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a tab and navigate it, waiting for the page to finish loading.
    pub(crate) async fn open(&self, url: &str) -> Result<Page, ScrapeError> {
        let page = self.browser.new_page("about:blank").await?;
        page.goto(url).await?;
        page.wait_for_navigation().await?;
        Ok(page)
    }

    /// Tear the session down: close the browser, wait for the process to
    /// exit, stop the event pump. Failures are logged, not returned; there
    /// is nothing a caller could do with them mid-teardown.
    pub(crate) async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!(error = %e, "browser close failed");
        }
        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "browser process did not exit cleanly");
        }
        self.handler_task.abort();
        debug!("browser session closed");
    }
}
