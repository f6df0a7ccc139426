//! The scrape orchestrator: one browser, one navigation, one extraction
//! attempt, teardown no matter what.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extract::wait_for_photo_links;
use crate::outcome::{ScrapeFailure, ScrapeOutcome};
use crate::page::{profile_state, profile_url, LivePage, ProfilePage, ProfileState};
use crate::session::BrowserSession;

pub struct InstagramScraper {
    config: ScraperConfig,
}

impl InstagramScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Scrape up to `max_count` photo links from a profile. Every failure
    /// below this call is collapsed into the [`ScrapeFailure`] taxonomy and
    /// logged here; the browser session is torn down on every path.
    pub async fn scrape(&self, username: &str, max_count: usize) -> ScrapeOutcome {
        info!(username, max_count, "scraping profile");

        let session = match BrowserSession::launch(&self.config).await {
            Ok(session) => session,
            Err(e) => {
                error!(username, error = %e, "browser session launch failed");
                return ScrapeOutcome::Failure(ScrapeFailure::Unknown);
            }
        };

        let result = self.run(&session, username, max_count).await;
        session.close().await;

        match result {
            Ok(ScrapeOutcome::Photos(links)) => {
                info!(username, count = links.len(), "profile scrape succeeded");
                ScrapeOutcome::Photos(links)
            }
            Ok(ScrapeOutcome::Failure(reason)) => {
                info!(username, ?reason, "profile scrape came back empty");
                ScrapeOutcome::Failure(reason)
            }
            Err(e) => {
                let reason = classify(&e);
                error!(username, error = %e, ?reason, "profile scrape failed");
                ScrapeOutcome::Failure(reason)
            }
        }
    }

    async fn run(
        &self,
        session: &BrowserSession,
        username: &str,
        max_count: usize,
    ) -> Result<ScrapeOutcome, ScrapeError> {
        let url = profile_url(username);
        debug!(username, url = %url, "navigating to profile");
        let page = session.open(&url).await?;
        scrape_profile(
            &LivePage::new(page),
            max_count,
            self.config.element_wait,
            self.config.poll_interval,
        )
        .await
    }
}

/// Navigate-then-extract over an already-loaded page: check the page state
/// once, short-circuit on unavailable/private profiles, otherwise wait for
/// the photo grid and read its links.
pub(crate) async fn scrape_profile<P: ProfilePage>(
    page: &P,
    max_count: usize,
    wait: Duration,
    poll_interval: Duration,
) -> Result<ScrapeOutcome, ScrapeError> {
    match profile_state(&page.html().await?) {
        ProfileState::Unavailable => {
            return Ok(ScrapeOutcome::Failure(ScrapeFailure::AccountNotFound))
        }
        ProfileState::Private => {
            return Ok(ScrapeOutcome::Failure(ScrapeFailure::PrivateOrBlocked))
        }
        ProfileState::Available => {}
    }

    let links = wait_for_photo_links(page, max_count, wait, poll_interval).await?;
    Ok(ScrapeOutcome::Photos(links))
}

/// Collapse an internal error into the caller-visible failure taxonomy.
fn classify(error: &ScrapeError) -> ScrapeFailure {
    match error {
        ScrapeError::ExtractionTimedOut(_) => ScrapeFailure::ExtractionTimeout,
        ScrapeError::Launch(_) | ScrapeError::Browser(_) => ScrapeFailure::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::{links, FailingPage, FakePage};
    use crate::page::{PRIVATE_MARKER, UNAVAILABLE_MARKER};

    const WAIT: Duration = Duration::from_secs(10);
    const POLL: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn unavailable_page_short_circuits_before_extraction() {
        let html = format!("<html><body>{UNAVAILABLE_MARKER}</body></html>");
        let page = FakePage::new(&html, links(15));

        let outcome = scrape_profile(&page, 10, WAIT, POLL).await.unwrap();

        assert_eq!(
            outcome,
            ScrapeOutcome::Failure(ScrapeFailure::AccountNotFound)
        );
        assert_eq!(page.polls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn private_page_short_circuits_before_extraction() {
        let html = format!("<html><body>{PRIVATE_MARKER}</body></html>");
        let page = FakePage::new(&html, links(15));

        let outcome = scrape_profile(&page, 10, WAIT, POLL).await.unwrap();

        assert_eq!(
            outcome,
            ScrapeOutcome::Failure(ScrapeFailure::PrivateOrBlocked)
        );
        assert_eq!(page.polls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn available_page_yields_capped_photos() {
        let page = FakePage::new("<html><body><article/></body></html>", links(15));

        let outcome = scrape_profile(&page, 10, WAIT, POLL).await.unwrap();

        assert_eq!(outcome, ScrapeOutcome::Photos(links(15)[..10].to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_grid_times_out() {
        let page = FakePage::new("<html><body><article/></body></html>", Vec::new());

        let err = scrape_profile(&page, 10, WAIT, POLL).await.unwrap_err();

        assert_eq!(classify(&err), ScrapeFailure::ExtractionTimeout);
    }

    #[tokio::test(start_paused = true)]
    async fn probe_errors_classify_as_unknown() {
        let err = scrape_profile(&FailingPage, 10, WAIT, POLL)
            .await
            .unwrap_err();

        assert_eq!(classify(&err), ScrapeFailure::Unknown);
    }

    #[test]
    fn launch_errors_classify_as_unknown() {
        let err = ScrapeError::Launch("no usable binary".to_string());
        assert_eq!(classify(&err), ScrapeFailure::Unknown);
    }
}
