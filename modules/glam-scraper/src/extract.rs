//! Bounded wait for the photo grid, then a capped read of its links.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::ScrapeError;
use crate::page::ProfilePage;

/// Poll the page until at least one photo link is present, then return up
/// to `max_count` links in DOM order. Fewer matches than `max_count` is a
/// success; no matches within `wait` is [`ScrapeError::ExtractionTimedOut`].
///
/// The first probe fires immediately, the last one right at the deadline.
pub(crate) async fn wait_for_photo_links<P: ProfilePage>(
    page: &P,
    max_count: usize,
    wait: Duration,
    poll_interval: Duration,
) -> Result<Vec<String>, ScrapeError> {
    let deadline = Instant::now() + wait;
    loop {
        let mut links = page.photo_links().await?;
        if !links.is_empty() {
            links.truncate(max_count);
            return Ok(links);
        }
        if Instant::now() >= deadline {
            return Err(ScrapeError::ExtractionTimedOut(wait.as_secs()));
        }
        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::{links, FailingPage, FakePage};

    const WAIT: Duration = Duration::from_secs(10);
    const POLL: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn caps_links_at_max_count_in_dom_order() {
        let page = FakePage::new("<html></html>", links(15));

        let found = wait_for_photo_links(&page, 10, WAIT, POLL).await.unwrap();

        assert_eq!(found, links(15)[..10].to_vec());
    }

    #[tokio::test(start_paused = true)]
    async fn fewer_links_than_max_count_is_success() {
        let page = FakePage::new("<html></html>", links(3));

        let found = wait_for_photo_links(&page, 10, WAIT, POLL).await.unwrap();

        assert_eq!(found, links(3));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_links_that_appear_late() {
        let page = FakePage::appearing_after("<html></html>", links(5), 4);
        let start = Instant::now();

        let found = wait_for_photo_links(&page, 10, WAIT, POLL).await.unwrap();

        assert_eq!(found, links(5));
        assert_eq!(page.polls(), 5);
        // four empty probes cost four poll intervals
        assert_eq!(start.elapsed(), POLL * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_links_never_appear() {
        let page = FakePage::new("<html></html>", Vec::new());
        let start = Instant::now();

        let err = wait_for_photo_links(&page, 10, WAIT, POLL)
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::ExtractionTimedOut(10)));
        assert_eq!(start.elapsed(), WAIT);
    }

    #[tokio::test(start_paused = true)]
    async fn probe_errors_propagate() {
        let err = wait_for_photo_links(&FailingPage, 10, WAIT, POLL)
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Browser(_)));
    }
}
