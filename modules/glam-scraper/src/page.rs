//! Profile page access and state detection.
//!
//! The scrape pipeline talks to the page through the [`ProfilePage`] trait
//! so the wait/cap/short-circuit logic can be exercised against a scripted
//! fake. [`LivePage`] is the CDP-backed implementation.

use async_trait::async_trait;
use chromiumoxide::Page;

use crate::error::ScrapeError;

/// Shown by Instagram when a profile does not exist.
pub const UNAVAILABLE_MARKER: &str = "Sorry, this page isn't available.";
/// Shown by Instagram on private profiles the viewer cannot see.
pub const PRIVATE_MARKER: &str = "This Account is Private";
/// Matches the anchor elements wrapping profile-grid photos.
pub const PHOTO_LINK_SELECTOR: &str = "article div div div div a";

pub fn profile_url(username: &str) -> String {
    format!("https://www.instagram.com/{username}/")
}

/// What the loaded profile page says about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileState {
    Available,
    Unavailable,
    Private,
}

/// Classify a rendered profile page from its markup. Checked once, right
/// after navigation; the unavailable marker wins over the private one.
pub fn profile_state(html: &str) -> ProfileState {
    if html.contains(UNAVAILABLE_MARKER) {
        ProfileState::Unavailable
    } else if html.contains(PRIVATE_MARKER) {
        ProfileState::Private
    } else {
        ProfileState::Available
    }
}

// --- ProfilePage trait ---

#[async_trait]
pub trait ProfilePage: Send + Sync {
    /// Full rendered markup of the page.
    async fn html(&self) -> Result<String, ScrapeError>;

    /// `href` values of every photo-link element currently in the DOM, in
    /// DOM order. Empty when the grid has not rendered yet.
    async fn photo_links(&self) -> Result<Vec<String>, ScrapeError>;
}

/// A navigated browser tab.
pub struct LivePage {
    page: Page,
}

impl LivePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl ProfilePage for LivePage {
    async fn html(&self) -> Result<String, ScrapeError> {
        Ok(self.page.content().await?)
    }

    async fn photo_links(&self) -> Result<Vec<String>, ScrapeError> {
        let elements = self.page.find_elements(PHOTO_LINK_SELECTOR).await?;
        let mut links = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(href) = element.attribute("href").await? {
                links.push(href);
            }
        }
        Ok(links)
    }
}

// --- Scripted fakes for pipeline tests ---

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// In-memory page whose photo grid appears after a fixed number of
    /// probes. `delay_polls = 0` means the links are there from the start.
    pub(crate) struct FakePage {
        html: String,
        links: Vec<String>,
        delay_polls: usize,
        polls: AtomicUsize,
    }

    impl FakePage {
        pub fn new(html: &str, links: Vec<String>) -> Self {
            Self::appearing_after(html, links, 0)
        }

        pub fn appearing_after(html: &str, links: Vec<String>, delay_polls: usize) -> Self {
            Self {
                html: html.to_string(),
                links,
                delay_polls,
                polls: AtomicUsize::new(0),
            }
        }

        /// Number of times the photo grid has been probed.
        pub fn polls(&self) -> usize {
            self.polls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfilePage for FakePage {
        async fn html(&self) -> Result<String, ScrapeError> {
            Ok(self.html.clone())
        }

        async fn photo_links(&self) -> Result<Vec<String>, ScrapeError> {
            let probe = self.polls.fetch_add(1, Ordering::SeqCst);
            if probe < self.delay_polls {
                return Ok(Vec::new());
            }
            Ok(self.links.clone())
        }
    }

    /// Page whose grid probe always fails, as when the tab has crashed.
    pub(crate) struct FailingPage;

    #[async_trait]
    impl ProfilePage for FailingPage {
        async fn html(&self) -> Result<String, ScrapeError> {
            Ok("<html><body><article></article></body></html>".to_string())
        }

        async fn photo_links(&self) -> Result<Vec<String>, ScrapeError> {
            Err(ScrapeError::Browser("tab crashed".to_string()))
        }
    }

    pub(crate) fn links(count: usize) -> Vec<String> {
        (0..count)
            .map(|n| format!("https://www.instagram.com/p/post{n}/"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_marker_detected() {
        let html = format!("<html><body><span>{UNAVAILABLE_MARKER}</span></body></html>");
        assert_eq!(profile_state(&html), ProfileState::Unavailable);
    }

    #[test]
    fn private_marker_detected() {
        let html = format!("<html><body><h2>{PRIVATE_MARKER}</h2></body></html>");
        assert_eq!(profile_state(&html), ProfileState::Private);
    }

    #[test]
    fn ordinary_page_is_available() {
        let html = "<html><body><article><a href=\"/p/abc/\"></a></article></body></html>";
        assert_eq!(profile_state(html), ProfileState::Available);
    }

    #[test]
    fn unavailable_wins_over_private() {
        let html = format!("<html><body>{UNAVAILABLE_MARKER} {PRIVATE_MARKER}</body></html>");
        assert_eq!(profile_state(&html), ProfileState::Unavailable);
    }

    #[test]
    fn profile_url_embeds_username() {
        assert_eq!(
            profile_url("realuser"),
            "https://www.instagram.com/realuser/"
        );
    }
}
