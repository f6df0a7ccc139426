use thiserror::Error;

/// Internal failure raised while driving the browser. Never crosses the
/// orchestrator boundary; [`crate::scraper`] collapses it into a
/// [`crate::ScrapeFailure`] before anything is returned to a caller.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("browser operation failed: {0}")]
    Browser(String),

    #[error("no photo links appeared within {0}s")]
    ExtractionTimedOut(u64),
}

impl From<chromiumoxide::error::CdpError> for ScrapeError {
    fn from(e: chromiumoxide::error::CdpError) -> Self {
        ScrapeError::Browser(e.to_string())
    }
}
