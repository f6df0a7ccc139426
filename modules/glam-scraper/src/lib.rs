//! Headless-browser scraping of Instagram profile pages.
//!
//! One scrape call owns one Chromium process for its whole lifetime: launch,
//! navigate, extract, tear down. Sessions are never shared or pooled, so a
//! crashed browser only ever takes its own call with it. The public surface
//! is [`InstagramScraper::scrape`], which returns a [`ScrapeOutcome`] by
//! value; callers never see the underlying browser errors.

pub mod config;
pub mod error;
mod extract;
pub mod outcome;
pub mod page;
pub mod scraper;
mod session;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use outcome::{ScrapeFailure, ScrapeOutcome};
pub use scraper::InstagramScraper;
