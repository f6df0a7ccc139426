//! Live end-to-end scrape against instagram.com.
//!
//! Needs a Chromium on PATH (override with CHROME_BIN) plus network access.
//! Run with: cargo test -p glam-scraper --test live -- --ignored

use glam_scraper::{InstagramScraper, ScrapeOutcome, ScraperConfig};

#[tokio::test]
#[ignore]
async fn scrapes_a_real_profile() {
    let config = ScraperConfig::from_env().expect("chromium must be on PATH");
    let scraper = InstagramScraper::new(config);

    let outcome = scraper.scrape("instagram", 5).await;

    match outcome {
        ScrapeOutcome::Photos(links) => {
            assert!(!links.is_empty());
            assert!(links.len() <= 5);
        }
        // Datacenter IPs often hit the login wall; a classified failure
        // still shows the whole pipeline ran and tore down cleanly.
        ScrapeOutcome::Failure(reason) => {
            eprintln!("scrape returned no photos: {reason:?}");
        }
    }
}
