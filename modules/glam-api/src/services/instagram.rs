use async_graphql::Result;
use sqlx::PgPool;
use tracing::info;

use glam_common::messages;
use glam_scraper::{InstagramScraper, ScrapeFailure, ScrapeOutcome};

use crate::db;
use crate::graphql::error;
use crate::graphql::types::{GetPhotosResult, InstagramType, MessageType};

/// Scrape a profile on behalf of `user_id` and persist the result.
///
/// Expected scrape failures come back as a [`MessageType`] answer rather
/// than a GraphQL error; only service faults (e.g. the database) error out.
pub async fn get_photos(
    pool: &PgPool,
    scraper: &InstagramScraper,
    user_id: i64,
    username: &str,
    max_count: usize,
) -> Result<GetPhotosResult> {
    match scraper.scrape(username, max_count).await {
        ScrapeOutcome::Photos(photo_urls) => {
            let row = db::instagram::insert(pool, user_id, username, &photo_urls)
                .await
                .map_err(error::internal)?;
            info!(
                username,
                user_id,
                count = photo_urls.len(),
                "stored scraped photos"
            );
            Ok(GetPhotosResult::Instagram(InstagramType::from(row)))
        }
        ScrapeOutcome::Failure(failure) => Ok(GetPhotosResult::Message(MessageType::new(
            failure_message(failure, username),
        ))),
    }
}

fn failure_message(failure: ScrapeFailure, username: &str) -> String {
    match failure {
        ScrapeFailure::AccountNotFound => messages::account_not_found(username),
        ScrapeFailure::PrivateOrBlocked => messages::private_account(username),
        ScrapeFailure::ExtractionTimeout | ScrapeFailure::Unknown => {
            messages::extraction_error(username)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_account_names_the_account() {
        assert_eq!(
            failure_message(ScrapeFailure::AccountNotFound, "doesnotexist"),
            "The Instagram account doesnotexist does not exist."
        );
    }

    #[test]
    fn private_account_names_the_account() {
        assert_eq!(
            failure_message(ScrapeFailure::PrivateOrBlocked, "someuser"),
            "The Instagram account someuser is private."
        );
    }

    #[test]
    fn timeout_and_unknown_share_the_extraction_message() {
        let expected = "Error occurred while extracting photos for user slowpage";
        assert_eq!(
            failure_message(ScrapeFailure::ExtractionTimeout, "slowpage"),
            expected
        );
        assert_eq!(failure_message(ScrapeFailure::Unknown, "slowpage"), expected);
    }
}
