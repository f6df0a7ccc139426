/// Result of one scrape call, returned by value. Expected failures are data
/// here, not errors; the API layer turns them into user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Extracted photo links in DOM order, capped at the requested count.
    Photos(Vec<String>),
    Failure(ScrapeFailure),
}

/// The closed set of reasons a scrape can come back empty-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeFailure {
    /// The profile page reports itself as unavailable.
    AccountNotFound,
    /// The profile page reports itself as private.
    PrivateOrBlocked,
    /// Photo links never appeared within the wait bound.
    ExtractionTimeout,
    /// Anything else: launch failure, lost tab, CDP error.
    Unknown,
}
