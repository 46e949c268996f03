//! Error types for scrape cycles.

use thiserror::Error;

/// Result type alias for scrape operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Errors a scrape unit can return to its driver.
///
/// Both variants propagate unchanged to the caller: a unit never logs,
/// retries, or suppresses a failure. Observations emitted before the
/// failing row stay emitted — the collection protocol accepts partial
/// delivery and there is no rollback.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Query issuance or row fetch failed (connection broken, permission
    /// denied, malformed statement against an unexpected schema version).
    #[error("query failed: {0}")]
    Query(String),

    /// A result column could not be decoded as the expected type.
    #[error("row decode failed at column {column}: {reason}")]
    Decode {
        /// Zero-based index of the offending column.
        column: usize,
        /// What was found instead of the expected type.
        reason: String,
    },
}
