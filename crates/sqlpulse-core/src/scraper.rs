//! The three-operation scrape contract.

use async_trait::async_trait;

use crate::error::ScrapeError;
use crate::observe::MetricSink;
use crate::source::MetricSource;

/// One metrics-collection unit.
///
/// Units are stateless values: `scrape` is a single linear pass — issue
/// the unit's fixed query, decode each row, emit one observation per row
/// — and nothing is retained between invocations. The trait is
/// object-safe so a driver can enumerate heterogeneous units as
/// `Box<dyn Scraper>` without knowing their concrete types.
///
/// Error semantics: a query-issuance failure returns before anything is
/// emitted; a row-decode failure aborts the loop, and observations
/// already emitted stay emitted. The driver treats either as "this
/// unit's cycle failed" and moves on to its other units.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Short, stable identifier, unique within the exporter. Used by the
    /// driver for enabling/disabling and logging.
    fn name(&self) -> &'static str;

    /// One-line description of what the unit collects.
    fn help(&self) -> &'static str;

    /// Run one collection cycle against a borrowed connection, streaming
    /// observations into `sink` until rows are exhausted or an error
    /// occurs.
    async fn scrape(
        &self,
        source: &mut dyn MetricSource,
        sink: &MetricSink,
    ) -> Result<(), ScrapeError>;
}
