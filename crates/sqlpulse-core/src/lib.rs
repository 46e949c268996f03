//! sqlpulse-core — the generic scrape contract.
//!
//! A scrape unit runs one read-only query against a database's
//! introspection tables and republishes each result row as a labeled
//! metric observation. This crate defines the pieces every unit shares:
//!
//! ```text
//! Scraper (name / help / scrape)
//!   ├── MetricSource::query() → RowCursor        one statement per cycle
//!   ├── Row accessors                            typed column decoding
//!   └── MetricSink::emit(Observation)            one observation per row
//! ```
//!
//! Database bindings (e.g. `sqlpulse-mysql`) implement [`MetricSource`]
//! and [`RowCursor`]; an external driver owns the connection and the
//! receiving end of the sink, and invokes each unit once per collection
//! cycle. Units hold no state between invocations.

pub mod descriptor;
pub mod error;
pub mod observe;
pub mod scraper;
pub mod source;

pub use descriptor::MetricDescriptor;
pub use error::{ScrapeError, ScrapeResult};
pub use observe::{MetricKind, MetricSink, Observation};
pub use scraper::Scraper;
pub use source::{MetricSource, Row, RowCursor, RowValue};
