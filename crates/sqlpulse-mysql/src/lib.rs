//! sqlpulse-mysql — MySQL binding for the sqlpulse scrape contract.
//!
//! Implements [`sqlpulse_core::MetricSource`] for a live
//! [`mysql_async::Conn`] and ships the scrape units that read MySQL's
//! `performance_schema` introspection tables. The driver owns the
//! connection (and any pool, deadline, or TLS concerns); units borrow it
//! for exactly one query per cycle.

pub mod connection;
pub mod threads_by_user;

pub use connection::MysqlSource;
pub use threads_by_user::ThreadsByUser;

/// Namespace prefix shared by every metric this crate emits.
pub const NAMESPACE: &str = "mysql";

/// Subsystem for metrics scraped from `performance_schema`.
pub const PERFORMANCE_SCHEMA: &str = "perf_schema";
